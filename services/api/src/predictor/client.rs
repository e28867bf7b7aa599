use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;

use super::{Predictor, PredictorError};

#[derive(Debug, Clone)]
pub struct PredictorClientConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl PredictorClientConfig {
    /// Load predictor config from environment.
    ///
    /// Returns `None` if `PREDICTOR_URL` is set but blank, which disables the
    /// upstream call so every request is scored by the heuristic.
    pub fn from_env() -> Option<Self> {
        let base_url = std::env::var("PREDICTOR_URL")
            .unwrap_or_else(|_| "http://127.0.0.1:8000".to_string());
        let base_url = base_url.trim().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return None;
        }

        let timeout_secs = std::env::var("PREDICTOR_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);

        Some(Self {
            base_url,
            timeout_secs,
        })
    }
}

#[derive(Serialize)]
struct PredictPayload<'a> {
    news_text: &'a str,
}

#[derive(Clone)]
pub struct PredictorClient {
    client: Client,
    config: PredictorClientConfig,
}

impl PredictorClient {
    pub fn new(config: PredictorClientConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { client, config })
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }
}

#[async_trait]
impl Predictor for PredictorClient {
    /// Single attempt, no retries. The caller falls back on any error.
    async fn predict(&self, news_text: &str) -> Result<Value, PredictorError> {
        let url = format!("{}/predict", self.config.base_url);

        let response = self
            .client
            .post(&url)
            .json(&PredictPayload { news_text })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PredictorError::HttpError { status, body });
        }

        let bytes = response.bytes().await?;
        let body: Value = serde_json::from_slice(&bytes)?;
        check_payload(body)
    }
}

/// The service reports its own failures in-band with HTTP 200, e.g.
/// `{"error": "Empty text", "status": "error"}`.
fn check_payload(body: Value) -> Result<Value, PredictorError> {
    let Some(fields) = body.as_object() else {
        return Err(PredictorError::Rejected {
            message: "response is not a JSON object".to_string(),
        });
    };

    match fields.get("status") {
        None => Ok(body),
        Some(Value::String(s)) if s == "success" => Ok(body),
        Some(other) => {
            let message = fields
                .get("error")
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or_else(|| format!("status {other}"));
            Err(PredictorError::Rejected { message })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;
    use std::sync::Mutex;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn test_config(base_url: &str) -> PredictorClientConfig {
        PredictorClientConfig {
            base_url: base_url.to_string(),
            timeout_secs: 5,
        }
    }

    fn model_body() -> Value {
        serde_json::json!({
            "prediction": "Real",
            "confidence": {"Fake": 0.12, "Real": 0.88},
            "is_real": true,
            "confidence_percentage": 88.0,
            "status": "success"
        })
    }

    #[tokio::test]
    async fn passes_through_successful_body() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/predict"))
            .and(header("content-type", "application/json"))
            .and(body_json(serde_json::json!({"news_text": "Council approves budget"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(model_body()))
            .expect(1)
            .mount(&server)
            .await;

        let client = PredictorClient::new(test_config(&server.uri())).unwrap();
        let body = client.predict("Council approves budget").await.unwrap();
        assert_eq!(body, model_body());
    }

    #[tokio::test]
    async fn body_without_status_is_accepted() {
        let server = MockServer::start().await;
        let body = serde_json::json!({"prediction": "Fake", "is_real": false});

        Mock::given(method("POST"))
            .and(path("/predict"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&body))
            .mount(&server)
            .await;

        let client = PredictorClient::new(test_config(&server.uri())).unwrap();
        assert_eq!(client.predict("some news text").await.unwrap(), body);
    }

    #[tokio::test]
    async fn non_success_status_is_http_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/predict"))
            .respond_with(ResponseTemplate::new(503).set_body_string("model loading"))
            .expect(1)
            .mount(&server)
            .await;

        let client = PredictorClient::new(test_config(&server.uri())).unwrap();
        let err = client.predict("some news text").await.unwrap_err();
        match err {
            PredictorError::HttpError { status, body } => {
                assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
                assert_eq!(body, "model loading");
            }
            other => panic!("expected HttpError, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn in_band_error_is_rejected() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/predict"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"error": "Empty text", "status": "error"})),
            )
            .mount(&server)
            .await;

        let client = PredictorClient::new(test_config(&server.uri())).unwrap();
        let err = client.predict("some news text").await.unwrap_err();
        assert!(
            matches!(err, PredictorError::Rejected { ref message } if message == "Empty text"),
            "got {err:?}"
        );
    }

    #[tokio::test]
    async fn invalid_json_is_decode_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/predict"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let client = PredictorClient::new(test_config(&server.uri())).unwrap();
        let err = client.predict("some news text").await.unwrap_err();
        assert!(matches!(err, PredictorError::DecodeError(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn unreachable_service_is_request_error() {
        // nothing listens on port 1
        let client = PredictorClient::new(test_config("http://127.0.0.1:1")).unwrap();
        let err = client.predict("some news text").await.unwrap_err();
        assert!(matches!(err, PredictorError::RequestError(_)), "got {err:?}");
    }

    #[test]
    fn non_object_payload_is_rejected() {
        let err = check_payload(serde_json::json!([1, 2])).unwrap_err();
        assert!(matches!(err, PredictorError::Rejected { .. }));
    }

    #[test]
    fn config_from_env_defaults_and_disables() {
        let _guard = ENV_LOCK.lock().expect("env lock poisoned");

        std::env::remove_var("PREDICTOR_URL");
        std::env::remove_var("PREDICTOR_TIMEOUT_SECS");
        let cfg = PredictorClientConfig::from_env().expect("default predictor");
        assert_eq!(cfg.base_url, "http://127.0.0.1:8000");
        assert_eq!(cfg.timeout_secs, 10);

        std::env::set_var("PREDICTOR_URL", "http://ml.internal:9000/");
        std::env::set_var("PREDICTOR_TIMEOUT_SECS", "not-a-number");
        let cfg = PredictorClientConfig::from_env().expect("configured predictor");
        assert_eq!(cfg.base_url, "http://ml.internal:9000");
        assert_eq!(cfg.timeout_secs, 10);

        std::env::set_var("PREDICTOR_URL", "  ");
        assert!(PredictorClientConfig::from_env().is_none());

        std::env::remove_var("PREDICTOR_URL");
        std::env::remove_var("PREDICTOR_TIMEOUT_SECS");
    }
}
