pub mod client;

use async_trait::async_trait;
use reqwest::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum PredictorError {
    #[error("HTTP {status}: {body}")]
    HttpError { status: StatusCode, body: String },

    #[error("request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("response is not valid JSON: {0}")]
    DecodeError(#[from] serde_json::Error),

    #[error("prediction rejected: {message}")]
    Rejected { message: String },
}

/// A trained classifier reachable out of process.
///
/// `predict` returns the service's JSON body untouched so it can be passed
/// straight through to the caller.
#[async_trait]
pub trait Predictor: Send + Sync {
    async fn predict(&self, news_text: &str) -> Result<serde_json::Value, PredictorError>;
}
