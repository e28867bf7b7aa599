mod error;
mod health;
mod predict;
mod predictor;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    http::{header, HeaderValue, Method},
    routing::get,
    Json, Router,
};
use tower_http::cors::{AllowOrigin, CorsLayer};
use veracity_common::error::{VeracityError, VeracityResult};
use veracity_common::types::ServiceInfo;
use veracity_config::{init_tracing, AppConfig};

use crate::predictor::client::{PredictorClient, PredictorClientConfig};
use crate::predictor::Predictor;

#[derive(Clone)]
pub struct AppState {
    /// `None` when the prediction service is disabled; the heuristic answers every request.
    pub predictor: Option<Arc<dyn Predictor>>,
    pub model_dir: PathBuf,
}

async fn liveness() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn info() -> Json<ServiceInfo> {
    Json(ServiceInfo::new("veracity-api"))
}

fn cors_layer(origins: &[String]) -> VeracityResult<CorsLayer> {
    let allow_origin = if origins.iter().any(|o| o == "*") {
        AllowOrigin::any()
    } else {
        let values = origins
            .iter()
            .map(|o| {
                o.parse::<HeaderValue>()
                    .map_err(|e| VeracityError::Config(format!("invalid CORS origin {o:?}: {e}")))
            })
            .collect::<VeracityResult<Vec<_>>>()?;
        AllowOrigin::list(values)
    };

    Ok(CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]))
}

fn build_router(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/health", get(liveness))
        .route("/info", get(info))
        .merge(predict::router())
        .merge(health::router())
        .layer(cors)
        .with_state(state)
}

#[tokio::main]
async fn main() {
    let config = AppConfig::from_env().expect("failed to load config");
    init_tracing(&config.log_level);

    tracing::info!(service = "veracity-api", "starting");

    let predictor: Option<Arc<dyn Predictor>> = match PredictorClientConfig::from_env() {
        Some(predictor_config) => {
            let client =
                PredictorClient::new(predictor_config).expect("failed to create predictor client");
            tracing::info!(url = client.base_url(), "prediction service configured");
            Some(Arc::new(client))
        }
        None => {
            tracing::info!("prediction service disabled, heuristic scoring only");
            None
        }
    };

    let state = AppState {
        predictor,
        model_dir: PathBuf::from(&config.model_dir),
    };

    let cors = cors_layer(&config.cors_origins).expect("invalid CORS configuration");
    let app = build_router(state, cors);
    let addr: SocketAddr = config.bind_addr().parse().expect("invalid bind address");

    tracing::info!(%addr, "listening");
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind");
    axum::serve(listener, app).await.expect("server error");
}
