use std::io;
use std::path::Path;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::Utc;

use crate::AppState;

use super::responses::{HealthErrorResponse, HealthResponse, ModelFiles};

pub const MODEL_FILE: &str = "fake_news_model.pkl";
pub const VECTORIZER_FILE: &str = "tfidf_vectorizer.pkl";
pub const METADATA_FILE: &str = "model_metadata.pkl";

pub async fn get_health(State(state): State<AppState>) -> Response {
    match check_model_files(&state.model_dir).await {
        Ok(files) => Json(HealthResponse {
            status: "healthy",
            model_trained: files.all_present(),
            files,
            timestamp: Utc::now(),
        })
        .into_response(),
        Err(e) => {
            tracing::error!(error = %e, model_dir = %state.model_dir.display(), "model file check failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(HealthErrorResponse {
                    status: "error",
                    error: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}

async fn check_model_files(dir: &Path) -> io::Result<ModelFiles> {
    Ok(ModelFiles {
        model: tokio::fs::try_exists(dir.join(MODEL_FILE)).await?,
        vectorizer: tokio::fs::try_exists(dir.join(VECTORIZER_FILE)).await?,
        metadata: tokio::fs::try_exists(dir.join(METADATA_FILE)).await?,
    })
}
