use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use veracity_common::error::VeracityError;

pub struct ApiError(pub VeracityError);

impl From<VeracityError> for ApiError {
    fn from(err: VeracityError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self.0 {
            VeracityError::Validation(msg) => {
                let body = serde_json::json!({ "error": msg });
                (StatusCode::BAD_REQUEST, Json(body)).into_response()
            }
            other => {
                tracing::error!(error = %other, "request failed");
                let body = serde_json::json!({ "error": "Internal server error", "status": "error" });
                (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
            }
        }
    }
}
