use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use veracity_common::error::VeracityError;

use crate::error::ApiError;
use crate::AppState;

use super::requests::{PredictRequest, INVALID_INPUT};
use super::responses::{PredictionSource, PREDICTION_SOURCE};

pub async fn post_predict(
    State(state): State<AppState>,
    body: Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(body) = body.map_err(|rejection| {
        tracing::debug!(error = %rejection, "rejected predict body");
        VeracityError::Validation(INVALID_INPUT.to_string())
    })?;
    let news_text = PredictRequest::try_from(body)?.into_text()?;

    if let Some(predictor) = &state.predictor {
        match predictor.predict(&news_text).await {
            Ok(prediction) => {
                return Ok(respond(PredictionSource::Model, Json(prediction)));
            }
            Err(e) => {
                tracing::warn!(error = %e, "prediction service failed, using heuristic fallback");
            }
        }
    }

    let result = veracity_heuristic::analyze(&news_text);
    tracing::debug!(
        prediction = result.prediction.as_str(),
        score = result.confidence_percentage,
        "heuristic prediction"
    );
    Ok(respond(PredictionSource::Heuristic, Json(result)))
}

fn respond(source: PredictionSource, body: impl IntoResponse) -> Response {
    ([(PREDICTION_SOURCE, source.header_value())], body).into_response()
}
