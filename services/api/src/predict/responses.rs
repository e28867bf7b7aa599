use axum::http::header::HeaderName;
use axum::http::HeaderValue;

/// Tells callers which classifier produced the body without changing its shape.
pub const PREDICTION_SOURCE: HeaderName = HeaderName::from_static("x-prediction-source");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredictionSource {
    Model,
    Heuristic,
}

impl PredictionSource {
    pub fn as_str(self) -> &'static str {
        match self {
            PredictionSource::Model => "model",
            PredictionSource::Heuristic => "heuristic",
        }
    }

    pub fn header_value(self) -> HeaderValue {
        HeaderValue::from_static(self.as_str())
    }
}
