use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ModelFiles {
    pub model: bool,
    pub vectorizer: bool,
    pub metadata: bool,
}

impl ModelFiles {
    pub fn all_present(&self) -> bool {
        self.model && self.vectorizer && self.metadata
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub model_trained: bool,
    pub files: ModelFiles,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct HealthErrorResponse {
    pub status: &'static str,
    pub error: String,
}
