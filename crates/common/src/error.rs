use thiserror::Error;

#[derive(Debug, Error)]
pub enum VeracityError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type VeracityResult<T> = Result<T, VeracityError>;
