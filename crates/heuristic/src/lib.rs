//! Rule-based credibility scorer for short news texts.
//!
//! Used as the always-available fallback when the trained prediction
//! service cannot be reached. Scoring is a pure function of the input text.

pub mod result;
pub mod scorer;
pub mod signals;

pub use result::{ClassificationResult, Confidence, Label};
pub use scorer::{analyze, MODEL_ACCURACY};
pub use signals::Signals;
