use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Label {
    Real,
    Fake,
}

impl Label {
    /// Class index on the wire: 0 = Fake, 1 = Real.
    pub fn index(self) -> u8 {
        match self {
            Label::Real => 1,
            Label::Fake => 0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Label::Real => "Real",
            Label::Fake => "Fake",
        }
    }
}

/// Probability mass split between the two classes. Always sums to 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Confidence {
    #[serde(rename = "Real")]
    pub real: f64,
    #[serde(rename = "Fake")]
    pub fake: f64,
}

/// Classification in the same shape the prediction service returns, so
/// callers can treat either source interchangeably.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassificationResult {
    pub prediction: Label,
    pub prediction_index: u8,
    pub confidence: Confidence,
    pub is_real: bool,
    pub confidence_percentage: f64,
    pub model_accuracy: f64,
    pub analysis_reason: String,
    pub status: &'static str,
}
