use crate::result::{ClassificationResult, Confidence, Label};
use crate::signals::Signals;

/// Reported accuracy for heuristic results. A fixed placeholder, not measured.
pub const MODEL_ACCURACY: f64 = 0.85;

pub const BASE_SCORE: i32 = 50;
pub const EXCLAMATION_PENALTY: i32 = 15;
pub const ALL_CAPS_PENALTY: i32 = 20;
pub const CLICKBAIT_PENALTY: i32 = 30;
pub const WELL_STRUCTURED_BONUS: i32 = 15;
pub const MULTIPLE_SENTENCES_BONUS: i32 = 10;

pub const CLICKBAIT_REASON: &str = "Contains clickbait language (e.g., SHOCKING, exposed, etc.)";
pub const EXCLAMATION_REASON: &str = "Multiple exclamation marks suggest sensationalism";
pub const ALL_CAPS_REASON: &str = "Excessive capitalization can indicate bias or exaggeration";
pub const UNSTRUCTURED_REASON: &str = "Text appears too short or unstructured";
pub const WELL_STRUCTURED_REASON: &str = "Text is well-structured and detailed";
pub const MULTIPLE_SENTENCES_REASON: &str = "Contains multiple sentences with clear structure";

/// Score `text` and classify it as real or fake news.
///
/// Total over all inputs, including the empty string. A score of exactly
/// 50 classifies as Fake.
pub fn analyze(text: &str) -> ClassificationResult {
    let signals = Signals::detect(text);
    let real_score = real_score(&signals);
    let fake_score = 100 - real_score;

    let prediction = if real_score > BASE_SCORE {
        Label::Real
    } else {
        Label::Fake
    };

    ClassificationResult {
        prediction,
        prediction_index: prediction.index(),
        confidence: Confidence {
            real: f64::from(real_score) / 100.0,
            fake: f64::from(fake_score) / 100.0,
        },
        is_real: prediction == Label::Real,
        confidence_percentage: f64::from(real_score),
        model_accuracy: MODEL_ACCURACY,
        analysis_reason: reasons(&signals).join("; "),
        status: "success",
    }
}

/// Clamped to [0, 100].
fn real_score(signals: &Signals) -> i32 {
    let mut score = BASE_SCORE;
    if signals.has_exclamation {
        score -= EXCLAMATION_PENALTY;
    }
    if signals.has_all_caps {
        score -= ALL_CAPS_PENALTY;
    }
    if signals.has_clickbait {
        score -= CLICKBAIT_PENALTY;
    }
    if signals.is_well_structured {
        score += WELL_STRUCTURED_BONUS;
    }
    if signals.has_multiple_sentences {
        score += MULTIPLE_SENTENCES_BONUS;
    }
    score.clamp(0, 100)
}

fn reasons(signals: &Signals) -> Vec<&'static str> {
    let mut reasons = Vec::new();
    if signals.has_clickbait {
        reasons.push(CLICKBAIT_REASON);
    }
    if signals.has_exclamation {
        reasons.push(EXCLAMATION_REASON);
    }
    if signals.has_all_caps {
        reasons.push(ALL_CAPS_REASON);
    }
    if signals.is_well_structured {
        reasons.push(WELL_STRUCTURED_REASON);
    } else {
        reasons.push(UNSTRUCTURED_REASON);
    }
    if signals.has_multiple_sentences {
        reasons.push(MULTIPLE_SENTENCES_REASON);
    }
    reasons
}
