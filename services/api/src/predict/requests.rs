use serde_json::Value;
use veracity_common::error::{VeracityError, VeracityResult};

pub const MIN_TEXT_LEN: usize = 10;

pub const INVALID_INPUT: &str = "Invalid input. Please provide news_text parameter.";
pub const TOO_SHORT: &str = "News text must be at least 10 characters long.";

/// `news_text` is kept loosely typed so a non-string value is reported as
/// invalid input rather than a deserialization failure.
#[derive(Debug)]
pub struct PredictRequest {
    pub news_text: Option<Value>,
}

impl TryFrom<Value> for PredictRequest {
    type Error = VeracityError;

    /// Only a JSON object can carry `news_text`.
    fn try_from(body: Value) -> VeracityResult<Self> {
        match body {
            Value::Object(mut fields) => Ok(Self {
                news_text: fields.remove("news_text"),
            }),
            _ => Err(VeracityError::Validation(INVALID_INPUT.to_string())),
        }
    }
}

impl PredictRequest {
    pub fn into_text(self) -> VeracityResult<String> {
        let text = match self.news_text {
            Some(Value::String(s)) if !s.is_empty() => s,
            _ => return Err(VeracityError::Validation(INVALID_INPUT.to_string())),
        };

        // UTF-16 code units, as browsers count string length
        if text.trim().encode_utf16().count() < MIN_TEXT_LEN {
            return Err(VeracityError::Validation(TOO_SHORT.to_string()));
        }

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(value: Value) -> PredictRequest {
        PredictRequest::try_from(value).unwrap()
    }

    fn validation_message(result: VeracityResult<String>) -> String {
        match result {
            Err(VeracityError::Validation(msg)) => msg,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn missing_null_and_non_string_are_invalid() {
        for body in [
            serde_json::json!({}),
            serde_json::json!({"news_text": null}),
            serde_json::json!({"news_text": 42}),
            serde_json::json!({"news_text": ["a"]}),
            serde_json::json!({"news_text": ""}),
        ] {
            assert_eq!(validation_message(request(body).into_text()), INVALID_INPUT);
        }
    }

    #[test]
    fn non_object_bodies_are_invalid() {
        for body in [
            serde_json::json!(["SHOCKING!!! You won't believe what happened!!!"]),
            serde_json::json!("SHOCKING!!! You won't believe what happened!!!"),
            serde_json::json!(null),
            serde_json::json!(7),
        ] {
            match PredictRequest::try_from(body) {
                Err(VeracityError::Validation(msg)) => assert_eq!(msg, INVALID_INPUT),
                other => panic!("expected validation error, got {other:?}"),
            }
        }
    }

    #[test]
    fn short_trimmed_text_is_rejected() {
        let body = serde_json::json!({"news_text": "   short    "});
        assert_eq!(validation_message(request(body).into_text()), TOO_SHORT);
    }

    #[test]
    fn length_counts_utf16_units_not_bytes() {
        // 9 units, 18 bytes
        let body = serde_json::json!({"news_text": "ééééééééé"});
        assert_eq!(validation_message(request(body).into_text()), TOO_SHORT);
    }

    #[test]
    fn astral_characters_count_twice() {
        // 5 chars, 10 UTF-16 units
        let body = serde_json::json!({"news_text": " 😀😀😀😀😀 "});
        assert_eq!(request(body).into_text().unwrap(), " 😀😀😀😀😀 ");

        let body = serde_json::json!({"news_text": "😀😀😀😀"});
        assert_eq!(validation_message(request(body).into_text()), TOO_SHORT);
    }

    #[test]
    fn valid_text_is_returned_untrimmed() {
        let body = serde_json::json!({"news_text": "  Breaking!!  "});
        assert_eq!(request(body).into_text().unwrap(), "  Breaking!!  ");
    }
}
