//! Best-effort display text for assistant responses that carry no
//! `output.text`.

use crate::api::response::{first_generic, output_text_is_empty};
use crate::models::IntentResult;
use serde_json::Value;

pub const UNDERSTOOD_CONFIDENCE: f64 = 0.75;
pub const TENTATIVE_CONFIDENCE: f64 = 0.5;

/// Pick a text for `response`, first match wins:
/// `output.generic[0].text`, then `output.generic[0].title`, then a phrase
/// chosen from the confidence of `intents[0]`. `None` when nothing applies.
pub fn select_fallback_text(response: &Value) -> Option<String> {
    if let Some(first) = first_generic(response) {
        if let Some(text) = first.get("text").and_then(|t| t.as_str()) {
            return Some(text.to_string());
        }
        if let Some(title) = first.get("title").and_then(|t| t.as_str()) {
            return Some(title.to_string());
        }
    }

    IntentResult::first_from_response(response).map(|intent| confidence_text(&intent))
}

pub fn confidence_text(intent: &IntentResult) -> String {
    if intent.confidence >= UNDERSTOOD_CONFIDENCE {
        format!("I understood your intent was {}", intent.intent)
    } else if intent.confidence >= TENTATIVE_CONFIDENCE {
        format!("I think your intent was {}", intent.intent)
    } else {
        "I did not understand your intent".to_string()
    }
}

/// Fill `output.text` when it is empty. Returns the text that was written.
/// Expects `output` to already be an object.
pub fn apply_fallback_text(response: &mut Value) -> Option<String> {
    if !output_text_is_empty(response) {
        return None;
    }

    let text = select_fallback_text(response)?;
    let output = response.get_mut("output")?.as_object_mut()?;
    output.insert("text".to_string(), Value::String(text.clone()));
    Some(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_are_inclusive() {
        let at = |confidence| IntentResult {
            intent: "greeting".to_string(),
            confidence,
        };
        assert_eq!(confidence_text(&at(0.75)), "I understood your intent was greeting");
        assert_eq!(confidence_text(&at(0.5)), "I think your intent was greeting");
        assert_eq!(confidence_text(&at(0.49)), "I did not understand your intent");
    }
}
