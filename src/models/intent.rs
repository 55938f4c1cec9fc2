use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct IntentResult {
    pub intent: String,
    #[serde(default)]
    pub confidence: f64,
}

impl IntentResult {
    /// All well-formed entries of `response.intents`, in order.
    pub fn all_from_response(response: &Value) -> Vec<IntentResult> {
        response
            .get("intents")
            .and_then(|intents| intents.as_array())
            .map(|intents| {
                intents
                    .iter()
                    .filter_map(|intent| serde_json::from_value(intent.clone()).ok())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// `response.intents[0]`, the only entry the assistant ranks highest.
    pub fn first_from_response(response: &Value) -> Option<IntentResult> {
        response
            .get("intents")
            .and_then(|intents| intents.as_array())
            .and_then(|intents| intents.first())
            .and_then(|intent| serde_json::from_value(intent.clone()).ok())
    }
}
