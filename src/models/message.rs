use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Body of `POST /api/message`. Both members are opaque JSON objects owned by
/// the assistant service; the relay only guarantees they are present.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct MessageRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<Value>,
}

impl MessageRequest {
    pub fn new(text: &str, context: Value) -> Self {
        Self {
            context: Some(context),
            input: Some(serde_json::json!({ "text": text })),
        }
    }

    /// Context to forward, `{}` when absent or null.
    pub fn context_or_empty(&self) -> Value {
        or_empty_object(self.context.as_ref())
    }

    /// Input to forward, `{}` when absent or null.
    pub fn input_or_empty(&self) -> Value {
        or_empty_object(self.input.as_ref())
    }

    /// The `input.text` string, if any.
    pub fn text(&self) -> Option<&str> {
        self.input
            .as_ref()
            .and_then(|input| input.get("text"))
            .and_then(|text| text.as_str())
    }
}

fn or_empty_object(value: Option<&Value>) -> Value {
    match value {
        None | Some(Value::Null) => Value::Object(Map::new()),
        Some(value) => value.clone(),
    }
}

/// What the relay sends to the assistant message endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UpstreamPayload {
    pub workspace_id: String,
    pub context: Value,
    pub input: Value,
}

impl UpstreamPayload {
    pub fn from_request(workspace_id: &str, request: &MessageRequest) -> Self {
        Self {
            workspace_id: workspace_id.to_string(),
            context: request.context_or_empty(),
            input: request.input_or_empty(),
        }
    }
}
