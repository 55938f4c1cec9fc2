pub mod fallback;

use crate::api::response::{context_str, ensure_output};
use crate::api::AssistantClient;
use crate::config::AssistantSettings;
use crate::error::{RelayError, Result};
use crate::models::{MessageRequest, UpstreamPayload};
use serde_json::{json, Value};
use tracing::{debug, error, info, warn};

pub use fallback::{apply_fallback_text, select_fallback_text};

/// Reply given instead of an upstream call while no workspace is configured.
pub const UNCONFIGURED_MESSAGE: &str = "The app has not been configured with a <b>WORKSPACE_ID</b> environment variable. Please refer to the <a href=\"https://github.com/watson-developer-cloud/assistant-simple\">README</a> documentation on how to set this variable. <br>Once a workspace has been defined the intents may be imported from <a href=\"https://github.com/watson-developer-cloud/assistant-simple/blob/master/training/car_workspace.json\">here</a> in order to get a working application.";

pub fn unconfigured_response() -> Value {
    json!({ "output": { "text": UNCONFIGURED_MESSAGE } })
}

/// Forwards `{context, input}` to the assistant service and patches the
/// reply. Holds no per-request state.
pub struct Relay {
    client: AssistantClient,
    fallback_text: bool,
}

impl Relay {
    pub fn new(settings: AssistantSettings, fallback_text: bool) -> Result<Self> {
        Ok(Self {
            client: AssistantClient::new(settings)?,
            fallback_text,
        })
    }

    pub fn settings(&self) -> &AssistantSettings {
        self.client.settings()
    }

    /// Parse a raw `/api/message` body. An empty body counts as `{}`.
    pub fn parse_request(body: &[u8]) -> Result<MessageRequest> {
        if body.iter().all(|b| b.is_ascii_whitespace()) {
            return Ok(MessageRequest::default());
        }

        let value: Value = serde_json::from_slice(body)
            .map_err(|e| RelayError::BadRequest(format!("invalid JSON body: {}", e)))?;

        if !value.is_object() {
            return Err(RelayError::BadRequest(
                "request body must be a JSON object".to_string(),
            ));
        }

        serde_json::from_value(value).map_err(|e| RelayError::BadRequest(e.to_string()))
    }

    pub async fn handle(&self, request: &MessageRequest) -> Result<Value> {
        let Some(workspace) = self.settings().workspace() else {
            warn!("WORKSPACE_ID is not configured, replying with setup instructions");
            return Ok(unconfigured_response());
        };

        let payload = UpstreamPayload::from_request(workspace, request);
        debug!(
            login_reqd = payload.context.get("login_reqd").and_then(|v| v.as_str()),
            "client -> assistant"
        );

        let mut response = match self.client.message(&payload).await {
            Ok(response) => response,
            Err(e) => {
                error!(error = %e, "Assistant host communication error");
                return Err(e);
            }
        };

        if !response.is_object() {
            let e = RelayError::Other("assistant response is not a JSON object".to_string());
            error!(error = %e, "Assistant host communication error");
            return Err(e);
        }

        if ensure_output(&mut response) {
            debug!("assistant response had no output object, patched to {{}}");
        }

        if self.fallback_text {
            if let Some(text) = apply_fallback_text(&mut response) {
                debug!(text = %text, "filled empty output.text");
            }
        }

        debug!(
            login_reqd = context_str(&response, "login_reqd"),
            "client <- assistant"
        );

        Ok(response)
    }

    /// Round trip a greeting and log the outcome.
    pub async fn ping(&self) {
        info!("Performing initialization backend ping test");
        let request = MessageRequest::new("Hello", json!({}));
        match self.handle(&request).await {
            Ok(response) => info!(response = %response, "Ping results"),
            Err(e) => error!(error = %e, "Ping failed"),
        }
    }
}
