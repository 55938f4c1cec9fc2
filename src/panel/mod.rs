//! Conversation panel: the client half of the chat.
//!
//! Owns the transcript, the `vss` flag and the context carried between
//! turns. It never talks to the network itself; callers send the requests it
//! builds and feed back the responses they get.

pub mod client;
pub mod command;

use serde_json::{json, Map, Value};

use crate::api::response::{context_str, extract_option_labels, extract_output_texts};
use crate::models::{IntentResult, MessageRequest, Speaker, Turn};

pub use client::RelayClient;
pub use command::{parse_command, status_from_query, CommandOutcome, VehicleServiceStatus};

pub const STATUS_CONTEXT_KEY: &str = "vehicle_service_status";
pub const LOGIN_CONTEXT_KEY: &str = "login_reqd";

/// Intent that asks the client to open the simulated mobile page.
pub const SPAWN_TAB_INTENT: &str = "vehicle-inspection-process";
pub const SPAWN_TAB_CONFIDENCE: f64 = 0.85;

/// Input submitted when the user answers the login prompt.
pub const LOGIN_ANSWER: &str = "yes";

/// Something the front end has to act on after a response arrives.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelEvent {
    Turn(Turn),
    OpenTab { url: String },
    LoginPrompt { id_name: String },
    Diagnostic(String),
}

/// What became of a line typed into the input box.
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    Blank,
    Command(CommandOutcome),
    Send { request: MessageRequest, turn: Turn },
}

#[derive(Debug, Default)]
pub struct ConversationPanel {
    status: VehicleServiceStatus,
    transcript: Vec<Turn>,
    last_response: Option<Value>,
}

impl ConversationPanel {
    pub fn new(status: VehicleServiceStatus) -> Self {
        Self {
            status,
            ..Self::default()
        }
    }

    pub fn from_query(query: &str) -> Self {
        Self::new(status_from_query(query))
    }

    pub fn status(&self) -> VehicleServiceStatus {
        self.status
    }

    pub fn transcript(&self) -> &[Turn] {
        &self.transcript
    }

    /// Empty greeting that opens the session.
    pub fn initial_request(&self) -> MessageRequest {
        MessageRequest::new("", self.outgoing_context())
    }

    /// Context of the latest response with the current flag written in, or a
    /// fresh context holding only the flag.
    pub fn outgoing_context(&self) -> Value {
        let mut context = match self
            .last_response
            .as_ref()
            .and_then(|response| response.get("context"))
        {
            Some(Value::Object(map)) => map.clone(),
            _ => Map::new(),
        };
        context.insert(
            STATUS_CONTEXT_KEY.to_string(),
            Value::String(self.status.to_string()),
        );
        Value::Object(context)
    }

    pub fn submit(&mut self, input: &str) -> Submission {
        if input.trim().is_empty() {
            return Submission::Blank;
        }

        if let Some(command) = parse_command(input) {
            return Submission::Command(command.apply(&mut self.status));
        }

        let request = MessageRequest::new(input, self.outgoing_context());
        let turn = Turn::new(Speaker::User, vec![input.to_string()]);
        self.transcript.push(turn.clone());
        Submission::Send { request, turn }
    }

    /// Answer a login prompt. Nothing is verified anywhere.
    pub fn login(&mut self) -> Submission {
        self.submit(LOGIN_ANSWER)
    }

    pub fn receive(&mut self, mut response: Value) -> Vec<PanelEvent> {
        let mut events = self.intent_effects(&response);

        let segments = assistant_segments(&response);
        if segments.is_empty() {
            self.last_response = Some(response);
            return events;
        }

        let login_prompt = (context_str(&response, LOGIN_CONTEXT_KEY) == Some("y")).then(|| {
            context_str(&response, "id_name").unwrap_or("").to_string()
        });

        let turn = Turn::new(Speaker::Assistant, segments);
        self.transcript.push(turn.clone());
        events.push(PanelEvent::Turn(turn));

        if let Some(id_name) = login_prompt {
            // The stored context is the next outgoing one; clearing it here
            // keeps the prompt from firing again on the following turn.
            if let Some(context) = response.get_mut("context").and_then(|c| c.as_object_mut()) {
                context.insert(LOGIN_CONTEXT_KEY.to_string(), json!("n"));
            }
            events.push(PanelEvent::LoginPrompt { id_name });
        }

        self.last_response = Some(response);
        events
    }

    fn intent_effects(&self, response: &Value) -> Vec<PanelEvent> {
        let mut events = Vec::new();

        for intent in IntentResult::all_from_response(response) {
            if intent.intent != SPAWN_TAB_INTENT {
                continue;
            }

            let Some(url) = context_str(response, "sim_mobile_host").filter(|u| !u.is_empty())
            else {
                events.push(PanelEvent::Diagnostic(
                    "QR tab NOT created: context.sim_mobile_host missing".to_string(),
                ));
                continue;
            };

            let auto_open = response
                .get("context")
                .and_then(|c| c.get("sim_mobile_host_auto_open"))
                == Some(&Value::Bool(true));
            if !auto_open {
                events.push(PanelEvent::Diagnostic(
                    "QR tab NOT created due to flags: context.sim_mobile_host_auto_open"
                        .to_string(),
                ));
                continue;
            }

            if intent.confidence > SPAWN_TAB_CONFIDENCE {
                events.push(PanelEvent::Diagnostic(format!(
                    "Attempt create QR tab with intent conf: {}",
                    intent.confidence
                )));
                events.push(PanelEvent::OpenTab {
                    url: url.to_string(),
                });
            } else {
                events.push(PanelEvent::Diagnostic(format!(
                    "QR tab NOT created due low confidence: {}",
                    intent.confidence
                )));
            }
        }

        events
    }
}

/// Display segments of a response: `output.text` with the labels of any
/// offered options appended to the last segment. Empty segments are dropped.
pub fn assistant_segments(response: &Value) -> Vec<String> {
    let mut segments = extract_output_texts(response);

    let labels = extract_option_labels(response);
    if let Some(last) = segments.last_mut() {
        for label in labels {
            last.push_str("\n  • ");
            last.push_str(&label);
        }
    }

    segments.retain(|segment| !segment.is_empty());
    segments
}
