use super::defaults::WORKSPACE_PLACEHOLDER;
use serde::{Deserialize, Serialize};

/// `assistant:` section of the config file.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AssistantSection {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub api_version: Option<String>,
    #[serde(default)]
    pub workspace_id: Option<String>,
    #[serde(default)]
    pub disable_ssl_verification: Option<bool>,
}

/// Resolved connection settings for the assistant service.
#[derive(Debug, Clone)]
pub struct AssistantSettings {
    pub url: String,
    pub api_key: Option<String>,
    pub api_version: String,
    pub workspace_id: Option<String>,
    pub disable_ssl_verification: bool,
}

impl AssistantSettings {
    /// The workspace to address, or `None` when unset, blank or still the
    /// sample placeholder.
    pub fn workspace(&self) -> Option<&str> {
        self.workspace_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty() && *id != WORKSPACE_PLACEHOLDER)
    }

    /// Full message endpoint for `workspace`, without the version query.
    pub fn message_url(&self, workspace: &str) -> String {
        format!(
            "{}/v1/workspaces/{}/message",
            self.url.trim_end_matches('/'),
            workspace
        )
    }
}
