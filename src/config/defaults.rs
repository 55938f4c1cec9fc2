pub const DEFAULT_ASSISTANT_URL: &str = "https://gateway.watsonplatform.net/assistant/api";

pub const DEFAULT_API_VERSION: &str = "2019-02-28";

/// Value shipped in sample env files; treated the same as an unset workspace.
pub const WORKSPACE_PLACEHOLDER: &str = "<workspace-id>";

pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0";

pub const DEFAULT_PORT: u16 = 3000;

pub const DEFAULT_LOG_LEVEL: &str = "info";

pub const DEFAULT_RELAY_URL: &str = "http://localhost:3000/api/message";

pub fn default_fallback_text() -> bool {
    true
}

pub fn default_open_tabs() -> bool {
    true
}
