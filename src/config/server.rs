use super::defaults::default_fallback_text;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RelaySection {
    #[serde(default = "default_fallback_text")]
    pub fallback_text: bool,
}

impl Default for RelaySection {
    fn default() -> Self {
        Self {
            fallback_text: default_fallback_text(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ServerSection {
    #[serde(default)]
    pub bind_address: Option<String>,
    #[serde(default)]
    pub port: Option<u16>,
    #[serde(default)]
    pub log_level: Option<String>,
}
