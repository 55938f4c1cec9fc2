use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ChatSection {
    #[serde(default)]
    pub relay_url: Option<String>,
    #[serde(default)]
    pub open_tabs: Option<bool>,
    #[serde(default)]
    pub verbose: Option<bool>,
}
