//! Server-side structured logging.
//!
//! Wraps `tracing-subscriber` with `RUST_LOG`-style filtering and dumps the
//! resolved assistant configuration at startup with secrets masked.

use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::ServerConfig;

/// Environment variables whose presence is worth reporting at startup.
/// Platform-injected service bindings often land in these.
const SERVICE_ENV_VARS: &[&str] = &[
    "SERVICE_NAME_USERNAME",
    "SERVICE_NAME_PASSWORD",
    "SERVICE_NAME_IAM_APIKEY",
    "SERVICE_NAME_IAM_URL",
    "SERVICE_NAME_IAM_ACCESS_TOKEN",
    "SERVICE_NAME_URL",
    "VCAP_SERVICES",
];

/// Install the global subscriber. Safe to call more than once.
pub fn init_logger(level: &str) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .try_init();
}

/// Mask all but the last four characters of a secret.
pub fn redact_secret(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    if chars.len() <= 8 {
        return "****".to_string();
    }
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("****{}", tail)
}

fn is_secret_name(name: &str) -> bool {
    ["PASSWORD", "APIKEY", "TOKEN", "VCAP"]
        .iter()
        .any(|marker| name.contains(marker))
}

pub fn log_startup(config: &ServerConfig) {
    let assistant = &config.assistant;

    info!(version = env!("CARGO_PKG_VERSION"), "Starting assistant relay");
    info!(
        url = %assistant.url,
        api_version = %assistant.api_version,
        workspace_id = assistant.workspace_id.as_deref().unwrap_or("<unset>"),
        api_key = %assistant.api_key.as_deref().map(redact_secret).unwrap_or_else(|| "<unset>".to_string()),
        disable_ssl_verification = assistant.disable_ssl_verification,
        fallback_text = config.fallback_text,
        "Assistant configuration"
    );

    for name in SERVICE_ENV_VARS {
        if let Ok(value) = std::env::var(name) {
            if value.is_empty() {
                continue;
            }
            let shown = if is_secret_name(name) {
                redact_secret(&value)
            } else {
                value
            };
            info!(name = %name, value = %shown, "Service environment");
        }
    }
}
