mod api;
mod chat;
mod defaults;
mod server;
mod validation;

use crate::cli::{ChatArgs, ServeArgs};
use crate::error::{RelayError, Result};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub use api::{AssistantSection, AssistantSettings};
pub use chat::ChatSection;
pub use defaults::*;
pub use server::{RelaySection, ServerSection};
pub use validation::{expand_with, parse_bool};

/// Environment lookup used while resolving settings.
pub type EnvLookup<'a> = &'a dyn Fn(&str) -> Option<String>;

fn process_env(name: &str) -> Option<String> {
    env::var(name).ok()
}

/// Non-blank value of an environment variable.
fn env_value(env: EnvLookup, name: &str) -> Option<String> {
    env(name).filter(|v| !v.trim().is_empty())
}

fn env_bool(env: EnvLookup, name: &str) -> Option<bool> {
    env(name).and_then(|v| parse_bool(&v))
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct FileConfig {
    #[serde(default)]
    pub assistant: AssistantSection,
    #[serde(default)]
    pub relay: RelaySection,
    #[serde(default)]
    pub server: ServerSection,
    #[serde(default)]
    pub chat: ChatSection,
}

impl FileConfig {
    pub fn load() -> anyhow::Result<Self> {
        for path in Self::get_config_paths() {
            if path.exists() {
                return Self::load_from(&path);
            }
        }

        // No config file found, return default
        Ok(FileConfig::default())
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let is_yaml = matches!(
            path.extension().and_then(|s| s.to_str()),
            Some("yaml") | Some("yml")
        );

        let config = if is_yaml {
            serde_yaml::from_str(&contents)
                .with_context(|| format!("Failed to parse YAML config file: {}", path.display()))?
        } else {
            serde_json::from_str(&contents)
                .with_context(|| format!("Failed to parse JSON config file: {}", path.display()))?
        };

        Ok(config)
    }

    pub fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = vec![
            // 1. Current directory (local override)
            PathBuf::from(".assistant-relay.yaml"),
            PathBuf::from(".assistant-relay.yml"),
            PathBuf::from(".assistant-relay.json"),
        ];

        // 2. User's config directory
        if let Some(home_dir) = dirs::home_dir() {
            let config_dir = home_dir.join(".config").join("assistant-relay");
            paths.push(config_dir.join("config.yaml"));
            paths.push(config_dir.join("config.yml"));
            paths.push(config_dir.join("config.json"));
        }

        paths
    }
}

/// Settings for `assistant-relay serve`.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub assistant: AssistantSettings,
    pub fallback_text: bool,
    pub bind_address: String,
    pub port: u16,
    pub log_level: String,
}

impl ServerConfig {
    pub fn from_env_and_args(args: &ServeArgs) -> Result<Self> {
        let file = FileConfig::load().map_err(|e| RelayError::ConfigError(format!("{:#}", e)))?;
        Self::resolve(args, &file, &process_env)
    }

    /// Precedence for every setting: CLI args > env var > config file > default.
    pub fn resolve(args: &ServeArgs, file: &FileConfig, env: EnvLookup) -> Result<Self> {
        let expand = |value: &String| expand_with(value, env);

        let workspace_id = args
            .workspace_id
            .clone()
            .or_else(|| env_value(env, "WORKSPACE_ID"))
            .or_else(|| file.assistant.workspace_id.as_ref().map(expand));

        let url = args
            .assistant_url
            .clone()
            .or_else(|| env_value(env, "ASSISTANT_URL"))
            .or_else(|| file.assistant.url.as_ref().map(expand))
            .unwrap_or_else(|| DEFAULT_ASSISTANT_URL.to_string());

        // The IAM key is still read from the legacy password variable when the
        // newer one is absent.
        let api_key = env_value(env, "ASSISTANT_IAM_APIKEY")
            .or_else(|| env_value(env, "ASSISTANT_PASSWORD"))
            .or_else(|| file.assistant.api_key.as_ref().map(expand))
            .filter(|key| !key.trim().is_empty());

        let api_version = env_value(env, "ASSISTANT_API_VERSION")
            .or_else(|| file.assistant.api_version.as_ref().map(expand))
            .unwrap_or_else(|| DEFAULT_API_VERSION.to_string());

        let disable_ssl_verification = args.insecure
            || env_bool(env, "ASSISTANT_DISABLE_SSL_VERIFICATION")
                .or(file.assistant.disable_ssl_verification)
                .unwrap_or(false);

        let fallback_text = if args.no_fallback {
            false
        } else {
            env_bool(env, "ASSISTANT_FALLBACK_TEXT").unwrap_or(file.relay.fallback_text)
        };

        let bind_address = args
            .bind_address
            .clone()
            .or_else(|| env_value(env, "RELAY_BIND"))
            .or_else(|| file.server.bind_address.as_ref().map(expand))
            .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());

        let port = match args.port {
            Some(port) => port,
            None => match env_value(env, "PORT") {
                Some(raw) => raw.trim().parse::<u16>().map_err(|_| {
                    RelayError::ConfigError(format!("PORT must be a port number, got '{}'", raw))
                })?,
                None => file.server.port.unwrap_or(DEFAULT_PORT),
            },
        };

        let log_level = env_value(env, "RUST_LOG")
            .or_else(|| file.server.log_level.as_ref().map(expand))
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

        Ok(ServerConfig {
            assistant: AssistantSettings {
                url,
                api_key,
                api_version,
                workspace_id,
                disable_ssl_verification,
            },
            fallback_text,
            bind_address,
            port,
            log_level,
        })
    }

    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }
}

/// Settings for `assistant-relay chat`.
#[derive(Debug, Clone)]
pub struct ChatConfig {
    pub relay_url: String,
    pub open_tabs: bool,
    pub verbose: bool,
}

impl ChatConfig {
    pub fn from_env_and_args(args: &ChatArgs) -> Result<Self> {
        let file = FileConfig::load().map_err(|e| RelayError::ConfigError(format!("{:#}", e)))?;
        Ok(Self::resolve(args, &file, &process_env))
    }

    pub fn resolve(args: &ChatArgs, file: &FileConfig, env: EnvLookup) -> Self {
        let relay_url = args
            .relay_url
            .clone()
            .or_else(|| env_value(env, "RELAY_URL"))
            .or_else(|| file.chat.relay_url.as_ref().map(|v| expand_with(v, env)))
            .unwrap_or_else(|| DEFAULT_RELAY_URL.to_string());

        let open_tabs = !args.no_open
            && env_bool(env, "CHAT_OPEN_TABS")
                .or(file.chat.open_tabs)
                .unwrap_or_else(default_open_tabs);

        let verbose = args.verbose
            || env_bool(env, "CHAT_VERBOSE")
                .or(file.chat.verbose)
                .unwrap_or(false);

        ChatConfig {
            relay_url,
            open_tabs,
            verbose,
        }
    }
}
