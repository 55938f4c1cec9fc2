use assistant_relay::cli::{ChatArgs, ServeArgs};
use assistant_relay::config::{
    ChatConfig, FileConfig, ServerConfig, DEFAULT_API_VERSION, DEFAULT_ASSISTANT_URL,
    DEFAULT_RELAY_URL,
};
use std::collections::HashMap;
use std::fs;
use tempfile::TempDir;

fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |name: &str| map.get(name).cloned()
}

#[test]
fn test_server_defaults() {
    let config =
        ServerConfig::resolve(&ServeArgs::default(), &FileConfig::default(), &env_of(&[]))
            .unwrap();

    assert_eq!(config.assistant.url, DEFAULT_ASSISTANT_URL);
    assert_eq!(config.assistant.api_version, DEFAULT_API_VERSION);
    assert!(config.assistant.workspace().is_none());
    assert!(config.assistant.api_key.is_none());
    assert!(!config.assistant.disable_ssl_verification);
    assert!(config.fallback_text);
    assert_eq!(config.socket_addr(), "0.0.0.0:3000");
    assert_eq!(config.log_level, "info");
}

#[test]
fn test_server_env_settings() {
    let env = env_of(&[
        ("WORKSPACE_ID", "ws-env"),
        ("ASSISTANT_URL", "https://example.test/assistant/api"),
        ("ASSISTANT_PASSWORD", "legacy-key"),
        ("ASSISTANT_DISABLE_SSL_VERIFICATION", "yes"),
        ("ASSISTANT_FALLBACK_TEXT", "false"),
        ("PORT", "8080"),
    ]);

    let config = ServerConfig::resolve(&ServeArgs::default(), &FileConfig::default(), &env).unwrap();

    assert_eq!(config.assistant.workspace(), Some("ws-env"));
    assert_eq!(config.assistant.url, "https://example.test/assistant/api");
    assert_eq!(config.assistant.api_key.as_deref(), Some("legacy-key"));
    assert!(config.assistant.disable_ssl_verification);
    assert!(!config.fallback_text);
    assert_eq!(config.port, 8080);
}

#[test]
fn test_iam_apikey_preferred_over_password() {
    let env = env_of(&[
        ("ASSISTANT_IAM_APIKEY", "iam-key"),
        ("ASSISTANT_PASSWORD", "legacy-key"),
    ]);

    let config = ServerConfig::resolve(&ServeArgs::default(), &FileConfig::default(), &env).unwrap();

    assert_eq!(config.assistant.api_key.as_deref(), Some("iam-key"));
}

#[test]
fn test_args_override_env() {
    let args = ServeArgs {
        port: Some(9000),
        workspace_id: Some("ws-arg".to_string()),
        no_fallback: true,
        ..ServeArgs::default()
    };
    let env = env_of(&[("WORKSPACE_ID", "ws-env"), ("PORT", "8080")]);

    let config = ServerConfig::resolve(&args, &FileConfig::default(), &env).unwrap();

    assert_eq!(config.assistant.workspace(), Some("ws-arg"));
    assert_eq!(config.port, 9000);
    assert!(!config.fallback_text);
}

#[test]
fn test_invalid_port_is_config_error() {
    let env = env_of(&[("PORT", "eighty")]);

    let result = ServerConfig::resolve(&ServeArgs::default(), &FileConfig::default(), &env);

    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("PORT"));
}

#[test]
fn test_placeholder_workspace_counts_as_unset() {
    let env = env_of(&[("WORKSPACE_ID", "<workspace-id>")]);

    let config = ServerConfig::resolve(&ServeArgs::default(), &FileConfig::default(), &env).unwrap();

    assert!(config.assistant.workspace().is_none());
}

#[test]
fn test_yaml_file_with_env_reference() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.yaml");
    fs::write(
        &path,
        r#"
assistant:
  url: https://file.test/assistant/api
  workspace_id: ws-file
  api_key: "${TEST_ASSISTANT_KEY}"
  api_version: "2018-07-10"
relay:
  fallback_text: false
server:
  port: 4000
chat:
  relay_url: http://relay.test/api/message
  open_tabs: false
"#,
    )
    .unwrap();

    let file = FileConfig::load_from(&path).unwrap();
    let env = env_of(&[("TEST_ASSISTANT_KEY", "from-env")]);

    let config = ServerConfig::resolve(&ServeArgs::default(), &file, &env).unwrap();
    assert_eq!(config.assistant.url, "https://file.test/assistant/api");
    assert_eq!(config.assistant.workspace(), Some("ws-file"));
    assert_eq!(config.assistant.api_key.as_deref(), Some("from-env"));
    assert_eq!(config.assistant.api_version, "2018-07-10");
    assert!(!config.fallback_text);
    assert_eq!(config.port, 4000);

    let chat = ChatConfig::resolve(&ChatArgs::default(), &file, &env);
    assert_eq!(chat.relay_url, "http://relay.test/api/message");
    assert!(!chat.open_tabs);
}

#[test]
fn test_json_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.json");
    fs::write(&path, r#"{ "server": { "bind_address": "127.0.0.1" } }"#).unwrap();

    let file = FileConfig::load_from(&path).unwrap();
    let config = ServerConfig::resolve(&ServeArgs::default(), &file, &env_of(&[])).unwrap();

    assert_eq!(config.socket_addr(), "127.0.0.1:3000");
    assert!(config.fallback_text);
}

#[test]
fn test_malformed_file_reports_path() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.yaml");
    fs::write(&path, "assistant: [unclosed").unwrap();

    let err = FileConfig::load_from(&path).unwrap_err();

    assert!(err.to_string().contains("config.yaml"));
}

#[test]
fn test_chat_defaults_and_flags() {
    let defaults = ChatConfig::resolve(&ChatArgs::default(), &FileConfig::default(), &env_of(&[]));
    assert_eq!(defaults.relay_url, DEFAULT_RELAY_URL);
    assert!(defaults.open_tabs);
    assert!(!defaults.verbose);

    let args = ChatArgs {
        relay_url: Some("http://other:3000/api/message".to_string()),
        no_open: true,
        verbose: true,
        ..ChatArgs::default()
    };
    let env = env_of(&[("RELAY_URL", "http://env:3000/api/message")]);
    let config = ChatConfig::resolve(&args, &FileConfig::default(), &env);
    assert_eq!(config.relay_url, "http://other:3000/api/message");
    assert!(!config.open_tabs);
    assert!(config.verbose);
}

#[test]
fn test_every_file_string_expands_env_references() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.yaml");
    fs::write(
        &path,
        r#"
assistant:
  api_version: "${TEST_API_VERSION}"
server:
  bind_address: "${TEST_BIND}"
  log_level: "${TEST_LOG}"
"#,
    )
    .unwrap();

    let file = FileConfig::load_from(&path).unwrap();
    let env = env_of(&[
        ("TEST_API_VERSION", "2021-06-14"),
        ("TEST_BIND", "127.0.0.1"),
        ("TEST_LOG", "debug"),
    ]);

    let config = ServerConfig::resolve(&ServeArgs::default(), &file, &env).unwrap();

    assert_eq!(config.assistant.api_version, "2021-06-14");
    assert_eq!(config.socket_addr(), "127.0.0.1:3000");
    assert_eq!(config.log_level, "debug");
}
