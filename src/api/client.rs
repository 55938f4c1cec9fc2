use crate::config::AssistantSettings;
use crate::error::{RelayError, Result};
use crate::models::UpstreamPayload;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde_json::Value;

/// Username the assistant service expects alongside an IAM API key.
const APIKEY_USERNAME: &str = "apikey";

/// Authenticated client for the assistant v1 message endpoint.
#[derive(Clone)]
pub struct AssistantClient {
    http: reqwest::Client,
    settings: AssistantSettings,
}

impl AssistantClient {
    pub fn new(settings: AssistantSettings) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .danger_accept_invalid_certs(settings.disable_ssl_verification)
            .build()?;

        Ok(Self { http, settings })
    }

    pub fn settings(&self) -> &AssistantSettings {
        &self.settings
    }

    /// POST one turn upstream. Non-2xx replies come back as `ApiError` with
    /// the body untouched.
    pub async fn message(&self, payload: &UpstreamPayload) -> Result<Value> {
        let url = self.settings.message_url(&payload.workspace_id);

        let mut request = self
            .http
            .post(&url)
            .query(&[("version", self.settings.api_version.as_str())])
            .json(payload);

        if let Some(ref api_key) = self.settings.api_key {
            request = request.basic_auth(APIKEY_USERNAME, Some(api_key));
        }

        let response = request.send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());
            return Err(RelayError::ApiError { status, message });
        }

        let body = response.text().await?;
        let value: Value = serde_json::from_str(&body)?;
        Ok(value)
    }
}
