use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{json, Value};
use std::fmt;

#[derive(Debug)]
pub enum RelayError {
    /// Non-2xx reply from an upstream HTTP service; `message` is the raw body.
    ApiError {
        status: u16,
        message: String,
    },
    ConfigError(String),
    BadRequest(String),
    NetworkError(reqwest::Error),
    IoError(std::io::Error),
    JsonError(serde_json::Error),
    Other(String),
}

impl fmt::Display for RelayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RelayError::ApiError { status, message } => {
                write!(f, "API error (status {}): {}", status, message)
            }
            RelayError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            RelayError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            RelayError::NetworkError(e) => write!(f, "Network error: {}", e),
            RelayError::IoError(e) => write!(f, "IO error: {}", e),
            RelayError::JsonError(e) => write!(f, "JSON error: {}", e),
            RelayError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for RelayError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RelayError::NetworkError(e) => Some(e),
            RelayError::IoError(e) => Some(e),
            RelayError::JsonError(e) => Some(e),
            _ => None,
        }
    }
}

impl RelayError {
    /// Body returned to the relay caller. Upstream error bodies pass through
    /// untouched: JSON stays JSON, anything else is wrapped as a string.
    pub fn body(&self) -> Value {
        match self {
            RelayError::ApiError { message, .. } => serde_json::from_str(message)
                .unwrap_or_else(|_| Value::String(message.clone())),
            other => json!({ "error": other.to_string() }),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            RelayError::BadRequest(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(self.body())).into_response()
    }
}

impl From<reqwest::Error> for RelayError {
    fn from(err: reqwest::Error) -> Self {
        RelayError::NetworkError(err)
    }
}

impl From<std::io::Error> for RelayError {
    fn from(err: std::io::Error) -> Self {
        RelayError::IoError(err)
    }
}

impl From<serde_json::Error> for RelayError {
    fn from(err: serde_json::Error) -> Self {
        RelayError::JsonError(err)
    }
}

pub type Result<T> = std::result::Result<T, RelayError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_json_body_passes_through() {
        let err = RelayError::ApiError {
            status: 404,
            message: r#"{"error":"Resource not found","code":404}"#.to_string(),
        };
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.body()["error"], "Resource not found");
    }

    #[test]
    fn api_error_text_body_becomes_string() {
        let err = RelayError::ApiError {
            status: 502,
            message: "Bad Gateway".to_string(),
        };
        assert_eq!(err.body(), Value::String("Bad Gateway".to_string()));
    }

    #[test]
    fn bad_request_maps_to_400() {
        let err = RelayError::BadRequest("expected a JSON object".to_string());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.body()["error"], "Bad request: expected a JSON object");
    }
}
