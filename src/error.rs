use std::fmt;

use crate::config::api::ERROR_BODY_LIMIT;

/// Custom error type for Cloud Controller operations
#[derive(Debug)]
pub enum CfError {
    /// Network-level failure (connection, DNS, TLS, body read). Never retried.
    Transport(reqwest::Error),
    /// The UAA token endpoint rejected or failed the refresh
    AuthRefresh {
        message: String,
        source: Option<reqwest::Error>,
    },
    /// Credentials still rejected after one refresh
    Authentication { status: u16 },
    /// Malformed response from the token endpoint
    ProtocolViolation(String),
    /// API returned any other non-success status
    Api { status: u16, body: String },
    /// Page or record could not be decoded
    Json(String),
    /// Invalid configuration (bad URL, URL outside the API target, ...)
    Config(String),
    /// Named resource does not exist or is ambiguous
    NotFound(String),
    /// No cf CLI config file found
    ConfigNotFound(String),
    /// cf CLI config file exists but could not be read or parsed
    Credentials(String),
}

impl fmt::Display for CfError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CfError::Transport(e) => write!(f, "HTTP request failed: {}", e),
            CfError::AuthRefresh { message, source } => match source {
                Some(e) => write!(f, "Error refreshing token: {}: {}", message, e),
                None => write!(f, "Error refreshing token: {}", message),
            },
            CfError::Authentication { status } => write!(
                f,
                "Authentication failed (status {}) after refreshing the access token; run 'cf login' again",
                status
            ),
            CfError::ProtocolViolation(msg) => write!(f, "Protocol violation: {}", msg),
            CfError::Api { status, body } => {
                write!(f, "API error (status {}): {}", status, body)
            }
            CfError::Json(msg) => write!(f, "JSON error: {}", msg),
            CfError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CfError::NotFound(msg) => write!(f, "{}", msg),
            CfError::ConfigNotFound(msg) => write!(f, "{}", msg),
            CfError::Credentials(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for CfError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CfError::Transport(e) => Some(e),
            CfError::AuthRefresh {
                source: Some(e), ..
            } => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for CfError {
    fn from(err: reqwest::Error) -> Self {
        CfError::Transport(err)
    }
}

impl From<serde_json::Error> for CfError {
    fn from(err: serde_json::Error) -> Self {
        CfError::Json(err.to_string())
    }
}

/// Lossily decode a response body and cut it down for error messages
pub fn body_snippet(body: &[u8]) -> String {
    let text = String::from_utf8_lossy(body);
    if text.len() <= ERROR_BODY_LIMIT {
        return text.into_owned();
    }
    let mut end = ERROR_BODY_LIMIT;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &text[..end])
}

/// Result type alias for Cloud Controller operations
pub type Result<T> = std::result::Result<T, CfError>;
