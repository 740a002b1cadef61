//! Error types for Library Desk

use reqwest::StatusCode;
use thiserror::Error;

/// Fallback text when the service rejects a request without saying why
pub const GENERIC_SERVER_MESSAGE: &str = "An error occurred.";

/// Shown when a request went out but nothing came back
pub const NO_RESPONSE_MESSAGE: &str = "No response from server.";

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// A form field failed local validation; no request was sent
    #[error("Validation error: {0}")]
    Validation(String),

    /// The service answered with a non-success status
    #[error("Server error ({status}): {}", .message.as_deref().unwrap_or(GENERIC_SERVER_MESSAGE))]
    Server {
        status: StatusCode,
        message: Option<String>,
    },

    /// The request was sent but no response was received
    #[error("Network error: {0}")]
    Network(String),

    /// The request could not be built or sent
    #[error("Request error: {0}")]
    Request(String),

    /// The response body was not the JSON we expected
    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl AppError {
    /// Text shown to the user when this error ends an action
    pub fn notice_text(&self) -> String {
        match self {
            AppError::Validation(msg) => msg.clone(),
            AppError::Server { message, .. } => message
                .clone()
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| GENERIC_SERVER_MESSAGE.to_string()),
            AppError::Network(_) => NO_RESPONSE_MESSAGE.to_string(),
            AppError::Request(msg) | AppError::Decode(msg) => format!("Error: {}", msg),
            AppError::Config(e) => format!("Error: {}", e),
        }
    }

    /// True when the service answered 404
    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::Server { status, .. } if *status == StatusCode::NOT_FOUND)
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_builder() {
            AppError::Request(e.to_string())
        } else if e.is_decode() {
            AppError::Decode(e.to_string())
        } else if let Some(status) = e.status() {
            AppError::Server {
                status,
                message: None,
            }
        } else {
            // connect failures, timeouts, and bodies cut off mid-flight
            AppError::Network(e.to_string())
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Decode(e.to_string())
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
