// src/error.rs

//! Unified error handling for the job board client.

use std::fmt;

use thiserror::Error;

/// Result type alias for job board operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Unified application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// URL parsing failed
    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    /// Endpoint answered with a non-success status
    #[error("HTTP error for {endpoint}: status {status}")]
    Status { endpoint: String, status: u16 },

    /// Endpoint answered with a payload of an unexpected shape
    #[error("Unexpected response from {endpoint}: {message}")]
    Api { endpoint: String, message: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Data validation error
    #[error("Validation error: {0}")]
    Validation(String),
}

impl AppError {
    /// Create a status error for an endpoint.
    pub fn status(endpoint: impl Into<String>, status: u16) -> Self {
        Self::Status {
            endpoint: endpoint.into(),
            status,
        }
    }

    /// Create an unexpected-payload error for an endpoint.
    pub fn api(endpoint: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::Api {
            endpoint: endpoint.into(),
            message: message.to_string(),
        }
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display() {
        let err = AppError::status("/api/footer", 503);
        assert_eq!(err.to_string(), "HTTP error for /api/footer: status 503");
    }

    #[test]
    fn test_api_display() {
        let err = AppError::api("/jobs/it", "pageData is empty");
        assert_eq!(
            err.to_string(),
            "Unexpected response from /jobs/it: pageData is empty"
        );
    }
}
