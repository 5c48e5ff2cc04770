//! Error types for cloudhub-fetch

use reqwest::StatusCode;
use thiserror::Error;

/// Result type alias for cloudhub-fetch operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the application
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Operation failed: {0}")]
    Other(String),
}

/// API-related errors
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Error during authentication: {0}")]
    Authentication(String),

    #[error("{status} returned by {url}")]
    Status { status: StatusCode, url: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Network("Request timed out".to_string())
        } else if err.is_connect() {
            ApiError::Network("Failed to connect to API".to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variables: {}", .0.join(", "))]
    MissingVariables(Vec<String>),

    #[error("ANYPOINT_CONTROL_PLANE must be one of: us, eu1, gov (got '{0}')")]
    InvalidControlPlane(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
