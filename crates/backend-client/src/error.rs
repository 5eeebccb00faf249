//! Error types for the backend client crate.

use patocash_core::Error as CoreError;
use thiserror::Error;

/// Result type alias for backend client operations.
pub type Result<T> = std::result::Result<T, BackendClientError>;

#[derive(Debug, Error)]
pub enum BackendClientError {
    /// HTTP client error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success response from the data service
    #[error("{endpoint} answered {status}: {message}")]
    Status {
        endpoint: String,
        status: u16,
        message: String,
    },

    /// Body could not be decoded into the expected shape
    #[error("Unexpected payload from {endpoint}: {message}")]
    Decode { endpoint: String, message: String },
}

impl BackendClientError {
    pub fn status(endpoint: impl Into<String>, status: u16, message: impl Into<String>) -> Self {
        Self::Status {
            endpoint: endpoint.into(),
            status,
            message: message.into(),
        }
    }

    pub fn decode(endpoint: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Decode {
            endpoint: endpoint.into(),
            message: message.into(),
        }
    }
}

impl From<BackendClientError> for CoreError {
    fn from(err: BackendClientError) -> Self {
        CoreError::BackendUnavailable(err.to_string())
    }
}
