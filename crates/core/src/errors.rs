//! Core error types for the PatoCash front.
//!
//! Transport-specific failures (reqwest, chromium) are converted into these
//! variants by the crates that own them, so this type stays I/O-agnostic.

use thiserror::Error;

use crate::export::ExportError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the presentation core.
#[derive(Error, Debug)]
pub enum Error {
    /// Upstream fetch failed or returned a non-success status.
    #[error("Backend unavailable: {0}")]
    BackendUnavailable(String),

    /// The filtered transaction set is empty where a date range is required.
    #[error("No transactions found for the requested period")]
    NoTransactions,

    /// Report gate token missing or mismatched.
    #[error("Access denied")]
    Forbidden,

    /// The backend answered with data this layer cannot interpret.
    #[error("Invalid data from backend: {0}")]
    InvalidData(String),

    #[error("Input validation failed: {0}")]
    Validation(String),

    #[error("PDF export failed: {0}")]
    Export(#[from] ExportError),
}

impl Error {
    pub fn backend(message: impl Into<String>) -> Self {
        Self::BackendUnavailable(message.into())
    }

    pub fn invalid_data(message: impl Into<String>) -> Self {
        Self::InvalidData(message.into())
    }
}
