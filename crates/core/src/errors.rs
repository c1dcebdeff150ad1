//! Core error types for the Walletwise client.
//!
//! This module defines transport- and storage-agnostic error types. Adapter
//! crates (HTTP, file storage) convert their own failures into these types.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the client core.
///
/// Every variant renders a human-readable message that the UI can display
/// as-is.
#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// An authentication response looked successful but lacked a token.
    #[error("Authentication response is missing tokens")]
    MissingTokens,

    #[error("{0}")]
    Upstream(#[from] UpstreamError),

    #[error("Storage operation failed: {0}")]
    Storage(String),

    #[error("Secret store error: {0}")]
    Secret(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl Error {
    /// Returns true when the backend rejected the current credentials.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Error::Upstream(UpstreamError::Unauthorized(_)))
    }

    /// Returns true for caller-input errors raised before any port call.
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation(_))
    }
}

/// Validation errors for caller-supplied input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("{0}")]
    InvalidInput(String),
}

/// Failures reported by an outbound port (remote backend or transport).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UpstreamError {
    /// The backend rejected the access token or the credentials.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("The request timed out. Check your internet connection.")]
    Timeout,

    #[error("Invalid response from server: {0}")]
    InvalidResponse(String),
}

// === From implementations for common error types ===

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Storage(err.to_string())
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}

/// Shorthand for building an `InvalidInput` validation error.
pub(crate) fn invalid_input(message: impl Into<String>) -> Error {
    Error::Validation(ValidationError::InvalidInput(message.into()))
}
