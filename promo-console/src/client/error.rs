//! Back-office API client errors
//!
//! Transport failures, envelope rejections, and the HTTP status classes
//! the back-office API answers with. All of these are recoverable at the
//! form boundary.

use thiserror::Error;

/// Error surfaced by the back-office API client
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport-level failure (connection, timeout, body read)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body did not match the expected envelope shape
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// The remote answered with an error envelope
    #[error("Remote rejected the request ({code}): {message}")]
    RemoteRejected { code: String, message: String },

    /// Authentication required
    #[error("Authentication required")]
    Unauthorized,

    /// Permission denied
    #[error("Permission denied: {0}")]
    Forbidden(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Request rejected by server-side validation
    #[error("Validation error: {0}")]
    Validation(String),

    /// Server-side failure
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
