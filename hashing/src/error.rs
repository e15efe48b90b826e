//! Error handling for the hashing module

use thiserror::Error;

/// Hashing-specific errors
#[derive(Debug, Error)]
pub enum HashError {
    /// Keyed hashing was requested without a secret
    #[error("no secret provided for keyed hashing")]
    MissingKey,

    /// Internal error
    #[error("internal error: {0}")]
    Internal(String),
}

impl HashError {
    /// Create an internal error
    #[must_use]
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

/// Result type for hashing operations
pub type Result<T> = std::result::Result<T, HashError>;
