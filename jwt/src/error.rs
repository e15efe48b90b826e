//! JWT error types

use std::fmt;

use geheim_encoding::EncodingError;
use geheim_hashing::HashError;

/// JWT operation result type
pub type JwtResult<T> = Result<T, JwtError>;

/// JWT error types
///
/// These cover structural failures only. A token that is merely expired or
/// carries a bad signature still decodes; that verdict travels on
/// [`crate::types::DecodedToken`] instead of through this enum.
#[derive(Debug, Clone)]
pub enum JwtError {
    /// Token does not split into exactly three non-empty segments
    InvalidToken,
    /// No secret available for signing
    MissingKey,
    /// Neither the payload nor the builder configuration yields an `exp`
    MissingExpiry,
    /// Expiration string has no known unit suffix
    UnparsableExpiry(String),
    /// Payload is not a JSON object
    InvalidClaims(String),
    /// Serialization failed
    Serialization(String),
    /// Cryptographic operation failed
    Crypto(String),
}

impl fmt::Display for JwtError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JwtError::InvalidToken => write!(f, "invalid token: expected three segments"),
            JwtError::MissingKey => write!(f, "no secret provided for signing"),
            JwtError::MissingExpiry => write!(f, "expiration time missing"),
            JwtError::UnparsableExpiry(raw) => write!(f, "expiration time not parseable: {raw}"),
            JwtError::InvalidClaims(msg) => write!(f, "invalid claims: {msg}"),
            JwtError::Serialization(msg) => write!(f, "serialization error: {msg}"),
            JwtError::Crypto(msg) => write!(f, "cryptographic operation failed: {msg}"),
        }
    }
}

impl std::error::Error for JwtError {}

impl JwtError {
    /// Create a serialization error
    #[inline]
    #[must_use]
    pub fn serialization(msg: &str) -> Self {
        JwtError::Serialization(msg.to_string())
    }

    /// Create an invalid claims error
    #[inline]
    #[must_use]
    pub fn invalid_claims(msg: &str) -> Self {
        JwtError::InvalidClaims(msg.to_string())
    }
}

impl From<HashError> for JwtError {
    fn from(err: HashError) -> Self {
        match err {
            HashError::MissingKey => JwtError::MissingKey,
            other => JwtError::Crypto(other.to_string()),
        }
    }
}

impl From<EncodingError> for JwtError {
    fn from(err: EncodingError) -> Self {
        JwtError::Serialization(err.to_string())
    }
}
