//! Error handling for the encoding module

use thiserror::Error;

/// Encoding-specific errors
#[derive(Debug, Error)]
pub enum EncodingError {
    /// Decoded bytes do not form a valid UTF-8 string
    #[error("decoded bytes are not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
}

/// Result type for encoding operations
pub type Result<T> = std::result::Result<T, EncodingError>;
