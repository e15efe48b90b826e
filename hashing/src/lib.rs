//! SHA-256 and HMAC from first principles
//!
//! This crate carries the bit/word-level arithmetic engine of the
//! workspace: an append-only [`BitBuffer`] with the standards-mandated
//! message padding, big-endian word grouping, the SHA-256 compression
//! function, and a generic HMAC construction over a pluggable hash
//! capability. Digests are bit-identical to the published test vectors.

#![forbid(unsafe_code)]

pub mod api;
pub mod bits;
pub mod error;
pub mod hash_result;
pub mod hmac;
pub mod sha256;
pub mod words;

// Re-export error types
pub use error::{HashError, Result};

// Re-export the core engine and the builder APIs
pub use api::{HashMasterBuilder, Sha256Builder, Sha256BuilderWithKey};
pub use bits::BitBuffer;
pub use hash_result::HashResult;
pub use hmac::{hmac_sha256, Hmac, HmacSha256, BLOCK_SIZE};
pub use sha256::Sha256;
pub use words::group_be_words;

/// Main entry point for builder-style use
pub struct Geheim;

impl Geheim {
    /// Master builder for hash operations
    #[must_use]
    pub fn hash() -> HashMasterBuilder {
        HashMasterBuilder
    }
}
