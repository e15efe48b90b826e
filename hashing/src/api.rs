//! Builder entry points for hashing operations
//!
//! The builders mirror the usual flow: pick an algorithm, configure it,
//! then call the action with the data as argument. Everything here is a
//! thin synchronous layer over [`Sha256`] and [`Hmac`].

use crate::error::Result;
use crate::hash_result::HashResult;
use crate::hmac::hmac_sha256;
use crate::sha256::Sha256;

/// SHA-256 hash builder
#[derive(Clone, Copy, Default)]
pub struct Sha256Builder {
    separated_blocks: bool,
}

impl Sha256Builder {
    /// Create new SHA-256 builder
    #[must_use]
    pub fn new() -> Self {
        Self {
            separated_blocks: false,
        }
    }

    /// Render hex output as eight space-separated 8-character blocks
    #[must_use]
    pub fn separated_blocks(mut self, on: bool) -> Self {
        self.separated_blocks = on;
        self
    }

    /// Add an HMAC key, turning the digest into a MAC
    pub fn with_key<K: Into<Vec<u8>>>(self, key: K) -> Sha256BuilderWithKey {
        Sha256BuilderWithKey { key: key.into() }
    }

    /// Hash raw bytes
    #[must_use]
    pub fn compute<D: AsRef<[u8]>>(self, data: D) -> HashResult {
        HashResult::from(Sha256::digest(data.as_ref()))
    }

    /// Hash a UTF-8 string to hex text, honoring the block separator
    /// option
    #[must_use]
    pub fn compute_text(self, text: &str) -> String {
        if self.separated_blocks {
            Sha256::hex_blocks(text)
        } else {
            Sha256::hex(text)
        }
    }
}

/// SHA-256 hash builder with HMAC key
pub struct Sha256BuilderWithKey {
    key: Vec<u8>,
}

impl Sha256BuilderWithKey {
    /// Compute HMAC-SHA256 over the data
    ///
    /// # Errors
    ///
    /// Returns [`crate::HashError::MissingKey`] when the configured key is
    /// empty.
    pub fn compute<D: AsRef<[u8]>>(self, data: D) -> Result<HashResult> {
        Ok(HashResult::new(
            hmac_sha256().sign(data.as_ref(), &self.key)?,
        ))
    }
}

/// Master builder for hash operations
pub struct HashMasterBuilder;

impl HashMasterBuilder {
    /// Use SHA-256 hashing
    #[must_use]
    pub fn sha256(self) -> Sha256Builder {
        Sha256Builder::new()
    }
}
