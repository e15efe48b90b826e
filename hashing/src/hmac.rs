//! Keyed hashing (HMAC, RFC 2104)
//!
//! The construction is generic over a pluggable `bytes -> bytes` hash
//! capability with a fixed 64-byte block size, so any digest with that
//! block size can be slotted in without touching this module. The
//! workspace ships [`HmacSha256`] wired to the local SHA-256 engine.

use zeroize::Zeroizing;

use crate::error::{HashError, Result};
use crate::sha256::Sha256;

/// HMAC block size in bytes. Matches SHA-256's 512-bit block.
pub const BLOCK_SIZE: usize = 64;

/// Inner pad constant.
const IPAD: [u8; BLOCK_SIZE] = [0x36; BLOCK_SIZE];

/// Outer pad constant.
const OPAD: [u8; BLOCK_SIZE] = [0x5c; BLOCK_SIZE];

/// Generic keyed-hash construction over a hash capability.
///
/// `hash` is any function mapping bytes to a digest. The secret is hashed
/// down if it exceeds the block size, zero-padded to exactly one block,
/// and combined with the fixed inner/outer pads.
pub struct Hmac<H> {
    hash: H,
}

impl<H> Hmac<H>
where
    H: Fn(&[u8]) -> Vec<u8>,
{
    /// Create an HMAC instance over the given hash capability.
    pub const fn new(hash: H) -> Self {
        Self { hash }
    }

    /// Compute the MAC of `message` under `secret`.
    ///
    /// # Errors
    ///
    /// Returns [`HashError::MissingKey`] when the secret is empty; a MAC
    /// without a key is explicitly disallowed.
    pub fn sign(&self, message: &[u8], secret: &[u8]) -> Result<Vec<u8>> {
        if secret.is_empty() {
            return Err(HashError::MissingKey);
        }

        let mut key_block = Zeroizing::new([0u8; BLOCK_SIZE]);
        if secret.len() > BLOCK_SIZE {
            tracing::trace!(key_len = secret.len(), "hashing down oversized hmac key");
            let digest = (self.hash)(secret);
            let take = digest.len().min(BLOCK_SIZE);
            key_block[..take].copy_from_slice(&digest[..take]);
        } else {
            key_block[..secret.len()].copy_from_slice(secret);
        }

        let mut inner = Zeroizing::new(Vec::with_capacity(BLOCK_SIZE + message.len()));
        for (key_byte, pad_byte) in key_block.iter().zip(IPAD) {
            inner.push(key_byte ^ pad_byte);
        }
        inner.extend_from_slice(message);
        let inner_digest = (self.hash)(&inner);

        let mut outer = Zeroizing::new(Vec::with_capacity(BLOCK_SIZE + inner_digest.len()));
        for (key_byte, pad_byte) in key_block.iter().zip(OPAD) {
            outer.push(key_byte ^ pad_byte);
        }
        outer.extend_from_slice(&inner_digest);
        Ok((self.hash)(&outer))
    }

    /// Compute the MAC of a UTF-8 message under a UTF-8 secret, rendered
    /// as lowercase hex without separators.
    ///
    /// # Errors
    ///
    /// Returns [`HashError::MissingKey`] when the secret is empty.
    pub fn hex(&self, message: &str, secret: &str) -> Result<String> {
        Ok(hex::encode(
            self.sign(message.as_bytes(), secret.as_bytes())?,
        ))
    }
}

/// HMAC wired to the workspace SHA-256 engine.
pub type HmacSha256 = Hmac<fn(&[u8]) -> Vec<u8>>;

fn sha256_digest(data: &[u8]) -> Vec<u8> {
    Sha256::digest(data).to_vec()
}

/// Construct an HMAC-SHA256 instance.
#[must_use]
pub fn hmac_sha256() -> HmacSha256 {
    Hmac::new(sha256_digest)
}
