//! # Geheim - cryptographic primitives from first principles
//!
//! A small workspace implementing a Base64 codec, SHA-256, a generic HMAC
//! construction and compact HS256 tokens without delegating the actual
//! arithmetic to an existing crypto crate. Digests are bit-identical to
//! the published standards; the ecosystem implementations are used as
//! test oracles only.
//!
//! ## Example
//!
//! ```rust
//! use geheim::{Expiry, Geheim};
//!
//! fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let digest = Geheim::hash().sha256().compute_text("hello world");
//!     assert_eq!(digest.len(), 64);
//!
//!     let token = Geheim::jwt()
//!         .hs256()
//!         .with_secret("geheim")
//!         .with_claims(serde_json::json!({"sub": "1234567890"}))?
//!         .with_expiry(Expiry::parse("1h")?)
//!         .sign()?;
//!     let decoded = Geheim::jwt().hs256().with_secret("geheim").decode(&token)?;
//!     assert!(decoded.error.is_none());
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

#![forbid(unsafe_code)]

// Re-export the member crates' public APIs
pub use geheim_encoding::{Base64Codec, EncodingError};
pub use geheim_hashing::{
    hmac_sha256, BitBuffer, HashError, HashMasterBuilder, HashResult, Hmac, HmacSha256, Sha256,
    Sha256Builder,
};
pub use geheim_jwt::{
    create_token, decode_token, DecodedToken, Expiry, Hs256Builder, Jwt, JwtError, JwtHeader,
    JwtMasterBuilder, JwtResult, ValidationFlags,
};

/// Main entry point for builder-style use
pub struct Geheim;

impl Geheim {
    /// Master builder for hash and MAC operations
    #[must_use]
    pub fn hash() -> HashMasterBuilder {
        HashMasterBuilder
    }

    /// Master builder for token operations
    #[must_use]
    pub fn jwt() -> JwtMasterBuilder {
        JwtMasterBuilder
    }

    /// Base64 codec over the standard alphabet
    #[must_use]
    pub fn base64() -> Base64Codec {
        Base64Codec::standard()
    }

    /// Base64 codec over the URL-safe alphabet
    #[must_use]
    pub fn base64url() -> Base64Codec {
        Base64Codec::url_safe()
    }
}
