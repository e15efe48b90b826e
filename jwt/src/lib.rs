//! JSON Web Tokens, HS256 only
//!
//! Compact three-segment tokens composed from the workspace's own
//! primitives: the Base64url codec for framing and HMAC-SHA256 for the
//! signature. Creation fails hard on structural problems (no resolvable
//! expiry, unparsable duration, missing secret); decoding always returns
//! header and payload and reports expiry/signature verdicts as data.

#![forbid(unsafe_code)]

pub mod api;
pub mod error;
pub mod expiry;
pub mod token;
pub mod types;

// Re-export error types
pub use error::{JwtError, JwtResult};

// Re-export the core operations and the builder API
pub use api::{Hs256Builder, Hs256WithClaims, Hs256WithSecret, Jwt, JwtMasterBuilder};
pub use expiry::Expiry;
pub use token::{create_token, decode_token};
pub use types::{DecodedToken, JwtHeader, ValidationFlags};

/// Main entry point for builder-style use
pub struct Geheim;

impl Geheim {
    /// Master builder for token operations
    #[must_use]
    pub fn jwt() -> JwtMasterBuilder {
        JwtMasterBuilder
    }
}
