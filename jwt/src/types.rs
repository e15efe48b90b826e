//! JWT type definitions

use serde::{Deserialize, Serialize};

/// JWT header structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JwtHeader {
    /// Signing algorithm identifier
    pub alg: String,
    /// Token type, always `"JWT"`
    pub typ: String,
}

impl JwtHeader {
    /// The fixed header for HMAC-SHA256 tokens
    #[must_use]
    pub fn hs256() -> Self {
        Self {
            alg: "HS256".to_string(),
            typ: "JWT".to_string(),
        }
    }
}

/// Verdict flags attached to a decoded token.
///
/// The flags are not mutually exclusive; a tampered, stale token carries
/// both.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationFlags {
    /// `iat`/`exp` are missing, lie in the future, or lie in the past
    pub expired: bool,
    /// Recomputed signature does not match the token's third segment
    pub invalid: bool,
}

impl ValidationFlags {
    /// Whether any check failed
    #[must_use]
    pub const fn any(&self) -> bool {
        self.expired || self.invalid
    }
}

/// Outcome of decoding a token.
///
/// Header and payload are always populated on a structurally sound token;
/// `error` is `None` exactly when the token is neither expired nor carries
/// a mismatched signature. Signature verification only runs when a secret
/// was supplied to the decode call.
#[derive(Debug, Clone)]
pub struct DecodedToken {
    /// Decoded header JSON
    pub header: serde_json::Value,
    /// Decoded payload JSON
    pub payload: serde_json::Value,
    /// Validation verdict; `None` when every performed check passed
    pub error: Option<ValidationFlags>,
}
