//! Builder entry points for token operations
//!
//! The flow is: pick the algorithm, attach the secret, attach claims and
//! expiry, then call the action. Decoding without a secret is available
//! directly on the algorithm builder since no key material is involved.

use serde::Serialize;

use crate::error::{JwtError, JwtResult};
use crate::expiry::Expiry;
use crate::token::{create_token, decode_token};
use crate::types::DecodedToken;

/// Direct builder entry point
pub struct Jwt;

impl Jwt {
    /// Build or decode HS256 tokens
    #[must_use]
    pub fn hs256() -> Hs256Builder {
        Hs256Builder
    }
}

/// HS256 builder - initial state
pub struct Hs256Builder;

impl Hs256Builder {
    /// Set the signing/verification secret
    #[must_use]
    pub fn with_secret(self, secret: impl Into<String>) -> Hs256WithSecret {
        Hs256WithSecret {
            secret: secret.into(),
        }
    }

    /// Decode a token without verifying its signature; only the time
    /// claims are checked
    ///
    /// # Errors
    ///
    /// Returns [`JwtError::InvalidToken`] on a malformed token and
    /// [`JwtError::Serialization`] when a segment is not JSON.
    pub fn decode_unverified(self, token: &str) -> JwtResult<DecodedToken> {
        decode_token(token, None)
    }
}

/// HS256 builder with secret configured
pub struct Hs256WithSecret {
    secret: String,
}

impl Hs256WithSecret {
    /// Set the claims payload; must serialize to a JSON object
    ///
    /// # Errors
    ///
    /// Returns [`JwtError::Serialization`] when the claims cannot be
    /// serialized.
    pub fn with_claims<T: Serialize>(self, claims: T) -> JwtResult<Hs256WithClaims> {
        let claims = serde_json::to_value(claims)
            .map_err(|e| JwtError::serialization(&format!("failed to serialize claims: {e}")))?;
        Ok(Hs256WithClaims {
            secret: self.secret,
            claims,
            expiry: None,
        })
    }

    /// Decode a token and verify its signature against the secret
    ///
    /// # Errors
    ///
    /// Returns [`JwtError::InvalidToken`] on a malformed token and
    /// [`JwtError::Serialization`] when a segment is not JSON.
    pub fn decode(self, token: &str) -> JwtResult<DecodedToken> {
        decode_token(token, Some(&self.secret))
    }
}

/// HS256 builder with claims configured
pub struct Hs256WithClaims {
    secret: String,
    claims: serde_json::Value,
    expiry: Option<Expiry>,
}

impl Hs256WithClaims {
    /// Set the expiration; ignored when the claims already carry `exp`
    #[must_use]
    pub fn with_expiry(mut self, expiry: Expiry) -> Self {
        self.expiry = Some(expiry);
        self
    }

    /// Sign and serialize the token
    ///
    /// # Errors
    ///
    /// Returns [`JwtError::MissingExpiry`] when no `exp` can be resolved
    /// and [`JwtError::MissingKey`] when the secret is empty.
    pub fn sign(self) -> JwtResult<String> {
        create_token(&self.claims, &self.secret, self.expiry)
    }
}

/// Master builder for token operations
pub struct JwtMasterBuilder;

impl JwtMasterBuilder {
    /// Use HMAC-SHA256 signing
    #[must_use]
    pub fn hs256(self) -> Hs256Builder {
        Hs256Builder
    }
}
