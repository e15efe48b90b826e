//! Compact token creation and decoding
//!
//! Tokens use the three-segment dot-delimited serialization: base64url
//! header JSON, base64url payload JSON, base64url HMAC-SHA256 signature
//! over the literal `header.payload` string. The algorithm is fixed to
//! HS256.

use chrono::Utc;
use serde::Serialize;
use serde_json::Value;

use geheim_encoding::Base64Codec;
use geheim_hashing::hmac_sha256;

use crate::error::{JwtError, JwtResult};
use crate::expiry::Expiry;
use crate::types::{DecodedToken, JwtHeader, ValidationFlags};

/// Create a signed HS256 token.
///
/// `payload` must serialize to a JSON object. Its own `iat`/`exp` claims
/// win over the computed ones: `iat` defaults to the current time in
/// seconds and `exp` is resolved from `expiry` when the payload does not
/// carry one.
///
/// # Errors
///
/// - [`JwtError::InvalidClaims`] when the payload is not a JSON object
/// - [`JwtError::MissingExpiry`] when neither the payload nor `expiry`
///   yields an `exp`
/// - [`JwtError::MissingKey`] when the secret is empty
pub fn create_token<T: Serialize>(
    payload: &T,
    secret: &str,
    expiry: Option<Expiry>,
) -> JwtResult<String> {
    let value = serde_json::to_value(payload)
        .map_err(|e| JwtError::serialization(&format!("failed to serialize claims: {e}")))?;
    let Value::Object(mut claims) = value else {
        return Err(JwtError::invalid_claims("payload must be a JSON object"));
    };

    let iat = claims
        .get("iat")
        .and_then(Value::as_i64)
        .unwrap_or_else(|| Utc::now().timestamp());
    let exp = match claims.get("exp").and_then(Value::as_i64) {
        Some(own) => own,
        None => expiry.ok_or(JwtError::MissingExpiry)?.resolve(iat),
    };
    claims.insert("iat".to_string(), Value::from(iat));
    claims.insert("exp".to_string(), Value::from(exp));

    let codec = Base64Codec::url_safe();
    let header_json = serde_json::to_string(&JwtHeader::hs256())
        .map_err(|e| JwtError::serialization(&e.to_string()))?;
    let payload_json = serde_json::to_string(&Value::Object(claims))
        .map_err(|e| JwtError::serialization(&e.to_string()))?;

    let encoded_header = codec.encode(&header_json);
    let encoded_payload = codec.encode(&payload_json);
    let signing_input = format!("{encoded_header}.{encoded_payload}");
    let signature = hmac_sha256().sign(signing_input.as_bytes(), secret.as_bytes())?;
    let encoded_signature = codec.encode_bytes(&signature);

    tracing::debug!(iat, exp, "issued hs256 token");
    Ok(format!("{signing_input}.{encoded_signature}"))
}

/// Decode a compact token, optionally verifying its signature.
///
/// Header and payload come back even when the token is expired or
/// tampered with; those verdicts ride on [`DecodedToken::error`] rather
/// than failing the call. The signature check only runs when `secret` is
/// supplied; expiry is evaluated either way. The header's `alg` field is
/// not inspected.
///
/// # Errors
///
/// - [`JwtError::InvalidToken`] when the token does not split into
///   exactly three non-empty segments
/// - [`JwtError::Serialization`] when a segment does not decode to JSON
pub fn decode_token(token: &str, secret: Option<&str>) -> JwtResult<DecodedToken> {
    let parts: Vec<&str> = token.split('.').collect();
    let [encoded_header, encoded_payload, encoded_signature] = parts[..] else {
        return Err(JwtError::InvalidToken);
    };
    if encoded_header.is_empty() || encoded_payload.is_empty() || encoded_signature.is_empty() {
        return Err(JwtError::InvalidToken);
    }

    let codec = Base64Codec::url_safe();
    let header: Value = serde_json::from_str(&codec.decode(encoded_header)?)
        .map_err(|e| JwtError::serialization(&format!("header is not JSON: {e}")))?;
    let payload: Value = serde_json::from_str(&codec.decode(encoded_payload)?)
        .map_err(|e| JwtError::serialization(&format!("payload is not JSON: {e}")))?;

    let now = Utc::now().timestamp();
    let iat = payload.get("iat").and_then(Value::as_i64);
    let exp = payload.get("exp").and_then(Value::as_i64);
    let expired = match (iat, exp) {
        (Some(iat), Some(exp)) => iat > now || exp < now,
        _ => true,
    };

    let invalid = match secret {
        Some(secret) => {
            let signing_input = format!("{encoded_header}.{encoded_payload}");
            let recomputed = hmac_sha256().sign(signing_input.as_bytes(), secret.as_bytes())?;
            codec.encode_bytes(&recomputed) != encoded_signature
        }
        None => false,
    };

    let flags = ValidationFlags { expired, invalid };
    if flags.any() {
        tracing::debug!(expired, invalid, "token failed validation");
    }
    Ok(DecodedToken {
        header,
        payload,
        error: flags.any().then_some(flags),
    })
}
