//! Token lifecycle tests: create, decode, expire, tamper

use chrono::{Duration, Utc};
use geheim_jwt::{create_token, decode_token, Expiry, Geheim, Jwt, JwtError};
use serde_json::json;

const SECRET: &str = "geheim";

#[test]
fn round_trip_is_valid_right_after_creation() {
    let token = create_token(
        &json!({"sub": "1234567890", "name": "Erika Musterfrau"}),
        SECRET,
        Some(Expiry::parse("1h").unwrap()),
    )
    .unwrap();

    assert_eq!(token.split('.').count(), 3);

    let decoded = decode_token(&token, Some(SECRET)).unwrap();
    assert!(decoded.error.is_none());
    assert_eq!(decoded.header["alg"], "HS256");
    assert_eq!(decoded.header["typ"], "JWT");
    assert_eq!(decoded.payload["sub"], "1234567890");
    assert_eq!(decoded.payload["name"], "Erika Musterfrau");

    let iat = decoded.payload["iat"].as_i64().unwrap();
    let exp = decoded.payload["exp"].as_i64().unwrap();
    assert!(iat <= exp);
    assert_eq!(exp - iat, 3600);
}

#[test]
fn builder_flow_matches_direct_calls() {
    let token = Jwt::hs256()
        .with_secret(SECRET)
        .with_claims(json!({"sub": "builder"}))
        .unwrap()
        .with_expiry(Expiry::parse("30s").unwrap())
        .sign()
        .unwrap();

    let decoded = Jwt::hs256().with_secret(SECRET).decode(&token).unwrap();
    assert!(decoded.error.is_none());
    assert_eq!(decoded.payload["sub"], "builder");

    let via_master = Geheim::jwt().hs256().decode_unverified(&token).unwrap();
    assert_eq!(via_master.payload["sub"], "builder");
}

#[test]
fn token_with_past_exp_decodes_as_expired() {
    let token = create_token(
        &json!({"sub": "stale"}),
        SECRET,
        Some(Expiry::At(Utc::now() - Duration::hours(2))),
    )
    .unwrap();

    let decoded = decode_token(&token, Some(SECRET)).unwrap();
    let flags = decoded.error.unwrap();
    assert!(flags.expired);
    assert!(!flags.invalid);
    // Payload still comes back alongside the verdict.
    assert_eq!(decoded.payload["sub"], "stale");
}

#[test]
fn future_iat_counts_as_expired() {
    let iat = Utc::now().timestamp() + 1000;
    let token = create_token(
        &json!({"sub": "early", "iat": iat}),
        SECRET,
        Some(Expiry::parse("1h").unwrap()),
    )
    .unwrap();

    let decoded = decode_token(&token, Some(SECRET)).unwrap();
    assert!(decoded.error.unwrap().expired);
}

#[test]
fn missing_time_claims_count_as_expired() {
    // Hand-assemble a signed token whose payload has neither iat nor exp.
    let codec = geheim_encoding::Base64Codec::url_safe();
    let header = codec.encode(r#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = codec.encode(r#"{"sub":"timeless"}"#);
    let signing_input = format!("{header}.{payload}");
    let signature = geheim_hashing::hmac_sha256()
        .sign(signing_input.as_bytes(), SECRET.as_bytes())
        .unwrap();
    let token = format!("{signing_input}.{}", codec.encode_bytes(&signature));

    let decoded = decode_token(&token, Some(SECRET)).unwrap();
    let flags = decoded.error.unwrap();
    assert!(flags.expired);
    assert!(!flags.invalid);
}

#[test]
fn tampered_signature_is_invalid() {
    let token = create_token(
        &json!({"sub": "victim"}),
        SECRET,
        Some(Expiry::parse("1h").unwrap()),
    )
    .unwrap();

    // Flip the last signature character.
    let mut tampered = token.clone();
    let last = tampered.pop().unwrap();
    tampered.push(if last == 'A' { 'B' } else { 'A' });

    let decoded = decode_token(&tampered, Some(SECRET)).unwrap();
    let flags = decoded.error.unwrap();
    assert!(flags.invalid);
    assert!(!flags.expired);
}

#[test]
fn wrong_secret_is_invalid() {
    let token = create_token(
        &json!({"sub": "victim"}),
        SECRET,
        Some(Expiry::parse("1h").unwrap()),
    )
    .unwrap();

    let decoded = decode_token(&token, Some("falsch")).unwrap();
    assert!(decoded.error.unwrap().invalid);
}

#[test]
fn signature_is_not_checked_without_a_secret() {
    let token = create_token(
        &json!({"sub": "unchecked"}),
        SECRET,
        Some(Expiry::parse("1h").unwrap()),
    )
    .unwrap();

    let mut tampered = token.clone();
    let last = tampered.pop().unwrap();
    tampered.push(if last == 'A' { 'B' } else { 'A' });

    // Without a secret only the time claims are evaluated, so the
    // tampered token comes back clean.
    let decoded = decode_token(&tampered, None).unwrap();
    assert!(decoded.error.is_none());
}

#[test]
fn payload_exp_wins_over_configured_expiry() {
    let exp = Utc::now().timestamp() + 100;
    let token = create_token(
        &json!({"sub": "own-exp", "exp": exp}),
        SECRET,
        Some(Expiry::parse("1d").unwrap()),
    )
    .unwrap();

    let decoded = decode_token(&token, Some(SECRET)).unwrap();
    assert!(decoded.error.is_none());
    assert_eq!(decoded.payload["exp"].as_i64().unwrap(), exp);
}

#[test]
fn creation_fails_without_resolvable_expiry() {
    let result = create_token(&json!({"sub": "no-exp"}), SECRET, None);
    assert!(matches!(result, Err(JwtError::MissingExpiry)));

    let via_builder = Jwt::hs256()
        .with_secret(SECRET)
        .with_claims(json!({"sub": "no-exp"}))
        .unwrap()
        .sign();
    assert!(matches!(via_builder, Err(JwtError::MissingExpiry)));
}

#[test]
fn creation_fails_on_unparsable_duration() {
    assert!(matches!(
        Expiry::parse("7q"),
        Err(JwtError::UnparsableExpiry(_))
    ));
}

#[test]
fn creation_fails_on_empty_secret() {
    let result = create_token(
        &json!({"sub": "keyless"}),
        "",
        Some(Expiry::parse("1h").unwrap()),
    );
    assert!(matches!(result, Err(JwtError::MissingKey)));
}

#[test]
fn creation_fails_on_non_object_payload() {
    let result = create_token(&json!([1, 2, 3]), SECRET, Some(Expiry::parse("1h").unwrap()));
    assert!(matches!(result, Err(JwtError::InvalidClaims(_))));
}

#[test]
fn malformed_tokens_are_rejected() {
    for token in ["", "a.b", "a.b.c.d", "..", "a..c", ".b.c", "a.b."] {
        assert!(
            matches!(decode_token(token, None), Err(JwtError::InvalidToken)),
            "{token:?} should be rejected"
        );
    }
}

#[test]
fn non_json_segments_are_a_hard_error() {
    let codec = geheim_encoding::Base64Codec::url_safe();
    let garbage = codec.encode("not json");
    let token = format!("{garbage}.{garbage}.{garbage}");
    assert!(matches!(
        decode_token(&token, None),
        Err(JwtError::Serialization(_))
    ));
}

#[test]
fn verifies_a_well_known_reference_token() {
    // The jwt.io introduction token, signed with "your-256-bit-secret".
    let token = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.\
                 eyJzdWIiOiIxMjM0NTY3ODkwIiwibmFtZSI6IkpvaG4gRG9lIiwiaWF0IjoxNTE2MjM5MDIyfQ.\
                 SflKxwRJSMeKKF2QT4fwpMeJf36POk6yJV_adQssw5c";

    let decoded = decode_token(token, Some("your-256-bit-secret")).unwrap();
    // Signature checks out, but the payload carries no exp.
    let flags = decoded.error.unwrap();
    assert!(!flags.invalid);
    assert!(flags.expired);
    assert_eq!(decoded.payload["name"], "John Doe");

    let wrong = decode_token(token, Some("some-other-secret")).unwrap();
    assert!(wrong.error.unwrap().invalid);
}
