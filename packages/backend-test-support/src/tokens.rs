//! Raw HS256 token minting for tests.
//!
//! Unlike the backend's own minting, these helpers sign arbitrary JSON so
//! tests can produce tokens with missing, mistyped or time-shifted claims.

use std::time::{SystemTime, UNIX_EPOCH};

use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde_json::{json, Value};

/// Secret shared by integration tests and the state they build.
pub const TEST_SECRET: &str = "test_secret_key_for_testing_purposes_only";

pub fn now_secs() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock before epoch")
        .as_secs() as i64
}

/// Sign `claims` with HS256.
pub fn sign_claims(claims: &Value, secret: &[u8]) -> String {
    sign_claims_with(Algorithm::HS256, claims, secret)
}

pub fn sign_claims_with(algorithm: Algorithm, claims: &Value, secret: &[u8]) -> String {
    encode(
        &Header::new(algorithm),
        claims,
        &EncodingKey::from_secret(secret),
    )
    .expect("should sign test claims")
}

/// Claims as a trusted issuer would produce them, valid for 15 minutes.
pub fn issuer_claims(user_id: i64, username: &str, role: &str) -> Value {
    let now = now_secs();
    json!({
        "user_id": user_id,
        "username": username,
        "role": role,
        "iat": now,
        "nbf": now,
        "exp": now + 15 * 60,
    })
}

/// Claims that expired `ago_secs` seconds ago.
pub fn expired_claims(user_id: i64, username: &str, role: &str, ago_secs: i64) -> Value {
    let now = now_secs();
    json!({
        "user_id": user_id,
        "username": username,
        "role": role,
        "iat": now - ago_secs - 15 * 60,
        "exp": now - ago_secs,
    })
}

/// `Authorization` header value for `token`.
pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Issuer-signed bearer header for the given identity under [`TEST_SECRET`].
pub fn bearer_for(user_id: i64, username: &str, role: &str) -> String {
    bearer(&sign_claims(
        &issuer_claims(user_id, username, role),
        TEST_SECRET.as_bytes(),
    ))
}
