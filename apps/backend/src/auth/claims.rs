//! Claims carried by access tokens presented to the auth gate.

use serde::{Deserialize, Serialize};

/// Typed view of an access token's payload.
///
/// Decoding into this struct is the only way claims are read, so a token
/// whose `user_id`, `username` or `role` is missing or of the wrong JSON
/// type never gets past verification.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct TokenClaims {
    pub user_id: i64,
    /// Display name
    pub username: String,
    pub role: String,
    /// Expiry (seconds since epoch)
    pub exp: i64,
    /// Issued-at (seconds since epoch)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
    /// Not-before (seconds since epoch)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nbf: Option<i64>,
}
