use serde::{Deserialize, Serialize};

use super::claims::TokenClaims;

/// Authenticated identity attached to a request by the auth gate.
///
/// Present in request extensions only when the gate admitted the request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthContext {
    pub user_id: i64,
    pub username: String,
    pub role: String,
}

impl From<TokenClaims> for AuthContext {
    fn from(claims: TokenClaims) -> Self {
        Self {
            user_id: claims.user_id,
            username: claims.username,
            role: claims.role,
        }
    }
}
