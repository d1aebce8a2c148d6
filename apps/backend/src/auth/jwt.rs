use std::time::{Duration, SystemTime, UNIX_EPOCH};

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use thiserror::Error;

use super::claims::TokenClaims;
use crate::state::security_config::SecurityConfig;
use crate::AppError;

/// Lifetime of tokens minted by [`mint_access_token`].
pub const ACCESS_TOKEN_TTL: Duration = Duration::from_secs(15 * 60);

/// Why a presented token was refused. Logged, never sent to the client.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TokenRejection {
    #[error("token_expired")]
    Expired,
    #[error("token_not_yet_valid")]
    NotYetValid,
    #[error("invalid_signature")]
    BadSignature,
    #[error("wrong_algorithm")]
    WrongAlgorithm,
    #[error("invalid_claims")]
    InvalidClaims,
    #[error("malformed_token")]
    Malformed,
}

impl From<&ErrorKind> for TokenRejection {
    fn from(kind: &ErrorKind) -> Self {
        match kind {
            ErrorKind::ExpiredSignature => Self::Expired,
            ErrorKind::ImmatureSignature => Self::NotYetValid,
            ErrorKind::InvalidSignature => Self::BadSignature,
            ErrorKind::InvalidAlgorithm => Self::WrongAlgorithm,
            ErrorKind::Json(_)
            | ErrorKind::MissingRequiredClaim(_)
            | ErrorKind::InvalidAudience
            | ErrorKind::InvalidIssuer
            | ErrorKind::InvalidSubject => Self::InvalidClaims,
            _ => Self::Malformed,
        }
    }
}

/// Mint an HS256 access token valid for [`ACCESS_TOKEN_TTL`] from `now`.
pub fn mint_access_token(
    user_id: i64,
    username: &str,
    role: &str,
    now: SystemTime,
    security: &SecurityConfig,
) -> Result<String, AppError> {
    let iat = now
        .duration_since(UNIX_EPOCH)
        .map_err(|_| AppError::internal("Failed to get current time".to_string()))?
        .as_secs() as i64;

    let claims = TokenClaims {
        user_id,
        username: username.to_string(),
        role: role.to_string(),
        exp: iat + ACCESS_TOKEN_TTL.as_secs() as i64,
        iat: Some(iat),
        nbf: None,
    };

    encode(
        &Header::new(security.algorithm),
        &claims,
        &EncodingKey::from_secret(&security.jwt_secret),
    )
    .map_err(|e| AppError::internal(format!("Failed to encode JWT: {e}")))
}

/// Verify a token's signature and time window and return its typed claims.
///
/// Every failure maps to `AppError::InvalidToken`; the reason is kept on
/// the error for logging. An empty `role` claim counts as invalid claims.
pub fn verify_access_token(token: &str, security: &SecurityConfig) -> Result<TokenClaims, AppError> {
    // Pin the algorithm; exp is checked by default, nbf only when present.
    // Registered claims other than the time window (aud, iss, sub, jti) are
    // not part of the gate's contract and are ignored.
    let mut validation = Validation::new(security.algorithm);
    validation.validate_exp = true;
    validation.validate_nbf = true;
    validation.validate_aud = false;
    validation.leeway = security.leeway_secs;

    let claims = decode::<TokenClaims>(
        token,
        &DecodingKey::from_secret(&security.jwt_secret),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| AppError::invalid_token(TokenRejection::from(e.kind())))?;

    if claims.role.is_empty() {
        return Err(AppError::invalid_token(TokenRejection::InvalidClaims));
    }

    Ok(claims)
}
