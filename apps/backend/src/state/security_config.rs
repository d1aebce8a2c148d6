use std::fmt;

use jsonwebtoken::Algorithm;

/// Default clock skew tolerated on `exp`/`nbf`, in seconds.
pub const DEFAULT_LEEWAY_SECS: u64 = 60;

/// Token verification settings shared by every request.
///
/// Built once at startup and never mutated afterwards; the gate only ever
/// reads it through `AppState`.
#[derive(Clone)]
pub struct SecurityConfig {
    /// Shared HMAC secret known to the issuer and to this service
    pub jwt_secret: Vec<u8>,
    /// Signature algorithm tokens must be signed with (HS256)
    pub algorithm: Algorithm,
    /// Clock skew allowance for `exp` and `nbf`
    pub leeway_secs: u64,
}

impl SecurityConfig {
    /// Create a new SecurityConfig with the given JWT secret
    pub fn new(jwt_secret: impl Into<Vec<u8>>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            algorithm: Algorithm::HS256,
            leeway_secs: DEFAULT_LEEWAY_SECS,
        }
    }

    pub fn with_leeway(mut self, leeway_secs: u64) -> Self {
        self.leeway_secs = leeway_secs;
        self
    }

    /// Security config with a random per-process secret.
    #[cfg(test)]
    pub fn for_tests() -> Self {
        Self::new(format!("test-secret-{}", uuid::Uuid::new_v4()).into_bytes())
    }
}

// The secret never reaches logs or panic messages.
impl fmt::Debug for SecurityConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecurityConfig")
            .field("jwt_secret", &"[REDACTED]")
            .field("algorithm", &self.algorithm)
            .field("leeway_secs", &self.leeway_secs)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_secret() {
        let security = SecurityConfig::new(b"hunter2-signing-key".to_vec()).with_leeway(5);
        let rendered = format!("{security:?}");

        assert!(!rendered.contains("hunter2-signing-key"));
        assert!(rendered.contains("[REDACTED]"));
        assert!(rendered.contains("HS256"));
        assert!(rendered.contains("leeway_secs: 5"));
    }
}
