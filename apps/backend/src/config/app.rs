//! Application configuration loaded from environment variables.

use std::env;
use std::fmt;

use crate::error::AppError;
use crate::state::security_config::{SecurityConfig, DEFAULT_LEEWAY_SECS};

pub const HOST_VAR: &str = "BACKEND_HOST";
pub const PORT_VAR: &str = "BACKEND_PORT";
pub const JWT_SECRET_VAR: &str = "BACKEND_JWT_SECRET";
pub const JWT_LEEWAY_VAR: &str = "BACKEND_JWT_LEEWAY_SECS";

#[derive(Clone)]
pub struct Config {
    // Server configuration
    pub host: String,
    pub port: u16,

    // Security configuration
    pub jwt_secret: String,
    pub jwt_leeway_secs: u64,
}

impl Config {
    /// Load and validate configuration from the process environment
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup(HOST_VAR).unwrap_or_else(|| "0.0.0.0".to_string());

        let port = match lookup(PORT_VAR) {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| {
                AppError::config(format!("{PORT_VAR} must be a valid port number, got '{raw}'"))
            })?,
            None => 3001,
        };

        let jwt_secret = lookup(JWT_SECRET_VAR)
            .filter(|secret| !secret.trim().is_empty())
            .ok_or_else(|| AppError::config(format!("{JWT_SECRET_VAR} must be set")))?;

        let jwt_leeway_secs = match lookup(JWT_LEEWAY_VAR) {
            Some(raw) => raw.trim().parse::<u64>().map_err(|_| {
                AppError::config(format!(
                    "{JWT_LEEWAY_VAR} must be a non-negative number of seconds, got '{raw}'"
                ))
            })?,
            None => DEFAULT_LEEWAY_SECS,
        };

        Ok(Self {
            host,
            port,
            jwt_secret,
            jwt_leeway_secs,
        })
    }

    /// Immutable verification settings handed to `AppState`.
    pub fn security(&self) -> SecurityConfig {
        SecurityConfig::new(self.jwt_secret.as_bytes()).with_leeway(self.jwt_leeway_secs)
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("jwt_secret", &"[REDACTED]")
            .field("jwt_leeway_secs", &self.jwt_leeway_secs)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<Config, AppError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_only_secret_is_set() {
        let config = load(&[(JWT_SECRET_VAR, "s3cret")]).unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3001);
        assert_eq!(config.jwt_leeway_secs, DEFAULT_LEEWAY_SECS);

        let security = config.security();
        assert_eq!(security.jwt_secret, b"s3cret".to_vec());
        assert_eq!(security.algorithm, jsonwebtoken::Algorithm::HS256);
    }

    #[test]
    fn missing_or_blank_secret_is_rejected() {
        assert!(matches!(load(&[]), Err(AppError::Config { .. })));
        assert!(matches!(
            load(&[(JWT_SECRET_VAR, "   ")]),
            Err(AppError::Config { .. })
        ));
    }

    #[test]
    fn debug_output_redacts_secret() {
        let config = load(&[(JWT_SECRET_VAR, "hunter2-signing-key"), (PORT_VAR, "8080")]).unwrap();
        let rendered = format!("{config:?}");

        assert!(!rendered.contains("hunter2-signing-key"));
        assert!(rendered.contains("[REDACTED]"));
        assert!(rendered.contains("port: 8080"));
    }

    #[test]
    fn invalid_numbers_are_rejected() {
        let err = load(&[(JWT_SECRET_VAR, "s"), (PORT_VAR, "http")]).unwrap_err();
        assert!(err.to_string().contains(PORT_VAR));

        let err = load(&[(JWT_SECRET_VAR, "s"), (JWT_LEEWAY_VAR, "-5")]).unwrap_err();
        assert!(err.to_string().contains(JWT_LEEWAY_VAR));
    }

    #[test]
    fn overrides_are_honoured() {
        let config = load(&[
            (JWT_SECRET_VAR, "s"),
            (HOST_VAR, "127.0.0.1"),
            (PORT_VAR, "8080"),
            (JWT_LEEWAY_VAR, "0"),
        ])
        .unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.security().leeway_secs, 0);
    }

    #[test]
    #[serial_test::serial]
    fn from_env_reads_process_environment() {
        let original = env::var(JWT_SECRET_VAR).ok();
        env::set_var(JWT_SECRET_VAR, "from-env");

        let config = Config::from_env().unwrap();
        assert_eq!(config.jwt_secret, "from-env");

        match original {
            Some(secret) => env::set_var(JWT_SECRET_VAR, secret),
            None => env::remove_var(JWT_SECRET_VAR),
        }
    }
}
