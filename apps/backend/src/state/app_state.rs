use super::security_config::SecurityConfig;

/// Application state shared with every worker through `web::Data`.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Token verification settings
    pub security: SecurityConfig,
}

impl AppState {
    pub fn new(security: SecurityConfig) -> Self {
        Self { security }
    }

    /// Create a test AppState with a random security config
    #[cfg(test)]
    pub fn for_tests() -> Self {
        Self::new(SecurityConfig::for_tests())
    }
}
