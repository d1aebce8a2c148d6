//! Error codes for the resume centre backend API.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! All codes are SCREAMING_SNAKE_CASE and map 1:1 to the `code` field of
//! error response bodies.

use core::fmt;

/// Centralized error codes for the backend API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Authentication & Authorization
    /// No credentials were presented
    Unauthenticated,
    /// Credentials were presented but failed validation
    InvalidToken,
    /// Valid credentials without the role the route requires
    Forbidden,

    // System Errors
    /// Internal server error
    Internal,
    /// Configuration error
    ConfigError,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Unauthenticated => "UNAUTHENTICATED",
            Self::InvalidToken => "INVALID_TOKEN",
            Self::Forbidden => "FORBIDDEN",
            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_strings() {
        assert_eq!(ErrorCode::Unauthenticated.as_str(), "UNAUTHENTICATED");
        assert_eq!(ErrorCode::InvalidToken.as_str(), "INVALID_TOKEN");
        assert_eq!(ErrorCode::Forbidden.as_str(), "FORBIDDEN");
        assert_eq!(ErrorCode::Internal.as_str(), "INTERNAL");
        assert_eq!(ErrorCode::ConfigError.as_str(), "CONFIG_ERROR");
    }

    #[test]
    fn test_display_trait() {
        assert_eq!(format!("{}", ErrorCode::InvalidToken), "INVALID_TOKEN");
        assert_eq!(format!("{}", ErrorCode::Forbidden), "FORBIDDEN");
    }
}
