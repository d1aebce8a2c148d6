//! Per-route role requirements.

use std::fmt;

/// Role that satisfies every requirement.
pub const ADMIN_ROLE: &str = "admin";

/// Role a route demands from the caller's token.
///
/// `Any` admits every authenticated caller. `Named` admits callers whose role
/// is exactly that string (case-sensitive) as well as [`ADMIN_ROLE`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RequiredRole {
    #[default]
    Any,
    Named(String),
}

impl RequiredRole {
    /// Build a requirement from a route parameter; `""` means any role.
    pub fn new(role: impl Into<String>) -> Self {
        let role = role.into();
        if role.is_empty() {
            Self::Any
        } else {
            Self::Named(role)
        }
    }

    pub fn permits(&self, role: &str) -> bool {
        match self {
            Self::Any => true,
            Self::Named(required) => role == required || role == ADMIN_ROLE,
        }
    }

    /// Route parameter form (`""` for `Any`).
    pub fn as_str(&self) -> &str {
        match self {
            Self::Any => "",
            Self::Named(required) => required,
        }
    }
}

impl From<&str> for RequiredRole {
    fn from(role: &str) -> Self {
        Self::new(role)
    }
}

impl From<String> for RequiredRole {
    fn from(role: String) -> Self {
        Self::new(role)
    }
}

impl fmt::Display for RequiredRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any => f.write_str("<any>"),
            Self::Named(required) => f.write_str(required),
        }
    }
}
