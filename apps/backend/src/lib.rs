#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod auth;
pub mod config;
pub mod error;
pub mod errors;
pub mod extractors;
pub mod logging;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod trace_ctx;

// Re-exports for public API
pub use auth::context::AuthContext;
pub use auth::jwt::{mint_access_token, verify_access_token, TokenRejection};
pub use auth::role::{RequiredRole, ADMIN_ROLE};
pub use config::app::Config;
pub use error::AppError;
pub use middleware::auth_gate::AuthGate;
pub use middleware::request_trace::RequestTrace;
pub use middleware::structured_logger::StructuredLogger;
pub use middleware::trace_span::TraceSpan;
pub use state::app_state::AppState;
pub use state::security_config::SecurityConfig;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    backend_test_support::logging::init();
}
