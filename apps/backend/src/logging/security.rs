use tracing::warn;

use crate::logging::pii::mask_username;
use crate::trace_ctx;

/// Log a request refused for missing or invalid credentials.
pub fn auth_rejected(reason: &str, path: &str) {
    let trace_id = trace_ctx::trace_id();

    warn!(
        event = "SECURITY_AUTH_REJECTED",
        %trace_id,
        reason,
        path,
        "Authentication failure"
    );
}

/// Log an authenticated caller whose role does not satisfy the route.
pub fn access_denied(username: &str, role: &str, required: &str, path: &str) {
    let trace_id = trace_ctx::trace_id();

    warn!(
        event = "SECURITY_ACCESS_DENIED",
        %trace_id,
        username = %mask_username(username),
        role,
        required,
        path,
        "Insufficient permissions"
    );
}
