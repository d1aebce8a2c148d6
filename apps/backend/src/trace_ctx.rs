//! Task-local trace context for web requests.
//!
//! `RequestTrace` establishes the scope; anything running inside the request
//! (middleware `call`s, handlers, error rendering) can read the id without
//! having the `HttpRequest` at hand.

use std::cell::RefCell;
use std::future::Future;

use tokio::task_local;

task_local! {
    static TRACE_ID: RefCell<Option<String>>;
}

const UNKNOWN: &str = "unknown";

/// Trace id of the current request, or `"unknown"` outside a request scope.
pub fn trace_id() -> String {
    TRACE_ID
        .try_with(|cell| cell.borrow().clone())
        .ok()
        .flatten()
        .unwrap_or_else(|| UNKNOWN.to_string())
}

/// Run a future within a trace context.
pub async fn with_trace_id<F, R>(trace_id: String, future: F) -> R
where
    F: Future<Output = R>,
{
    TRACE_ID.scope(RefCell::new(Some(trace_id)), future).await
}

/// Run a synchronous closure within a trace context.
///
/// actix middleware does part of its work eagerly in `Service::call`; this
/// covers that part the same way [`with_trace_id`] covers the future.
pub fn sync_with_trace_id<F, R>(trace_id: String, f: F) -> R
where
    F: FnOnce() -> R,
{
    TRACE_ID.sync_scope(RefCell::new(Some(trace_id)), f)
}
