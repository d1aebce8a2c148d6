#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};

use actix_web::{web, HttpResponse};
use backend_test_support::tokens::TEST_SECRET;
use resume_backend::{AppState, AuthContext, SecurityConfig};

// Logging is auto-installed for every test binary that declares `mod common`
#[ctor::ctor]
fn init_logging() {
    backend_test_support::logging::init();
}

/// State whose secret matches the one `backend_test_support::tokens` signs with.
pub fn test_state() -> web::Data<AppState> {
    web::Data::new(AppState::new(SecurityConfig::new(TEST_SECRET.as_bytes())))
}

/// Counts how often a protected handler actually ran.
#[derive(Default)]
pub struct HandlerHits(AtomicUsize);

impl HandlerHits {
    pub fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

/// Protected handler: records the hit and echoes the request context.
pub async fn echo_context(auth: AuthContext, hits: web::Data<HandlerHits>) -> HttpResponse {
    hits.0.fetch_add(1, Ordering::SeqCst);
    HttpResponse::Ok().json(auth)
}
