use actix_web::web;

use crate::auth::role::ADMIN_ROLE;
use crate::middleware::auth_gate::AuthGate;

pub mod health;
pub mod session;

/// Register every route together with its role requirement.
///
/// `/api/admin/**` is registered before `/api/**` so the narrower scope wins.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Public: /health
    cfg.configure(health::configure_routes);

    // Admin only: /api/admin/**
    cfg.service(
        web::scope("/api/admin")
            .wrap(AuthGate::require(ADMIN_ROLE))
            .configure(session::configure_routes),
    );

    // Any authenticated caller: /api/**
    cfg.service(
        web::scope("/api")
            .wrap(AuthGate::any())
            .configure(session::configure_routes),
    );
}
