use actix_web::{web, HttpResponse};
use tracing::debug;

use crate::auth::context::AuthContext;
use crate::error::AppError;

/// Echo the identity the gate attached to this request.
async fn current_session(auth: AuthContext) -> Result<HttpResponse, AppError> {
    debug!(user_id = auth.user_id, role = %auth.role, "session lookup");
    Ok(HttpResponse::Ok().json(auth))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/session", web::get().to(current_session));
}
