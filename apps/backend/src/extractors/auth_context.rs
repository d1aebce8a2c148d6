use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpMessage, HttpRequest};

use crate::auth::context::AuthContext;
use crate::error::AppError;

/// Reads the [`AuthContext`] stored by `AuthGate`.
///
/// On a route the gate does not cover there is no context, which is answered
/// like a request without credentials.
impl FromRequest for AuthContext {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(
            req.extensions()
                .get::<AuthContext>()
                .cloned()
                .ok_or_else(AppError::unauthenticated),
        )
    }
}
