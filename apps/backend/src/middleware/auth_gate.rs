//! Bearer-token gate with a per-scope role requirement.
//!
//! Wrap a scope with `AuthGate::any()` to admit every caller holding a valid
//! token, or `AuthGate::require("role")` to additionally demand that role
//! (callers with role `admin` always pass). Admitted requests carry an
//! [`AuthContext`] in their extensions; refused requests are answered here
//! and never reach the wrapped service.

use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header::{self, HeaderValue};
use actix_web::{web, Error, HttpMessage};
use futures_util::future::{ready, LocalBoxFuture, Ready};

use crate::auth::context::AuthContext;
use crate::auth::jwt::verify_access_token;
use crate::auth::role::RequiredRole;
use crate::error::AppError;
use crate::logging::security;
use crate::state::app_state::AppState;
use crate::state::security_config::SecurityConfig;

const BEARER_PREFIX: &str = "Bearer ";

#[derive(Debug, Clone)]
pub struct AuthGate {
    required: RequiredRole,
}

impl AuthGate {
    pub fn new(required: impl Into<RequiredRole>) -> Self {
        Self {
            required: required.into(),
        }
    }

    /// Any authenticated caller.
    pub fn any() -> Self {
        Self::new(RequiredRole::Any)
    }

    pub fn require(role: &str) -> Self {
        Self::new(role)
    }
}

impl<S, B> Transform<S, ServiceRequest> for AuthGate
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = AuthGateMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthGateMiddleware {
            service,
            required: self.required.clone(),
        }))
    }
}

pub struct AuthGateMiddleware<S> {
    service: S,
    required: RequiredRole,
}

impl<S, B> Service<ServiceRequest> for AuthGateMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let verdict = match req.app_data::<web::Data<AppState>>() {
            Some(state) => admit(
                req.headers().get(header::AUTHORIZATION),
                &self.required,
                &state.security,
            ),
            None => Err(AppError::internal("AppState not available".to_string())),
        };

        match verdict {
            Ok(context) => {
                req.extensions_mut().insert(context);
                let fut = self.service.call(req);
                Box::pin(async move { fut.await.map(ServiceResponse::map_into_left_body) })
            }
            Err(err) => {
                log_refusal(&err, req.path());
                let res = req.error_response(err).map_into_right_body();
                Box::pin(async move { Ok(res) })
            }
        }
    }
}

/// Decide whether a request carrying `authorization` may pass `required`.
///
/// Pure function of its inputs: no state is read or written besides the
/// immutable security settings.
pub fn admit(
    authorization: Option<&HeaderValue>,
    required: &RequiredRole,
    security: &SecurityConfig,
) -> Result<AuthContext, AppError> {
    let token = extract_bearer(authorization)?;
    let claims = verify_access_token(token, security)?;

    if !required.permits(&claims.role) {
        return Err(AppError::forbidden(
            claims.username,
            claims.role,
            required.clone(),
        ));
    }

    Ok(AuthContext::from(claims))
}

/// Token part of an `Authorization` value; the `Bearer ` prefix is optional.
///
/// Absent, non-ASCII and empty values (including a bare `"Bearer "`) are
/// all treated as missing credentials.
fn extract_bearer(header_value: Option<&HeaderValue>) -> Result<&str, AppError> {
    let raw = header_value
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();

    let token = raw.strip_prefix(BEARER_PREFIX).unwrap_or(raw).trim();
    if token.is_empty() {
        return Err(AppError::unauthenticated());
    }

    Ok(token)
}

fn log_refusal(err: &AppError, path: &str) {
    match err {
        AppError::Forbidden {
            username,
            role,
            required,
        } => security::access_denied(username, role, required.as_str(), path),
        AppError::InvalidToken { reason } => security::auth_rejected(&reason.to_string(), path),
        AppError::Unauthenticated => security::auth_rejected("missing_credentials", path),
        other => tracing::error!(error = %other, path, "auth gate misconfigured"),
    }
}

#[cfg(test)]
mod tests {
    use std::time::SystemTime;

    use actix_web::http::header::HeaderValue;

    use super::{admit, extract_bearer};
    use crate::auth::jwt::{mint_access_token, TokenRejection};
    use crate::auth::role::RequiredRole;
    use crate::error::AppError;
    use crate::state::security_config::SecurityConfig;

    fn header(value: &str) -> HeaderValue {
        HeaderValue::from_str(value).unwrap()
    }

    #[test]
    fn bearer_prefix_is_optional() {
        let with_prefix = header("Bearer abc.def.ghi");
        let without_prefix = header("abc.def.ghi");
        assert_eq!(extract_bearer(Some(&with_prefix)).unwrap(), "abc.def.ghi");
        assert_eq!(extract_bearer(Some(&without_prefix)).unwrap(), "abc.def.ghi");
    }

    #[test]
    fn empty_values_are_missing_credentials() {
        for value in ["", "Bearer ", "Bearer    "] {
            let value = header(value);
            assert!(matches!(
                extract_bearer(Some(&value)),
                Err(AppError::Unauthenticated)
            ));
        }
        assert!(matches!(extract_bearer(None), Err(AppError::Unauthenticated)));

        let opaque = HeaderValue::from_bytes(b"Bearer \xff\xfe").unwrap();
        assert!(matches!(
            extract_bearer(Some(&opaque)),
            Err(AppError::Unauthenticated)
        ));
    }

    #[test]
    fn admit_checks_role_after_signature() {
        let security = SecurityConfig::for_tests();
        let token = mint_access_token(5, "ann", "user", SystemTime::now(), &security).unwrap();
        let value = header(&format!("Bearer {token}"));

        let ctx = admit(Some(&value), &RequiredRole::new("user"), &security).unwrap();
        assert_eq!((ctx.user_id, ctx.username.as_str(), ctx.role.as_str()), (5, "ann", "user"));

        match admit(Some(&value), &RequiredRole::new("admin"), &security) {
            Err(AppError::Forbidden { role, required, .. }) => {
                assert_eq!(role, "user");
                assert_eq!(required, RequiredRole::new("admin"));
            }
            other => panic!("expected forbidden, got {other:?}"),
        }

        // A foreign signature is rejected before the role is ever looked at
        let other = SecurityConfig::for_tests();
        assert!(matches!(
            admit(Some(&value), &RequiredRole::Any, &other),
            Err(AppError::InvalidToken {
                reason: TokenRejection::BadSignature
            })
        ));
    }
}
