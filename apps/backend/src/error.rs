use actix_web::error::ResponseError;
use actix_web::http::{header, StatusCode};
use actix_web::HttpResponse;
use serde::Serialize;
use thiserror::Error;

use crate::auth::jwt::TokenRejection;
use crate::auth::role::RequiredRole;
use crate::errors::ErrorCode;
use crate::trace_ctx;

/// JSON body of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Short client-facing message
    pub error: String,
    pub code: String,
    pub trace_id: String,
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Unauthenticated")]
    Unauthenticated,
    #[error("Invalid token: {reason}")]
    InvalidToken { reason: TokenRejection },
    #[error("Forbidden: role `{role}` does not satisfy `{required}`")]
    Forbidden {
        username: String,
        role: String,
        required: RequiredRole,
    },
    #[error("Internal error: {detail}")]
    Internal { detail: String },
    #[error("Configuration error: {detail}")]
    Config { detail: String },
}

impl AppError {
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Unauthenticated => ErrorCode::Unauthenticated,
            AppError::InvalidToken { .. } => ErrorCode::InvalidToken,
            AppError::Forbidden { .. } => ErrorCode::Forbidden,
            AppError::Internal { .. } => ErrorCode::Internal,
            AppError::Config { .. } => ErrorCode::ConfigError,
        }
    }

    /// Message sent to the client. Internal details never leave the process.
    pub fn public_message(&self) -> &'static str {
        match self {
            AppError::Unauthenticated => "Authorization required",
            AppError::InvalidToken { .. } => "Invalid token",
            AppError::Forbidden { .. } => "Insufficient permissions",
            AppError::Internal { .. } | AppError::Config { .. } => "Internal server error",
        }
    }

    /// Get the HTTP status code for this error
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Unauthenticated => StatusCode::UNAUTHORIZED,
            AppError::InvalidToken { .. } => StatusCode::UNAUTHORIZED,
            AppError::Forbidden { .. } => StatusCode::FORBIDDEN,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Config { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn unauthenticated() -> Self {
        Self::Unauthenticated
    }

    pub fn invalid_token(reason: TokenRejection) -> Self {
        Self::InvalidToken { reason }
    }

    pub fn forbidden(username: String, role: String, required: RequiredRole) -> Self {
        Self::Forbidden {
            username,
            role,
            required,
        }
    }

    pub fn internal(detail: String) -> Self {
        Self::Internal { detail }
    }

    pub fn config(detail: String) -> Self {
        Self::Config { detail }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        self.status()
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status();
        let trace_id = trace_ctx::trace_id();

        let body = ErrorBody {
            error: self.public_message().to_string(),
            code: self.code().to_string(),
            trace_id: trace_id.clone(),
        };

        let mut builder = HttpResponse::build(status);
        builder.insert_header(("x-trace-id", trace_id));
        if status == StatusCode::UNAUTHORIZED {
            builder.insert_header((header::WWW_AUTHENTICATE, "Bearer"));
        }
        builder.json(body)
    }
}
