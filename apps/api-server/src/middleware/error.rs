//! Error handling - every failure becomes `{ "error": "<message>" }`.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use cadence_core::ValidationError;
use cadence_shared::ErrorResponse;
use std::fmt;

/// Application-level error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    NotFound(String),
    /// Carries only the client-facing message; the cause is logged where it is built.
    Internal(&'static str),
}

impl AppError {
    /// Log `cause` and hide it behind a generic `public` message.
    pub fn internal(public: &'static str, cause: impl fmt::Display) -> Self {
        tracing::error!(error = %cause, "{}", public);
        AppError::Internal(public)
    }

    fn message(&self) -> &str {
        match self {
            AppError::BadRequest(msg) | AppError::NotFound(msg) => msg,
            AppError::Internal(msg) => msg,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse::new(self.message()))
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        tracing::debug!(reason = %err, "Rejected invalid input");
        AppError::BadRequest(err.to_string())
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
