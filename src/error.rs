use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use std::fmt;

/// Domain error kinds raised by the service layer. Translated to HTTP status
/// codes exactly once, by the `ResponseError` impl below.
#[derive(Debug)]
pub enum ApiError {
    Validation(String),
    NotFound(String),
    Conflict(String),
    Unexpected(String),
}

#[derive(Serialize)]
struct ErrorResponse {
    detail: String,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Validation(msg) => write!(f, "Validation Error: {}", msg),
            ApiError::NotFound(msg) => write!(f, "Not Found: {}", msg),
            ApiError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            ApiError::Unexpected(msg) => write!(f, "Internal Server Error: {}", msg),
        }
    }
}

impl ResponseError for ApiError {
    fn error_response(&self) -> HttpResponse {
        match self {
            ApiError::Validation(msg) | ApiError::Conflict(msg) => {
                HttpResponse::BadRequest().json(ErrorResponse { detail: msg.clone() })
            }
            ApiError::NotFound(msg) => {
                HttpResponse::NotFound().json(ErrorResponse { detail: msg.clone() })
            }
            ApiError::Unexpected(msg) => {
                HttpResponse::InternalServerError().json(ErrorResponse { detail: msg.clone() })
            }
        }
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        tracing::error!(error = %err, "Database error");
        ApiError::Unexpected("Internal Server Error".to_string())
    }
}

/// True when the driver reports a UNIQUE constraint violation, e.g. a
/// duplicate employee email or a second attendance row for one (employee,
/// date) pair losing the insert race.
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(
        err,
        sqlx::Error::Database(db_err) if db_err.kind() == sqlx::error::ErrorKind::UniqueViolation
    )
}
