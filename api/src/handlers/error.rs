//! Centralized translation of domain errors to HTTP responses
//!
//! Classified failures become 4xx responses with a machine-readable error
//! code; anything unexpected becomes a generic 500 with no internal detail
//! in the body. Server-side faults are logged at error level, client faults
//! at info level.

use actix_web::{http::StatusCode, HttpResponse};
use validator::ValidationErrors;

use kl_core::errors::{AuthError, DomainError};
use kl_shared::types::response::ErrorResponse;

/// Map a domain error to its HTTP response
pub fn handle_domain_error(error: &DomainError) -> HttpResponse {
    let (status, code) = classify(error);

    if status.is_server_error() {
        log::error!("[{}] {}", code, error);
    } else {
        log::info!("[{}] {}", code, error);
    }

    let message = match status {
        // Never leak internal detail on server-side faults
        StatusCode::INTERNAL_SERVER_ERROR => "An internal error occurred".to_string(),
        StatusCode::SERVICE_UNAVAILABLE => "A backing service is unavailable".to_string(),
        _ => error.to_string(),
    };

    HttpResponse::build(status).json(ErrorResponse::new(code, message))
}

/// Map request-body validation failures to a 400 with merged field messages
pub fn handle_validation_errors(errors: &ValidationErrors) -> HttpResponse {
    let message = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |e| {
                let detail = e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string());
                format!("{}: {}", field, detail)
            })
        })
        .collect::<Vec<_>>()
        .join(", ");

    log::info!("[INVALID_REQUEST] {}", message);

    HttpResponse::BadRequest().json(ErrorResponse::new("INVALID_REQUEST", message))
}

/// Status code and machine-readable error code per domain error
pub fn classify(error: &DomainError) -> (StatusCode, &'static str) {
    match error {
        DomainError::Token(kind) => (StatusCode::UNAUTHORIZED, kind.code()),
        DomainError::Auth(AuthError::InvalidCredentials) => {
            (StatusCode::UNAUTHORIZED, "INVALID_CREDENTIALS")
        }
        DomainError::Auth(AuthError::InvalidRefreshToken) => {
            (StatusCode::UNAUTHORIZED, "INVALID_REFRESH_TOKEN")
        }
        DomainError::Auth(AuthError::PasswordConfirmationMismatch) => {
            (StatusCode::BAD_REQUEST, "PASSWORD_CONFIRMATION_MISMATCH")
        }
        DomainError::Auth(AuthError::EmailAlreadyExists) => {
            (StatusCode::CONFLICT, "EMAIL_ALREADY_EXISTS")
        }
        DomainError::Validation { .. } => (StatusCode::BAD_REQUEST, "INVALID_REQUEST"),
        DomainError::NotFound { .. } => (StatusCode::NOT_FOUND, "NOT_FOUND"),
        DomainError::AccessDenied => (StatusCode::FORBIDDEN, "ACCESS_DENIED"),
        DomainError::Cache { .. } => (StatusCode::SERVICE_UNAVAILABLE, "CACHE_UNAVAILABLE"),
        DomainError::Database { .. } | DomainError::Internal { .. } => {
            (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_SERVER_ERROR")
        }
    }
}
