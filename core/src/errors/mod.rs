//! Domain-specific error types and error handling.
//!
//! Token failures are classified as first-class values rather than library
//! exception types, so the API boundary can translate each kind into a
//! distinct HTTP error code.

use thiserror::Error;

/// Token validation failures
///
/// A token is in exactly one of {valid, expired, malformed, unsupported};
/// the only state transition is time-driven (valid tokens expire). A
/// signature mismatch is deliberately folded into `Malformed` together with
/// structurally broken tokens.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenError {
    #[error("Unsupported token")]
    Unsupported,

    #[error("Expired token")]
    Expired,

    #[error("Malformed token")]
    Malformed,
}

impl TokenError {
    /// Machine-readable error code surfaced to API clients
    pub fn code(&self) -> &'static str {
        match self {
            TokenError::Unsupported => "UNSUPPORTED_TOKEN",
            TokenError::Expired => "EXPIRED_TOKEN",
            TokenError::Malformed => "MALFORMED_TOKEN",
        }
    }
}

/// Authentication failures outside of token classification
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Invalid refresh token")]
    InvalidRefreshToken,

    #[error("Password confirmation does not match")]
    PasswordConfirmationMismatch,

    #[error("Email already registered")]
    EmailAlreadyExists,
}

/// Core domain errors
///
/// Classified token and auth failures are recovered at the service boundary
/// into these typed variants; `Database` and `Internal` are unexpected and
/// pass through to the generic 500 handler untouched.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("Access denied")]
    AccessDenied,

    #[error("Cache unavailable: {message}")]
    Cache { message: String },

    #[error("Database error: {message}")]
    Database { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

pub type DomainResult<T> = Result<T, DomainError>;
