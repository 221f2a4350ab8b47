//! Authentication request/response DTOs

use serde::{Deserialize, Serialize};
use validator::Validate;

use kl_core::domain::entities::kindergarten::Kindergarten;
use kl_core::domain::value_objects::AuthTokens;

/// Request body for POST /api/v1/kindergartens
#[derive(Debug, Deserialize, Validate)]
pub struct SignUpRequest {
    #[validate(length(min = 1, max = 50, message = "must be 1-50 characters"))]
    pub name: String,

    #[validate(email(message = "must be a valid email address"))]
    pub email: String,

    // bcrypt truncates beyond 72 bytes
    #[validate(length(min = 8, max = 72, message = "must be 8-72 characters"))]
    pub password: String,

    #[validate(must_match(other = "password", message = "must match password"))]
    pub password_confirmation: String,
}

/// Request body for POST /api/v1/auth/login
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,

    #[validate(length(min = 1, message = "must not be empty"))]
    pub password: String,
}

/// Request body for POST /api/v1/auth/refresh
///
/// The access token may be expired; its signature still proves the identity
/// the refresh token is checked against.
#[derive(Debug, Deserialize, Validate)]
pub struct RefreshTokenRequest {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub access_token: String,

    #[validate(length(min = 1, message = "must not be empty"))]
    pub refresh_token: String,
}

/// Token pair returned by login and refresh
#[derive(Debug, Serialize, Deserialize)]
pub struct AuthTokensResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub expires_in: i64,
}

impl From<AuthTokens> for AuthTokensResponse {
    fn from(tokens: AuthTokens) -> Self {
        Self {
            access_token: tokens.access_token,
            refresh_token: tokens.refresh_token,
            expires_in: tokens.expires_in,
        }
    }
}

/// Response body for a successful signup
#[derive(Debug, Serialize, Deserialize)]
pub struct SignUpResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl From<Kindergarten> for SignUpResponse {
    fn from(kindergarten: Kindergarten) -> Self {
        Self {
            id: kindergarten.id,
            name: kindergarten.name,
            email: kindergarten.email,
        }
    }
}

/// Response body for a successful logout
#[derive(Debug, Serialize, Deserialize)]
pub struct LogoutResponse {
    pub message: String,
}
