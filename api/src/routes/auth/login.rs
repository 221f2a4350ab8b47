use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::auth_dto::{AuthTokensResponse, LoginRequest};
use crate::handlers::error::{handle_domain_error, handle_validation_errors};

use kl_core::repositories::{DiaryRepository, KindergartenRepository, RefreshTokenStore};

use super::super::AppState;

/// Handler for POST /api/v1/auth/login
///
/// Authenticates a kindergarten with email and password and issues a token
/// pair. The refresh token replaces whatever was stored for the account.
///
/// # Request Body
///
/// ```json
/// {
///     "email": "sunshine@example.com",
///     "password": "secret-pw"
/// }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "access_token": "eyJ...",
///     "refresh_token": "h2K...",
///     "expires_in": 1800
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: malformed request body
/// - 401 Unauthorized: unknown email or wrong password
/// - 503 Service Unavailable: refresh token store unreachable
pub async fn login<K, D, S>(
    state: web::Data<AppState<K, D, S>>,
    request: web::Json<LoginRequest>,
) -> HttpResponse
where
    K: KindergartenRepository + 'static,
    D: DiaryRepository + 'static,
    S: RefreshTokenStore + 'static,
{
    if let Err(errors) = request.validate() {
        return handle_validation_errors(&errors);
    }

    match state
        .auth_service
        .login(&request.email, &request.password)
        .await
    {
        Ok(tokens) => HttpResponse::Ok().json(AuthTokensResponse::from(tokens)),
        Err(error) => handle_domain_error(&error),
    }
}
