use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::auth_dto::{AuthTokensResponse, RefreshTokenRequest};
use crate::handlers::error::{handle_domain_error, handle_validation_errors};

use kl_core::repositories::{DiaryRepository, KindergartenRepository, RefreshTokenStore};

use super::super::AppState;

/// Handler for POST /api/v1/auth/refresh
///
/// Exchanges an access token (expired is fine, the signature must verify)
/// plus the stored refresh token for a fresh pair. The refresh token is
/// rotated on success.
///
/// # Request Body
///
/// ```json
/// {
///     "access_token": "eyJ...",
///     "refresh_token": "h2K..."
/// }
/// ```
///
/// ## Errors
/// - 401 Unauthorized: malformed access token, or absent/mismatched refresh
///   token (`INVALID_REFRESH_TOKEN`)
/// - 503 Service Unavailable: refresh token store unreachable
pub async fn refresh_token<K, D, S>(
    state: web::Data<AppState<K, D, S>>,
    request: web::Json<RefreshTokenRequest>,
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
        .refresh(&request.access_token, &request.refresh_token)
        .await
    {
        Ok(tokens) => HttpResponse::Ok().json(AuthTokensResponse::from(tokens)),
        Err(error) => handle_domain_error(&error),
    }
}
