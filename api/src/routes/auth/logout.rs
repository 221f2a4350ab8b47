use actix_web::{web, HttpResponse};

use crate::dto::auth_dto::LogoutResponse;
use crate::handlers::error::handle_domain_error;
use crate::middleware::auth::AuthContext;

use kl_core::repositories::{DiaryRepository, KindergartenRepository, RefreshTokenStore};

use super::super::AppState;

/// Handler for POST /api/v1/auth/logout
///
/// Deletes the caller's stored refresh token. Requires authentication via
/// Bearer token; outstanding access tokens stay valid until they expire.
///
/// ## Errors
/// - 401 Unauthorized: missing or invalid access token
/// - 503 Service Unavailable: refresh token store unreachable
pub async fn logout<K, D, S>(
    state: web::Data<AppState<K, D, S>>,
    auth: AuthContext,
) -> HttpResponse
where
    K: KindergartenRepository + 'static,
    D: DiaryRepository + 'static,
    S: RefreshTokenStore + 'static,
{
    match state.auth_service.logout(auth.kindergarten_id).await {
        Ok(()) => HttpResponse::Ok().json(LogoutResponse {
            message: "Logged out successfully".to_string(),
        }),
        Err(error) => handle_domain_error(&error),
    }
}
