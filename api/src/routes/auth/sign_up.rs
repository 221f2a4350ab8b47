use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::auth_dto::{SignUpRequest, SignUpResponse};
use crate::handlers::error::{handle_domain_error, handle_validation_errors};

use kl_core::repositories::{DiaryRepository, KindergartenRepository, RefreshTokenStore};

use super::super::AppState;

/// Handler for POST /api/v1/kindergartens
///
/// Registers a new kindergarten account.
///
/// ## Errors
/// - 400 Bad Request: validation failure or password confirmation mismatch
/// - 409 Conflict: email already registered
pub async fn sign_up<K, D, S>(
    state: web::Data<AppState<K, D, S>>,
    request: web::Json<SignUpRequest>,
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
        .sign_up(
            &request.name,
            &request.email,
            &request.password,
            &request.password_confirmation,
        )
        .await
    {
        Ok(kindergarten) => HttpResponse::Created().json(SignUpResponse::from(kindergarten)),
        Err(error) => handle_domain_error(&error),
    }
}
