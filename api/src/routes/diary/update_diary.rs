use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::diary_dto::DiaryUpdateRequest;
use crate::handlers::error::{handle_domain_error, handle_validation_errors};
use crate::middleware::auth::AuthContext;

use kl_core::domain::value_objects::AuthInfo;
use kl_core::repositories::{DiaryRepository, KindergartenRepository, RefreshTokenStore};

use super::super::AppState;

/// Handler for PUT /api/v1/diaries/{diary_id}
///
/// Replaces the content of an entry.
///
/// ## Errors
/// - 403 Forbidden: entry belongs to another kindergarten
/// - 404 Not Found: no such entry
pub async fn update_diary<K, D, S>(
    state: web::Data<AppState<K, D, S>>,
    path: web::Path<i64>,
    request: web::Json<DiaryUpdateRequest>,
    auth: AuthContext,
) -> HttpResponse
where
    K: KindergartenRepository + 'static,
    D: DiaryRepository + 'static,
    S: RefreshTokenStore + 'static,
{
    if let Err(errors) = request.validate() {
        return handle_validation_errors(&errors);
    }

    let diary_id = path.into_inner();
    let auth_info = AuthInfo {
        id: auth.kindergarten_id,
    };

    match state
        .diary_service
        .update(diary_id, request.into_inner().into_draft(), auth_info)
        .await
    {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(error) => handle_domain_error(&error),
    }
}
