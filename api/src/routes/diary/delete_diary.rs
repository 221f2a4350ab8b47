use actix_web::{web, HttpResponse};

use crate::handlers::error::handle_domain_error;
use crate::middleware::auth::AuthContext;

use kl_core::domain::value_objects::AuthInfo;
use kl_core::repositories::{DiaryRepository, KindergartenRepository, RefreshTokenStore};

use super::super::AppState;

/// Handler for DELETE /api/v1/diaries/{diary_id}
///
/// ## Errors
/// - 403 Forbidden: entry belongs to another kindergarten
/// - 404 Not Found: no such entry
pub async fn delete_diary<K, D, S>(
    state: web::Data<AppState<K, D, S>>,
    path: web::Path<i64>,
    auth: AuthContext,
) -> HttpResponse
where
    K: KindergartenRepository + 'static,
    D: DiaryRepository + 'static,
    S: RefreshTokenStore + 'static,
{
    let diary_id = path.into_inner();
    let auth_info = AuthInfo {
        id: auth.kindergarten_id,
    };

    match state.diary_service.delete(diary_id, auth_info).await {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(error) => handle_domain_error(&error),
    }
}
