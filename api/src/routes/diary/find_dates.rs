use actix_web::{web, HttpResponse};

use crate::dto::diary_dto::DiaryDateListResponse;
use crate::handlers::error::handle_domain_error;
use crate::middleware::auth::AuthContext;

use kl_core::domain::value_objects::AuthInfo;
use kl_core::repositories::{DiaryRepository, KindergartenRepository, RefreshTokenStore};

use super::super::AppState;

/// Handler for GET /api/v1/diaries/date
///
/// Returns which dates have entries, newest first - the calendar overview.
pub async fn find_dates<K, D, S>(
    state: web::Data<AppState<K, D, S>>,
    auth: AuthContext,
) -> HttpResponse
where
    K: KindergartenRepository + 'static,
    D: DiaryRepository + 'static,
    S: RefreshTokenStore + 'static,
{
    let auth_info = AuthInfo {
        id: auth.kindergarten_id,
    };

    match state.diary_service.find_all(auth_info).await {
        Ok(entries) => HttpResponse::Ok().json(DiaryDateListResponse::from_entries(entries)),
        Err(error) => handle_domain_error(&error),
    }
}
