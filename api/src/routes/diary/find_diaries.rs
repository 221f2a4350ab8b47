use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::diary_dto::{DiaryListResponse, DiarySearchQuery};
use crate::handlers::error::{handle_domain_error, handle_validation_errors};
use crate::middleware::auth::AuthContext;

use kl_core::domain::value_objects::AuthInfo;
use kl_core::repositories::{DiaryRepository, KindergartenRepository, RefreshTokenStore};

use super::super::AppState;

/// Handler for GET /api/v1/diaries?year=&month=
///
/// Lists the caller's entries for a calendar month, newest first.
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "diaries": [
///         {
///             "id": 3,
///             "uuid": "0b9f...",
///             "date": "2024-03-15",
///             "dog_name": "Bori",
///             "title": "A good day",
///             "content": "Played in the yard.",
///             "created_at": "2024-03-15T09:30:00Z"
///         }
///     ]
/// }
/// ```
pub async fn find_diaries<K, D, S>(
    state: web::Data<AppState<K, D, S>>,
    query: web::Query<DiarySearchQuery>,
    auth: AuthContext,
) -> HttpResponse
where
    K: KindergartenRepository + 'static,
    D: DiaryRepository + 'static,
    S: RefreshTokenStore + 'static,
{
    if let Err(errors) = query.validate() {
        return handle_validation_errors(&errors);
    }

    let auth_info = AuthInfo {
        id: auth.kindergarten_id,
    };

    match state
        .diary_service
        .find_by_month(query.year, query.month, auth_info)
        .await
    {
        Ok(entries) => HttpResponse::Ok().json(DiaryListResponse::from_entries(entries)),
        Err(error) => handle_domain_error(&error),
    }
}
