use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::diary_dto::{DiarySaveRequest, DiarySaveResponse};
use crate::handlers::error::{handle_domain_error, handle_validation_errors};
use crate::middleware::auth::AuthContext;

use kl_core::domain::value_objects::AuthInfo;
use kl_core::repositories::{DiaryRepository, KindergartenRepository, RefreshTokenStore};

use super::super::AppState;

/// Handler for POST /api/v1/diaries
///
/// Creates an entry owned by the caller.
///
/// # Request Body
///
/// ```json
/// {
///     "date": "2024-03-15",
///     "dog_name": "Bori",
///     "title": "A good day",
///     "content": "Played in the yard."
/// }
/// ```
///
/// # Response
///
/// ## Success (201 Created)
/// ```json
/// { "id": 3 }
/// ```
pub async fn create_diary<K, D, S>(
    state: web::Data<AppState<K, D, S>>,
    request: web::Json<DiarySaveRequest>,
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

    let auth_info = AuthInfo {
        id: auth.kindergarten_id,
    };

    match state
        .diary_service
        .create(request.into_inner().into_draft(), auth_info)
        .await
    {
        Ok(diary) => HttpResponse::Created().json(DiarySaveResponse { id: diary.id }),
        Err(error) => handle_domain_error(&error),
    }
}
