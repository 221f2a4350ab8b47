//! Route registration and shared application state

pub mod auth;
pub mod diary;

use actix_web::{web, HttpResponse};
use std::sync::Arc;

use kl_core::repositories::{DiaryRepository, KindergartenRepository, RefreshTokenStore};
use kl_core::services::auth::AuthService;
use kl_core::services::diary::DiaryService;
use kl_core::services::token::JwtTokenProvider;

use crate::middleware::auth::JwtAuth;

/// Application state holding the shared services
pub struct AppState<K, D, S>
where
    K: KindergartenRepository,
    D: DiaryRepository,
    S: RefreshTokenStore,
{
    pub auth_service: Arc<AuthService<K, S>>,
    pub diary_service: Arc<DiaryService<D>>,
}

/// Register all routes
///
/// Public endpoints (signup, login, refresh, health) are reachable without a
/// token; everything else sits behind the JWT authorization middleware built
/// around the given provider.
pub fn configure<K, D, S>(
    provider: Arc<JwtTokenProvider>,
) -> impl FnOnce(&mut web::ServiceConfig)
where
    K: KindergartenRepository + 'static,
    D: DiaryRepository + 'static,
    S: RefreshTokenStore + 'static,
{
    move |cfg| {
        cfg.route("/health", web::get().to(health_check));

        cfg.service(
            web::scope("/api/v1")
                .route("/kindergartens", web::post().to(auth::sign_up::sign_up::<K, D, S>))
                .service(
                    web::scope("/auth")
                        .route("/login", web::post().to(auth::login::login::<K, D, S>))
                        .route("/refresh", web::post().to(auth::refresh::refresh_token::<K, D, S>))
                        .service(
                            web::resource("/logout")
                                .wrap(JwtAuth::new(Arc::clone(&provider)))
                                .route(web::post().to(auth::logout::logout::<K, D, S>)),
                        ),
                )
                .service(
                    web::scope("/diaries")
                        .wrap(JwtAuth::new(Arc::clone(&provider)))
                        .route("/date", web::get().to(diary::find_dates::find_dates::<K, D, S>))
                        .route("", web::get().to(diary::find_diaries::find_diaries::<K, D, S>))
                        .route("", web::post().to(diary::create_diary::create_diary::<K, D, S>))
                        .route(
                            "/{diary_id}",
                            web::get().to(diary::find_diary::find_diary::<K, D, S>),
                        )
                        .route(
                            "/{diary_id}",
                            web::put().to(diary::update_diary::update_diary::<K, D, S>),
                        )
                        .route(
                            "/{diary_id}",
                            web::delete().to(diary::delete_diary::delete_diary::<K, D, S>),
                        ),
                ),
        );
    }
}

/// Handler for GET /health
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "kinderlog-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
