use actix_web::{middleware::Logger, web, App, HttpServer};
use anyhow::Context;
use dotenvy::dotenv;
use log::{info, warn};
use std::sync::Arc;

use kl_core::services::auth::{AuthService, AuthServiceConfig};
use kl_core::services::diary::DiaryService;
use kl_core::services::token::{JwtTokenProvider, TokenConfig};
use kl_infra::cache::{RedisClient, RedisRefreshTokenStore};
use kl_infra::database::{create_pool, MySqlDiaryRepository, MySqlKindergartenRepository};
use kl_shared::config::AppConfig;

mod dto;
mod handlers;
mod middleware;
mod routes;

use routes::AppState;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting Kinderlog API server");

    let config = AppConfig::from_env();
    if config.jwt.is_using_default_secret() {
        warn!("JWT_SECRET is not set; using the development default");
    }

    let pool = create_pool(&config.database)
        .await
        .context("failed to create database pool")?;
    let redis = RedisClient::new(&config.cache)
        .await
        .context("failed to connect to Redis")?;

    let kindergarten_repository = Arc::new(MySqlKindergartenRepository::new(pool.clone()));
    let diary_repository = Arc::new(MySqlDiaryRepository::new(pool));
    let token_store = Arc::new(RedisRefreshTokenStore::new(redis));
    let token_provider = Arc::new(JwtTokenProvider::new(&TokenConfig::from(&config.jwt)));

    let auth_service = Arc::new(AuthService::new(
        kindergarten_repository,
        token_store,
        Arc::clone(&token_provider),
        AuthServiceConfig::from(&config.jwt),
    ));
    let diary_service = Arc::new(DiaryService::new(diary_repository));

    let state = web::Data::new(AppState {
        auth_service,
        diary_service,
    });

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(middleware::cors::create_cors())
            .app_data(state.clone())
            .configure(routes::configure::<
                MySqlKindergartenRepository,
                MySqlDiaryRepository,
                RedisRefreshTokenStore,
            >(Arc::clone(&token_provider)))
    })
    .bind(&bind_address)
    .with_context(|| format!("failed to bind to {}", bind_address))?
    .run()
    .await?;

    Ok(())
}
