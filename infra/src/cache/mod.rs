//! Redis cache layer
//!
//! A thin async client plus the refresh token store built on top of it.

mod redis_client;
mod refresh_token_store;

pub use redis_client::RedisClient;
pub use refresh_token_store::RedisRefreshTokenStore;
