//! Application configuration
//!
//! Each section is a plain serde struct with a `Default` implementation and a
//! `from_env()` constructor. Configuration is read once at startup and passed
//! to dependent components by value; nothing reads the environment after that.

mod auth;
mod cache;
mod database;
mod server;

pub use auth::JwtConfig;
pub use cache::CacheConfig;
pub use database::DatabaseConfig;
pub use server::ServerConfig;

use serde::{Deserialize, Serialize};

/// Complete application configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    /// HTTP server settings
    pub server: ServerConfig,

    /// MySQL settings
    pub database: DatabaseConfig,

    /// Redis settings
    pub cache: CacheConfig,

    /// JWT signing and validity settings
    pub jwt: JwtConfig,
}

impl AppConfig {
    /// Load the full configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(),
            cache: CacheConfig::from_env(),
            jwt: JwtConfig::from_env(),
        }
    }
}
