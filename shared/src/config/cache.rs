//! Redis cache configuration

use serde::{Deserialize, Serialize};

/// Redis connection configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    /// Redis connection URL
    pub url: String,

    /// Connection attempts before giving up at startup
    pub connect_retries: u32,

    /// Base delay between connection attempts in milliseconds
    pub connect_retry_delay_ms: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            url: String::from("redis://localhost:6379"),
            connect_retries: 3,
            connect_retry_delay_ms: 100,
        }
    }
}

impl CacheConfig {
    /// Create from environment variables (`REDIS_URL`)
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            url: std::env::var("REDIS_URL").unwrap_or(defaults.url),
            ..defaults
        }
    }
}
