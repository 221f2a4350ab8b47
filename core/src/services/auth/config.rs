//! Configuration for the authentication service

use kl_shared::config::JwtConfig;

/// Configuration for the authentication service
#[derive(Debug, Clone)]
pub struct AuthServiceConfig {
    /// Access token validity in milliseconds (reported to clients)
    pub access_validity_ms: i64,

    /// Refresh token validity (store TTL) in milliseconds
    pub refresh_validity_ms: i64,
}

impl Default for AuthServiceConfig {
    fn default() -> Self {
        let jwt = JwtConfig::default();

        Self {
            access_validity_ms: jwt.access_validity_ms,
            refresh_validity_ms: jwt.refresh_validity_ms,
        }
    }
}

impl From<&JwtConfig> for AuthServiceConfig {
    fn from(jwt: &JwtConfig) -> Self {
        Self {
            access_validity_ms: jwt.access_validity_ms,
            refresh_validity_ms: jwt.refresh_validity_ms,
        }
    }
}
