//! Configuration for the token provider

use kl_shared::config::JwtConfig;

/// Configuration for the token provider
#[derive(Debug, Clone)]
pub struct TokenConfig {
    /// Symmetric signing secret
    pub secret: String,

    /// Access token validity in milliseconds
    pub access_validity_ms: i64,
}

impl Default for TokenConfig {
    fn default() -> Self {
        let jwt = JwtConfig::default();

        Self {
            secret: jwt.secret,
            access_validity_ms: jwt.access_validity_ms,
        }
    }
}

impl From<&JwtConfig> for TokenConfig {
    fn from(jwt: &JwtConfig) -> Self {
        Self {
            secret: jwt.secret.clone(),
            access_validity_ms: jwt.access_validity_ms,
        }
    }
}
