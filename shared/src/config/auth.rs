//! JWT authentication configuration

use serde::{Deserialize, Serialize};

/// JWT signing and token-validity configuration
///
/// The secret and both validity durations are fixed for the lifetime of the
/// process; there is no runtime key rotation.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// Symmetric secret used for HMAC-SHA256 signing
    pub secret: String,

    /// Access token validity in milliseconds
    pub access_validity_ms: i64,

    /// Refresh token validity (store TTL) in milliseconds
    pub refresh_validity_ms: i64,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::from("development-secret-please-change-in-production"),
            access_validity_ms: 30 * 60 * 1000,            // 30 minutes
            refresh_validity_ms: 14 * 24 * 60 * 60 * 1000, // 14 days
        }
    }
}

impl JwtConfig {
    /// Create from environment variables
    ///
    /// Reads `JWT_SECRET`, `JWT_ACCESS_VALIDITY_MS` and
    /// `JWT_REFRESH_VALIDITY_MS`, falling back to defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            secret: std::env::var("JWT_SECRET").unwrap_or(defaults.secret),
            access_validity_ms: std::env::var("JWT_ACCESS_VALIDITY_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.access_validity_ms),
            refresh_validity_ms: std::env::var("JWT_REFRESH_VALIDITY_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.refresh_validity_ms),
        }
    }

    /// Check if the default secret is still in use (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == JwtConfig::default().secret
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_validity_windows() {
        let config = JwtConfig::default();
        assert_eq!(config.access_validity_ms, 1_800_000);
        assert_eq!(config.refresh_validity_ms, 1_209_600_000);
        assert!(config.is_using_default_secret());
    }

    #[test]
    fn custom_secret_is_not_flagged() {
        let config = JwtConfig {
            secret: "a-real-secret".to_string(),
            ..Default::default()
        };
        assert!(!config.is_using_default_secret());
    }
}
