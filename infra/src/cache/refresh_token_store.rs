//! Redis-backed refresh token store

use async_trait::async_trait;
use tracing::debug;

use kl_core::errors::DomainError;
use kl_core::repositories::RefreshTokenStore;

use crate::InfraError;

use super::redis_client::RedisClient;

/// Key prefix for refresh token entries
const KEY_PREFIX: &str = "refresh_token:";

/// Refresh token store backed by Redis
///
/// One key per kindergarten (`refresh_token:{id}`), written with a
/// millisecond TTL. Redis owns expiry enforcement and provides the atomic
/// per-key semantics the store contract relies on: concurrent writes to one
/// identity resolve last-writer-wins.
pub struct RedisRefreshTokenStore {
    client: RedisClient,
}

impl RedisRefreshTokenStore {
    /// Create a new store over an existing Redis client
    pub fn new(client: RedisClient) -> Self {
        Self { client }
    }

    fn key(kindergarten_id: i64) -> String {
        format!("{}{}", KEY_PREFIX, kindergarten_id)
    }
}

#[async_trait]
impl RefreshTokenStore for RedisRefreshTokenStore {
    async fn set(
        &self,
        kindergarten_id: i64,
        token: &str,
        ttl_ms: u64,
    ) -> Result<(), DomainError> {
        debug!(kindergarten_id, ttl_ms, "Storing refresh token");

        self.client
            .set_with_expiry_ms(&Self::key(kindergarten_id), token, ttl_ms)
            .await
            .map_err(into_domain_error)
    }

    async fn get(&self, kindergarten_id: i64) -> Result<Option<String>, DomainError> {
        self.client
            .get(&Self::key(kindergarten_id))
            .await
            .map_err(into_domain_error)
    }

    async fn delete(&self, kindergarten_id: i64) -> Result<bool, DomainError> {
        debug!(kindergarten_id, "Deleting refresh token");

        self.client
            .delete(&Self::key(kindergarten_id))
            .await
            .map_err(into_domain_error)
    }
}

/// Cache failures surface as `DomainError::Cache`; the caller decides on the
/// 5xx response
fn into_domain_error(error: InfraError) -> DomainError {
    DomainError::Cache {
        message: error.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_scoped_by_identity() {
        assert_eq!(RedisRefreshTokenStore::key(7), "refresh_token:7");
        assert_eq!(RedisRefreshTokenStore::key(42), "refresh_token:42");
    }
}
