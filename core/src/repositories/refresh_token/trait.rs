//! Refresh token store trait keyed by kindergarten id.

use async_trait::async_trait;

use crate::errors::DomainError;

/// Key-value store for refresh tokens with TTL-based expiry
///
/// At most one refresh token is stored per identity: `set` overwrites any
/// prior mapping (last-writer-wins), which is what rotates tokens on login
/// and refresh. Expiry enforcement belongs to the backing cache; `get` simply
/// reports absence once the TTL has elapsed.
///
/// Cache I/O failures are surfaced as `DomainError::Cache` and are never
/// retried or swallowed at this layer.
#[async_trait]
pub trait RefreshTokenStore: Send + Sync {
    /// Store `token` for `kindergarten_id`, replacing any prior value
    ///
    /// # Arguments
    /// * `kindergarten_id` - Identity the token belongs to
    /// * `token` - Opaque refresh token value
    /// * `ttl_ms` - Time to live in milliseconds
    async fn set(&self, kindergarten_id: i64, token: &str, ttl_ms: u64)
        -> Result<(), DomainError>;

    /// Fetch the current token for `kindergarten_id`
    ///
    /// Returns `None` when no mapping exists or the TTL has elapsed.
    async fn get(&self, kindergarten_id: i64) -> Result<Option<String>, DomainError>;

    /// Remove the mapping for `kindergarten_id`
    ///
    /// Idempotent: returns `false` (not an error) when nothing was stored.
    async fn delete(&self, kindergarten_id: i64) -> Result<bool, DomainError>;
}
