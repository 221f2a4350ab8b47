//! Mock implementation of RefreshTokenStore for testing

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::errors::DomainError;

use super::r#trait::RefreshTokenStore;

/// In-memory refresh token store for tests
///
/// Honors TTL on read so expiry behavior can be exercised without a cache
/// backend.
pub struct MockRefreshTokenStore {
    entries: Arc<RwLock<HashMap<i64, (String, DateTime<Utc>)>>>,
}

impl MockRefreshTokenStore {
    /// Create a new empty mock store
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for MockRefreshTokenStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RefreshTokenStore for MockRefreshTokenStore {
    async fn set(
        &self,
        kindergarten_id: i64,
        token: &str,
        ttl_ms: u64,
    ) -> Result<(), DomainError> {
        let expires_at = Utc::now() + Duration::milliseconds(ttl_ms as i64);
        let mut entries = self.entries.write().await;
        entries.insert(kindergarten_id, (token.to_string(), expires_at));
        Ok(())
    }

    async fn get(&self, kindergarten_id: i64) -> Result<Option<String>, DomainError> {
        let entries = self.entries.read().await;

        Ok(entries
            .get(&kindergarten_id)
            .filter(|(_, expires_at)| *expires_at > Utc::now())
            .map(|(token, _)| token.clone()))
    }

    async fn delete(&self, kindergarten_id: i64) -> Result<bool, DomainError> {
        let mut entries = self.entries.write().await;
        Ok(entries.remove(&kindergarten_id).is_some())
    }
}
