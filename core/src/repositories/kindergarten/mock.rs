//! Mock implementation of KindergartenRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::kindergarten::Kindergarten;
use crate::errors::DomainError;

use super::r#trait::KindergartenRepository;

/// In-memory kindergarten repository for tests
pub struct MockKindergartenRepository {
    accounts: Arc<RwLock<HashMap<i64, Kindergarten>>>,
    next_id: Arc<RwLock<i64>>,
}

impl MockKindergartenRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        Self {
            accounts: Arc::new(RwLock::new(HashMap::new())),
            next_id: Arc::new(RwLock::new(1)),
        }
    }
}

impl Default for MockKindergartenRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl KindergartenRepository for MockKindergartenRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<Kindergarten>, DomainError> {
        let accounts = self.accounts.read().await;
        Ok(accounts.values().find(|k| k.email == email).cloned())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Kindergarten>, DomainError> {
        let accounts = self.accounts.read().await;
        Ok(accounts.get(&id).cloned())
    }

    async fn save(&self, mut kindergarten: Kindergarten) -> Result<Kindergarten, DomainError> {
        let mut next_id = self.next_id.write().await;
        let mut accounts = self.accounts.write().await;

        kindergarten.id = *next_id;
        *next_id += 1;

        accounts.insert(kindergarten.id, kindergarten.clone());
        Ok(kindergarten)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn save_assigns_sequential_ids() {
        let repo = MockKindergartenRepository::new();

        let first = repo
            .save(Kindergarten::new(
                "Sunshine".to_string(),
                "sunshine@example.com".to_string(),
                "hash".to_string(),
            ))
            .await
            .unwrap();
        let second = repo
            .save(Kindergarten::new(
                "Rainbow".to_string(),
                "rainbow@example.com".to_string(),
                "hash".to_string(),
            ))
            .await
            .unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn lookup_by_email_and_id() {
        let repo = MockKindergartenRepository::new();
        let saved = repo
            .save(Kindergarten::new(
                "Sunshine".to_string(),
                "sunshine@example.com".to_string(),
                "hash".to_string(),
            ))
            .await
            .unwrap();

        let by_email = repo.find_by_email("sunshine@example.com").await.unwrap();
        assert_eq!(by_email, Some(saved.clone()));

        let by_id = repo.find_by_id(saved.id).await.unwrap();
        assert_eq!(by_id, Some(saved));

        assert!(repo.exists_by_email("sunshine@example.com").await.unwrap());
        assert!(!repo.exists_by_email("unknown@example.com").await.unwrap());
    }
}
