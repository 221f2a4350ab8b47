//! Kindergarten repository trait.

use async_trait::async_trait;

use crate::domain::entities::kindergarten::Kindergarten;
use crate::errors::DomainError;

/// Persistence operations for kindergarten accounts
#[async_trait]
pub trait KindergartenRepository: Send + Sync {
    /// Find an account by its login email
    async fn find_by_email(&self, email: &str) -> Result<Option<Kindergarten>, DomainError>;

    /// Find an account by id
    async fn find_by_id(&self, id: i64) -> Result<Option<Kindergarten>, DomainError>;

    /// Whether an account with this email already exists
    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
        Ok(self.find_by_email(email).await?.is_some())
    }

    /// Persist a new account
    ///
    /// # Returns
    /// The saved account with its database-assigned id.
    async fn save(&self, kindergarten: Kindergarten) -> Result<Kindergarten, DomainError>;
}
