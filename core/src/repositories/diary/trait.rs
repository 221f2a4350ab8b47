//! Diary repository trait.

use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::entities::diary::Diary;
use crate::errors::DomainError;

/// Persistence operations for diary entries
///
/// Listing queries are kindergarten-scoped and ordered by entry date,
/// newest first.
#[async_trait]
pub trait DiaryRepository: Send + Sync {
    /// Find an entry by id
    async fn find_by_id(&self, id: i64) -> Result<Option<Diary>, DomainError>;

    /// Find an entry by its stable external identifier
    async fn find_by_uuid(&self, uuid: Uuid) -> Result<Option<Diary>, DomainError>;

    /// All entries of a kindergarten, newest first
    async fn find_by_kindergarten(&self, kindergarten_id: i64) -> Result<Vec<Diary>, DomainError>;

    /// Entries of a kindergarten within `[start, end]`, newest first
    async fn find_by_kindergarten_and_date_between(
        &self,
        kindergarten_id: i64,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Diary>, DomainError>;

    /// Persist a new entry
    ///
    /// # Returns
    /// The saved entry with its database-assigned id.
    async fn save(&self, diary: Diary) -> Result<Diary, DomainError>;

    /// Update the mutable fields of an existing entry
    async fn update(&self, diary: &Diary) -> Result<(), DomainError>;

    /// Delete an entry by id
    ///
    /// Idempotent: returns `false` when no entry existed.
    async fn delete(&self, id: i64) -> Result<bool, DomainError>;
}
