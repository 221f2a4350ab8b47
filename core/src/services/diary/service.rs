//! Diary service implementation

use std::sync::Arc;

use chrono::{Datelike, NaiveDate, Utc};

use crate::domain::entities::diary::Diary;
use crate::domain::value_objects::{AuthInfo, DiaryDraft};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::DiaryRepository;

/// Service for managing diary entries of a kindergarten
pub struct DiaryService<D: DiaryRepository> {
    diary_repository: Arc<D>,
}

impl<D: DiaryRepository> DiaryService<D> {
    /// Create a new diary service
    pub fn new(diary_repository: Arc<D>) -> Self {
        Self { diary_repository }
    }

    /// Create a new entry owned by the caller
    pub async fn create(&self, draft: DiaryDraft, auth: AuthInfo) -> DomainResult<Diary> {
        let diary = Diary::new(
            auth.id,
            draft.date,
            draft.dog_name,
            draft.title,
            draft.content,
        );

        self.diary_repository.save(diary).await
    }

    /// All entries of the caller, newest first
    pub async fn find_all(&self, auth: AuthInfo) -> DomainResult<Vec<Diary>> {
        self.diary_repository.find_by_kindergarten(auth.id).await
    }

    /// Entries of the caller within a calendar month, newest first
    pub async fn find_by_month(
        &self,
        year: i32,
        month: u32,
        auth: AuthInfo,
    ) -> DomainResult<Vec<Diary>> {
        let (start, end) = month_bounds(year, month)?;

        self.diary_repository
            .find_by_kindergarten_and_date_between(auth.id, start, end)
            .await
    }

    /// A single entry; foreign entries are not revealed to exist
    pub async fn find(&self, diary_id: i64, auth: AuthInfo) -> DomainResult<Diary> {
        self.owned_diary(diary_id, auth).await
    }

    /// Replace the content of an entry
    pub async fn update(
        &self,
        diary_id: i64,
        draft: DiaryDraft,
        auth: AuthInfo,
    ) -> DomainResult<()> {
        let mut diary = self.owned_diary(diary_id, auth).await?;

        diary.date = draft.date;
        diary.dog_name = draft.dog_name;
        diary.title = draft.title;
        diary.content = draft.content;
        diary.updated_at = Utc::now();

        self.diary_repository.update(&diary).await
    }

    /// Delete an entry
    pub async fn delete(&self, diary_id: i64, auth: AuthInfo) -> DomainResult<()> {
        let diary = self.owned_diary(diary_id, auth).await?;

        self.diary_repository.delete(diary.id).await?;
        Ok(())
    }

    /// Load an entry and enforce kindergarten scoping
    async fn owned_diary(&self, diary_id: i64, auth: AuthInfo) -> DomainResult<Diary> {
        let diary = self
            .diary_repository
            .find_by_id(diary_id)
            .await?
            .ok_or_else(|| DomainError::NotFound {
                resource: format!("diary {}", diary_id),
            })?;

        if !diary.is_owned_by(auth.id) {
            return Err(DomainError::AccessDenied);
        }

        Ok(diary)
    }
}

/// First and last day of a calendar month
fn month_bounds(year: i32, month: u32) -> DomainResult<(NaiveDate, NaiveDate)> {
    let start = NaiveDate::from_ymd_opt(year, month, 1).ok_or(DomainError::Validation {
        message: format!("Invalid year/month: {}-{}", year, month),
    })?;

    let next_month = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .ok_or(DomainError::Validation {
        message: format!("Invalid year/month: {}-{}", year, month),
    })?;

    let end = next_month.pred_opt().ok_or(DomainError::Validation {
        message: format!("Invalid year/month: {}-{}", year, month),
    })?;

    debug_assert_eq!(start.month(), end.month());
    Ok((start, end))
}
