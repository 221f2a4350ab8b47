//! Mock implementation of DiaryRepository for testing

use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::diary::Diary;
use crate::errors::DomainError;

use super::r#trait::DiaryRepository;

/// In-memory diary repository for tests
pub struct MockDiaryRepository {
    entries: Arc<RwLock<HashMap<i64, Diary>>>,
    next_id: Arc<RwLock<i64>>,
}

impl MockDiaryRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            next_id: Arc::new(RwLock::new(1)),
        }
    }
}

impl Default for MockDiaryRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DiaryRepository for MockDiaryRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Diary>, DomainError> {
        let entries = self.entries.read().await;
        Ok(entries.get(&id).cloned())
    }

    async fn find_by_uuid(&self, uuid: Uuid) -> Result<Option<Diary>, DomainError> {
        let entries = self.entries.read().await;
        Ok(entries.values().find(|d| d.uuid == uuid).cloned())
    }

    async fn find_by_kindergarten(&self, kindergarten_id: i64) -> Result<Vec<Diary>, DomainError> {
        let entries = self.entries.read().await;
        let mut result: Vec<Diary> = entries
            .values()
            .filter(|d| d.kindergarten_id == kindergarten_id)
            .cloned()
            .collect();

        result.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(result)
    }

    async fn find_by_kindergarten_and_date_between(
        &self,
        kindergarten_id: i64,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Diary>, DomainError> {
        let entries = self.entries.read().await;
        let mut result: Vec<Diary> = entries
            .values()
            .filter(|d| d.kindergarten_id == kindergarten_id && d.date >= start && d.date <= end)
            .cloned()
            .collect();

        result.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(result)
    }

    async fn save(&self, mut diary: Diary) -> Result<Diary, DomainError> {
        let mut next_id = self.next_id.write().await;
        let mut entries = self.entries.write().await;

        diary.id = *next_id;
        *next_id += 1;

        entries.insert(diary.id, diary.clone());
        Ok(diary)
    }

    async fn update(&self, diary: &Diary) -> Result<(), DomainError> {
        let mut entries = self.entries.write().await;

        match entries.get_mut(&diary.id) {
            Some(stored) => {
                *stored = diary.clone();
                Ok(())
            }
            None => Err(DomainError::NotFound {
                resource: format!("diary {}", diary.id),
            }),
        }
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        let mut entries = self.entries.write().await;
        Ok(entries.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diary_on(kindergarten_id: i64, date: NaiveDate) -> Diary {
        Diary::new(
            kindergarten_id,
            date,
            "Bori".to_string(),
            "A day".to_string(),
            "Content".to_string(),
        )
    }

    #[tokio::test]
    async fn listing_is_scoped_and_newest_first() {
        let repo = MockDiaryRepository::new();

        repo.save(diary_on(1, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()))
            .await
            .unwrap();
        repo.save(diary_on(1, NaiveDate::from_ymd_opt(2024, 3, 9).unwrap()))
            .await
            .unwrap();
        repo.save(diary_on(2, NaiveDate::from_ymd_opt(2024, 3, 5).unwrap()))
            .await
            .unwrap();

        let listed = repo.find_by_kindergarten(1).await.unwrap();
        assert_eq!(listed.len(), 2);
        assert!(listed[0].date > listed[1].date);
    }

    #[tokio::test]
    async fn date_range_filters_inclusively() {
        let repo = MockDiaryRepository::new();

        repo.save(diary_on(1, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()))
            .await
            .unwrap();
        repo.save(diary_on(1, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()))
            .await
            .unwrap();
        repo.save(diary_on(1, NaiveDate::from_ymd_opt(2024, 3, 31).unwrap()))
            .await
            .unwrap();
        repo.save(diary_on(1, NaiveDate::from_ymd_opt(2024, 4, 1).unwrap()))
            .await
            .unwrap();

        let march = repo
            .find_by_kindergarten_and_date_between(
                1,
                NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
                NaiveDate::from_ymd_opt(2024, 3, 31).unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(march.len(), 2);
    }

    #[tokio::test]
    async fn uuid_lookup_and_delete() {
        let repo = MockDiaryRepository::new();
        let saved = repo
            .save(diary_on(1, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()))
            .await
            .unwrap();

        let found = repo.find_by_uuid(saved.uuid).await.unwrap();
        assert_eq!(found, Some(saved.clone()));

        assert!(repo.delete(saved.id).await.unwrap());
        assert!(!repo.delete(saved.id).await.unwrap());
        assert_eq!(repo.find_by_id(saved.id).await.unwrap(), None);
    }
}
