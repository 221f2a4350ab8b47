//! Tests for the diary service

use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::value_objects::{AuthInfo, DiaryDraft};
use crate::errors::DomainError;
use crate::repositories::MockDiaryRepository;
use crate::services::diary::DiaryService;

const OWNER: AuthInfo = AuthInfo { id: 1 };
const STRANGER: AuthInfo = AuthInfo { id: 2 };

fn service() -> DiaryService<MockDiaryRepository> {
    DiaryService::new(Arc::new(MockDiaryRepository::new()))
}

fn draft_on(date: NaiveDate) -> DiaryDraft {
    DiaryDraft {
        date,
        dog_name: "Bori".to_string(),
        title: "A good day".to_string(),
        content: "Played in the yard.".to_string(),
    }
}

fn march(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, day).unwrap()
}

#[tokio::test]
async fn create_assigns_ownership_to_the_caller() {
    let service = service();

    let diary = service.create(draft_on(march(15)), OWNER).await.unwrap();

    assert_eq!(diary.kindergarten_id, OWNER.id);
    assert!(diary.id > 0);

    let found = service.find(diary.id, OWNER).await.unwrap();
    assert_eq!(found, diary);
}

#[tokio::test]
async fn foreign_entries_are_denied() {
    let service = service();
    let diary = service.create(draft_on(march(15)), OWNER).await.unwrap();

    let error = service.find(diary.id, STRANGER).await.unwrap_err();
    assert!(matches!(error, DomainError::AccessDenied));

    let error = service
        .update(diary.id, draft_on(march(16)), STRANGER)
        .await
        .unwrap_err();
    assert!(matches!(error, DomainError::AccessDenied));

    let error = service.delete(diary.id, STRANGER).await.unwrap_err();
    assert!(matches!(error, DomainError::AccessDenied));
}

#[tokio::test]
async fn missing_entries_are_not_found() {
    let service = service();

    let error = service.find(999, OWNER).await.unwrap_err();
    assert!(matches!(error, DomainError::NotFound { .. }));
}

#[tokio::test]
async fn month_listing_covers_the_whole_month() {
    let service = service();

    service.create(draft_on(march(1)), OWNER).await.unwrap();
    service.create(draft_on(march(31)), OWNER).await.unwrap();
    service
        .create(draft_on(NaiveDate::from_ymd_opt(2024, 4, 1).unwrap()), OWNER)
        .await
        .unwrap();
    service.create(draft_on(march(10)), STRANGER).await.unwrap();

    let listed = service.find_by_month(2024, 3, OWNER).await.unwrap();

    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].date, march(31));
    assert_eq!(listed[1].date, march(1));
}

#[tokio::test]
async fn month_listing_rejects_invalid_months() {
    let service = service();

    let error = service.find_by_month(2024, 13, OWNER).await.unwrap_err();
    assert!(matches!(error, DomainError::Validation { .. }));

    let error = service.find_by_month(2024, 0, OWNER).await.unwrap_err();
    assert!(matches!(error, DomainError::Validation { .. }));
}

#[tokio::test]
async fn update_replaces_content() {
    let service = service();
    let diary = service.create(draft_on(march(15)), OWNER).await.unwrap();

    let new_draft = DiaryDraft {
        date: march(16),
        dog_name: "Choco".to_string(),
        title: "Rainy day".to_string(),
        content: "Stayed inside.".to_string(),
    };
    service.update(diary.id, new_draft, OWNER).await.unwrap();

    let updated = service.find(diary.id, OWNER).await.unwrap();
    assert_eq!(updated.date, march(16));
    assert_eq!(updated.dog_name, "Choco");
    assert_eq!(updated.title, "Rainy day");
    assert_eq!(updated.uuid, diary.uuid);
}

#[tokio::test]
async fn delete_removes_the_entry() {
    let service = service();
    let diary = service.create(draft_on(march(15)), OWNER).await.unwrap();

    service.delete(diary.id, OWNER).await.unwrap();

    let error = service.find(diary.id, OWNER).await.unwrap_err();
    assert!(matches!(error, DomainError::NotFound { .. }));
}

#[tokio::test]
async fn find_all_is_scoped_and_ordered() {
    let service = service();

    service.create(draft_on(march(5)), OWNER).await.unwrap();
    service.create(draft_on(march(20)), OWNER).await.unwrap();
    service.create(draft_on(march(10)), STRANGER).await.unwrap();

    let all = service.find_all(OWNER).await.unwrap();

    assert_eq!(all.len(), 2);
    assert_eq!(all[0].date, march(20));
    assert_eq!(all[1].date, march(5));
}
