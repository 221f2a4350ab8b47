//! Diary request/response DTOs

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use kl_core::domain::entities::diary::Diary;
use kl_core::domain::value_objects::DiaryDraft;

/// Request body for POST /api/v1/diaries
#[derive(Debug, Deserialize, Validate)]
pub struct DiarySaveRequest {
    pub date: NaiveDate,

    #[validate(length(min = 1, max = 30, message = "must be 1-30 characters"))]
    pub dog_name: String,

    #[validate(length(min = 1, max = 100, message = "must be 1-100 characters"))]
    pub title: String,

    #[validate(length(min = 1, max = 2000, message = "must be 1-2000 characters"))]
    pub content: String,
}

impl DiarySaveRequest {
    pub fn into_draft(self) -> DiaryDraft {
        DiaryDraft {
            date: self.date,
            dog_name: self.dog_name,
            title: self.title,
            content: self.content,
        }
    }
}

/// Request body for PUT /api/v1/diaries/{diary_id}
#[derive(Debug, Deserialize, Validate)]
pub struct DiaryUpdateRequest {
    pub date: NaiveDate,

    #[validate(length(min = 1, max = 30, message = "must be 1-30 characters"))]
    pub dog_name: String,

    #[validate(length(min = 1, max = 100, message = "must be 1-100 characters"))]
    pub title: String,

    #[validate(length(min = 1, max = 2000, message = "must be 1-2000 characters"))]
    pub content: String,
}

impl DiaryUpdateRequest {
    pub fn into_draft(self) -> DiaryDraft {
        DiaryDraft {
            date: self.date,
            dog_name: self.dog_name,
            title: self.title,
            content: self.content,
        }
    }
}

/// Query parameters for GET /api/v1/diaries
#[derive(Debug, Deserialize, Validate)]
pub struct DiarySearchQuery {
    #[validate(range(min = 2000, max = 2100, message = "must be 2000-2100"))]
    pub year: i32,

    #[validate(range(min = 1, max = 12, message = "must be 1-12"))]
    pub month: u32,
}

/// A single diary entry
#[derive(Debug, Serialize, Deserialize)]
pub struct DiaryResponse {
    pub id: i64,
    pub uuid: Uuid,
    pub date: NaiveDate,
    pub dog_name: String,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl From<Diary> for DiaryResponse {
    fn from(diary: Diary) -> Self {
        Self {
            id: diary.id,
            uuid: diary.uuid,
            date: diary.date,
            dog_name: diary.dog_name,
            title: diary.title,
            content: diary.content,
            created_at: diary.created_at,
        }
    }
}

/// Entry list wrapper
#[derive(Debug, Serialize, Deserialize)]
pub struct DiaryListResponse {
    pub diaries: Vec<DiaryResponse>,
}

impl DiaryListResponse {
    pub fn from_entries(entries: Vec<Diary>) -> Self {
        Self {
            diaries: entries.into_iter().map(DiaryResponse::from).collect(),
        }
    }
}

/// Date summary of one entry
#[derive(Debug, Serialize, Deserialize)]
pub struct DiaryDateResponse {
    pub id: i64,
    pub date: NaiveDate,
}

/// Which dates have entries
#[derive(Debug, Serialize, Deserialize)]
pub struct DiaryDateListResponse {
    pub dates: Vec<DiaryDateResponse>,
}

impl DiaryDateListResponse {
    pub fn from_entries(entries: Vec<Diary>) -> Self {
        Self {
            dates: entries
                .into_iter()
                .map(|d| DiaryDateResponse {
                    id: d.id,
                    date: d.date,
                })
                .collect(),
        }
    }
}

/// Response body for a created entry
#[derive(Debug, Serialize, Deserialize)]
pub struct DiarySaveResponse {
    pub id: i64,
}
