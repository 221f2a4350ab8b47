//! Diary route handlers
//!
//! All endpoints require authentication; entries are scoped to the calling
//! kindergarten.

pub mod create_diary;
pub mod delete_diary;
pub mod find_dates;
pub mod find_diaries;
pub mod find_diary;
pub mod update_diary;
