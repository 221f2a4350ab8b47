//! MySQL implementation of the DiaryRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use kl_core::domain::entities::diary::Diary;
use kl_core::errors::DomainError;
use kl_core::repositories::DiaryRepository;

/// MySQL implementation of DiaryRepository
pub struct MySqlDiaryRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlDiaryRepository {
    /// Create a new MySQL diary repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert a database row to a Diary entity
    fn row_to_diary(row: &sqlx::mysql::MySqlRow) -> Result<Diary, DomainError> {
        let uuid: String = row.try_get("uuid").map_err(|e| database_error("uuid", e))?;

        Ok(Diary {
            id: row.try_get("id").map_err(|e| database_error("id", e))?,
            uuid: Uuid::parse_str(&uuid).map_err(|e| DomainError::Database {
                message: format!("Invalid UUID: {}", e),
            })?,
            kindergarten_id: row
                .try_get("kindergarten_id")
                .map_err(|e| database_error("kindergarten_id", e))?,
            date: row
                .try_get::<NaiveDate, _>("date")
                .map_err(|e| database_error("date", e))?,
            dog_name: row
                .try_get("dog_name")
                .map_err(|e| database_error("dog_name", e))?,
            title: row
                .try_get("title")
                .map_err(|e| database_error("title", e))?,
            content: row
                .try_get("content")
                .map_err(|e| database_error("content", e))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| database_error("created_at", e))?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| database_error("updated_at", e))?,
        })
    }
}

#[async_trait]
impl DiaryRepository for MySqlDiaryRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Diary>, DomainError> {
        let query = r#"
            SELECT id, uuid, kindergarten_id, date, dog_name, title, content,
                   created_at, updated_at
            FROM diaries
            WHERE id = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(query_error)?;

        match result {
            Some(row) => Ok(Some(Self::row_to_diary(&row)?)),
            None => Ok(None),
        }
    }

    async fn find_by_uuid(&self, uuid: Uuid) -> Result<Option<Diary>, DomainError> {
        let query = r#"
            SELECT id, uuid, kindergarten_id, date, dog_name, title, content,
                   created_at, updated_at
            FROM diaries
            WHERE uuid = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(uuid.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(query_error)?;

        match result {
            Some(row) => Ok(Some(Self::row_to_diary(&row)?)),
            None => Ok(None),
        }
    }

    async fn find_by_kindergarten(&self, kindergarten_id: i64) -> Result<Vec<Diary>, DomainError> {
        let query = r#"
            SELECT id, uuid, kindergarten_id, date, dog_name, title, content,
                   created_at, updated_at
            FROM diaries
            WHERE kindergarten_id = ?
            ORDER BY date DESC
        "#;

        let rows = sqlx::query(query)
            .bind(kindergarten_id)
            .fetch_all(&self.pool)
            .await
            .map_err(query_error)?;

        rows.iter().map(Self::row_to_diary).collect()
    }

    async fn find_by_kindergarten_and_date_between(
        &self,
        kindergarten_id: i64,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Diary>, DomainError> {
        let query = r#"
            SELECT id, uuid, kindergarten_id, date, dog_name, title, content,
                   created_at, updated_at
            FROM diaries
            WHERE kindergarten_id = ? AND date BETWEEN ? AND ?
            ORDER BY date DESC
        "#;

        let rows = sqlx::query(query)
            .bind(kindergarten_id)
            .bind(start)
            .bind(end)
            .fetch_all(&self.pool)
            .await
            .map_err(query_error)?;

        rows.iter().map(Self::row_to_diary).collect()
    }

    async fn save(&self, diary: Diary) -> Result<Diary, DomainError> {
        let query = r#"
            INSERT INTO diaries (uuid, kindergarten_id, date, dog_name, title, content,
                                 created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        let result = sqlx::query(query)
            .bind(diary.uuid.to_string())
            .bind(diary.kindergarten_id)
            .bind(diary.date)
            .bind(&diary.dog_name)
            .bind(&diary.title)
            .bind(&diary.content)
            .bind(diary.created_at)
            .bind(diary.updated_at)
            .execute(&self.pool)
            .await
            .map_err(query_error)?;

        Ok(Diary {
            id: result.last_insert_id() as i64,
            ..diary
        })
    }

    async fn update(&self, diary: &Diary) -> Result<(), DomainError> {
        let query = r#"
            UPDATE diaries
            SET date = ?, dog_name = ?, title = ?, content = ?, updated_at = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(diary.date)
            .bind(&diary.dog_name)
            .bind(&diary.title)
            .bind(&diary.content)
            .bind(diary.updated_at)
            .bind(diary.id)
            .execute(&self.pool)
            .await
            .map_err(query_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound {
                resource: format!("diary {}", diary.id),
            });
        }

        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        let query = "DELETE FROM diaries WHERE id = ?";

        let result = sqlx::query(query)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(query_error)?;

        Ok(result.rows_affected() > 0)
    }
}

fn query_error(error: sqlx::Error) -> DomainError {
    DomainError::Database {
        message: format!("Database query failed: {}", error),
    }
}

fn database_error(column: &str, error: sqlx::Error) -> DomainError {
    DomainError::Database {
        message: format!("Failed to get {}: {}", column, error),
    }
}
