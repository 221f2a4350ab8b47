//! MySQL implementation of the KindergartenRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};

use kl_core::domain::entities::kindergarten::Kindergarten;
use kl_core::errors::DomainError;
use kl_core::repositories::KindergartenRepository;

/// MySQL implementation of KindergartenRepository
pub struct MySqlKindergartenRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlKindergartenRepository {
    /// Create a new MySQL kindergarten repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert a database row to a Kindergarten entity
    fn row_to_kindergarten(row: &sqlx::mysql::MySqlRow) -> Result<Kindergarten, DomainError> {
        Ok(Kindergarten {
            id: row
                .try_get("id")
                .map_err(|e| database_error("id", e))?,
            name: row
                .try_get("name")
                .map_err(|e| database_error("name", e))?,
            email: row
                .try_get("email")
                .map_err(|e| database_error("email", e))?,
            password_hash: row
                .try_get("password_hash")
                .map_err(|e| database_error("password_hash", e))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| database_error("created_at", e))?,
        })
    }
}

#[async_trait]
impl KindergartenRepository for MySqlKindergartenRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<Kindergarten>, DomainError> {
        let query = r#"
            SELECT id, name, email, password_hash, created_at
            FROM kindergartens
            WHERE email = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(query_error)?;

        match result {
            Some(row) => Ok(Some(Self::row_to_kindergarten(&row)?)),
            None => Ok(None),
        }
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Kindergarten>, DomainError> {
        let query = r#"
            SELECT id, name, email, password_hash, created_at
            FROM kindergartens
            WHERE id = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(query_error)?;

        match result {
            Some(row) => Ok(Some(Self::row_to_kindergarten(&row)?)),
            None => Ok(None),
        }
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
        let query = "SELECT EXISTS(SELECT 1 FROM kindergartens WHERE email = ?) AS present";

        let row = sqlx::query(query)
            .bind(email)
            .fetch_one(&self.pool)
            .await
            .map_err(query_error)?;

        let present: i64 = row.try_get("present").map_err(|e| database_error("present", e))?;
        Ok(present != 0)
    }

    async fn save(&self, kindergarten: Kindergarten) -> Result<Kindergarten, DomainError> {
        let query = r#"
            INSERT INTO kindergartens (name, email, password_hash, created_at)
            VALUES (?, ?, ?, ?)
        "#;

        let result = sqlx::query(query)
            .bind(&kindergarten.name)
            .bind(&kindergarten.email)
            .bind(&kindergarten.password_hash)
            .bind(kindergarten.created_at)
            .execute(&self.pool)
            .await
            .map_err(query_error)?;

        Ok(Kindergarten {
            id: result.last_insert_id() as i64,
            ..kindergarten
        })
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
