//! Diary entry entity.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A diary entry owned by a kindergarten
///
/// Entries are scoped to the owning kindergarten; the `uuid` is a stable
/// external identifier that survives re-imports, while `id` is the
/// database key used in API paths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diary {
    /// Database-assigned id (0 until persisted)
    pub id: i64,

    /// Stable external identifier
    pub uuid: Uuid,

    /// Owning kindergarten
    pub kindergarten_id: i64,

    /// Day the entry is about
    pub date: NaiveDate,

    /// Name of the dog the entry is about
    pub dog_name: String,

    /// Entry title
    pub title: String,

    /// Entry body
    pub content: String,

    /// Timestamp when the entry was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the entry was last updated
    pub updated_at: DateTime<Utc>,
}

impl Diary {
    /// Creates a new, not-yet-persisted diary entry
    pub fn new(
        kindergarten_id: i64,
        date: NaiveDate,
        dog_name: String,
        title: String,
        content: String,
    ) -> Self {
        let now = Utc::now();

        Self {
            id: 0,
            uuid: Uuid::new_v4(),
            kindergarten_id,
            date,
            dog_name,
            title,
            content,
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether the entry belongs to the given kindergarten
    pub fn is_owned_by(&self, kindergarten_id: i64) -> bool {
        self.kindergarten_id == kindergarten_id
    }
}
