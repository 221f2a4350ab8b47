//! Kindergarten account entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A kindergarten account
///
/// The kindergarten is the authentication principal: its numeric id is the
/// identity embedded in access tokens and the key under which the refresh
/// token is stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Kindergarten {
    /// Database-assigned id (0 until persisted)
    pub id: i64,

    /// Display name
    pub name: String,

    /// Login email, unique across accounts
    pub email: String,

    /// bcrypt hash of the login password
    pub password_hash: String,

    /// Timestamp when the account was created
    pub created_at: DateTime<Utc>,
}

impl Kindergarten {
    /// Creates a new, not-yet-persisted kindergarten account
    pub fn new(name: String, email: String, password_hash: String) -> Self {
        Self {
            id: 0,
            name,
            email,
            password_hash,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_account_has_no_id_yet() {
        let kindergarten = Kindergarten::new(
            "Sunshine".to_string(),
            "sunshine@example.com".to_string(),
            "$2b$12$hash".to_string(),
        );

        assert_eq!(kindergarten.id, 0);
        assert_eq!(kindergarten.email, "sunshine@example.com");
    }
}
