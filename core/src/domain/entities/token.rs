//! JWT claims for access tokens.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Claims structure embedded in the access token payload
///
/// The access token is self-contained: it carries the kindergarten id and a
/// validity window, and becomes invalid purely by time or by signature
/// mismatch. There is no server-side revocation for access tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Kindergarten id of the authenticated principal
    pub id: i64,

    /// Issued-at timestamp (Unix seconds)
    pub iat: i64,

    /// Expiration timestamp (Unix seconds)
    pub exp: i64,
}

impl Claims {
    /// Creates claims for an access token issued at `issued_at`
    ///
    /// The expiry instant is `issued_at + validity`. JWT timestamps are
    /// NumericDate values, so sub-second precision truncates here.
    pub fn new(id: i64, issued_at: DateTime<Utc>, validity: Duration) -> Self {
        let expiry = issued_at + validity;

        Self {
            id,
            iat: issued_at.timestamp(),
            exp: expiry.timestamp(),
        }
    }

    /// Checks whether the claims are past their expiry instant
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() > self.exp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn claims_embed_identity_and_window() {
        let now = Utc::now();
        let claims = Claims::new(42, now, Duration::minutes(30));

        assert_eq!(claims.id, 42);
        assert_eq!(claims.iat, now.timestamp());
        assert_eq!(claims.exp, (now + Duration::minutes(30)).timestamp());
        assert!(!claims.is_expired());
    }

    #[test]
    fn past_expiry_is_detected() {
        let issued = Utc::now() - Duration::hours(2);
        let claims = Claims::new(7, issued, Duration::hours(1));

        assert!(claims.is_expired());
    }

    #[test]
    fn claims_round_trip_through_json() {
        let claims = Claims::new(3, Utc::now(), Duration::minutes(5));
        let json = serde_json::to_string(&claims).unwrap();
        let parsed: Claims = serde_json::from_str(&json).unwrap();

        assert_eq!(claims, parsed);
    }
}
