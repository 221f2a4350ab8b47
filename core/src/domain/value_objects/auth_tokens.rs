//! Token pair returned to the client after login or refresh.

use serde::{Deserialize, Serialize};

/// Access/refresh token pair issued to a client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthTokens {
    /// Signed JWT access token
    pub access_token: String,

    /// Opaque refresh token, stored server-side keyed by identity
    pub refresh_token: String,

    /// Access token validity in seconds
    pub expires_in: i64,
}

impl AuthTokens {
    /// Creates a token pair; `access_validity_ms` is reported to clients in
    /// whole seconds
    pub fn new(access_token: String, refresh_token: String, access_validity_ms: i64) -> Self {
        Self {
            access_token,
            refresh_token,
            expires_in: access_validity_ms / 1000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expiry_is_reported_in_seconds() {
        let tokens = AuthTokens::new("access".to_string(), "refresh".to_string(), 1_800_000);
        assert_eq!(tokens.expires_in, 1800);
    }
}
