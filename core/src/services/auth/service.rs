//! Main authentication service implementation

use std::sync::Arc;

use bcrypt::{hash, verify, DEFAULT_COST};
use rand::distributions::Alphanumeric;
use rand::Rng;
use tracing::info;

use crate::domain::entities::kindergarten::Kindergarten;
use crate::domain::value_objects::{AuthInfo, AuthTokens};
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::{KindergartenRepository, RefreshTokenStore};
use crate::services::token::JwtTokenProvider;

use super::config::AuthServiceConfig;

/// Length of the opaque refresh token
const REFRESH_TOKEN_LENGTH: usize = 32;

/// Authentication facade composing the token provider and the refresh store
///
/// Safe to share across concurrent request handlers: the provider and the
/// configuration are read-only after construction, and all mutation goes
/// through the store's per-key operations. Concurrent writes for the same
/// identity resolve last-writer-wins; a login/logout race on one account is
/// accepted behavior.
pub struct AuthService<K, S>
where
    K: KindergartenRepository,
    S: RefreshTokenStore,
{
    /// Kindergarten account repository
    kindergarten_repository: Arc<K>,
    /// Refresh token store
    token_store: Arc<S>,
    /// JWT provider for access tokens
    token_provider: Arc<JwtTokenProvider>,
    /// Service configuration
    config: AuthServiceConfig,
}

impl<K, S> AuthService<K, S>
where
    K: KindergartenRepository,
    S: RefreshTokenStore,
{
    /// Create a new authentication service
    ///
    /// All collaborators are injected explicitly; nothing is resolved from
    /// process-global state.
    pub fn new(
        kindergarten_repository: Arc<K>,
        token_store: Arc<S>,
        token_provider: Arc<JwtTokenProvider>,
        config: AuthServiceConfig,
    ) -> Self {
        Self {
            kindergarten_repository,
            token_store,
            token_provider,
            config,
        }
    }

    /// Register a new kindergarten account
    ///
    /// # Arguments
    ///
    /// * `name` - Display name
    /// * `email` - Login email, must be unused
    /// * `password` - Plain-text password, bcrypt-hashed before storage
    /// * `password_confirmation` - Must match `password`
    ///
    /// # Returns
    ///
    /// * `Ok(Kindergarten)` - The saved account
    /// * `Err(DomainError)` - Confirmation mismatch, duplicate email, or
    ///   persistence failure
    pub async fn sign_up(
        &self,
        name: &str,
        email: &str,
        password: &str,
        password_confirmation: &str,
    ) -> DomainResult<Kindergarten> {
        if password != password_confirmation {
            return Err(AuthError::PasswordConfirmationMismatch.into());
        }

        if self.kindergarten_repository.exists_by_email(email).await? {
            return Err(AuthError::EmailAlreadyExists.into());
        }

        let password_hash = hash(password, DEFAULT_COST).map_err(|e| DomainError::Internal {
            message: format!("Password hashing failed: {}", e),
        })?;

        let kindergarten = self
            .kindergarten_repository
            .save(Kindergarten::new(
                name.to_string(),
                email.to_string(),
                password_hash,
            ))
            .await?;

        info!(kindergarten_id = kindergarten.id, "Kindergarten registered");
        Ok(kindergarten)
    }

    /// Authenticate with email and password, issuing a token pair
    ///
    /// A fresh refresh token replaces whatever was stored for the account
    /// before (last-writer-wins).
    ///
    /// # Returns
    ///
    /// * `Ok(AuthTokens)` - Access token plus rotated refresh token
    /// * `Err(DomainError)` - Unknown email or wrong password map to
    ///   `AuthError::InvalidCredentials`; store failures propagate
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<AuthTokens> {
        let kindergarten = self
            .kindergarten_repository
            .find_by_email(email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let password_matches =
            verify(password, &kindergarten.password_hash).map_err(|e| DomainError::Internal {
                message: format!("Password verification failed: {}", e),
            })?;

        if !password_matches {
            return Err(AuthError::InvalidCredentials.into());
        }

        self.issue_tokens(kindergarten.id).await
    }

    /// Exchange an expired (or still valid) access token plus the stored
    /// refresh token for a fresh token pair
    ///
    /// The identity comes from the access token claims, which only requires
    /// a valid signature, not an unexpired window. The presented refresh
    /// token must equal the stored one; absent or mismatched values are
    /// rejected. On success the refresh token is rotated.
    pub async fn refresh(&self, access_token: &str, refresh_token: &str) -> DomainResult<AuthTokens> {
        let auth_info = self.token_provider.extract_auth_info(access_token)?;

        let stored = self.token_store.get(auth_info.id).await?;
        match stored {
            Some(ref current) if current == refresh_token => {}
            _ => {
                info!(kindergarten_id = auth_info.id, "Refresh token rejected");
                return Err(AuthError::InvalidRefreshToken.into());
            }
        }

        self.issue_tokens(auth_info.id).await
    }

    /// Invalidate the stored refresh token for an account
    ///
    /// Idempotent: logging out twice is not an error. Outstanding access
    /// tokens stay valid until they expire; only the refresh path is cut.
    pub async fn logout(&self, kindergarten_id: i64) -> DomainResult<()> {
        self.token_store.delete(kindergarten_id).await?;
        Ok(())
    }

    /// Validate an access token for request authorization
    ///
    /// # Returns
    ///
    /// * `Ok(AuthInfo)` - The caller's identity
    /// * `Err(DomainError::Token)` - Classified validation failure
    pub fn authorize(&self, access_token: &str) -> DomainResult<AuthInfo> {
        self.token_provider.validate_token(access_token)
    }

    /// Issue an access token and rotate the stored refresh token
    async fn issue_tokens(&self, kindergarten_id: i64) -> DomainResult<AuthTokens> {
        let access_token = self.token_provider.create_access_token(kindergarten_id)?;
        let refresh_token = generate_refresh_token();

        self.token_store
            .set(
                kindergarten_id,
                &refresh_token,
                self.config.refresh_validity_ms as u64,
            )
            .await?;

        Ok(AuthTokens::new(
            access_token,
            refresh_token,
            self.config.access_validity_ms,
        ))
    }
}

/// Generates an opaque alphanumeric refresh token
fn generate_refresh_token() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(REFRESH_TOKEN_LENGTH)
        .map(char::from)
        .collect()
}
