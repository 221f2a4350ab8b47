//! Tests for the authentication service

use std::sync::Arc;

use chrono::{Duration, Utc};

use crate::errors::{AuthError, DomainError, TokenError};
use crate::repositories::{MockKindergartenRepository, MockRefreshTokenStore};
use crate::services::auth::{AuthService, AuthServiceConfig};
use crate::services::token::{JwtTokenProvider, TokenConfig};

const TEST_SECRET: &str = "auth-service-test-secret-key";

struct TestHarness {
    service: AuthService<MockKindergartenRepository, MockRefreshTokenStore>,
    store: Arc<MockRefreshTokenStore>,
    provider: Arc<JwtTokenProvider>,
}

fn harness() -> TestHarness {
    let repository = Arc::new(MockKindergartenRepository::new());
    let store = Arc::new(MockRefreshTokenStore::new());
    let provider = Arc::new(JwtTokenProvider::new(&TokenConfig {
        secret: TEST_SECRET.to_string(),
        access_validity_ms: 60_000,
    }));

    let service = AuthService::new(
        Arc::clone(&repository),
        Arc::clone(&store),
        Arc::clone(&provider),
        AuthServiceConfig {
            access_validity_ms: 60_000,
            refresh_validity_ms: 600_000,
        },
    );

    TestHarness {
        service,
        store,
        provider,
    }
}

async fn sign_up_and_login(harness: &TestHarness) -> (i64, crate::domain::value_objects::AuthTokens) {
    let kindergarten = harness
        .service
        .sign_up("Sunshine", "sunshine@example.com", "secret-pw", "secret-pw")
        .await
        .unwrap();
    let tokens = harness
        .service
        .login("sunshine@example.com", "secret-pw")
        .await
        .unwrap();

    (kindergarten.id, tokens)
}

#[tokio::test]
async fn sign_up_rejects_mismatched_confirmation() {
    let harness = harness();

    let error = harness
        .service
        .sign_up("Sunshine", "sunshine@example.com", "secret-pw", "other-pw")
        .await
        .unwrap_err();

    assert!(matches!(
        error,
        DomainError::Auth(AuthError::PasswordConfirmationMismatch)
    ));
}

#[tokio::test]
async fn sign_up_rejects_duplicate_email() {
    let harness = harness();

    harness
        .service
        .sign_up("Sunshine", "sunshine@example.com", "secret-pw", "secret-pw")
        .await
        .unwrap();

    let error = harness
        .service
        .sign_up("Other", "sunshine@example.com", "secret-pw", "secret-pw")
        .await
        .unwrap_err();

    assert!(matches!(
        error,
        DomainError::Auth(AuthError::EmailAlreadyExists)
    ));
}

#[tokio::test]
async fn login_issues_tokens_and_stores_refresh_token() {
    let harness = harness();
    let (id, tokens) = sign_up_and_login(&harness).await;

    // The access token authorizes as the account that logged in.
    let info = harness.service.authorize(&tokens.access_token).unwrap();
    assert_eq!(info.id, id);

    // The refresh token was persisted under the account id.
    use crate::repositories::RefreshTokenStore;
    let stored = harness.store.get(id).await.unwrap();
    assert_eq!(stored, Some(tokens.refresh_token.clone()));

    assert_eq!(tokens.expires_in, 60);
}

#[tokio::test]
async fn login_rejects_unknown_email() {
    let harness = harness();

    let error = harness
        .service
        .login("nobody@example.com", "secret-pw")
        .await
        .unwrap_err();

    assert!(matches!(
        error,
        DomainError::Auth(AuthError::InvalidCredentials)
    ));
}

#[tokio::test]
async fn login_rejects_wrong_password() {
    let harness = harness();

    harness
        .service
        .sign_up("Sunshine", "sunshine@example.com", "secret-pw", "secret-pw")
        .await
        .unwrap();

    let error = harness
        .service
        .login("sunshine@example.com", "wrong-pw")
        .await
        .unwrap_err();

    assert!(matches!(
        error,
        DomainError::Auth(AuthError::InvalidCredentials)
    ));
}

#[tokio::test]
async fn refresh_rotates_the_stored_token() {
    let harness = harness();
    let (id, tokens) = sign_up_and_login(&harness).await;

    let renewed = harness
        .service
        .refresh(&tokens.access_token, &tokens.refresh_token)
        .await
        .unwrap();

    assert_ne!(renewed.refresh_token, tokens.refresh_token);

    use crate::repositories::RefreshTokenStore;
    let stored = harness.store.get(id).await.unwrap();
    assert_eq!(stored, Some(renewed.refresh_token.clone()));

    // The superseded refresh token no longer works.
    let error = harness
        .service
        .refresh(&tokens.access_token, &tokens.refresh_token)
        .await
        .unwrap_err();
    assert!(matches!(
        error,
        DomainError::Auth(AuthError::InvalidRefreshToken)
    ));
}

#[tokio::test]
async fn refresh_accepts_an_expired_access_token() {
    let harness = harness();
    let (id, tokens) = sign_up_and_login(&harness).await;

    let expired_access = harness
        .provider
        .create_access_token_at(id, Utc::now() - Duration::hours(2))
        .unwrap();

    let renewed = harness
        .service
        .refresh(&expired_access, &tokens.refresh_token)
        .await
        .unwrap();

    let info = harness.service.authorize(&renewed.access_token).unwrap();
    assert_eq!(info.id, id);
}

#[tokio::test]
async fn refresh_rejects_absent_mapping() {
    let harness = harness();
    let (id, tokens) = sign_up_and_login(&harness).await;

    harness.service.logout(id).await.unwrap();

    let error = harness
        .service
        .refresh(&tokens.access_token, &tokens.refresh_token)
        .await
        .unwrap_err();

    assert!(matches!(
        error,
        DomainError::Auth(AuthError::InvalidRefreshToken)
    ));
}

#[tokio::test]
async fn refresh_rejects_malformed_access_token() {
    let harness = harness();
    let (_, tokens) = sign_up_and_login(&harness).await;

    let error = harness
        .service
        .refresh("not-a-token", &tokens.refresh_token)
        .await
        .unwrap_err();

    assert!(matches!(
        error,
        DomainError::Token(TokenError::Malformed)
    ));
}

#[tokio::test]
async fn logout_is_idempotent() {
    let harness = harness();
    let (id, _) = sign_up_and_login(&harness).await;

    harness.service.logout(id).await.unwrap();
    harness.service.logout(id).await.unwrap();

    use crate::repositories::RefreshTokenStore;
    assert_eq!(harness.store.get(id).await.unwrap(), None);
}

#[tokio::test]
async fn authorize_classifies_expired_tokens() {
    let harness = harness();
    let (id, _) = sign_up_and_login(&harness).await;

    let expired = harness
        .provider
        .create_access_token_at(id, Utc::now() - Duration::hours(2))
        .unwrap();

    let error = harness.service.authorize(&expired).unwrap_err();
    assert!(matches!(error, DomainError::Token(TokenError::Expired)));
}
