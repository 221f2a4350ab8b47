//! JWT token provider implementation

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use tracing::info;

use crate::domain::entities::token::Claims;
use crate::domain::value_objects::AuthInfo;
use crate::errors::{DomainError, TokenError};

use super::config::TokenConfig;

/// Issues and verifies HMAC-SHA256 signed access tokens
///
/// The signing key material is derived from the configured secret once at
/// construction and is read-only afterwards, so a single provider instance
/// can be shared across request handlers without locking. All operations are
/// pure and CPU-bound.
pub struct JwtTokenProvider {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    /// Strict validation: signature and expiry, no leeway
    validation: Validation,
    /// Expiry-tolerant validation used by refresh flows
    extraction: Validation,
    validity: Duration,
}

impl JwtTokenProvider {
    /// Creates a new token provider
    ///
    /// # Arguments
    ///
    /// * `config` - Signing secret and access token validity window
    pub fn new(config: &TokenConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.validate_exp = true;

        let mut extraction = validation.clone();
        extraction.validate_exp = false;

        Self {
            encoding_key,
            decoding_key,
            validation,
            extraction,
            validity: Duration::milliseconds(config.access_validity_ms),
        }
    }

    /// Issues an access token for `id`, valid from now
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - Compact signed token (header.payload.signature)
    /// * `Err(DomainError)` - Signing failed
    pub fn create_access_token(&self, id: i64) -> Result<String, DomainError> {
        self.create_access_token_at(id, Utc::now())
    }

    /// Issues an access token for `id` with an explicit issued-at instant
    ///
    /// The expiry is `issued_at` plus the configured validity. Deterministic
    /// given identical inputs.
    pub fn create_access_token_at(
        &self,
        id: i64,
        issued_at: DateTime<Utc>,
    ) -> Result<String, DomainError> {
        let claims = Claims::new(id, issued_at, self.validity);

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(|e| {
            DomainError::Internal {
                message: format!("Failed to sign access token: {}", e),
            }
        })
    }

    /// Extracts the principal identity from a token, tolerating expiry
    ///
    /// An expired but correctly signed token still yields its identity; the
    /// refresh flow depends on this. Malformed tokens and signature
    /// mismatches fail with the classified error.
    pub fn extract_auth_info(&self, token: &str) -> Result<AuthInfo, DomainError> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.extraction)
            .map_err(|e| DomainError::Token(classify(e.kind())))?;

        Ok(AuthInfo::from(&data.claims))
    }

    /// Strictly validates a token and resolves the caller's identity
    ///
    /// Succeeds only when the signature is valid and the token is not past
    /// its expiry instant. Failures are classified as unsupported, expired,
    /// or malformed; only the classification is logged, never the token.
    ///
    /// # Returns
    ///
    /// * `Ok(AuthInfo)` - Identity from the verified claims
    /// * `Err(DomainError::Token)` - Classified validation failure
    pub fn validate_token(&self, token: &str) -> Result<AuthInfo, DomainError> {
        let data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                let kind = classify(e.kind());
                info!(kind = kind.code(), "Access token rejected");
                DomainError::Token(kind)
            })?;

        Ok(AuthInfo::from(&data.claims))
    }

    /// Access token validity window
    pub fn validity(&self) -> Duration {
        self.validity
    }
}

/// Maps decode failures onto the token error taxonomy
///
/// Signature mismatches and structural errors share the `Malformed` kind;
/// `Unsupported` is reserved for algorithm mismatches.
fn classify(kind: &jsonwebtoken::errors::ErrorKind) -> TokenError {
    use jsonwebtoken::errors::ErrorKind;

    match kind {
        ErrorKind::ExpiredSignature => TokenError::Expired,
        ErrorKind::InvalidAlgorithm | ErrorKind::InvalidAlgorithmName => TokenError::Unsupported,
        _ => TokenError::Malformed,
    }
}
