//! Main token service implementation

use chrono::{DateTime, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use gk_shared::config::JwtConfig;

use crate::domain::entities::token::Claims;
use crate::errors::{DomainError, TokenError};

/// Service for minting and verifying JWT access tokens
///
/// Keys and expiry come from process-wide configuration loaded once at
/// startup; the service itself is immutable. Access tokens are stateless:
/// validity is the signature plus the embedded expiry, no store involved.
pub struct TokenService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Creates a new token service instance
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;

        Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// Signs an access token for a user
    ///
    /// Claims are exactly the subject id and email, expiring a configured
    /// duration after `now`.
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The signed JWT
    /// * `Err(TokenError::TokenGenerationFailed)` - Signing failed
    pub fn sign(
        &self,
        user_id: i64,
        email: &str,
        now: DateTime<Utc>,
    ) -> Result<String, DomainError> {
        let claims = Claims::new_access_token(
            user_id,
            email,
            now,
            self.config.access_token_expiry_minutes,
        );

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|_| DomainError::Token(TokenError::TokenGenerationFailed))
    }

    /// Verifies an access token and returns the claims
    ///
    /// # Returns
    ///
    /// * `Ok(Claims)` - The decoded claims if valid
    /// * `Err(TokenError::TokenExpired)` - Signature fine, token past expiry
    /// * `Err(TokenError::InvalidToken)` - Bad signature or malformed token
    pub fn verify(&self, token: &str) -> Result<Claims, DomainError> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                if e.kind() == &jsonwebtoken::errors::ErrorKind::ExpiredSignature {
                    DomainError::Token(TokenError::TokenExpired)
                } else {
                    DomainError::Token(TokenError::InvalidToken)
                }
            })?;

        Ok(token_data.claims)
    }

    /// Access token lifetime in seconds, for response payloads
    pub fn access_token_expiry_seconds(&self) -> i64 {
        self.config.access_token_expiry_minutes * 60
    }
}
