//! Main authentication service implementation

use std::sync::Arc;

use crate::clock::Clock;
use crate::domain::entities::token::{NewRefreshToken, RefreshToken};
use crate::domain::entities::user::{NewUser, User};
use crate::domain::value_objects::{AuthResponse, AuthenticatedUser, RegisteredUser, UserProfile};
use crate::errors::{AuthError, DomainError, DomainResult, TokenError};
use crate::repositories::{RefreshTokenRepository, UserRepository};
use crate::services::password::PasswordHasher;
use crate::services::token::TokenService;

use super::config::AuthServiceConfig;
use super::policy;

/// Authentication service for managing the complete authentication flow
///
/// Stateless between calls: all durable state lives behind the injected
/// repositories. Every collaborator arrives through the constructor, so
/// there is no ambient configuration lookup anywhere in the flow.
pub struct AuthService<U, T, C>
where
    U: UserRepository,
    T: RefreshTokenRepository,
    C: Clock,
{
    /// User repository for account lookups and creation
    user_repository: Arc<U>,
    /// Refresh token repository for session persistence
    token_repository: Arc<T>,
    /// Argon2id hasher shared by passwords and refresh-token secrets
    password_hasher: Arc<PasswordHasher>,
    /// JWT minter for access tokens
    token_service: Arc<TokenService>,
    /// Time source for every expiry decision
    clock: Arc<C>,
    /// Service configuration
    config: AuthServiceConfig,
}

impl<U, T, C> AuthService<U, T, C>
where
    U: UserRepository,
    T: RefreshTokenRepository,
    C: Clock,
{
    /// Create a new authentication service
    pub fn new(
        user_repository: Arc<U>,
        token_repository: Arc<T>,
        password_hasher: Arc<PasswordHasher>,
        token_service: Arc<TokenService>,
        clock: Arc<C>,
        config: AuthServiceConfig,
    ) -> Self {
        Self {
            user_repository,
            token_repository,
            password_hasher,
            token_service,
            clock,
            config,
        }
    }

    /// Register a new user account
    ///
    /// This method:
    /// 1. Validates the email shape
    /// 2. Rejects emails that already have an account (checked before the
    ///    password policy so duplicate-email errors take precedence)
    /// 3. Validates password strength
    /// 4. Hashes the password and persists the new user, unverified
    ///
    /// Registration issues no tokens; login is the separate explicit step.
    ///
    /// # Returns
    ///
    /// * `Ok(RegisteredUser)` - The created account, without credentials
    /// * `Err(AuthError::InvalidEmail)` - Malformed email
    /// * `Err(AuthError::EmailTaken)` - Email already registered
    /// * `Err(AuthError::WeakPassword)` - First failed policy rule
    pub async fn register_user(
        &self,
        email: &str,
        password: &str,
        fullname: &str,
    ) -> DomainResult<RegisteredUser> {
        if !policy::is_valid_email(email) {
            return Err(AuthError::InvalidEmail.into());
        }

        if self.user_repository.find_by_email(email).await?.is_some() {
            return Err(AuthError::EmailTaken.into());
        }

        policy::check_password_strength(password)?;

        let password_hash = self.hash_blocking(password.to_string()).await?;
        let now = self.clock.now();

        // A concurrent registration can still slip between the lookup and
        // this insert; the store's unique index reports it as EmailTaken.
        let user = self
            .user_repository
            .create(NewUser::new(email, password_hash, fullname, now))
            .await?;

        tracing::debug!(user_id = user.id, "registered new user");
        Ok(RegisteredUser::from(&user))
    }

    /// Authenticate a user and issue an access/refresh token pair
    ///
    /// Unknown email and wrong password produce the same
    /// `InvalidCredentials` error so callers cannot probe which emails
    /// exist.
    pub async fn login_user(&self, email: &str, password: &str) -> DomainResult<AuthResponse> {
        let user = self
            .user_repository
            .find_by_email(email)
            .await?
            .ok_or(DomainError::Auth(AuthError::InvalidCredentials))?;

        let password_ok = self
            .verify_blocking(password.to_string(), user.password_hash.clone())
            .await?;
        if !password_ok {
            return Err(AuthError::InvalidCredentials.into());
        }

        tracing::debug!(user_id = user.id, "login succeeded");
        self.issue_tokens(&user).await
    }

    /// Exchange a refresh token for a new token pair (rotation)
    ///
    /// This method:
    /// 1. Fetches the bounded window of active tokens, newest first
    /// 2. Tests the presented secret against each candidate hash,
    ///    first match wins
    /// 3. Resolves the owning user
    /// 4. Revokes the matched row, then issues a fresh pair as in login
    ///
    /// The revocation is a conditional update; losing it means a
    /// concurrent call already rotated this secret, and this caller gets
    /// `InvalidRefreshToken`. Each secret therefore rotates at most once.
    ///
    /// # Returns
    ///
    /// * `Ok(AuthResponse)` - New access and refresh tokens
    /// * `Err(TokenError::InvalidRefreshToken)` - No match, or lost the rotation race
    /// * `Err(AuthError::UserNotFound)` - Owner row is gone (store inconsistency)
    pub async fn refresh_token(&self, raw_token: &str) -> DomainResult<AuthResponse> {
        let matched = self
            .find_matching_token(raw_token)
            .await?
            .ok_or(DomainError::Token(TokenError::InvalidRefreshToken))?;

        let user = self
            .user_repository
            .find_by_id(matched.user_id)
            .await?
            .ok_or_else(|| {
                tracing::warn!(
                    token_id = matched.id,
                    user_id = matched.user_id,
                    "refresh token owner is missing"
                );
                DomainError::Auth(AuthError::UserNotFound)
            })?;

        if !self
            .token_repository
            .revoke(matched.id, self.clock.now())
            .await?
        {
            tracing::warn!(token_id = matched.id, "lost refresh rotation race");
            return Err(TokenError::InvalidRefreshToken.into());
        }

        self.issue_tokens(&user).await
    }

    /// Revoke the session behind a refresh token
    ///
    /// Idempotent by design: an unknown, expired or already-revoked token
    /// is a silent no-op, so the caller learns nothing about session
    /// state from the outcome.
    pub async fn logout(&self, raw_token: &str) -> DomainResult<()> {
        if let Some(matched) = self.find_matching_token(raw_token).await? {
            // A lost race means another call revoked it first; same outcome
            let _ = self
                .token_repository
                .revoke(matched.id, self.clock.now())
                .await?;
            tracing::debug!(token_id = matched.id, "session revoked on logout");
        }
        Ok(())
    }

    /// Fetch the profile view of a user
    pub async fn get_user_profile(&self, user_id: i64) -> DomainResult<UserProfile> {
        let user = self
            .user_repository
            .find_by_id(user_id)
            .await?
            .ok_or(DomainError::Auth(AuthError::UserNotFound))?;

        Ok(UserProfile::from(&user))
    }

    /// Sign an access token and persist a new refresh token for `user`
    ///
    /// The raw refresh secret exists only in the returned response; the
    /// store receives its argon2 hash.
    async fn issue_tokens(&self, user: &User) -> DomainResult<AuthResponse> {
        let now = self.clock.now();
        let access_token = self.token_service.sign(user.id, &user.email, now)?;

        let raw_secret = RefreshToken::generate_secret();
        let token_hash = self.hash_blocking(raw_secret.clone()).await?;

        self.token_repository
            .create(NewRefreshToken::new(
                user.id,
                token_hash,
                now,
                self.config.refresh_token_ttl_days,
            ))
            .await?;

        Ok(AuthResponse {
            access_token,
            refresh_token: raw_secret,
            expires_in: self.token_service.access_token_expiry_seconds(),
            user: AuthenticatedUser::from(user),
        })
    }

    /// Scan the active-token window for the row matching a raw secret
    ///
    /// Salted hashes cannot be indexed, so this walks the recency-ordered
    /// window and verifies one candidate at a time. The scan runs on the
    /// blocking pool; argon2 work never stalls the async executor.
    async fn find_matching_token(&self, raw_token: &str) -> DomainResult<Option<RefreshToken>> {
        let now = self.clock.now();
        let candidates = self
            .token_repository
            .find_active(now, self.config.candidate_window_limit)
            .await?;

        tracing::debug!(candidates = candidates.len(), "scanning active refresh tokens");

        let hasher = Arc::clone(&self.password_hasher);
        let raw = raw_token.to_string();
        tokio::task::spawn_blocking(move || {
            candidates
                .into_iter()
                .find(|token| hasher.verify(&raw, &token.token_hash))
        })
        .await
        .map_err(|e| DomainError::Internal {
            message: format!("Token matching task failed: {}", e),
        })
    }

    /// Hash a secret on the blocking pool
    async fn hash_blocking(&self, secret: String) -> DomainResult<String> {
        let hasher = Arc::clone(&self.password_hasher);
        tokio::task::spawn_blocking(move || hasher.hash(&secret))
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Hashing task failed: {}", e),
            })?
    }

    /// Verify a secret against a hash on the blocking pool
    async fn verify_blocking(&self, secret: String, hash: String) -> DomainResult<bool> {
        let hasher = Arc::clone(&self.password_hasher);
        tokio::task::spawn_blocking(move || hasher.verify(&secret, &hash))
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Verification task failed: {}", e),
            })
    }
}
