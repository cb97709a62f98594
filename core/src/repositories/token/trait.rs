//! Refresh token repository trait defining the interface for token persistence.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::entities::token::{NewRefreshToken, RefreshToken};
use crate::errors::DomainError;

/// Repository trait for RefreshToken entity persistence operations
///
/// Token secrets are hashed with a randomized-salt algorithm, so there is
/// no direct lookup by secret. The store instead exposes a bounded,
/// recency-ordered window of active tokens ([`find_active`]) that the
/// service tests one at a time. Rows are never deleted; revocation sets
/// a timestamp, keeping the audit trail intact.
///
/// [`find_active`]: RefreshTokenRepository::find_active
#[async_trait]
pub trait RefreshTokenRepository: Send + Sync {
    /// Persist a new refresh token, assigning its id
    ///
    /// # Returns
    /// * `Ok(RefreshToken)` - The saved token with its store-assigned id
    /// * `Err(DomainError)` - Save failed
    async fn create(&self, token: NewRefreshToken) -> Result<RefreshToken, DomainError>;

    /// Find active tokens, newest-created-first, capped at `limit`
    ///
    /// Active means not revoked and not expired at `now`. The cap bounds
    /// the worst-case cost of candidate matching and favors recently
    /// issued sessions.
    ///
    /// # Returns
    /// * `Ok(Vec<RefreshToken>)` - At most `limit` tokens, newest first
    /// * `Err(DomainError)` - Database error occurred
    async fn find_active(
        &self,
        now: DateTime<Utc>,
        limit: usize,
    ) -> Result<Vec<RefreshToken>, DomainError>;

    /// Revoke a token by id, if it is not already revoked
    ///
    /// The update is conditional on `revoked_at` still being unset, which
    /// makes it the arbiter between concurrent rotations of the same raw
    /// token: exactly one caller observes `true`.
    ///
    /// # Returns
    /// * `Ok(true)` - This call revoked the token
    /// * `Ok(false)` - Token was already revoked or does not exist
    /// * `Err(DomainError)` - Revocation failed
    async fn revoke(&self, id: i64, revoked_at: DateTime<Utc>) -> Result<bool, DomainError>;
}
