//! Token entities: JWT claims and stored refresh tokens.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Claims structure for the access token JWT payload
///
/// The identity claims are exactly the subject and email; `iat`/`exp`
/// carry the issuance window the signature covers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user id)
    pub sub: i64,

    /// Email of the subject
    pub email: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,
}

impl Claims {
    /// Creates new claims for an access token
    pub fn new_access_token(
        user_id: i64,
        email: impl Into<String>,
        issued_at: DateTime<Utc>,
        expiry_minutes: i64,
    ) -> Self {
        let expiry = issued_at + Duration::minutes(expiry_minutes);

        Self {
            sub: user_id,
            email: email.into(),
            iat: issued_at.timestamp(),
            exp: expiry.timestamp(),
        }
    }

    /// Checks whether the claims are expired at the given instant
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now.timestamp() >= self.exp
    }
}

/// Refresh token entity stored in the database
///
/// Only the argon2 hash of the secret is ever stored; the raw secret
/// exists exactly once, in the response that issued it. Rows are never
/// deleted, revocation sets `revoked_at`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshToken {
    /// Unique identifier, assigned by the store
    pub id: i64,

    /// User this token belongs to
    pub user_id: i64,

    /// Hashed token secret
    pub token_hash: String,

    /// Timestamp when the token expires
    pub expires_at: DateTime<Utc>,

    /// Timestamp when the token was revoked; None means active
    pub revoked_at: Option<DateTime<Utc>>,

    /// Timestamp when the token was created
    pub created_at: DateTime<Utc>,
}

impl RefreshToken {
    /// Checks whether the token is usable at the given instant
    ///
    /// A token is usable iff it has not been revoked and has not expired.
    pub fn is_active(&self, now: DateTime<Utc>) -> bool {
        self.revoked_at.is_none() && self.expires_at > now
    }

    /// Generates a fresh raw refresh-token secret
    ///
    /// Two concatenated v4 UUIDs, over 256 bits of randomness. The caller
    /// hashes this before it reaches a store.
    pub fn generate_secret() -> String {
        format!("{}-{}", Uuid::new_v4(), Uuid::new_v4())
    }
}

/// Input record for persisting a refresh token; the store assigns the id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRefreshToken {
    /// User this token belongs to
    pub user_id: i64,

    /// Hashed token secret
    pub token_hash: String,

    /// Timestamp when the token expires
    pub expires_at: DateTime<Utc>,

    /// Timestamp when the token was created
    pub created_at: DateTime<Utc>,
}

impl NewRefreshToken {
    /// Creates an input record expiring `ttl_days` after `created_at`
    pub fn new(
        user_id: i64,
        token_hash: impl Into<String>,
        created_at: DateTime<Utc>,
        ttl_days: i64,
    ) -> Self {
        Self {
            user_id,
            token_hash: token_hash.into(),
            expires_at: created_at + Duration::days(ttl_days),
            created_at,
        }
    }

    /// Builds the full entity once the store has assigned an id
    pub fn into_token(self, id: i64) -> RefreshToken {
        RefreshToken {
            id,
            user_id: self.user_id,
            token_hash: self.token_hash,
            expires_at: self.expires_at,
            revoked_at: None,
            created_at: self.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_token_claims() {
        let now = Utc::now();
        let claims = Claims::new_access_token(7, "alice@example.com", now, 60);

        assert_eq!(claims.sub, 7);
        assert_eq!(claims.email, "alice@example.com");
        assert_eq!(claims.iat, now.timestamp());
        assert_eq!(claims.exp, (now + Duration::minutes(60)).timestamp());
        assert!(!claims.is_expired_at(now));
        assert!(claims.is_expired_at(now + Duration::minutes(61)));
    }

    #[test]
    fn test_refresh_token_creation() {
        let now = Utc::now();
        let token = NewRefreshToken::new(3, "hashed_secret", now, 30).into_token(11);

        assert_eq!(token.id, 11);
        assert_eq!(token.user_id, 3);
        assert_eq!(token.token_hash, "hashed_secret");
        assert_eq!(token.expires_at, now + Duration::days(30));
        assert!(token.revoked_at.is_none());
        assert!(token.is_active(now));
    }

    #[test]
    fn test_refresh_token_revocation() {
        let now = Utc::now();
        let mut token = NewRefreshToken::new(3, "hash", now, 30).into_token(1);

        assert!(token.is_active(now));

        token.revoked_at = Some(now);

        assert!(!token.is_active(now));
    }

    #[test]
    fn test_refresh_token_expiration() {
        let now = Utc::now();
        let token = NewRefreshToken::new(3, "hash", now - Duration::days(31), 30).into_token(1);

        assert!(token.revoked_at.is_none());
        assert!(!token.is_active(now));
    }

    #[test]
    fn test_generated_secrets_differ() {
        let a = RefreshToken::generate_secret();
        let b = RefreshToken::generate_secret();

        assert_ne!(a, b);
        // two UUIDs joined by a dash
        assert_eq!(a.len(), 73);
    }

    #[test]
    fn test_refresh_token_serialization() {
        let token = NewRefreshToken::new(3, "token_hash", Utc::now(), 30).into_token(5);

        let json = serde_json::to_string(&token).unwrap();
        let deserialized: RefreshToken = serde_json::from_str(&json).unwrap();

        assert_eq!(token, deserialized);
    }
}
