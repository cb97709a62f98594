//! User entity representing a registered account in the GateKey system.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User entity representing a registered account
///
/// Identifiers are assigned by the user store on insert; the core never
/// invents them. The email is unique and compared exactly as stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user, assigned by the store
    pub id: i64,

    /// Unique email address (case-sensitive as stored)
    pub email: String,

    /// Argon2id hash of the password; the raw password is never stored
    pub password_hash: String,

    /// Full display name
    pub fullname: String,

    /// Whether the email address has been verified
    pub email_verified: bool,

    /// Timestamp when the user was created
    pub created_at: DateTime<Utc>,
}

/// Input record for creating a user; the store assigns the id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    /// Unique email address
    pub email: String,

    /// Argon2id hash of the password
    pub password_hash: String,

    /// Full display name
    pub fullname: String,

    /// Whether the email address has been verified
    pub email_verified: bool,

    /// Timestamp when the user was created
    pub created_at: DateTime<Utc>,
}

impl NewUser {
    /// Creates an input record for a freshly registered user
    ///
    /// New accounts always start unverified; verification is a separate
    /// flow outside this subsystem.
    pub fn new(
        email: impl Into<String>,
        password_hash: impl Into<String>,
        fullname: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            email: email.into(),
            password_hash: password_hash.into(),
            fullname: fullname.into(),
            email_verified: false,
            created_at,
        }
    }

    /// Builds the full entity once the store has assigned an id
    pub fn into_user(self, id: i64) -> User {
        User {
            id,
            email: self.email,
            password_hash: self.password_hash,
            fullname: self.fullname,
            email_verified: self.email_verified,
            created_at: self.created_at,
        }
    }
}
