//! Authentication response value objects for API responses.

use serde::{Deserialize, Serialize};

use crate::domain::entities::user::User;

/// User identity fields exposed to authenticated callers
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthenticatedUser {
    /// Unique identifier for the user
    pub id: i64,

    /// Email address
    pub email: String,

    /// Full display name
    pub fullname: String,
}

impl From<&User> for AuthenticatedUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            fullname: user.fullname.clone(),
        }
    }
}

/// Authentication response returned by login and refresh
///
/// `refresh_token` carries the raw secret; this response is the only
/// place it ever appears in the clear.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthResponse {
    /// JWT access token for API authentication
    pub access_token: String,

    /// Raw refresh token secret for obtaining new access tokens
    pub refresh_token: String,

    /// Access token expiration time in seconds
    pub expires_in: i64,

    /// Authenticated user identity
    pub user: AuthenticatedUser,
}

/// Registration result returned to the caller
///
/// Carries everything the original account creation response exposes;
/// the password hash stays inside the core.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisteredUser {
    /// Unique identifier for the user
    pub id: i64,

    /// Email address
    pub email: String,

    /// Full display name
    pub fullname: String,

    /// Whether the email address has been verified
    pub email_verified: bool,

    /// Timestamp when the user was created
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<&User> for RegisteredUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            fullname: user.fullname.clone(),
            email_verified: user.email_verified,
            created_at: user.created_at,
        }
    }
}

/// Profile view returned by the profile lookup
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserProfile {
    /// Unique identifier for the user
    pub user_id: i64,

    /// Email address
    pub email: String,

    /// Whether the email address has been verified
    pub email_verified: bool,
}

impl From<&User> for UserProfile {
    fn from(user: &User) -> Self {
        Self {
            user_id: user.id,
            email: user.email.clone(),
            email_verified: user.email_verified,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample_user() -> User {
        User {
            id: 9,
            email: "alice@example.com".to_string(),
            password_hash: "hash".to_string(),
            fullname: "Alice A".to_string(),
            email_verified: false,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_authenticated_user_from_entity() {
        let user = sample_user();
        let authed = AuthenticatedUser::from(&user);

        assert_eq!(authed.id, 9);
        assert_eq!(authed.email, "alice@example.com");
        assert_eq!(authed.fullname, "Alice A");
    }

    #[test]
    fn test_profile_hides_credentials() {
        let user = sample_user();
        let profile = UserProfile::from(&user);

        assert_eq!(profile.user_id, 9);
        assert!(!profile.email_verified);

        let json = serde_json::to_string(&profile).unwrap();
        assert!(!json.contains("hash"));
    }
}
