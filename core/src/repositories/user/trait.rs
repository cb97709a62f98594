//! User repository trait defining the interface for user persistence.

use async_trait::async_trait;

use crate::domain::entities::user::{NewUser, User};
use crate::errors::DomainError;

/// Repository trait for User entity persistence operations
///
/// Implementations handle the actual database operations while keeping
/// the abstraction boundary between domain and infrastructure layers.
/// The store owns id assignment and enforces email uniqueness.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by their email address
    ///
    /// The lookup is exact; emails are compared as stored.
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user with the given email
    /// * `Err(DomainError)` - Database or other error occurred
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Find a user by their unique identifier
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user with the given id
    /// * `Err(DomainError)` - Database or other error occurred
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DomainError>;

    /// Create a new user, assigning its id
    ///
    /// A concurrent insert for the same email is arbitrated by the store's
    /// unique index; the violation must surface as
    /// [`AuthError::EmailTaken`](crate::errors::AuthError::EmailTaken),
    /// never as a generic database error.
    ///
    /// # Returns
    /// * `Ok(User)` - The created user with its store-assigned id
    /// * `Err(DomainError::Auth(AuthError::EmailTaken))` - Email already registered
    /// * `Err(DomainError)` - Creation failed
    async fn create(&self, user: NewUser) -> Result<User, DomainError>;
}
