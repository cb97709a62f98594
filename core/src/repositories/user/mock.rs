//! Mock implementation of UserRepository for testing

use async_trait::async_trait;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

use crate::domain::entities::user::{NewUser, User};
use crate::errors::{AuthError, DomainError};

use super::r#trait::UserRepository;

/// In-memory user repository for testing
///
/// Assigns sequential ids and enforces email uniqueness the way the real
/// store's unique index does.
pub struct MockUserRepository {
    pub users: Arc<Mutex<Vec<User>>>,
    next_id: AtomicI64,
}

impl MockUserRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        Self {
            users: Arc::new(Mutex::new(Vec::new())),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for MockUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DomainError> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.id == id).cloned())
    }

    async fn create(&self, user: NewUser) -> Result<User, DomainError> {
        let mut users = self.users.lock().unwrap();
        // Unique index stand-in
        if users.iter().any(|u| u.email == user.email) {
            return Err(DomainError::Auth(AuthError::EmailTaken));
        }
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let user = user.into_user(id);
        users.push(user.clone());
        Ok(user)
    }
}
