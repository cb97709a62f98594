//! Mock implementation of RefreshTokenRepository for testing

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::token::{NewRefreshToken, RefreshToken};
use crate::errors::DomainError;

use super::r#trait::RefreshTokenRepository;

/// In-memory refresh token repository for testing
pub struct MockRefreshTokenRepository {
    tokens: Arc<RwLock<Vec<RefreshToken>>>,
    next_id: AtomicI64,
}

impl MockRefreshTokenRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        Self {
            tokens: Arc::new(RwLock::new(Vec::new())),
            next_id: AtomicI64::new(1),
        }
    }

    /// Snapshot of all stored rows, revoked and expired included
    pub async fn all(&self) -> Vec<RefreshToken> {
        self.tokens.read().await.clone()
    }
}

impl Default for MockRefreshTokenRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RefreshTokenRepository for MockRefreshTokenRepository {
    async fn create(&self, token: NewRefreshToken) -> Result<RefreshToken, DomainError> {
        let mut tokens = self.tokens.write().await;
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let token = token.into_token(id);
        tokens.push(token.clone());
        Ok(token)
    }

    async fn find_active(
        &self,
        now: DateTime<Utc>,
        limit: usize,
    ) -> Result<Vec<RefreshToken>, DomainError> {
        let tokens = self.tokens.read().await;
        let mut active: Vec<RefreshToken> = tokens
            .iter()
            .filter(|t| t.is_active(now))
            .cloned()
            .collect();
        active.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        active.truncate(limit);
        Ok(active)
    }

    async fn revoke(&self, id: i64, revoked_at: DateTime<Utc>) -> Result<bool, DomainError> {
        let mut tokens = self.tokens.write().await;
        match tokens.iter_mut().find(|t| t.id == id) {
            Some(token) if token.revoked_at.is_none() => {
                token.revoked_at = Some(revoked_at);
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}
