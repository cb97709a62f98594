//! Tests for the mock refresh token repository

use chrono::{Duration, Utc};

use crate::domain::entities::token::NewRefreshToken;
use crate::repositories::token::mock::MockRefreshTokenRepository;
use crate::repositories::RefreshTokenRepository;

#[tokio::test]
async fn test_create_assigns_sequential_ids() {
    let repo = MockRefreshTokenRepository::new();
    let now = Utc::now();

    let first = repo
        .create(NewRefreshToken::new(1, "hash-a", now, 30))
        .await
        .unwrap();
    let second = repo
        .create(NewRefreshToken::new(1, "hash-b", now, 30))
        .await
        .unwrap();

    assert_eq!(first.id, 1);
    assert_eq!(second.id, 2);
    assert!(first.revoked_at.is_none());
}

#[tokio::test]
async fn test_find_active_orders_newest_first_and_caps() {
    let repo = MockRefreshTokenRepository::new();
    let now = Utc::now();

    for age_hours in [3, 1, 2] {
        repo.create(NewRefreshToken::new(
            1,
            format!("hash-{}", age_hours),
            now - Duration::hours(age_hours),
            30,
        ))
        .await
        .unwrap();
    }

    let window = repo.find_active(now, 10).await.unwrap();
    let hashes: Vec<&str> = window.iter().map(|t| t.token_hash.as_str()).collect();
    assert_eq!(hashes, vec!["hash-1", "hash-2", "hash-3"]);

    let capped = repo.find_active(now, 2).await.unwrap();
    assert_eq!(capped.len(), 2);
    assert_eq!(capped[0].token_hash, "hash-1");
}

#[tokio::test]
async fn test_find_active_excludes_revoked_and_expired() {
    let repo = MockRefreshTokenRepository::new();
    let now = Utc::now();

    let revoked = repo
        .create(NewRefreshToken::new(1, "revoked", now, 30))
        .await
        .unwrap();
    repo.revoke(revoked.id, now).await.unwrap();

    repo.create(NewRefreshToken::new(1, "expired", now - Duration::days(31), 30))
        .await
        .unwrap();

    let live = repo
        .create(NewRefreshToken::new(1, "live", now, 30))
        .await
        .unwrap();

    let window = repo.find_active(now, 10).await.unwrap();
    assert_eq!(window.len(), 1);
    assert_eq!(window[0].id, live.id);
}

#[tokio::test]
async fn test_revoke_is_single_shot() {
    let repo = MockRefreshTokenRepository::new();
    let now = Utc::now();

    let token = repo
        .create(NewRefreshToken::new(1, "hash", now, 30))
        .await
        .unwrap();

    assert!(repo.revoke(token.id, now).await.unwrap());
    // Second revocation loses the conditional update
    assert!(!repo.revoke(token.id, now).await.unwrap());
    // Unknown id is not an error
    assert!(!repo.revoke(9999, now).await.unwrap());
}
