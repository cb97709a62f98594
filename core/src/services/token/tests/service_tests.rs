//! Unit tests for the token service

use chrono::{Duration, Utc};

use gk_shared::config::JwtConfig;

use crate::errors::{DomainError, TokenError};
use crate::services::token::TokenService;

fn test_service() -> TokenService {
    TokenService::new(JwtConfig::new("unit-test-secret"))
}

#[test]
fn test_sign_and_verify_roundtrip() {
    let service = test_service();
    let now = Utc::now();

    let token = service.sign(42, "alice@example.com", now).unwrap();
    let claims = service.verify(&token).unwrap();

    assert_eq!(claims.sub, 42);
    assert_eq!(claims.email, "alice@example.com");
    assert_eq!(claims.iat, now.timestamp());
    assert_eq!(claims.exp, (now + Duration::minutes(60)).timestamp());
}

#[test]
fn test_expired_token_is_distinct_from_invalid() {
    let service = test_service();

    // Issued two hours ago with a one-hour lifetime, well past any leeway
    let token = service
        .sign(1, "old@example.com", Utc::now() - Duration::hours(2))
        .unwrap();

    match service.verify(&token) {
        Err(DomainError::Token(TokenError::TokenExpired)) => {}
        other => panic!("expected TokenExpired, got {:?}", other),
    }
}

#[test]
fn test_garbage_token_is_invalid() {
    let service = test_service();

    match service.verify("not-a-jwt-at-all") {
        Err(DomainError::Token(TokenError::InvalidToken)) => {}
        other => panic!("expected InvalidToken, got {:?}", other),
    }
}

#[test]
fn test_wrong_key_fails_verification() {
    let signer = TokenService::new(JwtConfig::new("key-one"));
    let verifier = TokenService::new(JwtConfig::new("key-two"));

    let token = signer.sign(7, "bob@example.com", Utc::now()).unwrap();

    match verifier.verify(&token) {
        Err(DomainError::Token(TokenError::InvalidToken)) => {}
        other => panic!("expected InvalidToken, got {:?}", other),
    }
}

#[test]
fn test_expiry_seconds_tracks_config() {
    let service = TokenService::new(JwtConfig::new("secret").with_access_expiry_minutes(15));
    assert_eq!(service.access_token_expiry_seconds(), 900);
}
