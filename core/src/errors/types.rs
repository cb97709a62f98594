//! Error type definitions for authentication and token management.
//!
//! Expected outcomes (wrong password, unknown token) are modeled as error
//! kinds the caller pattern-matches on, never as panics or opaque strings.
//! The conversions to [`ErrorResponse`] give the controller layer a stable
//! code per kind to map onto HTTP statuses.

use gk_shared::errors::{error_codes, ErrorResponse};
use thiserror::Error;

/// Authentication-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid email format")]
    InvalidEmail,

    #[error("{reason}")]
    WeakPassword { reason: String },

    #[error("User with this email already exists")]
    EmailTaken,

    /// Covers both unknown email and wrong password; the two are never
    /// distinguished in responses.
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("User not found")]
    UserNotFound,
}

/// Token-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Invalid refresh token")]
    InvalidRefreshToken,

    #[error("Token generation failed")]
    TokenGenerationFailed,
}

/// Credential hashing errors
///
/// Verification mismatches are a boolean outcome, not an error; this only
/// covers internal hashing failures such as resource exhaustion.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HashError {
    #[error("Hashing failed: {message}")]
    HashingFailed { message: String },
}

/// Convert AuthError to ErrorResponse
impl From<AuthError> for ErrorResponse {
    fn from(err: AuthError) -> Self {
        let error_code = match &err {
            AuthError::InvalidEmail => error_codes::INVALID_EMAIL,
            AuthError::WeakPassword { .. } => error_codes::WEAK_PASSWORD,
            AuthError::EmailTaken => error_codes::EMAIL_TAKEN,
            AuthError::InvalidCredentials => error_codes::INVALID_CREDENTIALS,
            AuthError::UserNotFound => error_codes::USER_NOT_FOUND,
        };

        ErrorResponse::new(error_code, err.to_string())
    }
}

/// Convert TokenError to ErrorResponse
impl From<TokenError> for ErrorResponse {
    fn from(err: TokenError) -> Self {
        let error_code = match &err {
            TokenError::TokenExpired => error_codes::TOKEN_EXPIRED,
            TokenError::InvalidToken => error_codes::TOKEN_INVALID,
            TokenError::InvalidRefreshToken => error_codes::INVALID_REFRESH_TOKEN,
            TokenError::TokenGenerationFailed => error_codes::INTERNAL_ERROR,
        };

        ErrorResponse::new(error_code, err.to_string())
    }
}

/// Convert HashError to ErrorResponse
impl From<HashError> for ErrorResponse {
    fn from(err: HashError) -> Self {
        ErrorResponse::new(error_codes::HASHING_ERROR, err.to_string())
    }
}

/// Convert the umbrella DomainError to ErrorResponse
impl From<super::DomainError> for ErrorResponse {
    fn from(err: super::DomainError) -> Self {
        match err {
            super::DomainError::Auth(e) => e.into(),
            super::DomainError::Token(e) => e.into(),
            super::DomainError::Hash(e) => e.into(),
            super::DomainError::Database { message } => {
                ErrorResponse::new(error_codes::DATABASE_ERROR, message)
            }
            super::DomainError::Internal { message } => {
                ErrorResponse::new(error_codes::INTERNAL_ERROR, message)
            }
        }
    }
}
