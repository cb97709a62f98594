//! Email and password policy checks for the authentication service.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::AuthError;

/// Minimum accepted password length
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Regular expression for a plausible email shape: local@domain.tld,
/// no whitespace, no second '@'.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Validates the shape of an email address
///
/// Deliverability is not checked here; the shape gate only keeps obvious
/// garbage out of the user store.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Validates password strength
///
/// Rules are checked in a fixed order (length, uppercase, lowercase,
/// digit) and the first violation is reported, naming the failed rule.
pub fn check_password_strength(password: &str) -> Result<(), AuthError> {
    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(AuthError::WeakPassword {
            reason: "Password must be at least 8 characters long".to_string(),
        });
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return Err(AuthError::WeakPassword {
            reason: "Password must contain at least one uppercase letter".to_string(),
        });
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        return Err(AuthError::WeakPassword {
            reason: "Password must contain at least one lowercase letter".to_string(),
        });
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err(AuthError::WeakPassword {
            reason: "Password must contain at least one number".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weak_reason(password: &str) -> String {
        match check_password_strength(password) {
            Err(AuthError::WeakPassword { reason }) => reason,
            other => panic!("expected WeakPassword, got {:?}", other),
        }
    }

    #[test]
    fn test_valid_emails() {
        assert!(is_valid_email("alice@example.com"));
        assert!(is_valid_email("a.b+c@sub.domain.org"));
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!is_valid_email("no-at-sign.com"));
        assert!(!is_valid_email("no-dot@domain"));
        assert!(!is_valid_email("spaces in@example.com"));
        assert!(!is_valid_email("two@@example.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_password_rules_report_first_failure() {
        assert!(weak_reason("short1A").contains("at least 8 characters"));
        assert!(weak_reason("alllowercase1").contains("uppercase"));
        assert!(weak_reason("ALLUPPER1").contains("lowercase"));
        assert!(weak_reason("NoDigitsHere").contains("number"));
    }

    #[test]
    fn test_length_takes_precedence() {
        // Fails several rules at once; the length message wins
        assert!(weak_reason("abc").contains("at least 8 characters"));
    }

    #[test]
    fn test_conforming_password_passes() {
        assert!(check_password_strength("GoodPass123").is_ok());
    }
}
