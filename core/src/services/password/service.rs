//! Argon2id credential hashing.
//!
//! One hasher serves both user passwords and refresh-token secrets, so a
//! compromised store yields neither usable passwords nor usable session
//! tokens.

use argon2::password_hash::{
    rand_core::OsRng, PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString,
};
use argon2::{Argon2, Params};

use gk_shared::config::HashingConfig;

use crate::errors::{DomainError, HashError};

/// Service for hashing and verifying secrets with Argon2id
///
/// Each hash gets a fresh random salt; the cost parameters travel inside
/// the produced PHC string, so hashes remain verifiable after the
/// configured costs change.
pub struct PasswordHasher {
    argon2: Argon2<'static>,
}

impl PasswordHasher {
    /// Creates a hasher with the given cost parameters
    ///
    /// # Returns
    ///
    /// A new `PasswordHasher`, or an error if the parameters are outside
    /// the ranges argon2 accepts.
    pub fn new(config: &HashingConfig) -> Result<Self, DomainError> {
        let params = Params::new(
            config.memory_cost_kib,
            config.time_cost,
            config.parallelism,
            None,
        )
        .map_err(|e| DomainError::Internal {
            message: format!("Invalid hashing parameters: {}", e),
        })?;

        Ok(Self {
            argon2: Argon2::new(argon2::Algorithm::Argon2id, argon2::Version::V0x13, params),
        })
    }

    /// Hashes a secret with a fresh random salt
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - PHC-format hash string
    /// * `Err(DomainError::Hash)` - Internal hashing failure
    pub fn hash(&self, secret: &str) -> Result<String, DomainError> {
        let salt = SaltString::generate(&mut OsRng);

        let hash = self
            .argon2
            .hash_password(secret.as_bytes(), &salt)
            .map_err(|e| {
                DomainError::Hash(HashError::HashingFailed {
                    message: e.to_string(),
                })
            })?;

        Ok(hash.to_string())
    }

    /// Verifies a secret against a stored hash
    ///
    /// A mismatch is a normal outcome, not an error: malformed hashes and
    /// failed comparisons both return `false`.
    pub fn verify(&self, secret: &str, hash: &str) -> bool {
        match PasswordHash::new(hash) {
            Ok(parsed) => self
                .argon2
                .verify_password(secret.as_bytes(), &parsed)
                .is_ok(),
            Err(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Low-cost parameters so the suite stays fast; correctness does not
    // depend on the costs.
    fn test_hasher() -> PasswordHasher {
        PasswordHasher::new(&HashingConfig {
            memory_cost_kib: 1024,
            time_cost: 1,
            parallelism: 1,
        })
        .unwrap()
    }

    #[test]
    fn test_hash_and_verify_roundtrip() {
        let hasher = test_hasher();
        let hash = hasher.hash("GoodPass123").unwrap();

        assert!(hasher.verify("GoodPass123", &hash));
        assert!(!hasher.verify("WrongPass123", &hash));
    }

    #[test]
    fn test_salts_make_hashes_differ() {
        let hasher = test_hasher();
        let first = hasher.hash("same-secret").unwrap();
        let second = hasher.hash("same-secret").unwrap();

        assert_ne!(first, second);
        assert!(hasher.verify("same-secret", &first));
        assert!(hasher.verify("same-secret", &second));
    }

    #[test]
    fn test_verify_malformed_hash_is_false_not_error() {
        let hasher = test_hasher();

        assert!(!hasher.verify("anything", "not-a-phc-string"));
        assert!(!hasher.verify("anything", ""));
    }

    #[test]
    fn test_verify_survives_cost_change() {
        let old = test_hasher();
        let hash = old.hash("secret").unwrap();

        let newer = PasswordHasher::new(&HashingConfig {
            memory_cost_kib: 2048,
            time_cost: 2,
            parallelism: 1,
        })
        .unwrap();

        // Costs are read from the hash string, not the hasher config
        assert!(newer.verify("secret", &hash));
    }
}
