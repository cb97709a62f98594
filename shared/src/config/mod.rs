//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `auth` - JWT signing and token lifetime configuration
//! - `hashing` - Credential hashing cost configuration
//! - `environment` - Environment detection

pub mod auth;
pub mod environment;
pub mod hashing;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use auth::JwtConfig;
pub use environment::Environment;
pub use hashing::HashingConfig;

/// Complete application configuration combining all sub-configurations
///
/// Loaded once at process start; business logic receives the pieces it
/// needs by value and never reads the environment itself.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// JWT configuration
    pub jwt: JwtConfig,

    /// Credential hashing configuration
    pub hashing: HashingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            jwt: JwtConfig::default(),
            hashing: HashingConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            environment: Environment::from_env(),
            jwt: JwtConfig::from_env(),
            hashing: HashingConfig::from_env(),
        }
    }
}
