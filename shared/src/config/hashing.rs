//! Credential hashing cost configuration

use serde::{Deserialize, Serialize};

/// Argon2id cost parameters for password and token-secret hashing
///
/// The defaults follow the OWASP minimum recommendation (19 MiB memory,
/// two passes, single lane). The parameters are tunable per deployment
/// and are not load-bearing for correctness: hashes produced under one
/// cost setting still verify after the setting changes.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HashingConfig {
    /// Memory cost in KiB
    pub memory_cost_kib: u32,

    /// Number of iterations
    pub time_cost: u32,

    /// Degree of parallelism
    pub parallelism: u32,
}

impl Default for HashingConfig {
    fn default() -> Self {
        Self {
            memory_cost_kib: 19_456,
            time_cost: 2,
            parallelism: 1,
        }
    }
}

impl HashingConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let memory_cost_kib = std::env::var("HASH_MEMORY_COST_KIB")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.memory_cost_kib);
        let time_cost = std::env::var("HASH_TIME_COST")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.time_cost);
        let parallelism = std::env::var("HASH_PARALLELISM")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.parallelism);

        Self {
            memory_cost_kib,
            time_cost,
            parallelism,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hashing_config_default() {
        let config = HashingConfig::default();
        assert_eq!(config.memory_cost_kib, 19_456);
        assert_eq!(config.time_cost, 2);
        assert_eq!(config.parallelism, 1);
    }
}
