//! Configuration for the authentication service

use gk_shared::config::JwtConfig;

/// Default cap on the refresh-token candidate window
pub const DEFAULT_CANDIDATE_WINDOW_LIMIT: usize = 500;

/// Configuration for the authentication service
#[derive(Debug, Clone)]
pub struct AuthServiceConfig {
    /// Refresh token lifetime in days
    pub refresh_token_ttl_days: i64,

    /// Cap on the active-token window scanned during refresh and logout.
    /// Bounds worst-case matching cost; a user with more concurrently
    /// active sessions than this may fail to refresh the oldest ones.
    pub candidate_window_limit: usize,
}

impl Default for AuthServiceConfig {
    fn default() -> Self {
        Self {
            refresh_token_ttl_days: 30,
            candidate_window_limit: DEFAULT_CANDIDATE_WINDOW_LIMIT,
        }
    }
}

impl From<&JwtConfig> for AuthServiceConfig {
    fn from(jwt: &JwtConfig) -> Self {
        Self {
            refresh_token_ttl_days: jwt.refresh_token_expiry_days,
            candidate_window_limit: DEFAULT_CANDIDATE_WINDOW_LIMIT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AuthServiceConfig::default();
        assert_eq!(config.refresh_token_ttl_days, 30);
        assert_eq!(config.candidate_window_limit, 500);
    }

    #[test]
    fn test_from_jwt_config() {
        let jwt = JwtConfig::new("secret").with_refresh_expiry_days(7);
        let config = AuthServiceConfig::from(&jwt);
        assert_eq!(config.refresh_token_ttl_days, 7);
        assert_eq!(config.candidate_window_limit, 500);
    }
}
