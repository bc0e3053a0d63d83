//! Application Configuration
//!
//! Configuration for the Auth application layer.

use chrono::Duration;

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Lifetime of a signed access token (15 minutes)
    pub access_token_ttl: Duration,
    /// Lifetime of a refresh session (30 days)
    pub refresh_token_ttl: Duration,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            access_token_ttl: Duration::minutes(15),
            refresh_token_ttl: Duration::days(30),
        }
    }
}

impl AuthConfig {
    /// Build from TTLs given in seconds, as they come from the environment.
    pub fn from_secs(access_ttl_secs: i64, refresh_ttl_secs: i64) -> Self {
        Self {
            access_token_ttl: Duration::seconds(access_ttl_secs),
            refresh_token_ttl: Duration::seconds(refresh_ttl_secs),
        }
    }
}
