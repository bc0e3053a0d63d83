//! Process configuration
//!
//! Read once at startup from the environment (a `.env` file is loaded
//! first by `main`).
//!
//! | Env Var                    | Default                  |
//! |----------------------------|--------------------------|
//! | `DATABASE_URL`             | required                 |
//! | `JWT_SECRET`               | required                 |
//! | `HTTP_ADDR`                | `0.0.0.0:8081`           |
//! | `APP_ENV`                  | `development`            |
//! | `ACCESS_TOKEN_TTL_SECS`    | `900`                    |
//! | `REFRESH_TOKEN_TTL_SECS`   | `2592000`                |
//! | `DATABASE_MAX_CONNECTIONS` | `10`                     |
//! | `REQUEST_TIMEOUT_SECS`     | `10`                     |
//! | `FRONTEND_ORIGINS`         | `http://localhost:3000`  |

use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, bail};
use auth::AuthConfig;
use axum::http::HeaderValue;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

/// Startup configuration. Not `Debug`: it holds the signing secret.
pub struct AppConfig {
    pub database_url: String,
    pub database_max_connections: u32,
    pub jwt_secret: String,
    pub http_addr: SocketAddr,
    pub app_env: AppEnv,
    pub access_token_ttl_secs: i64,
    pub refresh_token_ttl_secs: i64,
    pub request_timeout: Duration,
    pub frontend_origins: Vec<HeaderValue>,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key/value source; `from_env` passes the process
    /// environment.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| -> anyhow::Result<String> {
            match lookup(key) {
                Some(value) if !value.trim().is_empty() => Ok(value),
                _ => bail!("{key} must be set"),
            }
        };

        let app_env = match lookup("APP_ENV").as_deref() {
            None | Some("development") => AppEnv::Development,
            Some("production") => AppEnv::Production,
            Some(other) => bail!("APP_ENV must be 'development' or 'production', got '{other}'"),
        };

        let access_token_ttl_secs: i64 = parse_or(&lookup, "ACCESS_TOKEN_TTL_SECS", 900)?;
        let refresh_token_ttl_secs: i64 = parse_or(&lookup, "REFRESH_TOKEN_TTL_SECS", 2_592_000)?;
        if access_token_ttl_secs <= 0 || refresh_token_ttl_secs <= 0 {
            bail!("Token TTLs must be positive");
        }

        let frontend_origins = lookup("FRONTEND_ORIGINS")
            .unwrap_or_else(|| "http://localhost:3000".to_string())
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(|origin| {
                origin
                    .parse::<HeaderValue>()
                    .with_context(|| format!("Invalid origin in FRONTEND_ORIGINS: '{origin}'"))
            })
            .collect::<anyhow::Result<Vec<_>>>()?;

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            database_max_connections: parse_or(&lookup, "DATABASE_MAX_CONNECTIONS", 10)?,
            jwt_secret: required("JWT_SECRET")?,
            http_addr: parse_or(&lookup, "HTTP_ADDR", SocketAddr::from(([0, 0, 0, 0], 8081)))?,
            app_env,
            access_token_ttl_secs,
            refresh_token_ttl_secs,
            request_timeout: Duration::from_secs(parse_or(&lookup, "REQUEST_TIMEOUT_SECS", 10)?),
            frontend_origins,
        })
    }

    pub fn is_production(&self) -> bool {
        self.app_env == AppEnv::Production
    }

    pub fn auth_config(&self) -> AuthConfig {
        AuthConfig::from_secs(self.access_token_ttl_secs, self.refresh_token_ttl_secs)
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> anyhow::Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{key} has an invalid value: '{raw}'")),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(pairs: &[(&str, &str)]) -> anyhow::Result<AppConfig> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    const REQUIRED: [(&str, &str); 2] = [
        ("DATABASE_URL", "postgres://localhost/shopping"),
        ("JWT_SECRET", "secret"),
    ];

    #[test]
    fn test_defaults() {
        let cfg = config(&REQUIRED).unwrap();
        assert_eq!(cfg.http_addr, "0.0.0.0:8081".parse().unwrap());
        assert_eq!(cfg.app_env, AppEnv::Development);
        assert_eq!(cfg.access_token_ttl_secs, 900);
        assert_eq!(cfg.refresh_token_ttl_secs, 2_592_000);
        assert_eq!(cfg.database_max_connections, 10);
        assert_eq!(cfg.request_timeout, Duration::from_secs(10));
        assert_eq!(cfg.frontend_origins, vec!["http://localhost:3000"]);
    }

    #[test]
    fn test_required_variables() {
        assert!(config(&[REQUIRED[0]]).is_err());
        assert!(config(&[REQUIRED[1]]).is_err());
        assert!(config(&[REQUIRED[0], ("JWT_SECRET", "  ")]).is_err());
    }

    #[test]
    fn test_overrides() {
        let mut pairs = REQUIRED.to_vec();
        pairs.extend([
            ("APP_ENV", "production"),
            ("HTTP_ADDR", "127.0.0.1:9000"),
            ("ACCESS_TOKEN_TTL_SECS", "60"),
            ("FRONTEND_ORIGINS", "https://a.example, https://b.example"),
        ]);
        let cfg = config(&pairs).unwrap();
        assert!(cfg.is_production());
        assert_eq!(cfg.http_addr.port(), 9000);
        assert_eq!(cfg.auth_config().access_token_ttl.num_seconds(), 60);
        assert_eq!(cfg.frontend_origins.len(), 2);
    }

    #[test]
    fn test_invalid_values() {
        for bad in [
            ("APP_ENV", "staging"),
            ("HTTP_ADDR", "localhost"),
            ("REFRESH_TOKEN_TTL_SECS", "0"),
            ("REQUEST_TIMEOUT_SECS", "ten"),
        ] {
            let mut pairs = REQUIRED.to_vec();
            pairs.push(bad);
            assert!(config(&pairs).is_err(), "{bad:?}");
        }
    }
}
