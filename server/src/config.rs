//! Process configuration read from environment variables.
//!
//! `main` calls `dotenvy::dotenv()` first, so a `.env` file in the working
//! directory is honored. Every variable has a default; only malformed values
//! are errors.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

use axum::http::HeaderValue;
use thiserror::Error;

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_DATABASE_URL: &str = "sqlite://todos.db";
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:5173";
pub const DEFAULT_SELECTION_TIMEOUT: Duration = Duration::from_millis(5_000);
pub const DEFAULT_IDLE_TIMEOUT: Duration = Duration::from_millis(45_000);

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// Storage connection settings.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// `memory` or a `sqlite:` connection URL.
    pub url: String,
    /// How long to wait for a usable connection before giving up.
    pub selection_timeout: Duration,
    /// How long an unused connection may stay open.
    pub idle_timeout: Duration,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_DATABASE_URL.to_string(),
            selection_timeout: DEFAULT_SELECTION_TIMEOUT,
            idle_timeout: DEFAULT_IDLE_TIMEOUT,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub cors_origin: String,
    pub storage: StorageConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            cors_origin: DEFAULT_CORS_ORIGIN.to_string(),
            storage: StorageConfig::default(),
        }
    }
}

impl Config {
    /// Load from `HOST`, `PORT`, `DATABASE_URL`, `CORS_ORIGIN`,
    /// `STORAGE_SELECTION_TIMEOUT_MS` and `STORAGE_IDLE_TIMEOUT_MS`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        let host = parse_or("HOST", &lookup, defaults.host)?;
        let port = parse_or("PORT", &lookup, defaults.port)?;

        let cors_origin = lookup("CORS_ORIGIN").unwrap_or(defaults.cors_origin);
        if HeaderValue::from_str(&cors_origin).is_err() {
            return Err(ConfigError::Invalid {
                name: "CORS_ORIGIN",
                value: cors_origin,
            });
        }

        let storage = StorageConfig {
            url: lookup("DATABASE_URL").unwrap_or(defaults.storage.url),
            selection_timeout: millis_or(
                "STORAGE_SELECTION_TIMEOUT_MS",
                &lookup,
                defaults.storage.selection_timeout,
            )?,
            idle_timeout: millis_or(
                "STORAGE_IDLE_TIMEOUT_MS",
                &lookup,
                defaults.storage.idle_timeout,
            )?,
        };

        Ok(Self {
            host,
            port,
            cors_origin,
            storage,
        })
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_or<T, F>(name: &'static str, lookup: &F, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
    }
}

fn millis_or<F>(name: &'static str, lookup: &F, default: Duration) -> Result<Duration, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let default_ms = u64::try_from(default.as_millis()).unwrap_or(u64::MAX);
    parse_or(name, lookup, default_ms).map(Duration::from_millis)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.port, 5000);
        assert_eq!(config.bind_addr().to_string(), "0.0.0.0:5000");
        assert_eq!(config.cors_origin, "http://localhost:5173");
        assert_eq!(config.storage.url, "sqlite://todos.db");
        assert_eq!(config.storage.selection_timeout, Duration::from_secs(5));
        assert_eq!(config.storage.idle_timeout, Duration::from_secs(45));
    }

    #[test]
    fn reads_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("PORT", "8080"),
            ("HOST", "127.0.0.1"),
            ("DATABASE_URL", "memory"),
            ("CORS_ORIGIN", "https://todo.example.com"),
            ("STORAGE_SELECTION_TIMEOUT_MS", "250"),
        ]))
        .unwrap();
        assert_eq!(config.bind_addr().to_string(), "127.0.0.1:8080");
        assert_eq!(config.storage.url, "memory");
        assert_eq!(config.cors_origin, "https://todo.example.com");
        assert_eq!(config.storage.selection_timeout, Duration::from_millis(250));
        assert_eq!(config.storage.idle_timeout, DEFAULT_IDLE_TIMEOUT);
    }

    #[test]
    fn rejects_bad_port() {
        let err = Config::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { name: "PORT", .. }));
    }

    #[test]
    fn rejects_bad_origin() {
        let err = Config::from_lookup(lookup(&[("CORS_ORIGIN", "http://bad\norigin")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { name: "CORS_ORIGIN", .. }));
    }
}
