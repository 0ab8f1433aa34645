//! Application configuration loaded from environment variables.

use std::env;
use std::fmt;
use std::str::FromStr;

use inkpot_infra::database::DatabaseConfig;
use thiserror::Error;

/// Minimum length of `SECRET_KEY`, required to derive the cookie signing key.
pub const MIN_SECRET_KEY_LEN: usize = 32;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} must be {expected}, got {value:?}")]
    Invalid {
        name: &'static str,
        expected: &'static str,
        value: String,
    },

    #[error("SECRET_KEY must be at least {MIN_SECRET_KEY_LEN} bytes long")]
    SecretKeyTooShort,
}

/// Secret used to sign cookies. Never printed.
#[derive(Clone)]
pub struct SecretKey(String);

impl SecretKey {
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretKey(***)")
    }
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// `None` keeps posts in memory.
    pub database: Option<DatabaseConfig>,
    pub run_migrations: bool,
    /// `None` signs cookies with a key generated at startup.
    pub secret_key: Option<SecretKey>,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration through `lookup`, which returns the value of a variable.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database = match lookup("DATABASE_URL").filter(|url| !url.is_empty()) {
            Some(url) => Some(DatabaseConfig {
                max_connections: parse_or(&lookup, "DB_MAX_CONNECTIONS", 10, "a number")?,
                min_connections: parse_or(&lookup, "DB_MIN_CONNECTIONS", 1, "a number")?,
                sql_logging: flag(&lookup, "DB_SQL_LOGGING", false),
                ..DatabaseConfig::new(url)
            }),
            None => None,
        };

        let secret_key = match lookup("SECRET_KEY").filter(|key| !key.is_empty()) {
            Some(key) if key.len() < MIN_SECRET_KEY_LEN => {
                return Err(ConfigError::SecretKeyTooShort);
            }
            Some(key) => Some(SecretKey(key)),
            None => None,
        };

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: parse_or(&lookup, "PORT", 5000, "a port number")?,
            database,
            run_migrations: flag(&lookup, "RUN_MIGRATIONS", true),
            secret_key,
        })
    }
}

fn parse_or<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    default: T,
    expected: &'static str,
) -> Result<T, ConfigError> {
    match lookup(name) {
        Some(value) => value.trim().parse().map_err(|_| ConfigError::Invalid {
            name,
            expected,
            value,
        }),
        None => Ok(default),
    }
}

fn flag(lookup: &impl Fn(&str) -> Option<String>, name: &str, default: bool) -> bool {
    lookup(name)
        .map(|v| v != "false" && v != "0")
        .unwrap_or(default)
}
