//! Runtime configuration for the session store and CLI
//!
//! Defaults mirror the dashboard's simulated API: 1.5s for login and password reset,
//! 2s for registration, 24h tokens. A JSON file can override any field, and
//! `KAIZEN_*` environment variables override the file.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default location of the persisted session file
pub const DEFAULT_STORAGE_PATH: &str = "kaizen_session.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KaizenConfig {
    /// Simulated latency of `login`
    pub login_delay_ms: u64,

    /// Simulated latency of `register` (the follow-up login adds its own delay)
    pub register_delay_ms: u64,

    /// Simulated latency of `forgot_password`
    pub forgot_password_delay_ms: u64,

    /// Lifetime of an issued session token
    pub token_ttl_hours: i64,

    /// File backing the persisted session for the CLI
    pub storage_path: PathBuf,
}

impl Default for KaizenConfig {
    fn default() -> Self {
        Self {
            login_delay_ms: 1500,
            register_delay_ms: 2000,
            forgot_password_delay_ms: 1500,
            token_ttl_hours: 24,
            storage_path: PathBuf::from(DEFAULT_STORAGE_PATH),
        }
    }
}

impl KaizenConfig {
    /// Zero-latency configuration for tests and scripted use
    pub fn instant() -> Self {
        Self {
            login_delay_ms: 0,
            register_delay_ms: 0,
            forgot_password_delay_ms: 0,
            ..Self::default()
        }
    }

    /// Load from a JSON file; missing fields keep their defaults
    pub fn from_json_path(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("Failed to read config file {:?}: {}", path, e))
        })?;
        let config: KaizenConfig = serde_json::from_str(&contents).map_err(|e| {
            Error::Config(format!("Failed to parse config file {:?}: {}", path, e))
        })?;
        log::debug!("Loaded configuration from {:?}", path);
        Ok(config)
    }

    /// Defaults, then the optional file, then environment overrides
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let base = match path {
            Some(p) => Self::from_json_path(p)?,
            None => Self::default(),
        };
        base.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply `KAIZEN_*` overrides from a lookup function
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("KAIZEN_LOGIN_DELAY_MS") {
            self.login_delay_ms = parse_env("KAIZEN_LOGIN_DELAY_MS", &v)?;
        }
        if let Some(v) = lookup("KAIZEN_REGISTER_DELAY_MS") {
            self.register_delay_ms = parse_env("KAIZEN_REGISTER_DELAY_MS", &v)?;
        }
        if let Some(v) = lookup("KAIZEN_FORGOT_PASSWORD_DELAY_MS") {
            self.forgot_password_delay_ms = parse_env("KAIZEN_FORGOT_PASSWORD_DELAY_MS", &v)?;
        }
        if let Some(v) = lookup("KAIZEN_TOKEN_TTL_HOURS") {
            self.token_ttl_hours = parse_env("KAIZEN_TOKEN_TTL_HOURS", &v)?;
        }
        if let Some(v) = lookup("KAIZEN_STORAGE_PATH") {
            self.storage_path = PathBuf::from(v);
        }

        if self.token_ttl_hours <= 0 {
            return Err(Error::Config(format!(
                "token_ttl_hours must be positive, got {}",
                self.token_ttl_hours
            )));
        }

        Ok(self)
    }

    pub fn login_delay(&self) -> Duration {
        Duration::from_millis(self.login_delay_ms)
    }

    pub fn register_delay(&self) -> Duration {
        Duration::from_millis(self.register_delay_ms)
    }

    pub fn forgot_password_delay(&self) -> Duration {
        Duration::from_millis(self.forgot_password_delay_ms)
    }

    pub fn token_ttl(&self) -> chrono::Duration {
        chrono::Duration::hours(self.token_ttl_hours)
    }
}

fn parse_env<T: std::str::FromStr>(key: &str, value: &str) -> Result<T>
where
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e| Error::Config(format!("{} = {:?}: {}", key, value, e)))
}
