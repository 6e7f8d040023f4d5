//! Run configuration
//!
//! Every setting has a built-in default and may be overridden through the
//! environment (a `.env` file is loaded by `main` before this runs).

use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_API_URL: &str = "http://47.236.4.240/api/transactions";
pub const DEFAULT_NUM_USERS: usize = 20;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

const API_URL_KEY: &str = "LOADTEST_API_URL";
const NUM_USERS_KEY: &str = "LOADTEST_USERS";
const TIMEOUT_KEY: &str = "LOADTEST_TIMEOUT_SECS";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} must be a whole number, got {value:?}")]
    InvalidNumber { key: &'static str, value: String },
    #[error("{key} must be between 1 and the platform limit, got {value}")]
    OutOfRange { key: &'static str, value: u64 },
    #[error("LOADTEST_API_URL is set but empty")]
    EmptyUrl,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadTestConfig {
    pub api_url: String,
    pub num_users: usize,
    pub timeout: Duration,
}

impl Default for LoadTestConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            num_users: DEFAULT_NUM_USERS,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl LoadTestConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup; unset keys keep their defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup(API_URL_KEY) {
            let url = url.trim();
            if url.is_empty() {
                return Err(ConfigError::EmptyUrl);
            }
            config.api_url = url.to_string();
        }

        if let Some(raw) = lookup(NUM_USERS_KEY) {
            let value = parse_positive(NUM_USERS_KEY, &raw)?;
            config.num_users = usize::try_from(value).map_err(|_| ConfigError::OutOfRange {
                key: NUM_USERS_KEY,
                value,
            })?;
        }

        if let Some(raw) = lookup(TIMEOUT_KEY) {
            config.timeout = Duration::from_secs(parse_positive(TIMEOUT_KEY, &raw)?);
        }

        Ok(config)
    }
}

fn parse_positive(key: &'static str, raw: &str) -> Result<u64, ConfigError> {
    let value: u64 = raw.trim().parse().map_err(|_| ConfigError::InvalidNumber {
        key,
        value: raw.to_string(),
    })?;

    if value == 0 {
        return Err(ConfigError::OutOfRange { key, value });
    }
    Ok(value)
}
