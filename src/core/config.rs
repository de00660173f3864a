//! Server configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.
//! Site address and the other `LEPTOS_*` settings are read by Leptos itself.

use thiserror::Error;

pub const DEFAULT_LOG_FILTER: &str = "info,hali_landing=debug,tower_http=info";
pub const DEFAULT_ASSET_MAX_AGE: u64 = 86_400;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} must be a boolean (true/false/1/0/yes/no/on/off), got {value:?}")]
    InvalidBool { key: &'static str, value: String },

    #[error("{key} must be a non-negative integer, got {value:?}")]
    InvalidNumber { key: &'static str, value: String },
}

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// `tracing_subscriber::EnvFilter` directives
    /// Example: info,hali_landing=debug
    pub log_filter: String,

    /// Whether responses are compressed (brotli, gzip)
    pub compression: bool,

    /// `Cache-Control: max-age` for the compiled bundle under /pkg, in seconds
    pub asset_max_age: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_filter = lookup("RUST_LOG")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        let compression = match lookup("HALI_COMPRESSION") {
            Some(value) => parse_bool("HALI_COMPRESSION", &value)?,
            None => true,
        };

        let asset_max_age = match lookup("HALI_ASSET_MAX_AGE") {
            Some(value) => value
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidNumber {
                    key: "HALI_ASSET_MAX_AGE",
                    value,
                })?,
            None => DEFAULT_ASSET_MAX_AGE,
        };

        Ok(Self {
            log_filter,
            compression,
            asset_max_age,
        })
    }

    /// Header value for static bundle responses
    pub fn cache_control(&self) -> String {
        format!("public, max-age={}", self.asset_max_age)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            compression: true,
            asset_max_age: DEFAULT_ASSET_MAX_AGE,
        }
    }
}

fn parse_bool(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            key,
            value: value.to_string(),
        }),
    }
}
