use serde::Deserialize;
use std::env;
use std::str::FromStr;
use verity_common::error::{VerityError, VerityResult};

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    pub log_level: String,
}

impl AppConfig {
    /// Load configuration from environment variables.
    /// Loads `.env` file if present, then reads required vars.
    pub fn from_env() -> VerityResult<Self> {
        // Best-effort .env load; ignore if missing
        let _ = dotenvy::dotenv();

        Ok(Self {
            database_url: get_var("DATABASE_URL")?,
            log_level: env_or("LOG_LEVEL", "info"),
        })
    }
}

fn get_var(key: &str) -> VerityResult<String> {
    env::var(key).map_err(|_| VerityError::Config(format!("{key} is required but not set")))
}

/// Read `key`, falling back to `default` when unset.
pub fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Read and parse `key`, falling back to `default` when unset or unparsable.
pub fn env_parse_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}
