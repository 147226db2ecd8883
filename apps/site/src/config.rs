use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

pub const DEFAULT_SHARE_URL: &str = "https://links.dineshd.dev/resume";

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// URL the share action copies.
    pub share_url: String,
    /// Optional JSON profile replacing the built-in one.
    pub resume_path: Option<PathBuf>,
    pub export_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            share_url: std::env::var("SHARE_URL").unwrap_or_else(|_| DEFAULT_SHARE_URL.to_string()),
            resume_path: optional_env("RESUME_PATH").map(PathBuf::from),
            export_timeout: Duration::from_secs(
                std::env::var("EXPORT_TIMEOUT_SECS")
                    .unwrap_or_else(|_| "30".to_string())
                    .parse::<u64>()
                    .context("EXPORT_TIMEOUT_SECS must be a whole number of seconds")?,
            ),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            share_url: DEFAULT_SHARE_URL.to_string(),
            resume_path: None,
            export_timeout: Duration::from_secs(30),
        }
    }
}

/// Unset and empty are the same thing.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
