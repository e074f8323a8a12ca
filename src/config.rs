// src/config.rs
use std::env;
use std::time::Duration;

use anyhow::{Context, bail};

pub const DEFAULT_MODEL: &str = "gemini-2.0-flash-exp";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 30;

/// Process configuration, read once at startup and passed by reference
/// wherever it is needed. No globals.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub port: u16,
    pub upstream_timeout: Duration,
}

impl Config {
    /// Read configuration from the environment. `API_KEY` is mandatory;
    /// everything else falls back to a default.
    pub fn from_env() -> anyhow::Result<Self> {
        let api_key = match env::var("API_KEY") {
            Ok(key) if !key.trim().is_empty() => key,
            _ => bail!("API key not found. Please check your .env file."),
        };

        let model = env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let base_url =
            env::var("GEMINI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let port = match env::var("PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("invalid PORT value: {raw}"))?,
            Err(_) => DEFAULT_PORT,
        };

        let timeout_secs = match env::var("UPSTREAM_TIMEOUT_SECS") {
            Ok(raw) => raw
                .parse::<u64>()
                .with_context(|| format!("invalid UPSTREAM_TIMEOUT_SECS value: {raw}"))?,
            Err(_) => DEFAULT_UPSTREAM_TIMEOUT_SECS,
        };

        Ok(Self {
            api_key,
            model,
            base_url,
            port,
            upstream_timeout: Duration::from_secs(timeout_secs),
        })
    }
}
