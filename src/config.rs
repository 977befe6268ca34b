//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup, validated before the server
//! starts, and treated as read-only for the process lifetime.
//!
//! ## Required Variables
//!
//! - `DATABASE_URL` - SQLite connection string, e.g. `sqlite://snip.db?mode=rwc`
//! - `BASE_URL` - Prefix for generated short URLs. Concatenated directly with
//!   the alias, so include a trailing `/` if one is desired,
//!   e.g. `http://localhost:3000/url/`
//!
//! ## Optional Variables
//!
//! - `ALIAS_CHARS` - Character set for random aliases (default: `a-z0-9`)
//! - `ALIAS_LENGTH` - Length of random aliases (default: `8`, must be positive)
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::{Context, Result, bail};
use std::env;

/// Default character set for randomly generated aliases.
const DEFAULT_ALIAS_CHARS: &str = "abcdefghijklmnopqrstuvwxyz0123456789";

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub listen_addr: String,
    /// Prefix every short URL is composed from: `base_url + alias`.
    pub base_url: String,
    /// Character set random aliases are drawn from. Never blank.
    pub alias_chars: String,
    /// Length of randomly generated aliases. Always positive.
    pub alias_length: usize,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `DATABASE_URL` or `BASE_URL` is missing or blank,
    /// if `ALIAS_CHARS` is overridden with a blank value, or if
    /// `ALIAS_LENGTH` is not a positive integer.
    pub fn from_env() -> Result<Self> {
        let database_url = env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
        if database_url.trim().is_empty() {
            bail!("DATABASE_URL must not be blank");
        }

        let base_url = env::var("BASE_URL").context("BASE_URL must be set")?;
        if base_url.trim().is_empty() {
            bail!("BASE_URL must not be blank");
        }

        let alias_chars =
            env::var("ALIAS_CHARS").unwrap_or_else(|_| DEFAULT_ALIAS_CHARS.to_string());
        if alias_chars.trim().is_empty() {
            bail!("ALIAS_CHARS must not be blank");
        }

        let alias_length = match env::var("ALIAS_LENGTH") {
            Ok(raw) => raw
                .parse::<usize>()
                .ok()
                .filter(|n| *n > 0)
                .with_context(|| format!("ALIAS_LENGTH must be a positive integer, got '{raw}'"))?,
            Err(_) => 8,
        };

        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Ok(Self {
            database_url,
            listen_addr,
            base_url,
            alias_chars,
            alias_length,
            log_level,
            log_format,
        })
    }
}
