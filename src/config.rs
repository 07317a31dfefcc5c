//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts.
//!
//! ## Required Variables
//!
//! None. The service runs on a local SQLite file by default.
//!
//! ## Optional Variables
//!
//! - `DATABASE_URL` - SQLite connection string (default: `sqlite:urls.db`)
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `SLUG_POOL_SIZE` - Target size of the pre-generated slug pool (default: 1000)
//! - `SLUG_LENGTH` - Length of generated slugs in hex characters (default: 8)
//! - `MAX_GENERATION_ATTEMPTS` - Per-budget attempts for slug generation and
//!   insert retries (default: 100)
//! - `CACHE_CAPACITY` - Redirect cache bound; `0` disables caching (default: 1000)
//! - `DB_MAX_CONNECTIONS` - Connection pool size (default: 10)
//! - `DB_CONNECT_TIMEOUT` - Pool acquire timeout in seconds (default: 30)

use anyhow::Result;
use std::env;

/// Maximum slug length accepted anywhere in the system.
pub const MAX_SLUG_LENGTH: usize = 32;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Target size of the pre-generated slug pool.
    pub slug_pool_size: usize,
    /// Length of generated slugs in hex characters.
    pub slug_length: usize,
    /// Attempt budget for fallback generation and for insert retries.
    pub max_generation_attempts: usize,
    /// Redirect cache bound. Zero disables caching entirely.
    pub cache_capacity: usize,

    // ── SqlitePool settings ─────────────────────────────────────────────────
    /// Maximum number of connections in the pool (`DB_MAX_CONNECTIONS`).
    pub db_max_connections: u32,
    /// Timeout for acquiring a connection from the pool in seconds
    /// (`DB_CONNECT_TIMEOUT`).
    pub db_connect_timeout: u64,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite:urls.db".to_string());
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let slug_pool_size = env::var("SLUG_POOL_SIZE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(1000);

        let slug_length = env::var("SLUG_LENGTH")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(8);

        let max_generation_attempts = env::var("MAX_GENERATION_ATTEMPTS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(100);

        let cache_capacity = env::var("CACHE_CAPACITY")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(1000);

        let db_max_connections = env::var("DB_MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);

        let db_connect_timeout = env::var("DB_CONNECT_TIMEOUT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);

        Ok(Self {
            database_url,
            listen_addr,
            log_level,
            log_format,
            slug_pool_size,
            slug_length,
            max_generation_attempts,
            cache_capacity,
            db_max_connections,
            db_connect_timeout,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any value is out of its supported range.
    pub fn validate(&self) -> Result<()> {
        if !self.database_url.starts_with("sqlite:") {
            anyhow::bail!(
                "DATABASE_URL must start with 'sqlite:', got '{}'",
                self.database_url
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if self.slug_pool_size == 0 || self.slug_pool_size > 100_000 {
            anyhow::bail!(
                "SLUG_POOL_SIZE must be between 1 and 100000, got {}",
                self.slug_pool_size
            );
        }

        if self.slug_length < 4 || self.slug_length > MAX_SLUG_LENGTH {
            anyhow::bail!(
                "SLUG_LENGTH must be between 4 and {}, got {}",
                MAX_SLUG_LENGTH,
                self.slug_length
            );
        }

        if self.max_generation_attempts == 0 {
            anyhow::bail!("MAX_GENERATION_ATTEMPTS must be at least 1");
        }

        if self.db_max_connections == 0 {
            anyhow::bail!("DB_MAX_CONNECTIONS must be at least 1");
        }

        if self.db_connect_timeout == 0 {
            anyhow::bail!("DB_CONNECT_TIMEOUT must be greater than 0");
        }

        Ok(())
    }

    /// Returns whether the redirect cache is enabled.
    pub fn is_cache_enabled(&self) -> bool {
        self.cache_capacity > 0
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Database: {}", self.database_url);

        if self.is_cache_enabled() {
            tracing::info!("  Redirect cache: enabled ({} entries)", self.cache_capacity);
        } else {
            tracing::info!("  Redirect cache: disabled");
        }

        tracing::info!("  Slug pool size: {}", self.slug_pool_size);
        tracing::info!("  Slug length: {}", self.slug_length);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
