//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts. The registry is in-memory, so there are no connection strings;
//! everything has a sensible default for local development.
//!
//! ## Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `PLATFORM_DOMAIN` - Apex domain apps are served under (default: `tai.lat`)
//! - `SEED_SAMPLE_DATA` - Preload the demo app on startup (default: `true`)

use anyhow::Result;
use std::env;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Apex domain used to build app URLs (`https://{subdomain}.{platform_domain}`).
    pub platform_domain: String,
    /// When true, the registry starts preloaded with the demo lottery app.
    pub seed_sample_data: bool,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Self {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
        let platform_domain =
            env::var("PLATFORM_DOMAIN").unwrap_or_else(|_| "tai.lat".to_string());

        let seed_sample_data = env::var("SEED_SAMPLE_DATA")
            .map(|v| !(v.eq_ignore_ascii_case("false") || v == "0"))
            .unwrap_or(true);

        Self {
            listen_addr,
            log_level,
            log_format,
            platform_domain,
            seed_sample_data,
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not in `host:port` form
    /// - `platform_domain` is empty or carries a scheme or path
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.platform_domain.is_empty() {
            anyhow::bail!("PLATFORM_DOMAIN must not be empty");
        }

        if self.platform_domain.contains('/') || self.platform_domain.contains("://") {
            anyhow::bail!(
                "PLATFORM_DOMAIN must be a bare domain name, got '{}'",
                self.platform_domain
            );
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Platform domain: {}", self.platform_domain);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!(
            "  Sample data: {}",
            if self.seed_sample_data {
                "seeded"
            } else {
                "disabled"
            }
        );
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
    let config = Config::from_env();
    config.validate()?;
    Ok(config)
}
