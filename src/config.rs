//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ```bash
//! export ROBOT_PASSWORD="robot2026"
//! export LISTEN="0.0.0.0:3000"
//! ```
//!
//! ## Required Variables
//!
//! - `ROBOT_PASSWORD` - Shared password for the control panel (non-empty)
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `STATIC_DIR` - Directory served under `/static` (default: `static`)
//! - `SESSION_IDLE_MINUTES` - Session inactivity expiry (default: 60, max: 10080)
//! - `SECURE_COOKIE` - Mark the session cookie `Secure` (default: `false`)

use anyhow::{Context, Result};
use std::env;
use std::fmt;

/// Upper bound for `SESSION_IDLE_MINUTES` (one week).
const MAX_SESSION_IDLE_MINUTES: i64 = 7 * 24 * 60;

/// Service configuration loaded from environment variables.
#[derive(Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Shared secret compared against submitted passwords.
    /// Never printed by [`Config::print_summary`] or `Debug`.
    pub password: String,
    pub static_dir: String,
    /// Minutes of inactivity after which a session expires.
    pub session_idle_minutes: i64,
    /// When true, the session cookie is only sent over HTTPS.
    /// Enable when the service is served over TLS or behind a TLS-terminating proxy.
    pub secure_cookie: bool,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `ROBOT_PASSWORD` is missing.
    pub fn from_env() -> Result<Self> {
        let password = env::var("ROBOT_PASSWORD").context("ROBOT_PASSWORD must be set")?;

        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
        let static_dir = env::var("STATIC_DIR").unwrap_or_else(|_| "static".to_string());

        let session_idle_minutes = env::var("SESSION_IDLE_MINUTES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(60);

        let secure_cookie = env::var("SECURE_COOKIE")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(false);

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            password,
            static_dir,
            session_idle_minutes,
            secure_cookie,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `password` is empty
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    /// - `session_idle_minutes` is outside `1..=10080`
    pub fn validate(&self) -> Result<()> {
        if self.password.is_empty() {
            anyhow::bail!("ROBOT_PASSWORD must not be empty");
        }

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

        if self.session_idle_minutes < 1 || self.session_idle_minutes > MAX_SESSION_IDLE_MINUTES {
            anyhow::bail!(
                "SESSION_IDLE_MINUTES must be between 1 and {}, got {}",
                MAX_SESSION_IDLE_MINUTES,
                self.session_idle_minutes
            );
        }

        if self.static_dir.trim().is_empty() {
            anyhow::bail!("STATIC_DIR must not be empty");
        }

        Ok(())
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Password: ***");
        tracing::info!("  Static dir: {}", self.static_dir);
        tracing::info!("  Session idle timeout: {} min", self.session_idle_minutes);
        tracing::info!("  Secure cookie: {}", self.secure_cookie);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("listen_addr", &self.listen_addr)
            .field("log_level", &self.log_level)
            .field("log_format", &self.log_format)
            .field("password", &"***")
            .field("static_dir", &self.static_dir)
            .field("session_idle_minutes", &self.session_idle_minutes)
            .field("secure_cookie", &self.secure_cookie)
            .finish()
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if required variables are missing or validation fails.
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
