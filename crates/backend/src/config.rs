//! Backend configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `PIZZA_STAND_HOST` - Bind address (default: 127.0.0.1)
//! - `PIZZA_STAND_PORT` - Listen port (default: 3000, where the storefront
//!   expects its backend)
//! - `PIZZA_STAND_LOGIN_ON_REGISTER` - Whether registration also opens the
//!   session (default: true)

use std::net::{IpAddr, SocketAddr};

use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Behavior toggles for a fixture instance.
///
/// These capture the points where the original test suites disagree with
/// each other, so a suite can pick the variant it was written against.
#[derive(Debug, Clone, Copy)]
pub struct FixtureOptions {
    /// Whether a successful registration also opens the session.
    pub login_on_register: bool,
}

impl Default for FixtureOptions {
    fn default() -> Self {
        Self {
            login_on_register: true,
        }
    }
}

/// Standalone server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// IP address to bind the server to.
    pub host: IpAddr,
    /// Port to listen on.
    pub port: u16,
    /// Fixture behavior toggles.
    pub options: FixtureOptions,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a set variable fails to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("PIZZA_STAND_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("PIZZA_STAND_HOST".to_owned(), e.to_string()))?;
        let port = get_env_or_default("PIZZA_STAND_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("PIZZA_STAND_PORT".to_owned(), e.to_string()))?;
        let login_on_register = env_flag("PIZZA_STAND_LOGIN_ON_REGISTER", true)?;

        Ok(Self {
            host,
            port,
            options: FixtureOptions { login_on_register },
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Get a boolean environment variable with a default value.
fn env_flag(key: &str, default: bool) -> Result<bool, ConfigError> {
    match std::env::var(key) {
        Err(_) => Ok(default),
        Ok(raw) => parse_flag(&raw)
            .ok_or_else(|| ConfigError::InvalidEnvVar(key.to_owned(), format!("not a bool: {raw}"))),
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
