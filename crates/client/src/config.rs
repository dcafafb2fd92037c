//! Client configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `CIVICSTORM_DATA_DIR` - Directory holding the session record (default: .civicstorm)
//! - `CIVICSTORM_AUTH_LATENCY_MS` - Simulated auth round trip in ms (default: 800)
//! - `CIVICSTORM_DEMO_PASSWORD` - Password shared by the seeded accounts (default: password)

use std::path::PathBuf;
use std::time::Duration;

use secrecy::SecretString;
use thiserror::Error;

const DEFAULT_DATA_DIR: &str = ".civicstorm";
const DEFAULT_AUTH_LATENCY_MS: &str = "800";
const DEFAULT_DEMO_PASSWORD: &str = "password";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Directory for durable storage
    pub data_dir: PathBuf,
    /// Simulated round trip for login and signup
    pub auth_latency: Duration,
    /// Password accepted for the seeded accounts
    pub demo_password: SecretString,
}

impl ClientConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get_or_default = |key: &str, default: &str| {
            lookup(key).unwrap_or_else(|| default.to_string())
        };

        let data_dir = PathBuf::from(get_or_default("CIVICSTORM_DATA_DIR", DEFAULT_DATA_DIR));
        let auth_latency_ms = get_or_default("CIVICSTORM_AUTH_LATENCY_MS", DEFAULT_AUTH_LATENCY_MS)
            .parse::<u64>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("CIVICSTORM_AUTH_LATENCY_MS".to_string(), e.to_string())
            })?;
        let demo_password = get_or_default("CIVICSTORM_DEMO_PASSWORD", DEFAULT_DEMO_PASSWORD);
        if demo_password.is_empty() {
            return Err(ConfigError::InvalidEnvVar(
                "CIVICSTORM_DEMO_PASSWORD".to_string(),
                "cannot be empty".to_string(),
            ));
        }

        Ok(Self {
            data_dir,
            auth_latency: Duration::from_millis(auth_latency_ms),
            demo_password: SecretString::from(demo_password),
        })
    }
}
