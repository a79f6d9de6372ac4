//! Client configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `SHOPLITE_API_URL` - Base URL of the remote storefront API
//!   (e.g. `https://shop.example.com/api`)
//!
//! ## Optional
//! - `SHOPLITE_TOKEN_FILE` - Path for persisting the bearer token across
//!   process restarts; when unset the token lives in memory only

use std::path::PathBuf;

use thiserror::Error;
use url::Url;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront API client configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL of the remote API, without a trailing slash.
    pub base_url: String,
    /// Optional path for the persistent token store.
    pub token_file: Option<PathBuf>,
}

impl ApiConfig {
    /// Create a configuration for a fixed base URL.
    #[must_use]
    pub fn new(base_url: &Url) -> Self {
        Self {
            base_url: base_url.as_str().trim_end_matches('/').to_string(),
            token_file: None,
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `SHOPLITE_API_URL` is missing or is not a
    /// valid absolute URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let raw = get_required_env("SHOPLITE_API_URL")?;
        let base_url = raw
            .parse::<Url>()
            .map_err(|e| ConfigError::InvalidEnvVar("SHOPLITE_API_URL".to_string(), e.to_string()))?;
        if !base_url.has_host() {
            return Err(ConfigError::InvalidEnvVar(
                "SHOPLITE_API_URL".to_string(),
                "URL has no host".to_string(),
            ));
        }

        let token_file = get_optional_env("SHOPLITE_TOKEN_FILE").map(PathBuf::from);

        Ok(Self {
            token_file,
            ..Self::new(&base_url)
        })
    }
}

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}
