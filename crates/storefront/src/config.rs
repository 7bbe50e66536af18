//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `OAKLEAF_API_BASE_URL` - Backend API base URL
//!   (default: `http://localhost:8080/api`)
//! - `OAKLEAF_PAGE_SIZE` - Default page size for catalog listings
//!   (default: 10)

use thiserror::Error;
use url::Url;

const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";
const DEFAULT_PAGE_SIZE: u32 = 10;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Backend API base URL, without a trailing slash.
    pub base_url: String,
    /// Default page size for paginated catalog listings.
    pub page_size: u32,
}

impl StoreConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let base_url = get_env_or_default("OAKLEAF_API_BASE_URL", DEFAULT_BASE_URL);
        let base_url = validate_base_url(&base_url, "OAKLEAF_API_BASE_URL")?;

        let page_size = get_env_or_default("OAKLEAF_PAGE_SIZE", &DEFAULT_PAGE_SIZE.to_string())
            .parse::<u32>()
            .map_err(|e| ConfigError::InvalidEnvVar("OAKLEAF_PAGE_SIZE".to_string(), e.to_string()))?;

        Ok(Self {
            base_url,
            page_size,
        })
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Validate the base URL and normalize away any trailing slash.
fn validate_base_url(value: &str, var_name: &str) -> Result<String, ConfigError> {
    let url = Url::parse(value)
        .map_err(|e| ConfigError::InvalidEnvVar(var_name.to_string(), e.to_string()))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidEnvVar(
            var_name.to_string(),
            format!("unsupported scheme '{}'", url.scheme()),
        ));
    }

    Ok(value.trim_end_matches('/').to_string())
}
