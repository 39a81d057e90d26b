//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `FARMSTAND_CONFIRM_URL` - Absolute URL of the pre-order confirm endpoint
//!
//! ## Optional
//! - `FARMSTAND_STORAGE_DIR` - Directory for file-backed collection storage
//!   (default: `./farmstand-data`)

use std::env;
use std::path::PathBuf;

use thiserror::Error;
use url::Url;

/// Fallback storage directory when `FARMSTAND_STORAGE_DIR` is unset.
pub const DEFAULT_STORAGE_DIR: &str = "./farmstand-data";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront cart engine configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Pre-order confirm endpoint.
    pub confirm_url: Url,
    /// Directory backing [`crate::storage::FileStorage`].
    pub storage_dir: PathBuf,
}

impl StorefrontConfig {
    /// Load configuration from the environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a required variable is missing or a
    /// value fails to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        let confirm_url = require_env("FARMSTAND_CONFIRM_URL")?;
        let confirm_url = Url::parse(&confirm_url).map_err(|err| {
            ConfigError::InvalidEnvVar("FARMSTAND_CONFIRM_URL".to_string(), err.to_string())
        })?;

        let storage_dir = env::var("FARMSTAND_STORAGE_DIR")
            .unwrap_or_else(|_| DEFAULT_STORAGE_DIR.to_string())
            .into();

        Ok(Self {
            confirm_url,
            storage_dir,
        })
    }
}

fn require_env(name: &str) -> Result<String, ConfigError> {
    env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}
