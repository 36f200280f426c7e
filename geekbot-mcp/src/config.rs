//! Configuration management for geekbot-mcp
//!
//! All settings come from `GB_*` environment variables and are read once at
//! start-up. The resulting [`Config`] is passed explicitly to the API client,
//! so nothing below this module touches the process environment.

use crate::common::env_loader::EnvLoader;
use std::time::Duration;
use thiserror::Error;

/// Documented root of the Geekbot v1 REST API
pub const DEFAULT_BASE_URL: &str = "https://api.geekbot.com/v1";

/// Request timeout applied to every API session
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Page size sent as `limit` on report queries
pub const DEFAULT_REPORTS_LIMIT: u32 = 30;

const ENV_PREFIX: &str = "GB";

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required variable is not set
    #[error("{name} is not set, please add it to your MCP client configuration")]
    MissingVariable {
        /// Name of the environment variable
        name: String,
    },

    /// Invalid configuration value for a specific field
    #[error("Invalid configuration value for '{field}': {value}\n{hint}")]
    InvalidValue {
        /// Name of the configuration field that has an invalid value
        field: String,
        /// The invalid value that was provided
        value: String,
        /// Helpful hint about how to fix the issue
        hint: String,
    },
}

/// Configuration settings for the Geekbot MCP server
#[derive(Clone)]
pub struct Config {
    /// Geekbot API key, sent verbatim in the `Authorization` header
    pub api_key: String,
    /// API root without trailing slash (default: [`DEFAULT_BASE_URL`])
    pub base_url: String,
    /// Per-request timeout (default: 30 seconds)
    pub timeout: Duration,
    /// `limit` sent with report queries (default: 30)
    pub reports_limit: u32,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("reports_limit", &self.reports_limit)
            .finish()
    }
}

impl Config {
    /// Configuration with defaults for everything except the credential
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            reports_limit: DEFAULT_REPORTS_LIMIT,
        }
    }

    /// Load configuration from the environment.
    ///
    /// | Variable | Default |
    /// |---|---|
    /// | `GB_API_KEY` | required |
    /// | `GB_API_BASE_URL` | `https://api.geekbot.com/v1` |
    /// | `GB_API_TIMEOUT_SECS` | `30` |
    /// | `GB_REPORTS_LIMIT` | `30` |
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingVariable`] when `GB_API_KEY` is unset or
    /// blank, and [`ConfigError::InvalidValue`] for unparsable or zero numbers.
    pub fn from_env() -> Result<Self, ConfigError> {
        let loader = EnvLoader::new(ENV_PREFIX);

        let api_key = loader.load_required("API_KEY")?;
        let base_url = loader
            .load_string("API_BASE_URL", DEFAULT_BASE_URL)
            .trim_end_matches('/')
            .to_string();
        let timeout_secs: u64 = loader.load_parsed("API_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)?;
        let reports_limit: u32 = loader.load_parsed("REPORTS_LIMIT", DEFAULT_REPORTS_LIMIT)?;

        let config = Self {
            api_key,
            base_url,
            timeout: Duration::from_secs(timeout_secs),
            reports_limit,
        };
        config.validate()?;

        tracing::debug!("Loaded configuration: {:?}", config);
        Ok(config)
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_key.trim().is_empty() {
            return Err(ConfigError::MissingVariable {
                name: format!("{ENV_PREFIX}_API_KEY"),
            });
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                field: format!("{ENV_PREFIX}_API_BASE_URL"),
                value: self.base_url.clone(),
                hint: "must be an http:// or https:// URL".to_string(),
            });
        }
        if self.timeout.is_zero() {
            return Err(ConfigError::InvalidValue {
                field: format!("{ENV_PREFIX}_API_TIMEOUT_SECS"),
                value: "0".to_string(),
                hint: "must be at least 1 second".to_string(),
            });
        }
        if self.reports_limit == 0 {
            return Err(ConfigError::InvalidValue {
                field: format!("{ENV_PREFIX}_REPORTS_LIMIT"),
                value: "0".to_string(),
                hint: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}
