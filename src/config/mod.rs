//! Configuration management for the management API client
//!
//! Settings come from a YAML file, from `VCD_*` environment variables, or
//! both; environment values take precedence over the file.

use crate::utils::error::{LifecycleError, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

/// Environment variable holding the API root URL
pub const ENV_BASE_URL: &str = "VCD_BASE_URL";
/// Environment variable holding the API version
pub const ENV_API_VERSION: &str = "VCD_API_VERSION";
/// Environment variable holding the session token
pub const ENV_AUTH_TOKEN: &str = "VCD_AUTH_TOKEN";
/// Environment variable holding the request timeout in seconds
pub const ENV_TIMEOUT: &str = "VCD_TIMEOUT";

/// Connection settings for the management API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// API root, e.g. `https://vcd.example.com`
    pub base_url: String,

    /// Value sent as `version=` in the `Accept` header
    pub api_version: String,

    /// Session token sent as `x-vcloud-authorization`
    pub auth_token: String,

    /// Request timeout in seconds
    pub timeout: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            api_version: "29.0".to_string(),
            auth_token: String::new(),
            timeout: 30,
        }
    }
}

impl ClientConfig {
    /// Load configuration from file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let config = Self::read_file(path).await?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let config = Self::default().with_env()?;
        config.validate()?;
        Ok(config)
    }

    /// Load the optional file, apply environment overrides, then validate
    pub async fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => Self::read_file(path).await?,
            None => Self::default(),
        };

        let config = config.with_env()?;
        config.validate()?;
        debug!(base_url = %config.base_url, api_version = %config.api_version, "Configuration loaded");
        Ok(config)
    }

    async fn read_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| LifecycleError::config(format!("Failed to read config file: {}", e)))?;

        serde_yaml::from_str(&content)
            .map_err(|e| LifecycleError::config(format!("Failed to parse config: {}", e)))
    }

    /// Override fields with the process environment
    pub fn with_env(self) -> Result<Self> {
        self.with_env_from(|key| env::var(key).ok())
    }

    /// Override fields with values returned by `lookup`
    pub fn with_env_from<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(base_url) = lookup(ENV_BASE_URL) {
            self.base_url = base_url;
        }
        if let Some(api_version) = lookup(ENV_API_VERSION) {
            self.api_version = api_version;
        }
        if let Some(auth_token) = lookup(ENV_AUTH_TOKEN) {
            self.auth_token = auth_token;
        }
        if let Some(timeout) = lookup(ENV_TIMEOUT) {
            self.timeout = timeout
                .parse()
                .map_err(|e| LifecycleError::config(format!("Invalid timeout: {}", e)))?;
        }
        Ok(self)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        self.endpoint()?;

        if self.auth_token.trim().is_empty() {
            return Err(LifecycleError::config("Auth token is required"));
        }
        if self.api_version.trim().is_empty() {
            return Err(LifecycleError::config("API version must not be empty"));
        }
        if self.timeout == 0 {
            return Err(LifecycleError::config("Timeout must be greater than 0"));
        }
        Ok(())
    }

    /// Parsed API root
    pub fn endpoint(&self) -> Result<Url> {
        let url = Url::parse(&self.base_url)?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(LifecycleError::config(format!(
                "Unsupported URL scheme: {}",
                url.scheme()
            )));
        }
        Ok(url)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            LifecycleError::config(format!("Failed to serialize config to YAML: {}", e))
        })
    }
}
