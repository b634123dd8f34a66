// src/config/models.rs
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";
pub const DEFAULT_HEALTH_PATH: &str = "/health/";
pub const DEFAULT_TITLE: &str = "Ben's Job Tracker is Live!";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("api.base_url `{url}` is not a valid URL: {reason}")]
    InvalidBaseUrl { url: String, reason: url::ParseError },

    #[error("api.base_url must use http or https, got `{0}`")]
    UnsupportedScheme(String),

    #[error("api.timeout_secs must be greater than zero")]
    ZeroTimeout,

    #[error("health.path must not be empty")]
    EmptyHealthPath,

    #[error("display.title must not be empty")]
    EmptyTitle,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub health: HealthCheckConfig,
    pub display: DisplayConfig,
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.api.validate()?;

        if self.health.path.trim().is_empty() {
            return Err(ConfigError::EmptyHealthPath);
        }
        if self.display.title.trim().is_empty() {
            return Err(ConfigError::EmptyTitle);
        }
        Ok(())
    }
}

/// Settings for the shared HTTP client every request goes through.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Parsed and checked by [`ApiConfig::base_url`].
    pub base_url: String,
    /// No timeout when unset; the request waits as long as the transport does.
    pub timeout_secs: Option<u64>,
    pub user_agent: String,
}

impl ApiConfig {
    pub fn base_url(&self) -> Result<Url, ConfigError> {
        let url = Url::parse(&self.base_url).map_err(|reason| ConfigError::InvalidBaseUrl {
            url: self.base_url.clone(),
            reason,
        })?;

        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(ConfigError::UnsupportedScheme(other.to_string())),
        }
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.base_url()?;
        if self.timeout_secs == Some(0) {
            return Err(ConfigError::ZeroTimeout);
        }
        Ok(())
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: None,
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HealthCheckConfig {
    pub path: String,
}

impl Default for HealthCheckConfig {
    fn default() -> Self {
        Self {
            path: DEFAULT_HEALTH_PATH.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub title: String,
    pub color: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            color: true,
        }
    }
}
