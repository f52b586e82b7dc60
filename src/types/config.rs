//! Configuration structures.
//!
//! Configuration is loaded from environment variables on top of defaults.

use super::{Error, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Catalog service address used when none is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:5000";

/// Environment variable holding the catalog service base URL.
pub const API_BASE_URL_ENV: &str = "TOOLSHARE_API_BASE_URL";

/// Environment variable holding the request timeout in whole seconds.
pub const API_TIMEOUT_ENV: &str = "TOOLSHARE_API_TIMEOUT_SECS";

/// Environment variable selecting the log format (`json` or plain).
pub const LOG_FORMAT_ENV: &str = "TOOLSHARE_LOG_FORMAT";

/// Global client configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Catalog service configuration.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Observability configuration.
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

impl Config {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(url) = lookup(API_BASE_URL_ENV) {
            config.catalog.base_url = url;
        }

        if let Some(raw) = lookup(API_TIMEOUT_ENV) {
            let secs: u64 = raw.trim().parse().map_err(|_| {
                Error::config(format!(
                    "{} must be a whole number of seconds, got '{}'",
                    API_TIMEOUT_ENV, raw
                ))
            })?;
            if secs == 0 {
                return Err(Error::config(format!("{} must be positive", API_TIMEOUT_ENV)));
            }
            config.catalog.request_timeout = Duration::from_secs(secs);
        }

        if let Some(format) = lookup(LOG_FORMAT_ENV) {
            config.observability.json_logs = format.eq_ignore_ascii_case("json");
        }

        Ok(config)
    }
}

/// Catalog service configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Base URL of the catalog service.
    pub base_url: String,

    /// Per-request timeout.
    #[serde(with = "humantime_serde")]
    pub request_timeout: Duration,
}

impl CatalogConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Base URL with one trailing slash removed; blank means the default.
    pub fn normalized_base_url(&self) -> String {
        let trimmed = self.base_url.trim();
        let url = if trimmed.is_empty() {
            DEFAULT_API_BASE_URL
        } else {
            trimmed
        };
        url.strip_suffix('/').unwrap_or(url).to_string()
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout: Duration::from_secs(10),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// Tracing log level used when `RUST_LOG` is unset.
    pub log_level: String,

    /// Enable JSON log formatting.
    pub json_logs: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json_logs: false,
        }
    }
}
