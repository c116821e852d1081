//! # Application configuration — `user-admin.toml`
//!
//! Defines the TOML configuration read by the launchers (filename:
//! [`AppConfig::filename`] = `"user-admin.toml"`). It tells the client where the user
//! service lives and how the list view paginates.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "https://jsonplaceholder.typicode.com"
//! timeout_secs = 10        # optional, native targets only
//!
//! [list]
//! page_size = 5            # must be non-zero
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`AppConfig`] | Top-level config. Builder helpers, TOML (de)serialisation, environment override. |
//! | [`ApiConfig`] | Service section: `base_url` and an optional request timeout. |
//! | [`ListConfig`] | List section: `page_size`, default **5**. |
//!
//! All structs implement `Default`, so a missing or empty file equals the default
//! configuration.

use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::pagination::DEFAULT_PAGE_SIZE;

/// Environment variable that overrides [`ApiConfig::base_url`].
pub const API_URL_ENV: &str = "USER_ADMIN_API_URL";

/// Base URL of the public JSONPlaceholder service.
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid user-admin.toml: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to serialise config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Top-level configuration stored in `user-admin.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub list: ListConfig,
}

/// Remote user service settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Per-request timeout. None waits indefinitely.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: None,
        }
    }
}

/// List view settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ListConfig {
    #[serde(default = "default_page_size")]
    pub page_size: NonZeroUsize,
}

fn default_page_size() -> NonZeroUsize {
    DEFAULT_PAGE_SIZE
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
        }
    }
}

impl AppConfig {
    /// Create a config pointing at the given service.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api: ApiConfig {
                base_url: base_url.into(),
                ..ApiConfig::default()
            },
            list: ListConfig::default(),
        }
    }

    /// Builder method to set the page size.
    pub fn with_page_size(mut self, page_size: NonZeroUsize) -> Self {
        self.list.page_size = page_size;
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "user-admin.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Apply [`API_URL_ENV`] if `lookup` yields a non-blank value.
    pub fn with_env_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(url) = lookup(API_URL_ENV).filter(|v| !v.trim().is_empty()) {
            self.api.base_url = url;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.list.page_size.get(), 5);
        assert!(config.api.timeout_secs.is_none());
    }

    #[test]
    fn test_partial_file() {
        let config = AppConfig::from_toml("[list]\npage_size = 10\n").unwrap();
        assert_eq!(config.list.page_size.get(), 10);
        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let err = AppConfig::from_toml("[list]\npage_size = 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = AppConfig::new("http://localhost:3000")
            .with_page_size(NonZeroUsize::new(8).unwrap());
        let text = config.to_toml().unwrap();
        assert_eq!(AppConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn test_env_override() {
        let config = AppConfig::default().with_env_overrides(|key| {
            (key == API_URL_ENV).then(|| "http://127.0.0.1:8080".to_string())
        });
        assert_eq!(config.api.base_url, "http://127.0.0.1:8080");

        let config = AppConfig::default().with_env_overrides(|_| Some("  ".to_string()));
        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
    }
}
