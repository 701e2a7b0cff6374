//! Start-up configuration, read once from the environment.

use std::net::SocketAddr;

use storefront_catalog::DEFAULT_CATALOG_URL;
use storefront_observability::{LogFormat, ObservabilityConfig};
use thiserror::Error;

pub const ENV_BIND_ADDR: &str = "STOREFRONT_ADDR";
pub const ENV_CATALOG_URL: &str = "CATALOG_URL";
pub const ENV_LOG_FORMAT: &str = "STOREFRONT_LOG_FORMAT";

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid STOREFRONT_ADDR `{value}`: {source}")]
    InvalidBindAddr {
        value: String,
        source: std::net::AddrParseError,
    },

    #[error("invalid CATALOG_URL `{0}`: expected an absolute http(s) URL")]
    InvalidCatalogUrl(String),

    #[error("invalid STOREFRONT_LOG_FORMAT: {0}")]
    InvalidLogFormat(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    pub bind_addr: SocketAddr,
    pub catalog_url: String,
    pub log_format: LogFormat,
}

impl StorefrontConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup; unset keys take defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let addr = lookup(ENV_BIND_ADDR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr: SocketAddr = addr
            .parse()
            .map_err(|source| ConfigError::InvalidBindAddr {
                value: addr.clone(),
                source,
            })?;

        let catalog_url =
            lookup(ENV_CATALOG_URL).unwrap_or_else(|| DEFAULT_CATALOG_URL.to_string());
        match reqwest::Url::parse(&catalog_url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {}
            _ => return Err(ConfigError::InvalidCatalogUrl(catalog_url)),
        }

        let log_format = match lookup(ENV_LOG_FORMAT) {
            Some(raw) => raw.parse().map_err(ConfigError::InvalidLogFormat)?,
            None => LogFormat::default(),
        };

        Ok(Self {
            bind_addr,
            catalog_url,
            log_format,
        })
    }

    pub fn observability(&self) -> ObservabilityConfig {
        ObservabilityConfig {
            format: self.log_format,
            ..ObservabilityConfig::default()
        }
    }
}
