//! Feed configuration

use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

/// Daily history of ECB reference rates since 1999
pub const HISTORIC_URL: &str = "https://www.ecb.europa.eu/stats/eurofxref/eurofxref-hist.xml";

/// Where reference rates are loaded from
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    /// Primary feed location
    pub url: String,
    /// Local copy tried when the primary feed cannot be fetched or read
    pub fallback_path: Option<PathBuf>,
    /// Whether the snapshot bundled with the crate is tried last
    pub bundled_fallback: bool,
    /// HTTP request timeout in seconds
    pub timeout_secs: u64,
    pub log_level: String,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            url: HISTORIC_URL.to_string(),
            fallback_path: None,
            bundled_fallback: true,
            timeout_secs: 30,
            log_level: "info".to_string(),
        }
    }
}

impl FeedConfig {
    /// Load configuration from `ECB_*` environment variables
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::Environment::with_prefix("ECB").try_parsing(true))
            .build()?
            .try_deserialize()
    }

    pub fn with_fallback(mut self, path: impl Into<PathBuf>) -> Self {
        self.fallback_path = Some(path.into());
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
