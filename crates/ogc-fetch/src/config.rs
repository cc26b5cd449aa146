//! Configuration for HTTP fetching.

use std::time::Duration;

use encoding_rs::Encoding;
use serde::{Deserialize, Serialize};

/// Configuration for the HTTP transport and document decoding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FetchConfig {
    /// Request timeout in seconds.
    pub timeout_secs: u64,

    /// User-Agent header sent with every request.
    pub user_agent: String,

    /// Encoding label used when a document declares no character set.
    pub fallback_encoding: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            user_agent: format!("ogc-client-rs/{}", env!("CARGO_PKG_VERSION")),
            fallback_encoding: "utf-8".to_string(),
        }
    }
}

impl FetchConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(val) = std::env::var("OGC_CLIENT_TIMEOUT_SECS") {
            if let Ok(secs) = val.parse() {
                config.timeout_secs = secs;
            }
        }

        if let Ok(val) = std::env::var("OGC_CLIENT_USER_AGENT") {
            if !val.trim().is_empty() {
                config.user_agent = val;
            }
        }

        if let Ok(val) = std::env::var("OGC_CLIENT_FALLBACK_ENCODING") {
            config.fallback_encoding = val;
        }

        config
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.timeout_secs == 0 {
            return Err("timeout_secs must be > 0".to_string());
        }

        if Encoding::for_label(self.fallback_encoding.as_bytes()).is_none() {
            return Err(format!("unknown encoding label: {}", self.fallback_encoding));
        }

        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// The fallback encoding, UTF-8 when the label is not recognised.
    pub fn fallback_encoding(&self) -> &'static Encoding {
        Encoding::for_label(self.fallback_encoding.as_bytes()).unwrap_or(encoding_rs::UTF_8)
    }
}
