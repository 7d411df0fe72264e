//! Environment-driven configuration for the scanner client.

use std::env;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://scanner.tradingview.com/";
pub const DEFAULT_SCREENER: &str = "crypto";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Deployment environment (`ENVIRONMENT`), `sandbox` when unset.
pub fn get_environment() -> String {
    env::var("ENVIRONMENT").unwrap_or_else(|_| "sandbox".to_string())
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScannerConfig {
    /// Scanner root, must end with `/`.
    pub base_url: String,
    /// Screener used when the caller does not name one.
    pub screener: String,
    /// Upper bound for a whole request/response exchange.
    pub timeout: Duration,
    /// Dump request and response bodies at debug level.
    pub debug: bool,
    pub user_agent: String,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            screener: DEFAULT_SCREENER.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            debug: false,
            user_agent: format!("tvscanner/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ScannerConfig {
    /// Build from `SCANNER_*` variables, keeping defaults for anything unset
    /// or unparsable.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let base_url = env::var("SCANNER_BASE_URL")
            .ok()
            .filter(|url| !url.is_empty())
            .map(|url| if url.ends_with('/') { url } else { format!("{}/", url) })
            .unwrap_or(defaults.base_url);

        let screener = env::var("SCANNER_SCREENER")
            .ok()
            .filter(|s| !s.is_empty())
            .unwrap_or(defaults.screener);

        let timeout = env::var("SCANNER_TIMEOUT_SECS")
            .ok()
            .and_then(|t| t.parse::<u64>().ok())
            .filter(|t| *t > 0)
            .map(Duration::from_secs)
            .unwrap_or(defaults.timeout);

        let debug = env::var("SCANNER_DEBUG")
            .map(|v| matches!(v.to_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(defaults.debug);

        Self {
            base_url,
            screener,
            timeout,
            debug,
            user_agent: defaults.user_agent,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        self.base_url = base_url;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}
