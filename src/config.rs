//! Runtime configuration.
//!
//! All settings come from environment variables with sensible defaults; there
//! is no configuration file. The service is stateless, so nothing here is
//! persisted.

use std::time::Duration;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the HTTP server binds to.
    pub host: String,
    /// Port the HTTP server binds to.
    pub port: u16,
    /// Public base URL used when generating sitemap entries,
    /// e.g. `https://tools.example.com`.
    pub public_base_url: String,
    /// Timeout applied to every upstream provider request.
    pub upstream_timeout: Duration,
    /// User agent sent to upstream providers.
    pub user_agent: String,
}

impl Config {
    /// Build a configuration from environment variables.
    ///
    /// - `TOOLBELT_HOST` - bind address (default `0.0.0.0`)
    /// - `TOOLBELT_PORT` - bind port (default `3100`)
    /// - `TOOLBELT_PUBLIC_BASE_URL` - base URL for sitemap links
    /// - `TOOLBELT_UPSTREAM_TIMEOUT_SECS` - upstream request timeout
    pub fn from_env() -> Self {
        let host = std::env::var("TOOLBELT_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let port = std::env::var("TOOLBELT_PORT")
            .ok()
            .and_then(|v| v.parse::<u16>().ok())
            .unwrap_or(3100);

        let public_base_url = std::env::var("TOOLBELT_PUBLIC_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:3100".to_string())
            .trim_end_matches('/')
            .to_string();

        let upstream_timeout = std::env::var("TOOLBELT_UPSTREAM_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(10));

        Self {
            host,
            port,
            public_base_url,
            upstream_timeout,
            user_agent: format!("toolbelt/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Build the shared HTTP client used for all upstream provider calls.
    pub fn http_client(&self) -> reqwest::Result<reqwest::Client> {
        reqwest::Client::builder()
            .user_agent(&self.user_agent)
            .timeout(self.upstream_timeout)
            .build()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3100,
            public_base_url: "http://localhost:3100".to_string(),
            upstream_timeout: Duration::from_secs(10),
            user_agent: format!("toolbelt/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}
