//! Public configuration for the inventory HTTP client.

use std::time::Duration;

/// Default backend API root.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api/v1";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for [`crate::InventoryClient`].
///
/// # Example
///
/// ```
/// use hamster_http::HttpClientConfig;
/// use std::time::Duration;
///
/// let config = HttpClientConfig::new()
///     .with_base_url("http://inventory.lan:8080/api/v1")
///     .with_timeout(Duration::from_secs(5));
/// ```
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// API root including the `/api/v1` prefix
    pub(crate) base_url: String,
    pub(crate) user_agent: String,
    /// Applied to every request; there is no retry
    pub(crate) timeout: Duration,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: concat!("hamster-http/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl HttpClientConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API root.
    ///
    /// Defaults to `http://localhost:8080/api/v1`.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the request timeout.
    ///
    /// Defaults to 10 seconds.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub const fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = HttpClientConfig::new();
        assert_eq!(config.base_url, "http://localhost:8080/api/v1");
        assert!(config.user_agent.starts_with("hamster-http/"));
        assert_eq!(config.timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_builder_pattern() {
        let config = HttpClientConfig::new()
            .with_base_url("http://10.0.0.2:9000/api/v1")
            .with_user_agent("test-agent")
            .with_timeout(Duration::from_secs(3));

        assert_eq!(config.base_url(), "http://10.0.0.2:9000/api/v1");
        assert_eq!(config.user_agent, "test-agent");
        assert_eq!(config.timeout(), Duration::from_secs(3));
    }
}
