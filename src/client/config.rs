//! Configuration management for the Polly client

use std::time::Duration;

use compact_str::{CompactString, format_compact};

use super::error::{ClientError, Result};

/// Main configuration for the Polly client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Polly API base URL, e.g. `http://localhost:8000`
    pub base_url: CompactString,
    /// Request configuration
    pub request: RequestConfig,
}

/// HTTP request configuration
#[derive(Debug, Clone)]
pub struct RequestConfig {
    /// Request timeout; `None` leaves the transport default in place
    pub timeout: Option<Duration>,
    /// Value of the `User-Agent` header
    pub user_agent: CompactString,
}

impl Default for RequestConfig {
    fn default() -> Self {
        Self {
            timeout: None,
            user_agent: format_compact!("polly-client/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<CompactString>) -> Self {
        Self {
            base_url: base_url.into(),
            request: RequestConfig::default(),
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.base_url.is_empty() {
            return Err(ClientError::config_validation(
                "base_url",
                "Base URL cannot be empty",
            ));
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ClientError::config_validation(
                "base_url",
                "Base URL must start with http:// or https://",
            ));
        }

        if url::Url::parse(&self.base_url).is_err() {
            return Err(ClientError::invalid_url(self.base_url.clone()));
        }

        if self.request.timeout.is_some_and(|t| t.is_zero()) {
            return Err(ClientError::config_validation(
                "timeout",
                "Timeout must be greater than zero",
            ));
        }

        Ok(())
    }

    /// Join an endpoint path onto the base URL, ignoring a trailing slash
    pub fn endpoint(&self, path: &str) -> CompactString {
        format_compact!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Set request configuration
    pub fn with_request(mut self, request: RequestConfig) -> Self {
        self.request = request;
        self
    }

    /// Set request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request.timeout = Some(timeout);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_local_base_url() {
        assert!(ClientConfig::new("http://localhost:8000").validate().is_ok());
    }

    #[test]
    fn rejects_empty_base_url() {
        let err = ClientConfig::new("").validate().unwrap_err();
        assert!(matches!(
            err,
            ClientError::ConfigValidation { ref field, .. } if field == "base_url"
        ));
    }

    #[test]
    fn rejects_non_http_scheme() {
        let err = ClientConfig::new("ftp://localhost").validate().unwrap_err();
        assert!(matches!(err, ClientError::ConfigValidation { .. }));
    }

    #[test]
    fn rejects_unparsable_url() {
        let err = ClientConfig::new("http://").validate().unwrap_err();
        assert!(matches!(err, ClientError::InvalidUrl { .. }));
    }

    #[test]
    fn rejects_zero_timeout() {
        let config = ClientConfig::new("http://localhost:8000").with_timeout(Duration::ZERO);
        assert!(config.validate().is_err());
    }

    #[test]
    fn endpoint_ignores_trailing_slash() {
        let plain = ClientConfig::new("http://localhost:8000");
        let slashed = ClientConfig::new("http://localhost:8000/");
        assert_eq!(plain.endpoint("polls"), "http://localhost:8000/polls");
        assert_eq!(slashed.endpoint("/polls"), "http://localhost:8000/polls");
    }

    #[test]
    fn endpoint_keeps_base_path() {
        let config = ClientConfig::new("https://example.com/api");
        assert_eq!(config.endpoint("register"), "https://example.com/api/register");
    }
}
