//! HTTP client wrapper used by the remote ledger repository.

use reqwest::Client;
use std::time::Duration;

// ============================================================================
// Constants
// ============================================================================

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Web-script endpoints reject preflighted requests, so POST bodies go out
/// as plain text even though they contain JSON.
const TEXT_CONTENT_TYPE: &str = "text/plain;charset=utf-8";

// ============================================================================
// Configuration
// ============================================================================

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// Request timeout
    pub timeout: Duration,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

// ============================================================================
// HTTP Client
// ============================================================================

/// Base HTTP client wrapper
#[derive(Debug, Clone)]
pub struct HttpClient {
    inner: Client,
    config: HttpConfig,
}

impl HttpClient {
    /// Create a new HTTP client with custom configuration
    #[must_use]
    pub fn with_config(config: HttpConfig) -> Self {
        Self {
            inner: Client::new(),
            config,
        }
    }

    /// Build a GET request with standard headers
    pub fn get(&self, url: &str) -> reqwest::RequestBuilder {
        self.inner
            .get(url)
            .header("accept", "application/json")
            .timeout(self.config.timeout)
    }

    /// Build a POST request carrying `body` as plain text
    pub fn post_text(&self, url: &str, body: String) -> reqwest::RequestBuilder {
        self.inner
            .post(url)
            .header("content-type", TEXT_CONTENT_TYPE)
            .body(body)
            .timeout(self.config.timeout)
    }
}

