//! Configuration for Hetzner Cloud clients.
//!
//! The configuration carries the API endpoint, request timeout and the
//! pagination parameters. Page size and the page budget are explicit values
//! threaded into every paginated call; there is no process-wide state.

use crate::Error;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;
use validator::Validate;

/// Default public API endpoint.
pub const DEFAULT_API_URL: &str = "https://api.hetzner.cloud/v1";

/// Default number of results requested per page.
pub const DEFAULT_PER_PAGE: u32 = 50;

/// Default upper bound on pages fetched by one listing call.
pub const DEFAULT_MAX_PAGES: u32 = 1000;

const fn default_request_timeout_secs() -> u64 {
    30
}

const fn default_per_page() -> u32 {
    DEFAULT_PER_PAGE
}

const fn default_max_pages() -> u32 {
    DEFAULT_MAX_PAGES
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

/// Configuration for an [`ApiClient`](crate::client::ApiClient) instance.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ClientConfig {
    /// Base URL of the API, including the version prefix
    #[validate(url)]
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Request timeout in seconds
    #[validate(range(min = 1, max = 300))]
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Results requested per page on listing endpoints (the API caps this at 50)
    #[validate(range(min = 1, max = 50))]
    #[serde(default = "default_per_page")]
    pub per_page: u32,

    /// Safety budget on the number of pages one listing call may fetch
    #[validate(range(min = 1, max = 10_000))]
    #[serde(default = "default_max_pages")]
    pub max_pages: u32,
}

impl ClientConfig {
    /// Create a configuration pointing at the public API with default values.
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails (it cannot for the defaults).
    pub fn new() -> Result<Self, Error> {
        Self::with_api_url(DEFAULT_API_URL)
    }

    /// Create a configuration for a custom endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid or validation fails.
    pub fn with_api_url(api_url: impl Into<String>) -> Result<Self, Error> {
        let config = Self {
            api_url: api_url.into(),
            request_timeout_secs: default_request_timeout_secs(),
            per_page: default_per_page(),
            max_pages: default_max_pages(),
        };

        config.validate()?;

        Ok(config)
    }

    /// Set the request timeout in seconds.
    #[must_use]
    pub const fn with_timeout(mut self, seconds: u64) -> Self {
        self.request_timeout_secs = seconds;
        self
    }

    /// Set the per-page result count for listing endpoints.
    #[must_use]
    pub const fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = per_page;
        self
    }

    /// Set the page budget for listing endpoints.
    #[must_use]
    pub const fn with_max_pages(mut self, max_pages: u32) -> Self {
        self.max_pages = max_pages;
        self
    }

    /// Get the request timeout as a [`Duration`].
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Parse and validate the API base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL cannot be parsed.
    pub fn parse_api_url(&self) -> Result<Url, Error> {
        Url::parse(&self.api_url)
            .map_err(|e| Error::ConfigError(format!("Invalid API URL: {e}")))
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            request_timeout_secs: default_request_timeout_secs(),
            per_page: default_per_page(),
            max_pages: default_max_pages(),
        }
    }
}
