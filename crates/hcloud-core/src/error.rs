//! Error types for Hetzner Cloud operations.
//!
//! This module provides the error hierarchy shared by all resource clients,
//! including the classification of remote error payloads.

use serde::Deserialize;
use thiserror::Error;

/// Main error type for Hetzner Cloud operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The remote API reported an error with a code and message
    #[error("API error: {code} - {message}")]
    Api {
        /// Remote error code, verbatim
        code: String,
        /// Remote error message, verbatim
        message: String,
    },

    /// The requested resource does not exist
    #[error("Resource not found: {code} - {message}")]
    ResourceNotFound {
        /// Remote error code, verbatim
        code: String,
        /// Remote error message, verbatim
        message: String,
    },

    /// Response body could not be parsed as the expected JSON
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// Operation timed out
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// The API endpoint could not be reached
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Invalid endpoint or path
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// A paginated listing exceeded the configured page budget
    #[error("Pagination exceeded the configured limit of {limit} pages")]
    PageLimitExceeded {
        /// The configured page budget that was hit
        limit: u32,
    },
}

/// Specialized result type for Hetzner Cloud operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error payload carried in non-success response bodies.
///
/// Wire shape: `{"error": {"code": "...", "message": "..."}}`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct ApiErrorPayload {
    /// Machine-readable error code
    #[serde(default)]
    pub code: String,
    /// Human-readable error message
    #[serde(default)]
    pub message: String,
}

/// Wrapper matching the top-level error response body.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiErrorBody {
    /// The error object
    #[serde(default)]
    pub error: ApiErrorPayload,
}

impl Error {
    /// Returns the error code for this error type.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Api { .. } => "API_ERROR",
            Self::ResourceNotFound { .. } => "RESOURCE_NOT_FOUND",
            Self::Parse(_) => "PARSE_ERROR",
            Self::HttpError(_) => "HTTP_ERROR",
            Self::Timeout(_) => "TIMEOUT",
            Self::ServiceUnavailable(_) => "SERVICE_UNAVAILABLE",
            Self::ConfigError(_) => "CONFIG_ERROR",
            Self::InvalidEndpoint(_) => "INVALID_ENDPOINT",
            Self::PageLimitExceeded { .. } => "PAGE_LIMIT_EXCEEDED",
        }
    }

    /// Returns true if this error represents a missing resource.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::ResourceNotFound { .. })
    }
}

// Conversions from external error types
impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(err.to_string())
        } else if err.is_connect() {
            Self::ServiceUnavailable(err.to_string())
        } else {
            Self::HttpError(err.to_string())
        }
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Self::InvalidEndpoint(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

impl From<validator::ValidationErrors> for Error {
    fn from(err: validator::ValidationErrors) -> Self {
        Self::ConfigError(err.to_string())
    }
}
