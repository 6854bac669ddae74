//! # Client Error Types
//!
//! Error types for studio API calls and configuration.
//!
//! ## Error Categories
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Client Error Categories                           │
//! │                                                                         │
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────────────┐ │
//! │  │    Transport    │  │      Auth       │  │      Response           │ │
//! │  │                 │  │                 │  │                         │ │
//! │  │  Network        │  │  Unauthorized   │  │  Status (non-2xx)       │ │
//! │  │  Timeout        │  │  MissingCreds   │  │  Malformed body         │ │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────────────┘ │
//! │                                                                         │
//! │  All of them degrade to a bounded user message; none is fatal.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Result type alias for API operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Failure of a single studio API call.
///
/// `Display` is diagnostic text for logs. It never includes credentials.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    // =========================================================================
    // Transport Errors
    // =========================================================================
    /// Connection refused, DNS failure, reset, or client setup failure.
    #[error("Network error: {0}")]
    Network(String),

    /// The request did not complete within the configured timeout.
    #[error("Request timed out")]
    Timeout,

    // =========================================================================
    // Auth Errors
    // =========================================================================
    /// The server rejected the admin credentials (401 / 403).
    #[error("Not authorized (HTTP {status})")]
    Unauthorized { status: u16 },

    /// An authenticated endpoint was called without configured credentials.
    #[error("Admin credentials are not configured")]
    MissingCredentials,

    // =========================================================================
    // Response Errors
    // =========================================================================
    /// Any other unexpected status code.
    #[error("Unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    /// The body could not be read as the expected JSON shape.
    #[error("Malformed response: {0}")]
    Malformed(String),
}

impl ApiError {
    /// Returns true for credential problems, so logs can tell them apart from
    /// connectivity problems even though the user sees the same message.
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, ApiError::Unauthorized { .. } | ApiError::MissingCredentials)
    }

    /// HTTP status attached to the error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Unauthorized { status } | ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Timeout
        } else if err.is_decode() {
            ApiError::Malformed(err.to_string())
        } else {
            // Strip the URL so nothing about the endpoint leaks into messages.
            ApiError::Network(err.without_url().to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Malformed(err.to_string())
    }
}

// =============================================================================
// Configuration Errors
// =============================================================================

/// Configuration error types.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("Missing required configuration: {0}")]
    MissingRequired(String),
}
