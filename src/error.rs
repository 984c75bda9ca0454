//! Error types for completion and event lookup operations.
//!
//! Two layers of errors live here:
//!
//! - [`LlmError`] describes what went wrong while talking to the
//!   OpenAI-compatible completion service (transport, auth, quota, body
//!   decoding). Variants are categorized so logs can tell a bad key from a
//!   network blip.
//! - [`EventError`] is what the event lookup hands to the HTTP layer. Every
//!   upstream failure collapses into [`EventError::Upstream`], carrying the
//!   upstream message as text.
//!
//! # Result Types
//!
//! ```rust
//! use historical_events_api::{EventResult, LlmResult};
//!
//! fn raw_text() -> LlmResult<String> {
//!     Ok("{}".to_string())
//! }
//!
//! fn event_text() -> EventResult<String> {
//!     Ok("{}".to_string())
//! }
//! ```

use crate::logging::{log_error, log_warn};
use thiserror::Error;

// ============================================================================
// Error categorization types
// ============================================================================

/// High-level categorization of completion errors, recorded in logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// External service failures (provider outage, network issues).
    External,

    /// Caller-side mistakes such as a missing or malformed API key.
    Client,

    /// Temporary failures such as quota throttling.
    Transient,
}

impl ErrorCategory {
    /// Lowercase label used as a structured log field.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::External => "external",
            Self::Client => "client",
            Self::Transient => "transient",
        }
    }
}

// ============================================================================
// LLM Error types
// ============================================================================

/// Convenient result type for completion service calls.
pub type LlmResult<T> = std::result::Result<T, LlmError>;

/// Errors that can occur while calling the completion service.
///
/// Use the constructor methods, which log the error at creation:
///
/// ```rust
/// use historical_events_api::LlmError;
///
/// let err = LlmError::authentication_failed("Invalid API key");
/// assert_eq!(err.to_string(), "Authentication failed: Invalid API key");
/// ```
///
/// | Variant | Category |
/// |---------|----------|
/// | `ConfigurationError` | Client |
/// | `RequestFailed` | External |
/// | `ResponseParsingError` | External |
/// | `RateLimitExceeded` | Transient |
/// | `AuthenticationFailed` | Client |
#[derive(Error, Debug)]
pub enum LlmError {
    /// Client configuration is unusable (e.g. the API key cannot be sent
    /// as a header).
    #[error("Provider configuration error: {message}")]
    ConfigurationError {
        /// Description of the configuration problem.
        message: String,
    },

    /// The HTTP request failed or the service answered with a non-success
    /// status.
    #[error("Request failed: {message}")]
    RequestFailed {
        /// Description of the failure.
        message: String,
        /// The underlying error, if available.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The service answered, but its body could not be decoded.
    #[error("Response parsing failed: {message}")]
    ResponseParsingError {
        /// Details about the parsing failure.
        message: String,
    },

    /// The service is throttling requests or the quota is exhausted.
    #[error("Rate limit exceeded, retry after {retry_after_seconds}s")]
    RateLimitExceeded {
        /// Wait time suggested by the service.
        retry_after_seconds: u64,
    },

    /// The service rejected the credential.
    #[error("Authentication failed: {message}")]
    AuthenticationFailed {
        /// Details about the authentication failure.
        message: String,
    },
}

impl LlmError {
    /// Get the error category for logging.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ConfigurationError { .. } => ErrorCategory::Client,
            Self::RequestFailed { .. } => ErrorCategory::External,
            Self::ResponseParsingError { .. } => ErrorCategory::External,
            Self::RateLimitExceeded { .. } => ErrorCategory::Transient,
            Self::AuthenticationFailed { .. } => ErrorCategory::Client,
        }
    }

    // =========================================================================
    // Constructor methods with automatic logging
    // =========================================================================

    pub fn configuration_error(message: impl Into<String>) -> Self {
        let message = message.into();
        log_error!(
            error_type = "configuration_error",
            message = %message,
            "Completion client configuration invalid"
        );
        Self::ConfigurationError { message }
    }

    pub fn request_failed(
        message: impl Into<String>,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        let message = message.into();
        log_error!(
            error_type = "request_failed",
            message = %message,
            has_source = source.is_some(),
            "Completion request failed"
        );
        Self::RequestFailed { message, source }
    }

    pub fn response_parsing_error(message: impl Into<String>) -> Self {
        let message = message.into();
        log_warn!(
            error_type = "response_parsing_error",
            message = %message,
            "Completion response format invalid"
        );
        Self::ResponseParsingError { message }
    }

    pub fn rate_limit_exceeded(retry_after_seconds: u64) -> Self {
        log_warn!(
            error_type = "rate_limit_exceeded",
            retry_after_seconds = retry_after_seconds,
            "Completion service rate limit exceeded"
        );
        Self::RateLimitExceeded {
            retry_after_seconds,
        }
    }

    pub fn authentication_failed(message: impl Into<String>) -> Self {
        let message = message.into();
        log_error!(
            error_type = "authentication_failed",
            message = %message,
            "Completion service authentication failed"
        );
        Self::AuthenticationFailed { message }
    }
}

// ============================================================================
// Event lookup errors
// ============================================================================

/// Convenient result type for event lookups.
pub type EventResult<T> = std::result::Result<T, EventError>;

/// Error returned by [`crate::EventSource::fetch_event`].
///
/// Failure modes of the completion service are not distinguished here.
/// The HTTP layer reports the message text as-is.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EventError {
    /// Any failure while obtaining a completion.
    #[error("OpenAI API error: {0}")]
    Upstream(String),
}

impl From<LlmError> for EventError {
    fn from(err: LlmError) -> Self {
        log_warn!(
            error_type = "upstream",
            category = err.category().as_str(),
            message = %err,
            "Historical event lookup failed"
        );
        Self::Upstream(err.to_string())
    }
}
