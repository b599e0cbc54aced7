//! HTTP-specific error types for the BigCommerce API client.
//!
//! Every failure of [`RequestExecutor::run`](crate::clients::RequestExecutor::run)
//! is reported as one [`HttpError`]:
//!
//! - [`HttpError::Network`]: the transport failed before a response arrived
//! - [`HttpError::RateLimit`]: a 429 was received with `fail_on_limit_reached` set
//! - [`HttpError::Api`]: a non-2xx status, or a body carrying `error`/`errors`
//! - [`HttpError::Decode`]: a body could not be decoded where it had to be
//! - [`HttpError::InvalidRequest`]: the request could not be built
//! - [`HttpError::Config`]: the client was missing required configuration
//!
//! # Example
//!
//! ```rust,ignore
//! use bigcommerce_api::clients::{HttpError, HttpMethod};
//!
//! match executor.run(HttpMethod::Get, "/orders", None).await {
//!     Ok(body) => println!("orders: {body:?}"),
//!     Err(HttpError::RateLimit(e)) => println!("retry in {}s", e.retry_after),
//!     Err(HttpError::Api(e)) => println!("API error {}: {}", e.status_code, e.message),
//!     Err(e) => println!("request failed: {e}"),
//! }
//! ```

use thiserror::Error;

use crate::error::ConfigError;

/// Coarse classification of an [`HttpError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Missing or invalid client configuration.
    Config,
    /// The request could not be built.
    InvalidRequest,
    /// Transport-level failure (connection reset, DNS, TLS, timeout).
    Network,
    /// Rate limited and configured not to retry.
    RateLimit,
    /// The API reported an error.
    Api,
    /// The response body was malformed.
    Decode,
}

/// Error returned when the API reports a failure.
///
/// Either `message` comes from the body's `error`/`errors` field, or it is the
/// generic status message and `response_body` holds the raw body.
///
/// # Example
///
/// ```rust
/// use bigcommerce_api::clients::ApiError;
///
/// let error = ApiError::from_status(404, Some("<html>Not Found</html>".to_string()));
/// assert_eq!(error.to_string(), "Request returned error code 404");
/// assert_eq!(error.response_body.as_deref(), Some("<html>Not Found</html>"));
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ApiError {
    /// Human-readable error message.
    pub message: String,
    /// HTTP status code of the response.
    pub status_code: u16,
    /// Raw response text, attached when no structured message was found.
    pub response_body: Option<String>,
}

impl ApiError {
    /// Creates the generic error for a non-2xx status, keeping the raw body.
    #[must_use]
    pub fn from_status(status_code: u16, response_body: Option<String>) -> Self {
        Self {
            message: format!("Request returned error code {status_code}"),
            status_code,
            response_body,
        }
    }

    /// Creates an error carrying the message the API put in its body.
    #[must_use]
    pub fn from_message(status_code: u16, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status_code,
            response_body: None,
        }
    }
}

/// Error returned when the API rate limit is hit and the executor is
/// configured to fail instead of retrying.
#[derive(Debug, Error, Clone, PartialEq)]
#[error("{message}")]
pub struct RateLimitError {
    /// Human-readable error message.
    pub message: String,
    /// Seconds the API asked the caller to wait, from `X-Retry-After`.
    pub retry_after: f64,
}

impl RateLimitError {
    /// Creates a rate limit error for the given retry-after value.
    #[must_use]
    pub fn new(retry_after: f64) -> Self {
        Self {
            message: format!(
                "You have reached the rate limit for the BigCommerce API. Please retry in {retry_after} seconds."
            ),
            retry_after,
        }
    }
}

/// Error returned when a body that had to be decoded was malformed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct DecodeError {
    /// Description including the underlying decoder or parser message.
    pub message: String,
    /// HTTP status code of the response.
    pub status_code: u16,
    /// Raw response text when it could be recovered.
    pub response_body: Option<String>,
}

/// Error returned when a request fails validation before it is sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// The HTTP method is not one of the supported methods.
    #[error("Invalid Http method {method}.")]
    InvalidMethod {
        /// The invalid method that was provided.
        method: String,
    },

    /// The request body could not be serialized to JSON.
    #[error("Cannot serialize request body: {reason}")]
    UnserializableBody {
        /// The serializer's message.
        reason: String,
    },
}

/// Unified error type for all HTTP-related errors.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Missing or invalid configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network or connection error. Never retried.
    #[error("Network error: {message}")]
    Network {
        /// The underlying transport failure text.
        message: String,
    },

    /// Rate limited with `fail_on_limit_reached` set.
    #[error(transparent)]
    RateLimit(#[from] RateLimitError),

    /// API-level failure.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Malformed response body.
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

impl HttpError {
    /// Returns the kind of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Config(_) => ErrorKind::Config,
            Self::InvalidRequest(_) => ErrorKind::InvalidRequest,
            Self::Network { .. } => ErrorKind::Network,
            Self::RateLimit(_) => ErrorKind::RateLimit,
            Self::Api(_) => ErrorKind::Api,
            Self::Decode(_) => ErrorKind::Decode,
        }
    }

    /// Returns the HTTP status code, if a response was received.
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Api(e) => Some(e.status_code),
            Self::Decode(e) => Some(e.status_code),
            Self::RateLimit(_) => Some(429),
            _ => None,
        }
    }

    /// Returns the retry-after value in seconds for rate limit errors.
    #[must_use]
    pub const fn retry_after(&self) -> Option<f64> {
        match self {
            Self::RateLimit(e) => Some(e.retry_after),
            _ => None,
        }
    }

    /// Returns the raw response body attached for diagnosis, if any.
    #[must_use]
    pub fn response_body(&self) -> Option<&str> {
        match self {
            Self::Api(e) => e.response_body.as_deref(),
            Self::Decode(e) => e.response_body.as_deref(),
            _ => None,
        }
    }
}
