//! Error types for the BigCommerce API client.
//!
//! This module contains the configuration error type used when building
//! clients, executors and validated credential values.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use bigcommerce_api::{ClientId, ConfigError};
//!
//! let result = ClientId::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyClientId)));
//! ```

use thiserror::Error;

/// Errors that can occur while configuring the client.
///
/// Each variant provides a clear, actionable error message. None of these
/// errors are retried.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The request host is empty.
    #[error("A hostname is required to create a request. Please provide a non-empty host (e.g., 'api.bigcommerce.com').")]
    EmptyHost,

    /// Client ID cannot be empty.
    #[error("Client ID cannot be empty. Please provide a valid BigCommerce client ID.")]
    EmptyClientId,

    /// Client secret cannot be empty.
    #[error("Client secret cannot be empty. Please provide a valid BigCommerce client secret.")]
    EmptyClientSecret,

    /// Access token cannot be empty.
    #[error("Access token cannot be empty. Please provide a valid BigCommerce access token.")]
    EmptyAccessToken,

    /// Store hash cannot be empty.
    #[error("Store hash cannot be empty. Please provide a valid BigCommerce store hash.")]
    EmptyStoreHash,

    /// The access token or store hash needed for API calls is not configured.
    #[error("Request error: the access token and store hash are required to call the BigCommerce API")]
    MissingCredentials,

    /// API version is invalid.
    #[error("Invalid API version '{version}'. Expected 'v2' or 'v3'.")]
    InvalidApiVersion {
        /// The invalid version string that was provided.
        version: String,
    },

    /// Response type is invalid.
    #[error("Invalid response type '{value}'. Expected 'json' or 'xml'.")]
    InvalidResponseType {
        /// The invalid response type that was provided.
        value: String,
    },

    /// A configured header name or value is not valid HTTP.
    #[error("Invalid header '{name}': {reason}")]
    InvalidHeader {
        /// The offending header name.
        name: String,
        /// Why it was rejected.
        reason: String,
    },

    /// The default HTTP transport could not be created.
    #[error("Failed to initialize the HTTP transport: {reason}")]
    TransportInit {
        /// The underlying initialization failure.
        reason: String,
    },
}
