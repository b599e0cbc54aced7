//! OAuth-specific error types.
//!
//! # Example
//!
//! ```rust
//! use bigcommerce_api::auth::oauth::OAuthError;
//!
//! let error = OAuthError::MissingQuery;
//! assert_eq!(error.to_string(), "The URL query parameters are required.");
//! ```

use crate::clients::HttpError;
use thiserror::Error;

/// Errors that can occur while exchanging an authorization code.
///
/// # Thread Safety
///
/// `OAuthError` is `Send + Sync`, making it safe to use across async boundaries.
#[derive(Debug, Error)]
pub enum OAuthError {
    /// The callback query parameters were not supplied.
    #[error("The URL query parameters are required.")]
    MissingQuery,

    /// The token request failed.
    ///
    /// Wraps the executor error unchanged, so rate limit, network, API and
    /// decode failures keep their kind and status.
    #[error(transparent)]
    Http(#[from] HttpError),
}
