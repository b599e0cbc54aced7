//! OAuth 2.0 authorization code flow for BigCommerce apps.
//!
//! 1. The merchant installs the app and BigCommerce redirects to the app's
//!    auth callback with `code`, `scope` and `context`.
//! 2. The app passes those parameters to [`authorize`], which POSTs them with
//!    the app credentials to the login host and returns the token response.
//!
//! # Example
//!
//! ```rust,ignore
//! use bigcommerce_api::{BigCommerceConfig, ClientId, ClientSecret};
//! use bigcommerce_api::auth::oauth::{authorize, AuthQuery};
//!
//! let config = BigCommerceConfig::builder()
//!     .client_id(ClientId::new("client-id")?)
//!     .secret(ClientSecret::new("client-secret")?)
//!     .callback("https://myapp.example.com/auth")
//!     .build()?;
//!
//! let token = authorize(&config, Some(&query)).await?;
//! ```

mod authorize;
mod error;

pub use authorize::{authorize, AuthQuery, TOKEN_PATH};
pub use error::OAuthError;
