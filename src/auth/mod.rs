//! Authentication for BigCommerce apps.
//!
//! - [`verify`]: Checks a `signed_payload` from the load, uninstall or
//!   remove-user callbacks and returns its JSON; [`sign`] builds one
//! - [`hmac`]: HMAC-SHA256 signing and constant-time comparison
//! - [`oauth`]: Authorization code exchange for app installation

pub mod hmac;
pub mod oauth;
mod signed_payload;

pub use signed_payload::{sign, verify, SignedPayload, VerifyError};
