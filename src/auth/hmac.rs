//! HMAC-SHA256 helpers for signed payload verification.
//!
//! All signature comparisons use constant-time comparison to prevent timing
//! attacks.
//!
//! # Example
//!
//! ```rust
//! use bigcommerce_api::auth::hmac::{compute_signature, constant_time_compare};
//!
//! let signature = compute_signature(r#"{"foo":"foo"}"#, "my-client-secret");
//! assert_eq!(signature.len(), 64);
//! assert!(constant_time_compare(&signature, &signature));
//! ```

use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

type HmacSha256 = Hmac<Sha256>;

/// Computes an HMAC-SHA256 signature for the given message.
///
/// The signature is returned as a lowercase hexadecimal string. BigCommerce
/// base64-encodes this hex text to form the second half of a signed payload.
///
/// ```rust
/// use bigcommerce_api::auth::hmac::compute_signature;
///
/// let sig = compute_signature("message", "key");
/// assert_eq!(sig, "6e9ef29b75fffc5b7abae527d58fdadb2fe42e7219011976917343065f58ed4a");
/// ```
#[must_use]
#[allow(clippy::missing_panics_doc)] // HMAC accepts any key size, so this never panics
pub fn compute_signature(message: impl AsRef<[u8]>, secret: &str) -> String {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC can take key of any size");
    mac.update(message.as_ref());
    hex::encode(mac.finalize().into_bytes())
}

/// Performs constant-time comparison of two byte strings.
///
/// Inputs of different lengths compare unequal without leaking where they
/// differ.
#[must_use]
pub fn constant_time_compare(a: impl AsRef<[u8]>, b: impl AsRef<[u8]>) -> bool {
    a.as_ref().ct_eq(b.as_ref()).into()
}

// Internal hex encoding since we don't want to add another dependency
mod hex {
    const HEX_CHARS: &[u8; 16] = b"0123456789abcdef";

    pub fn encode(bytes: impl AsRef<[u8]>) -> String {
        let bytes = bytes.as_ref();
        let mut result = String::with_capacity(bytes.len() * 2);
        for &byte in bytes {
            result.push(HEX_CHARS[(byte >> 4) as usize] as char);
            result.push(HEX_CHARS[(byte & 0x0f) as usize] as char);
        }
        result
    }
}
