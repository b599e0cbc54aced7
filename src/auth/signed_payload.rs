//! Verification of BigCommerce signed payloads.
//!
//! BigCommerce sends `signed_payload` to the load, uninstall and remove-user
//! callbacks of an app. The value has the form `<payload>.<signature>`:
//!
//! - `payload` is the base64-encoded JSON document
//! - `signature` is the base64-encoded lowercase hex HMAC-SHA256 of the
//!   *decoded* JSON, keyed with the app's client secret
//!
//! # Example
//!
//! ```rust
//! use bigcommerce_api::auth::{sign, verify};
//!
//! let token = sign(br#"{"foo":"foo"}"#, "secret");
//!
//! let value = verify(&token, "secret").unwrap();
//! assert_eq!(value["foo"], "foo");
//! ```

use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig};
use base64::engine::DecodePaddingMode;
use base64::Engine;
use serde_json::Value;
use thiserror::Error;

use crate::auth::hmac::{compute_signature, constant_time_compare};

const PAYLOAD_CONFIG: GeneralPurposeConfig =
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent);

const STANDARD: GeneralPurpose = GeneralPurpose::new(&alphabet::STANDARD, PAYLOAD_CONFIG);

const URL_SAFE: GeneralPurpose = GeneralPurpose::new(&alphabet::URL_SAFE, PAYLOAD_CONFIG);

/// Errors from signed payload verification.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum VerifyError {
    /// The token was empty.
    #[error("The signed request is required to verify the call.")]
    MissingSignedRequest,

    /// The token is not two non-empty halves joined by a single `.`.
    #[error("The signed request must contain a payload and a signature separated by a full stop.")]
    Malformed,

    /// The signature does not match the payload.
    #[error("Signed request has an invalid signature.")]
    InvalidSignature,

    /// The payload half is not base64, or it is signed correctly but is not JSON.
    #[error("Signed request payload could not be decoded: {reason}")]
    InvalidPayload {
        /// Underlying decode failure.
        reason: String,
    },

    /// No client secret was configured.
    #[error("The client secret is required to verify a signed request.")]
    MissingSecret,
}

/// A signed payload split into its two encoded halves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SignedPayload<'a> {
    /// Base64-encoded JSON.
    pub encoded_payload: &'a str,
    /// Base64-encoded lowercase hex HMAC-SHA256 of the decoded JSON.
    pub encoded_signature: &'a str,
}

impl<'a> SignedPayload<'a> {
    /// Splits a token into payload and signature.
    ///
    /// # Errors
    ///
    /// Returns [`VerifyError::MissingSignedRequest`] for an empty token and
    /// [`VerifyError::Malformed`] unless the token is exactly two non-empty
    /// parts separated by `.`.
    pub fn parse(token: &'a str) -> Result<Self, VerifyError> {
        if token.is_empty() {
            return Err(VerifyError::MissingSignedRequest);
        }

        let mut parts = token.split('.');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(encoded_payload), Some(encoded_signature), None)
                if !encoded_payload.is_empty() && !encoded_signature.is_empty() =>
            {
                Ok(Self {
                    encoded_payload,
                    encoded_signature,
                })
            }
            _ => Err(VerifyError::Malformed),
        }
    }

    /// Checks the signature, then parses the payload as JSON.
    ///
    /// The JSON is never parsed or returned when the signature does not match.
    ///
    /// # Errors
    ///
    /// - [`VerifyError::InvalidPayload`] if the payload half is not base64,
    ///   or is signed correctly but is not JSON
    /// - [`VerifyError::InvalidSignature`] if the signature half is not base64
    ///   or does not match, including a length mismatch
    pub fn verify(&self, secret: &str) -> Result<Value, VerifyError> {
        let payload = decode_base64(self.encoded_payload)
            .map_err(|reason| VerifyError::InvalidPayload { reason })?;
        let signature =
            decode_base64(self.encoded_signature).map_err(|_| VerifyError::InvalidSignature)?;

        let expected = compute_signature(&payload, secret);
        if !constant_time_compare(expected.as_bytes(), &signature) {
            return Err(VerifyError::InvalidSignature);
        }

        serde_json::from_slice(&payload).map_err(|e| VerifyError::InvalidPayload {
            reason: e.to_string(),
        })
    }
}

fn decode_base64(input: &str) -> Result<Vec<u8>, String> {
    STANDARD
        .decode(input)
        .or_else(|_| URL_SAFE.decode(input))
        .map_err(|e| e.to_string())
}

/// Verifies a signed payload and returns the decoded JSON.
///
/// # Errors
///
/// See [`SignedPayload::parse`] and [`SignedPayload::verify`].
pub fn verify(token: &str, secret: &str) -> Result<Value, VerifyError> {
    SignedPayload::parse(token)?.verify(secret)
}

/// Produces a signed payload for a JSON document.
///
/// The inverse of [`verify`]; useful for exercising callback handlers.
#[must_use]
pub fn sign(json: &[u8], secret: &str) -> String {
    let signature = compute_signature(json, secret);
    format!(
        "{}.{}",
        STANDARD.encode(json),
        STANDARD.encode(signature.as_bytes())
    )
}
