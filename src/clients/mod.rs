//! HTTP client layer for the BigCommerce API.
//!
//! # Overview
//!
//! - [`RequestExecutor`]: Runs calls against one destination with bounded
//!   rate-limit retry and response decoding
//! - [`RequestOptions`]: Headers, query, transport and retry settings for an executor
//! - [`BigCommerceClient`]: Store-scoped client that builds executors from a
//!   [`BigCommerceConfig`](crate::BigCommerceConfig)
//! - [`Transport`]: The network seam, implemented by [`ReqwestTransport`]
//! - [`decode_response`]: Pure decoding of a [`RawResponse`] into
//!   [`DecodedBody`] or an [`HttpError`]
//!
//! # Retry Behavior
//!
//! A call is retried at most once, and only when:
//!
//! - the response status is **429**,
//! - it carries an `X-Retry-After` header (seconds, fractions allowed),
//! - and `fail_on_limit_reached` is off.
//!
//! With `fail_on_limit_reached` on, the same response fails immediately with
//! [`HttpError::RateLimit`]. Network errors and every other status are never
//! retried.
//!
//! # Example
//!
//! ```rust,ignore
//! use bigcommerce_api::clients::{HttpMethod, RequestExecutor, RequestOptions};
//!
//! let executor = RequestExecutor::new(
//!     "api.bigcommerce.com",
//!     RequestOptions::new()
//!         .header("X-Auth-Client", "client-id")
//!         .header("X-Auth-Token", "token"),
//! )?;
//!
//! let body = executor
//!     .run(HttpMethod::Get, "/stores/12abc/v3/catalog/products", None)
//!     .await?;
//! ```

mod api_client;
mod decode;
mod errors;
mod http_request;
mod http_response;
mod request_executor;
mod transport;

pub use api_client::BigCommerceClient;
pub use decode::{
    api_error_message, classify, decode, decode_response, BodyFormat, ContentEncoding, DecodePlan,
    Decoded, DecodedBody,
};
pub use errors::{
    ApiError, DecodeError, ErrorKind, HttpError, InvalidHttpRequestError, RateLimitError,
};
pub use http_request::{Attempt, HttpMethod, NextStep, PendingCall};
pub use http_response::{RawResponse, RETRY_AFTER_HEADER};
pub use request_executor::{
    Destination, RequestExecutor, RequestOptions, DEFAULT_MAX_RETRY_DELAY, SDK_VERSION,
};
pub use transport::{ReqwestTransport, Transport, TransportError, TransportRequest};
