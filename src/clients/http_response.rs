//! Raw HTTP response as produced by a [`Transport`](crate::clients::Transport).

use std::collections::HashMap;

/// Header carrying the rate limit wait, in fractional seconds.
pub const RETRY_AFTER_HEADER: &str = "x-retry-after";

/// An undecoded response: status, headers and body bytes.
///
/// Header names are stored lowercased; lookups are case-insensitive.
///
/// # Example
///
/// ```rust
/// use std::collections::HashMap;
/// use bigcommerce_api::clients::RawResponse;
///
/// let mut headers = HashMap::new();
/// headers.insert("X-Retry-After".to_string(), vec!["0.5".to_string()]);
///
/// let response = RawResponse::new(429, headers, Vec::new());
/// assert!(response.is_rate_limited());
/// assert_eq!(response.retry_after(), Some(0.5));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response headers (lowercase names, possibly multi-valued).
    pub headers: HashMap<String, Vec<String>>,
    /// Body bytes exactly as received, before any decompression.
    pub body: Vec<u8>,
}

impl RawResponse {
    /// Creates a response, normalizing header names to lowercase.
    #[must_use]
    pub fn new(status: u16, headers: HashMap<String, Vec<String>>, body: Vec<u8>) -> Self {
        let mut normalized: HashMap<String, Vec<String>> = HashMap::with_capacity(headers.len());
        for (name, values) in headers {
            normalized
                .entry(name.to_ascii_lowercase())
                .or_default()
                .extend(values);
        }
        Self {
            status,
            headers: normalized,
            body,
        }
    }

    /// Returns the first value of a header.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the `Content-Type` header.
    #[must_use]
    pub fn content_type(&self) -> Option<&str> {
        self.header("content-type")
    }

    /// Returns the `Content-Encoding` header.
    #[must_use]
    pub fn content_encoding(&self) -> Option<&str> {
        self.header("content-encoding")
    }

    /// Returns the `X-Retry-After` value in seconds.
    ///
    /// Missing, unparseable, negative or non-finite values yield `None`.
    #[must_use]
    pub fn retry_after(&self) -> Option<f64> {
        self.header(RETRY_AFTER_HEADER)
            .and_then(|value| value.trim().parse::<f64>().ok())
            .filter(|seconds| seconds.is_finite() && *seconds >= 0.0)
    }

    /// Returns `true` for 2xx statuses.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status <= 299
    }

    /// Returns `true` for status 429.
    #[must_use]
    pub const fn is_rate_limited(&self) -> bool {
        self.status == 429
    }
}
