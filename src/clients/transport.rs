//! The network seam of the request executor.
//!
//! [`RequestExecutor`](crate::clients::RequestExecutor) never talks to the
//! network directly. It hands a [`TransportRequest`] to a [`Transport`] and
//! receives a [`RawResponse`]. The default implementation is
//! [`ReqwestTransport`]; tests substitute their own.
//!
//! Connection pooling and keep-alive are the transport's business. Share one
//! `reqwest::Client` (or one transport) between executors to reuse
//! connections.

use std::collections::HashMap;
use std::error::Error as StdError;

use async_trait::async_trait;
use thiserror::Error;

use crate::clients::http_request::HttpMethod;
use crate::clients::http_response::RawResponse;
use crate::error::ConfigError;

/// A fully resolved request, ready to be sent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransportRequest {
    /// HTTP method.
    pub method: HttpMethod,
    /// Absolute URL without the query string.
    pub url: String,
    /// Request headers.
    pub headers: Vec<(String, String)>,
    /// Query parameters appended to the URL.
    pub query: Vec<(String, String)>,
    /// Serialized body.
    pub body: Option<Vec<u8>>,
}

/// A failure below HTTP: connect, DNS, TLS, reset, timeout.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct TransportError {
    /// The failure text, including nested causes.
    pub message: String,
}

impl TransportError {
    /// Creates a transport error with the given message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(error: reqwest::Error) -> Self {
        // reqwest's own message hides the OS error (e.g. ECONNRESET) in its sources
        let mut message = error.to_string();
        let mut source = error.source();
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }
        Self { message }
    }
}

/// Sends requests and returns raw responses.
///
/// Implementations must be safe for concurrent use; the executor holds one
/// behind an `Arc` and may call it from many tasks at once.
#[async_trait]
pub trait Transport: std::fmt::Debug + Send + Sync {
    /// Sends one request.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] when no HTTP response was received.
    async fn send(&self, request: TransportRequest) -> Result<RawResponse, TransportError>;
}

/// [`Transport`] backed by `reqwest`.
///
/// Response bodies are returned as received; content decoding is left to the
/// executor.
#[derive(Clone, Debug)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Creates a transport with a fresh rustls-backed client.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::TransportInit`] if the client cannot be built
    /// (for example, TLS initialization failure).
    pub fn new() -> Result<Self, ConfigError> {
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .map_err(|e| ConfigError::TransportInit {
                reason: e.to_string(),
            })?;
        Ok(Self { client })
    }

    /// Wraps an existing client, keeping its pool and timeout settings.
    #[must_use]
    pub const fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = String::from_utf8_lossy(value.as_bytes()).into_owned();
            result.entry(key).or_default().push(value);
        }
        result
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: TransportRequest) -> Result<RawResponse, TransportError> {
        let mut req_builder = self.client.request(request.method.into(), &request.url);

        for (key, value) in &request.headers {
            req_builder = req_builder.header(key, value);
        }

        if !request.query.is_empty() {
            req_builder = req_builder.query(&request.query);
        }

        if let Some(body) = request.body {
            req_builder = req_builder.body(body);
        }

        let res = req_builder.send().await?;

        let status = res.status().as_u16();
        let headers = Self::parse_response_headers(res.headers());
        let body = res.bytes().await?.to_vec();

        Ok(RawResponse::new(status, headers, body))
    }
}
