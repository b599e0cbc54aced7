//! The request execution pipeline.
//!
//! [`RequestExecutor`] owns one logical destination (host, base path,
//! headers, default query) and runs calls against it:
//!
//! 1. Serialize the body to JSON and send it through the [`Transport`].
//! 2. Map transport failures to [`HttpError::Network`] without retrying.
//! 3. On a 429 carrying `X-Retry-After`, either fail with
//!    [`HttpError::RateLimit`] (`fail_on_limit_reached`) or sleep and retry
//!    exactly once.
//! 4. Decode the final response with [`decode_response`].
//!
//! # Thread Safety
//!
//! `run()` writes no shared state, so one executor can serve any number of
//! concurrent calls.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{HeaderName, HeaderValue};
use serde_json::Value;

use crate::clients::decode::{decode_response, DecodedBody};
use crate::clients::errors::{HttpError, InvalidHttpRequestError, RateLimitError};
use crate::clients::http_request::{Attempt, HttpMethod, NextStep, PendingCall};
use crate::clients::http_response::RawResponse;
use crate::clients::transport::{ReqwestTransport, Transport, TransportRequest};
use crate::error::ConfigError;

/// Upper bound on the wait before the single retry.
pub const DEFAULT_MAX_RETRY_DELAY: Duration = Duration::from_secs(5);

/// Library version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Immutable description of where calls go.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Destination {
    host: String,
    base_url: String,
    base_path: String,
    headers: HashMap<String, String>,
    query: Vec<(String, String)>,
}

impl Destination {
    /// Returns the host as given at construction.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns the scheme and authority (e.g., `https://api.bigcommerce.com`).
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the path prefix added before every call path.
    #[must_use]
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Returns the headers sent with every call.
    #[must_use]
    pub const fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Returns the query parameters sent with every call.
    #[must_use]
    pub fn query(&self) -> &[(String, String)] {
        &self.query
    }

    /// Builds the absolute URL for a call path.
    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        let separator = if path.is_empty() || path.starts_with('/') {
            ""
        } else {
            "/"
        };
        format!("{}{}{separator}{path}", self.base_url, self.base_path)
    }
}

/// Options for [`RequestExecutor::new`].
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use bigcommerce_api::clients::RequestOptions;
///
/// let options = RequestOptions::new()
///     .header("X-Auth-Token", "token")
///     .query_param("include", "variants")
///     .fail_on_limit_reached(true)
///     .max_retry_delay(Duration::from_secs(2));
/// ```
#[derive(Clone, Debug, Default)]
pub struct RequestOptions {
    headers: Vec<(String, String)>,
    query: Vec<(String, String)>,
    base_path: String,
    transport: Option<Arc<dyn Transport>>,
    fail_on_limit_reached: bool,
    max_retry_delay: Option<Duration>,
}

impl RequestOptions {
    /// Creates options with defaults: no extra headers, retry on 429.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a header merged into every call.
    ///
    /// Names compare case-insensitively; a later header replaces an earlier
    /// one and any built-in header of the same name.
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((key.into(), value.into()));
        self
    }

    /// Adds several headers.
    #[must_use]
    pub fn headers(mut self, headers: impl IntoIterator<Item = (String, String)>) -> Self {
        self.headers.extend(headers);
        self
    }

    /// Adds a query parameter sent with every call.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Sets a path prefix for every call (e.g., `/stores/abc/v3`).
    #[must_use]
    pub fn base_path(mut self, base_path: impl Into<String>) -> Self {
        self.base_path = base_path.into();
        self
    }

    /// Uses a preconfigured `reqwest::Client` as the connection-reuse handle.
    #[must_use]
    pub fn agent(self, client: reqwest::Client) -> Self {
        self.transport(Arc::new(ReqwestTransport::with_client(client)))
    }

    /// Uses a custom transport.
    #[must_use]
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Fails with a rate limit error instead of retrying on 429.
    #[must_use]
    pub const fn fail_on_limit_reached(mut self, fail: bool) -> Self {
        self.fail_on_limit_reached = fail;
        self
    }

    /// Caps the wait before the retry. Defaults to [`DEFAULT_MAX_RETRY_DELAY`].
    #[must_use]
    pub const fn max_retry_delay(mut self, delay: Duration) -> Self {
        self.max_retry_delay = Some(delay);
        self
    }
}

/// Executes calls against one destination with bounded rate-limit retry.
///
/// # Example
///
/// ```rust,ignore
/// use bigcommerce_api::clients::{HttpMethod, RequestExecutor, RequestOptions};
///
/// let executor = RequestExecutor::new(
///     "api.bigcommerce.com",
///     RequestOptions::new().header("X-Auth-Token", "token"),
/// )?;
///
/// let orders = executor.run(HttpMethod::Get, "/stores/abc/v2/orders", None).await?;
/// ```
#[derive(Clone, Debug)]
pub struct RequestExecutor {
    destination: Arc<Destination>,
    transport: Arc<dyn Transport>,
    fail_on_limit_reached: bool,
    max_retry_delay: Duration,
}

// Verify RequestExecutor is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RequestExecutor>();
};

impl RequestExecutor {
    /// Creates an executor for `host`.
    ///
    /// `host` is a bare authority (`api.bigcommerce.com`, reached over
    /// HTTPS) or a URL with an explicit `http://` / `https://` scheme.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyHost`] if `host` is empty,
    /// [`ConfigError::InvalidHeader`] if a header name or value is not valid
    /// HTTP, or [`ConfigError::TransportInit`] if no transport was supplied
    /// and the default one cannot be created.
    pub fn new(host: impl Into<String>, options: RequestOptions) -> Result<Self, ConfigError> {
        let host = host.into().trim().to_string();
        if host.is_empty() {
            return Err(ConfigError::EmptyHost);
        }

        let base_url = if host.starts_with("http://") || host.starts_with("https://") {
            host.trim_end_matches('/').to_string()
        } else {
            format!("https://{}", host.trim_end_matches('/'))
        };
        if base_url.ends_with("://") {
            return Err(ConfigError::EmptyHost);
        }

        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let mut headers = HashMap::new();
        headers.insert(
            "User-Agent".to_string(),
            format!("BigCommerce API Library v{SDK_VERSION} | Rust {rust_version}"),
        );
        for (key, value) in options.headers {
            validate_header(&key, &value)?;
            insert_header(&mut headers, key, value);
        }

        let transport = match options.transport {
            Some(transport) => transport,
            None => Arc::new(ReqwestTransport::new()?),
        };

        Ok(Self {
            destination: Arc::new(Destination {
                host,
                base_url,
                base_path: options.base_path.trim_end_matches('/').to_string(),
                headers,
                query: options.query,
            }),
            transport,
            fail_on_limit_reached: options.fail_on_limit_reached,
            max_retry_delay: options.max_retry_delay.unwrap_or(DEFAULT_MAX_RETRY_DELAY),
        })
    }

    /// Returns the destination.
    #[must_use]
    pub fn destination(&self) -> &Destination {
        &self.destination
    }

    /// Returns whether rate-limited calls fail instead of retrying.
    #[must_use]
    pub const fn fail_on_limit_reached(&self) -> bool {
        self.fail_on_limit_reached
    }

    /// Runs one logical call.
    ///
    /// Issues one request, plus exactly one retry if the first response is a
    /// 429 with `X-Retry-After` and `fail_on_limit_reached` is off.
    ///
    /// # Errors
    ///
    /// - [`HttpError::InvalidRequest`] if the body cannot be serialized
    /// - [`HttpError::Network`] on transport failure (never retried)
    /// - [`HttpError::RateLimit`] on 429 with `fail_on_limit_reached`
    /// - [`HttpError::Api`] on non-2xx status or an `error`/`errors` body
    /// - [`HttpError::Decode`] on a malformed body
    pub async fn run(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<&Value>,
    ) -> Result<DecodedBody, HttpError> {
        let payload = body
            .map(serde_json::to_vec)
            .transpose()
            .map_err(|e| InvalidHttpRequestError::UnserializableBody {
                reason: e.to_string(),
            })?;
        let mut call = PendingCall::new(method, path, payload);

        loop {
            let response = self.dispatch(&call).await?;

            match call.attempt.next_step(
                response.status,
                response.retry_after(),
                self.fail_on_limit_reached,
            ) {
                NextStep::Finish => return decode_response(&response).into_result(),
                NextStep::FailRateLimited(retry_after) => {
                    tracing::warn!(
                        "Rate limit reached for {} {}, retry after {} seconds",
                        call.method,
                        call.path,
                        retry_after
                    );
                    return Err(RateLimitError::new(retry_after).into());
                }
                NextStep::RetryAfter(retry_after) => {
                    let delay = self.retry_delay(retry_after);
                    tracing::warn!(
                        "Rate limit reached for {} {}, retrying in {:?}",
                        call.method,
                        call.path,
                        delay
                    );
                    tokio::time::sleep(delay).await;
                    call.attempt = Attempt::Retry;
                }
            }
        }
    }

    async fn dispatch(&self, call: &PendingCall) -> Result<RawResponse, HttpError> {
        let mut headers = self.destination.headers.clone();
        if call.body.is_some() && !has_header(&headers, "content-type") {
            headers.insert("Content-Type".to_string(), "application/json".to_string());
        }

        let request = TransportRequest {
            method: call.method,
            url: self.destination.url_for(&call.path),
            headers: headers.into_iter().collect(),
            query: self.destination.query.clone(),
            body: call.body.clone(),
        };

        tracing::debug!(
            "Sending {} {} (attempt {:?})",
            request.method,
            request.url,
            call.attempt
        );

        self.transport
            .send(request)
            .await
            .map_err(|e| HttpError::Network { message: e.message })
    }

    fn retry_delay(&self, retry_after: f64) -> Duration {
        let requested = Duration::try_from_secs_f64(retry_after).unwrap_or(self.max_retry_delay);
        if requested > self.max_retry_delay {
            tracing::debug!(
                "Capping retry-after of {:?} to {:?}",
                requested,
                self.max_retry_delay
            );
            self.max_retry_delay
        } else {
            requested
        }
    }
}

fn validate_header(name: &str, value: &str) -> Result<(), ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidHeader {
        name: name.to_string(),
        reason,
    };
    HeaderName::from_bytes(name.as_bytes()).map_err(|e| invalid(e.to_string()))?;
    HeaderValue::from_str(value).map_err(|e| invalid(e.to_string()))?;
    Ok(())
}

fn has_header(headers: &HashMap<String, String>, name: &str) -> bool {
    headers.keys().any(|key| key.eq_ignore_ascii_case(name))
}

/// Inserts a header, replacing any existing entry that differs only in case.
fn insert_header(headers: &mut HashMap<String, String>, key: String, value: String) {
    headers.retain(|existing, _| !existing.eq_ignore_ascii_case(&key));
    headers.insert(key, value);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::errors::ErrorKind;
    use crate::clients::transport::TransportError;
    use async_trait::async_trait;
    use serde_json::json;
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use std::time::Instant;

    /// Replays scripted outcomes and records every request it receives.
    #[derive(Debug, Default)]
    struct ScriptedTransport {
        outcomes: Mutex<VecDeque<Result<RawResponse, TransportError>>>,
        requests: Mutex<Vec<TransportRequest>>,
    }

    impl ScriptedTransport {
        fn new(outcomes: Vec<Result<RawResponse, TransportError>>) -> Arc<Self> {
            Arc::new(Self {
                outcomes: Mutex::new(outcomes.into()),
                requests: Mutex::new(Vec::new()),
            })
        }

        fn calls(&self) -> usize {
            self.requests.lock().unwrap().len()
        }

        fn request(&self, index: usize) -> TransportRequest {
            self.requests.lock().unwrap()[index].clone()
        }
    }

    #[async_trait]
    impl Transport for ScriptedTransport {
        async fn send(&self, request: TransportRequest) -> Result<RawResponse, TransportError> {
            self.requests.lock().unwrap().push(request);
            self.outcomes
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(TransportError::new("no scripted response left")))
        }
    }

    fn response(status: u16, headers: &[(&str, &str)], body: &str) -> RawResponse {
        let headers = headers
            .iter()
            .map(|(k, v)| ((*k).to_string(), vec![(*v).to_string()]))
            .collect();
        RawResponse::new(status, headers, body.as_bytes().to_vec())
    }

    fn json_response(status: u16, body: &str) -> RawResponse {
        response(status, &[("Content-Type", "application/json")], body)
    }

    fn executor(transport: &Arc<ScriptedTransport>, options: RequestOptions) -> RequestExecutor {
        RequestExecutor::new(
            "api.bigcommerce.com",
            options.transport(transport.clone() as Arc<dyn Transport>),
        )
        .unwrap()
    }

    #[test]
    fn test_new_rejects_empty_host() {
        let result = RequestExecutor::new("", RequestOptions::new());
        assert!(matches!(result, Err(ConfigError::EmptyHost)));

        let result = RequestExecutor::new("   ", RequestOptions::new());
        assert!(matches!(result, Err(ConfigError::EmptyHost)));

        let result = RequestExecutor::new("https://", RequestOptions::new());
        assert!(matches!(result, Err(ConfigError::EmptyHost)));
    }

    #[test]
    fn test_new_accepts_any_non_empty_host() {
        for host in ["api.bigcommerce.com", "localhost:8080", "http://127.0.0.1:1234/"] {
            assert!(RequestExecutor::new(host, RequestOptions::new()).is_ok(), "{host}");
        }
    }

    #[test]
    fn test_destination_urls() {
        let transport = ScriptedTransport::new(vec![]);
        let exec = executor(&transport, RequestOptions::new());
        assert_eq!(exec.destination().host(), "api.bigcommerce.com");
        assert_eq!(exec.destination().base_url(), "https://api.bigcommerce.com");
        assert_eq!(
            exec.destination().url_for("/orders"),
            "https://api.bigcommerce.com/orders"
        );
        assert_eq!(
            exec.destination().url_for("orders"),
            "https://api.bigcommerce.com/orders"
        );

        let exec = RequestExecutor::new(
            "http://localhost:3000/",
            RequestOptions::new()
                .base_path("/stores/abc/v3/")
                .transport(transport as Arc<dyn Transport>),
        )
        .unwrap();
        assert_eq!(
            exec.destination().url_for("/themes"),
            "http://localhost:3000/stores/abc/v3/themes"
        );
    }

    #[test]
    fn test_option_headers_override_defaults_case_insensitively() {
        let transport = ScriptedTransport::new(vec![]);
        let exec = executor(&transport, RequestOptions::new().header("user-agent", "MyApp/1.0"));
        let headers = exec.destination().headers();
        assert_eq!(headers.get("user-agent"), Some(&"MyApp/1.0".to_string()));
        assert!(!headers.contains_key("User-Agent"));
    }

    #[test]
    fn test_new_rejects_invalid_headers() {
        let transport = ScriptedTransport::new(vec![]);

        let result = RequestExecutor::new(
            "api.bigcommerce.com",
            RequestOptions::new()
                .header("X-Bad Name", "value")
                .transport(transport.clone() as Arc<dyn Transport>),
        );
        assert!(
            matches!(result, Err(ConfigError::InvalidHeader { ref name, .. }) if name == "X-Bad Name")
        );

        let result = RequestExecutor::new(
            "api.bigcommerce.com",
            RequestOptions::new()
                .header("X-Auth-Token", "line\nbreak")
                .transport(transport.clone() as Arc<dyn Transport>),
        );
        assert!(matches!(result, Err(ConfigError::InvalidHeader { .. })));
        assert_eq!(transport.calls(), 0);
    }

    #[test]
    fn test_default_user_agent() {
        let transport = ScriptedTransport::new(vec![]);
        let exec = executor(&transport, RequestOptions::new());
        let user_agent = exec.destination().headers().get("User-Agent").unwrap();
        assert!(user_agent.contains("BigCommerce API Library v"));
        assert!(user_agent.contains("Rust"));
    }

    #[tokio::test]
    async fn test_json_success() {
        let transport = ScriptedTransport::new(vec![Ok(json_response(200, r#"{"order":true}"#))]);
        let exec = executor(&transport, RequestOptions::new());

        let body = exec.run(HttpMethod::Post, "/orders", None).await.unwrap();

        assert_eq!(body, DecodedBody::Json(json!({"order": true})));
        assert_eq!(transport.calls(), 1);
    }

    #[tokio::test]
    async fn test_request_carries_json_body_headers_and_query() {
        let transport = ScriptedTransport::new(vec![Ok(json_response(200, "{}"))]);
        let exec = executor(
            &transport,
            RequestOptions::new()
                .header("X-Auth-Token", "secret-token")
                .query_param("limit", "5"),
        );

        exec.run(HttpMethod::Put, "/orders/1", Some(&json!({"status_id": 2})))
            .await
            .unwrap();

        let sent = transport.request(0);
        assert_eq!(sent.method, HttpMethod::Put);
        assert_eq!(sent.url, "https://api.bigcommerce.com/orders/1");
        assert_eq!(sent.query, vec![("limit".to_string(), "5".to_string())]);
        assert_eq!(sent.body.as_deref(), Some(br#"{"status_id":2}"#.as_slice()));
        assert!(sent
            .headers
            .contains(&("Content-Type".to_string(), "application/json".to_string())));
        assert!(sent
            .headers
            .contains(&("X-Auth-Token".to_string(), "secret-token".to_string())));
    }

    #[tokio::test]
    async fn test_no_content_type_without_body() {
        let transport = ScriptedTransport::new(vec![Ok(json_response(200, "{}"))]);
        let exec = executor(&transport, RequestOptions::new());

        exec.run(HttpMethod::Get, "/orders", None).await.unwrap();

        let sent = transport.request(0);
        assert!(sent.body.is_none());
        assert!(!sent
            .headers
            .iter()
            .any(|(k, _)| k.eq_ignore_ascii_case("content-type")));
    }

    #[tokio::test]
    async fn test_429_then_200_retries_once() {
        let transport = ScriptedTransport::new(vec![
            Ok(response(429, &[("X-Retry-After", "0.1")], "{}")),
            Ok(json_response(200, r#"{"id":1}"#)),
        ]);
        let exec = executor(&transport, RequestOptions::new());

        let started = Instant::now();
        let body = exec
            .run(HttpMethod::Post, "/orders", Some(&json!({"a": 1})))
            .await
            .unwrap();

        assert_eq!(body, DecodedBody::Json(json!({"id": 1})));
        assert_eq!(transport.calls(), 2);
        assert!(started.elapsed() >= Duration::from_millis(100));
        assert_eq!(transport.request(0), transport.request(1));
    }

    #[tokio::test]
    async fn test_second_429_is_not_retried() {
        let transport = ScriptedTransport::new(vec![
            Ok(response(429, &[("X-Retry-After", "0.01")], "")),
            Ok(response(429, &[("X-Retry-After", "0.01")], "Too Many Requests")),
            Ok(json_response(200, "{}")),
        ]);
        let exec = executor(&transport, RequestOptions::new());

        let error = exec.run(HttpMethod::Get, "/orders", None).await.unwrap_err();

        assert_eq!(error.kind(), ErrorKind::Api);
        assert_eq!(error.status_code(), Some(429));
        assert!(error.to_string().contains("429"));
        assert_eq!(transport.calls(), 2);
    }

    #[tokio::test]
    async fn test_429_with_fail_on_limit_reached() {
        let transport = ScriptedTransport::new(vec![
            Ok(response(429, &[("X-Retry-After", "0.1")], "{}")),
            Ok(json_response(200, "{}")),
        ]);
        let exec = executor(&transport, RequestOptions::new().fail_on_limit_reached(true));

        let error = exec.run(HttpMethod::Post, "/orders", None).await.unwrap_err();

        assert_eq!(error.kind(), ErrorKind::RateLimit);
        assert!(error.to_string().contains("rate limit"));
        assert_eq!(error.retry_after(), Some(0.1));
        assert_eq!(transport.calls(), 1);
    }

    #[tokio::test]
    async fn test_429_without_retry_after_is_plain_api_error() {
        let transport = ScriptedTransport::new(vec![Ok(json_response(429, "{}"))]);
        let exec = executor(&transport, RequestOptions::new());

        let error = exec.run(HttpMethod::Get, "/orders", None).await.unwrap_err();

        assert_eq!(error.kind(), ErrorKind::Api);
        assert_eq!(transport.calls(), 1);
    }

    #[tokio::test]
    async fn test_retry_delay_is_capped() {
        let transport = ScriptedTransport::new(vec![
            Ok(response(429, &[("X-Retry-After", "3600")], "")),
            Ok(json_response(200, "[]")),
        ]);
        let exec = executor(
            &transport,
            RequestOptions::new().max_retry_delay(Duration::from_millis(20)),
        );

        let started = Instant::now();
        let body = exec.run(HttpMethod::Get, "/orders", None).await.unwrap();

        assert_eq!(body, DecodedBody::Json(json!([])));
        assert!(started.elapsed() < Duration::from_secs(5));
    }

    #[tokio::test]
    async fn test_bad_request_rejects_with_status() {
        let transport = ScriptedTransport::new(vec![Ok(json_response(400, "{}"))]);
        let exec = executor(&transport, RequestOptions::new());

        let error = exec
            .run(HttpMethod::Post, "/orders", Some(&json!({})))
            .await
            .unwrap_err();

        assert!(error.to_string().contains("Request returned error code"));
        assert_eq!(error.status_code(), Some(400));
    }

    #[tokio::test]
    async fn test_network_error_is_not_retried() {
        let transport = ScriptedTransport::new(vec![
            Err(TransportError::new("ECONNRESET")),
            Ok(json_response(200, "{}")),
        ]);
        let exec = executor(&transport, RequestOptions::new());

        let error = exec.run(HttpMethod::Post, "/orders", None).await.unwrap_err();

        assert_eq!(error.kind(), ErrorKind::Network);
        assert!(error.to_string().contains("ECONNRESET"));
        assert_eq!(transport.calls(), 1);
    }

    #[tokio::test]
    async fn test_network_error_during_retry_propagates() {
        let transport = ScriptedTransport::new(vec![
            Ok(response(429, &[("X-Retry-After", "0")], "")),
            Err(TransportError::new("ETIMEDOUT")),
        ]);
        let exec = executor(&transport, RequestOptions::new());

        let error = exec.run(HttpMethod::Get, "/orders", None).await.unwrap_err();

        assert_eq!(error.kind(), ErrorKind::Network);
        assert!(error.to_string().contains("ETIMEDOUT"));
        assert_eq!(transport.calls(), 2);
    }

    #[tokio::test]
    async fn test_xml_passthrough() {
        let transport = ScriptedTransport::new(vec![Ok(response(
            200,
            &[("Content-Type", "application/xml")],
            "<xml></xml>",
        ))]);
        let exec = executor(&transport, RequestOptions::new());

        let body = exec.run(HttpMethod::Post, "/orders", None).await.unwrap();

        assert_eq!(body.as_text(), Some("<xml></xml>"));
    }

    #[tokio::test]
    async fn test_concurrent_runs_are_independent() {
        let transport = ScriptedTransport::new(vec![
            Ok(json_response(200, r#"{"n":1}"#)),
            Ok(json_response(200, r#"{"n":1}"#)),
            Ok(json_response(200, r#"{"n":1}"#)),
        ]);
        let exec = executor(&transport, RequestOptions::new());

        let (a, b, c) = tokio::join!(
            exec.run(HttpMethod::Get, "/a", None),
            exec.run(HttpMethod::Get, "/b", None),
            exec.run(HttpMethod::Get, "/c", None),
        );

        assert!(a.is_ok() && b.is_ok() && c.is_ok());
        assert_eq!(transport.calls(), 3);
    }
}
