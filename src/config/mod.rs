//! Configuration types for the BigCommerce API client.
//!
//! # Overview
//!
//! - [`BigCommerceConfig`]: App credentials, store identity and request settings
//! - [`BigCommerceConfigBuilder`]: A builder for constructing [`BigCommerceConfig`]
//! - [`ClientId`], [`ClientSecret`], [`AccessToken`], [`StoreHash`]: Validated newtypes
//! - [`ApiVersion`], [`ResponseType`]: Path and representation settings
//!
//! # Example
//!
//! ```rust
//! use bigcommerce_api::{AccessToken, ApiVersion, BigCommerceConfig, ClientId, StoreHash};
//!
//! let config = BigCommerceConfig::builder()
//!     .client_id(ClientId::new("my-client-id").unwrap())
//!     .access_token(AccessToken::new("my-token").unwrap())
//!     .store_hash(StoreHash::new("12abc").unwrap())
//!     .api_version(ApiVersion::V3)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.api_version(), ApiVersion::V3);
//! ```

mod newtypes;
mod version;

pub use newtypes::{AccessToken, ClientId, ClientSecret, StoreHash};
pub use version::{ApiVersion, ResponseType};

use std::collections::HashMap;
use std::sync::Arc;

use crate::clients::Transport;
use crate::error::ConfigError;

/// Default host for REST API calls.
pub const DEFAULT_API_URL: &str = "api.bigcommerce.com";

/// Default host for the OAuth token exchange.
pub const DEFAULT_LOGIN_URL: &str = "login.bigcommerce.com";

/// Configuration for a BigCommerce app or store connection.
///
/// Every field is optional at construction time. Operations check for the
/// values they need: API requests need an access token and store hash,
/// signed payload verification needs the client secret, and `authorize`
/// needs the OAuth credentials.
///
/// # Thread Safety
///
/// `BigCommerceConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug)]
pub struct BigCommerceConfig {
    client_id: Option<ClientId>,
    secret: Option<ClientSecret>,
    callback: Option<String>,
    access_token: Option<AccessToken>,
    store_hash: Option<StoreHash>,
    api_version: ApiVersion,
    response_type: ResponseType,
    headers: HashMap<String, String>,
    fail_on_limit_reached: bool,
    api_url: String,
    login_url: String,
    transport: Option<Arc<dyn Transport>>,
}

impl BigCommerceConfig {
    /// Creates a new builder for constructing a `BigCommerceConfig`.
    #[must_use]
    pub fn builder() -> BigCommerceConfigBuilder {
        BigCommerceConfigBuilder::new()
    }

    /// Returns the client ID, if configured.
    #[must_use]
    pub const fn client_id(&self) -> Option<&ClientId> {
        self.client_id.as_ref()
    }

    /// Returns the client secret, if configured.
    #[must_use]
    pub const fn secret(&self) -> Option<&ClientSecret> {
        self.secret.as_ref()
    }

    /// Returns the OAuth callback (redirect) URL, if configured.
    #[must_use]
    pub fn callback(&self) -> Option<&str> {
        self.callback.as_deref()
    }

    /// Returns the access token, if configured.
    #[must_use]
    pub const fn access_token(&self) -> Option<&AccessToken> {
        self.access_token.as_ref()
    }

    /// Returns the store hash, if configured.
    #[must_use]
    pub const fn store_hash(&self) -> Option<&StoreHash> {
        self.store_hash.as_ref()
    }

    /// Returns the API version.
    #[must_use]
    pub const fn api_version(&self) -> ApiVersion {
        self.api_version
    }

    /// Returns the requested response type.
    #[must_use]
    pub const fn response_type(&self) -> ResponseType {
        self.response_type
    }

    /// Returns extra headers merged into every API request.
    #[must_use]
    pub const fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Returns whether a rate-limited call fails instead of retrying.
    #[must_use]
    pub const fn fail_on_limit_reached(&self) -> bool {
        self.fail_on_limit_reached
    }

    /// Returns the REST API host.
    #[must_use]
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Returns the OAuth login host.
    #[must_use]
    pub fn login_url(&self) -> &str {
        &self.login_url
    }

    /// Returns the shared transport, if one was supplied.
    #[must_use]
    pub fn transport(&self) -> Option<&Arc<dyn Transport>> {
        self.transport.as_ref()
    }
}

// Verify BigCommerceConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<BigCommerceConfig>();
};

/// Builder for constructing [`BigCommerceConfig`] instances.
///
/// # Defaults
///
/// - `api_version`: `v2`
/// - `response_type`: JSON
/// - `fail_on_limit_reached`: `false`
/// - `api_url`: `api.bigcommerce.com`
/// - `login_url`: `login.bigcommerce.com`
/// - `headers`: empty
///
/// # Example
///
/// ```rust
/// use bigcommerce_api::{BigCommerceConfig, ClientId, ClientSecret, ResponseType};
///
/// let config = BigCommerceConfig::builder()
///     .client_id(ClientId::new("id").unwrap())
///     .secret(ClientSecret::new("secret").unwrap())
///     .callback("https://myapp.example.com/auth")
///     .response_type(ResponseType::Xml)
///     .fail_on_limit_reached(true)
///     .header("X-Custom", "value")
///     .build()
///     .unwrap();
///
/// assert!(config.fail_on_limit_reached());
/// ```
#[derive(Debug, Default)]
pub struct BigCommerceConfigBuilder {
    client_id: Option<ClientId>,
    secret: Option<ClientSecret>,
    callback: Option<String>,
    access_token: Option<AccessToken>,
    store_hash: Option<StoreHash>,
    api_version: Option<ApiVersion>,
    response_type: Option<ResponseType>,
    headers: HashMap<String, String>,
    fail_on_limit_reached: Option<bool>,
    api_url: Option<String>,
    login_url: Option<String>,
    transport: Option<Arc<dyn Transport>>,
}

impl BigCommerceConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the app client ID.
    #[must_use]
    pub fn client_id(mut self, id: ClientId) -> Self {
        self.client_id = Some(id);
        self
    }

    /// Sets the app client secret.
    #[must_use]
    pub fn secret(mut self, secret: ClientSecret) -> Self {
        self.secret = Some(secret);
        self
    }

    /// Sets the OAuth callback URL sent as `redirect_uri`.
    #[must_use]
    pub fn callback(mut self, callback: impl Into<String>) -> Self {
        self.callback = Some(callback.into());
        self
    }

    /// Sets the store access token.
    #[must_use]
    pub fn access_token(mut self, token: AccessToken) -> Self {
        self.access_token = Some(token);
        self
    }

    /// Sets the store hash.
    #[must_use]
    pub fn store_hash(mut self, hash: StoreHash) -> Self {
        self.store_hash = Some(hash);
        self
    }

    /// Sets the API version.
    #[must_use]
    pub const fn api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = Some(version);
        self
    }

    /// Sets the response type.
    #[must_use]
    pub const fn response_type(mut self, response_type: ResponseType) -> Self {
        self.response_type = Some(response_type);
        self
    }

    /// Adds a header sent with every API request.
    ///
    /// Configured headers override the client's built-in headers.
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Sets whether a 429 response fails immediately instead of retrying.
    #[must_use]
    pub const fn fail_on_limit_reached(mut self, fail: bool) -> Self {
        self.fail_on_limit_reached = Some(fail);
        self
    }

    /// Overrides the REST API host.
    #[must_use]
    pub fn api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = Some(url.into());
        self
    }

    /// Overrides the OAuth login host.
    #[must_use]
    pub fn login_url(mut self, url: impl Into<String>) -> Self {
        self.login_url = Some(url.into());
        self
    }

    /// Shares a preconfigured `reqwest::Client` (connection pool, keep-alive,
    /// timeouts) across every executor created from this configuration.
    #[must_use]
    pub fn agent(mut self, client: reqwest::Client) -> Self {
        self.transport = Some(Arc::new(crate::clients::ReqwestTransport::with_client(
            client,
        )));
        self
    }

    /// Uses a custom [`Transport`] for every executor created from this
    /// configuration.
    #[must_use]
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Builds the [`BigCommerceConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyHost`] if `api_url` or `login_url` was set
    /// to an empty string.
    pub fn build(self) -> Result<BigCommerceConfig, ConfigError> {
        let api_url = self.api_url.unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let login_url = self
            .login_url
            .unwrap_or_else(|| DEFAULT_LOGIN_URL.to_string());
        if api_url.trim().is_empty() || login_url.trim().is_empty() {
            return Err(ConfigError::EmptyHost);
        }

        Ok(BigCommerceConfig {
            client_id: self.client_id,
            secret: self.secret,
            callback: self.callback,
            access_token: self.access_token,
            store_hash: self.store_hash,
            api_version: self.api_version.unwrap_or_default(),
            response_type: self.response_type.unwrap_or_default(),
            headers: self.headers,
            fail_on_limit_reached: self.fail_on_limit_reached.unwrap_or(false),
            api_url,
            login_url,
            transport: self.transport,
        })
    }
}
