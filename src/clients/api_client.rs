//! Store-scoped client for the BigCommerce REST API.
//!
//! [`BigCommerceClient`] turns a [`BigCommerceConfig`] into authenticated
//! calls: it builds a [`RequestExecutor`] with the auth headers, prefixes
//! every path with `/stores/{store_hash}/{version}`, and exposes the app
//! helpers for signed payloads and the OAuth code exchange.
//!
//! # Example
//!
//! ```rust,ignore
//! use bigcommerce_api::{AccessToken, BigCommerceClient, BigCommerceConfig, ClientId, StoreHash};
//! use serde_json::json;
//!
//! let config = BigCommerceConfig::builder()
//!     .client_id(ClientId::new("client-id")?)
//!     .access_token(AccessToken::new("token")?)
//!     .store_hash(StoreHash::new("12abc")?)
//!     .build()?;
//! let client = BigCommerceClient::new(config);
//!
//! let orders = client.get("/orders").await?;
//! let created = client.post("/customers", &json!([{"first_name": "Jane"}])).await?;
//! ```

use serde_json::Value;

use crate::auth::oauth::{self, AuthQuery, OAuthError};
use crate::auth::{self, VerifyError};
use crate::clients::decode::DecodedBody;
use crate::clients::errors::HttpError;
use crate::clients::http_request::HttpMethod;
use crate::clients::request_executor::{RequestExecutor, RequestOptions};
use crate::config::{ApiVersion, BigCommerceConfig};
use crate::error::ConfigError;

/// Client for one store (or one app, for the auth helpers).
///
/// Cheap to clone; executors are built per call from the shared config.
#[derive(Clone, Debug)]
pub struct BigCommerceClient {
    config: BigCommerceConfig,
}

impl BigCommerceClient {
    /// Creates a client from a configuration.
    #[must_use]
    pub const fn new(config: BigCommerceConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &BigCommerceConfig {
        &self.config
    }

    /// Returns the API version used in request paths.
    #[must_use]
    pub const fn api_version(&self) -> ApiVersion {
        self.config.api_version()
    }

    /// Builds an executor for the REST API host with the auth headers.
    ///
    /// Headers, in order of precedence (later wins): `Accept` from the
    /// response type, `X-Auth-Client` and `X-Auth-Token` when configured,
    /// then the configured extra headers.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the executor cannot be created.
    pub fn create_api_request(&self) -> Result<RequestExecutor, ConfigError> {
        let mut options = RequestOptions::new()
            .header("Accept", self.config.response_type().accept_header())
            .fail_on_limit_reached(self.config.fail_on_limit_reached());

        if let Some(client_id) = self.config.client_id() {
            options = options.header("X-Auth-Client", AsRef::<str>::as_ref(client_id));
        }
        if let Some(token) = self.config.access_token() {
            options = options.header("X-Auth-Token", AsRef::<str>::as_ref(token));
        }
        options = options.headers(self.config.headers().clone());

        if let Some(transport) = self.config.transport() {
            options = options.transport(transport.clone());
        }

        RequestExecutor::new(self.config.api_url(), options)
    }

    /// Builds the full API path for a resource path.
    ///
    /// `/orders` becomes `/stores/{store_hash}/{version}/orders`. For v2 with
    /// the XML response type, `.xml` is added before any query string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingCredentials`] when the access token or
    /// store hash is not configured.
    pub fn resource_path(&self, path: &str) -> Result<String, ConfigError> {
        let (Some(_), Some(store_hash)) = (self.config.access_token(), self.config.store_hash())
        else {
            return Err(ConfigError::MissingCredentials);
        };

        let version = self.config.api_version();
        let extension = if version == ApiVersion::V3 {
            ""
        } else {
            self.config.response_type().path_extension()
        };

        let full = format!("/stores/{store_hash}/{version}{path}");
        Ok(match full.split_once('?') {
            Some((resource, query)) => format!("{resource}{extension}?{query}"),
            None => format!("{full}{extension}"),
        })
    }

    /// Sends an authenticated request to the store.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Config`] when credentials are missing, or any
    /// error produced by [`RequestExecutor::run`].
    pub async fn request(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<&Value>,
    ) -> Result<DecodedBody, HttpError> {
        let full_path = self.resource_path(path)?;
        let executor = self.create_api_request()?;
        executor.run(method, &full_path, body).await
    }

    /// Sends a GET request.
    ///
    /// # Errors
    ///
    /// See [`request`](Self::request).
    pub async fn get(&self, path: &str) -> Result<DecodedBody, HttpError> {
        self.request(HttpMethod::Get, path, None).await
    }

    /// Sends a POST request with a JSON body.
    ///
    /// # Errors
    ///
    /// See [`request`](Self::request).
    pub async fn post(&self, path: &str, body: &Value) -> Result<DecodedBody, HttpError> {
        self.request(HttpMethod::Post, path, Some(body)).await
    }

    /// Sends a PUT request with a JSON body.
    ///
    /// # Errors
    ///
    /// See [`request`](Self::request).
    pub async fn put(&self, path: &str, body: &Value) -> Result<DecodedBody, HttpError> {
        self.request(HttpMethod::Put, path, Some(body)).await
    }

    /// Sends a DELETE request.
    ///
    /// # Errors
    ///
    /// See [`request`](Self::request).
    pub async fn delete(&self, path: &str) -> Result<DecodedBody, HttpError> {
        self.request(HttpMethod::Delete, path, None).await
    }

    /// Verifies a signed payload with the configured client secret.
    ///
    /// # Errors
    ///
    /// Returns [`VerifyError::MissingSecret`] when no secret is configured,
    /// otherwise see [`auth::verify`].
    pub fn verify(&self, signed_request: &str) -> Result<Value, VerifyError> {
        let secret = self.config.secret().ok_or(VerifyError::MissingSecret)?;
        auth::verify(signed_request, secret.as_ref())
    }

    /// Exchanges the auth callback query for an access token.
    ///
    /// # Errors
    ///
    /// See [`oauth::authorize`].
    pub async fn authorize(&self, query: Option<&AuthQuery>) -> Result<DecodedBody, OAuthError> {
        oauth::authorize(&self.config, query).await
    }
}
