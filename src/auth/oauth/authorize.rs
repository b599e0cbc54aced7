//! Authorization code exchange.
//!
//! When a merchant installs an app, BigCommerce redirects to the app's auth
//! callback with `code`, `scope` and `context` query parameters. The app
//! exchanges them for a permanent access token by POSTing to
//! `https://login.bigcommerce.com/oauth2/token`.
//!
//! # Example
//!
//! ```rust,ignore
//! use bigcommerce_api::auth::oauth::{authorize, AuthQuery};
//!
//! let query = AuthQuery {
//!     code: "qr6h3thvbvag2ffq".to_string(),
//!     scope: "store_v2_orders".to_string(),
//!     context: "stores/abc123".to_string(),
//! };
//!
//! let body = authorize(&config, Some(&query)).await?;
//! let access_token = body.as_json().and_then(|v| v["access_token"].as_str());
//! ```

use serde::{Deserialize, Serialize};

use crate::auth::oauth::error::OAuthError;
use crate::clients::{
    DecodedBody, HttpError, HttpMethod, InvalidHttpRequestError, RequestExecutor, RequestOptions,
};
use crate::config::BigCommerceConfig;

/// Path of the token endpoint on the login host.
pub const TOKEN_PATH: &str = "/oauth2/token";

/// Query parameters BigCommerce sends to the auth callback.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthQuery {
    /// Temporary authorization code.
    pub code: String,
    /// Space-separated list of granted scopes.
    pub scope: String,
    /// Store context, e.g. `stores/{store_hash}`.
    pub context: String,
}

/// Request body for the token exchange.
#[derive(Serialize)]
struct TokenRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    client_id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    client_secret: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    redirect_uri: Option<&'a str>,
    grant_type: &'static str,
    code: &'a str,
    scope: &'a str,
    context: &'a str,
}

/// Exchanges the callback query for an access token.
///
/// The token response is returned as decoded. Callers read `access_token`,
/// `user` and `context` from the JSON value.
///
/// # Errors
///
/// - [`OAuthError::MissingQuery`] if `query` is `None`
/// - [`OAuthError::Http`] if the executor cannot be created or the request
///   fails (network, rate limit, API or decode errors)
pub async fn authorize(
    config: &BigCommerceConfig,
    query: Option<&AuthQuery>,
) -> Result<DecodedBody, OAuthError> {
    let query = query.ok_or(OAuthError::MissingQuery)?;

    let payload = TokenRequest {
        client_id: config.client_id().map(AsRef::<str>::as_ref),
        client_secret: config.secret().map(AsRef::<str>::as_ref),
        redirect_uri: config.callback(),
        grant_type: "authorization_code",
        code: &query.code,
        scope: &query.scope,
        context: &query.context,
    };
    let body = serde_json::to_value(&payload).map_err(|e| {
        HttpError::from(InvalidHttpRequestError::UnserializableBody {
            reason: e.to_string(),
        })
    })?;

    let mut options = RequestOptions::new().fail_on_limit_reached(config.fail_on_limit_reached());
    if let Some(transport) = config.transport() {
        options = options.transport(transport.clone());
    }
    let executor = RequestExecutor::new(config.login_url(), options).map_err(HttpError::from)?;

    tracing::debug!("Exchanging authorization code for context {}", query.context);

    Ok(executor.run(HttpMethod::Post, TOKEN_PATH, Some(&body)).await?)
}
