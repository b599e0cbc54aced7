//! # BigCommerce API Rust Client
//!
//! A Rust client for the BigCommerce REST API and for the app-side pieces of
//! a BigCommerce integration: OAuth code exchange and signed payload
//! verification.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`BigCommerceConfig`] and [`BigCommerceConfigBuilder`]
//! - Validated newtypes for credentials and store identity
//! - A request executor with one bounded retry on rate limiting (429) and
//!   gzip/deflate, JSON and text response decoding via [`clients`]
//! - A store-scoped [`BigCommerceClient`] with `get`/`post`/`put`/`delete`
//! - Signed payload verification via [`auth::verify`]
//! - The OAuth authorization code exchange via [`auth::oauth`]
//!
//! ## Quick Start
//!
//! ```rust
//! use bigcommerce_api::{AccessToken, ApiVersion, BigCommerceConfig, ClientId, StoreHash};
//!
//! let config = BigCommerceConfig::builder()
//!     .client_id(ClientId::new("your-client-id").unwrap())
//!     .access_token(AccessToken::new("your-access-token").unwrap())
//!     .store_hash(StoreHash::new("12abc").unwrap())
//!     .api_version(ApiVersion::V3)
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## Making API Requests
//!
//! ```rust,ignore
//! use bigcommerce_api::BigCommerceClient;
//! use serde_json::json;
//!
//! let client = BigCommerceClient::new(config);
//!
//! let products = client.get("/catalog/products?limit=5").await?;
//! client.put("/catalog/products/77", &json!({"price": 9.99})).await?;
//! ```
//!
//! ## Verifying Signed Payloads
//!
//! ```rust
//! use bigcommerce_api::auth::verify;
//!
//! // {"foo":"foo"} signed with the client secret "123456abcdef"
//! let signed = "eyJmb28iOiJmb28ifQ==.YjMzMTQ2ZGU4ZTUzNWJiOTI3NTI1ODJmNzhiZGM5NzBjNGQ3MjZkZDdkMDY1MjdkZGYxZDA0NGZjNDVjYmNkMA==";
//!
//! let data = verify(signed, "123456abcdef").unwrap();
//! assert_eq!(data["foo"], "foo");
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime
//! - **Injectable transport**: The network layer is a trait object

pub mod auth;
pub mod clients;
pub mod config;
pub mod error;

// Re-export public types at crate root for convenience
pub use config::{
    AccessToken, ApiVersion, BigCommerceConfig, BigCommerceConfigBuilder, ClientId, ClientSecret,
    ResponseType, StoreHash,
};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    ApiError, BigCommerceClient, DecodeError, DecodedBody, ErrorKind, HttpError, HttpMethod,
    RateLimitError, RequestExecutor, RequestOptions,
};

// Re-export auth types for convenience
pub use auth::oauth::{authorize, AuthQuery, OAuthError};
pub use auth::{verify, VerifyError};
