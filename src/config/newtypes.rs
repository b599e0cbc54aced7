//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around credential strings that
//! validate their contents on construction. Secrets mask their value in
//! `Debug` output.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A validated BigCommerce app client ID.
///
/// Sent as the `X-Auth-Client` header and as `client_id` during OAuth.
///
/// # Example
///
/// ```rust
/// use bigcommerce_api::ClientId;
///
/// let id = ClientId::new("abc123").unwrap();
/// assert_eq!(id.as_ref(), "abc123");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientId(String);

impl ClientId {
    /// Creates a new validated client ID.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyClientId`] if the ID is empty.
    pub fn new(id: impl Into<String>) -> Result<Self, ConfigError> {
        let id = id.into();
        if id.is_empty() {
            return Err(ConfigError::EmptyClientId);
        }
        Ok(Self(id))
    }
}

impl AsRef<str> for ClientId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A validated BigCommerce app client secret.
///
/// Used as the HMAC key for signed payloads and as `client_secret` during
/// OAuth.
///
/// # Security
///
/// The `Debug` implementation masks the secret value.
///
/// ```rust
/// use bigcommerce_api::ClientSecret;
///
/// let secret = ClientSecret::new("my-secret").unwrap();
/// assert_eq!(format!("{:?}", secret), "ClientSecret(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ClientSecret(String);

impl ClientSecret {
    /// Creates a new validated client secret.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyClientSecret`] if the secret is empty.
    pub fn new(secret: impl Into<String>) -> Result<Self, ConfigError> {
        let secret = secret.into();
        if secret.is_empty() {
            return Err(ConfigError::EmptyClientSecret);
        }
        Ok(Self(secret))
    }
}

impl AsRef<str> for ClientSecret {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ClientSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ClientSecret(*****)")
    }
}

/// A validated store access token, sent as the `X-Auth-Token` header.
///
/// The `Debug` implementation masks the token value.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Creates a new validated access token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAccessToken`] if the token is empty.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.is_empty() {
            return Err(ConfigError::EmptyAccessToken);
        }
        Ok(Self(token))
    }
}

impl AsRef<str> for AccessToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(*****)")
    }
}

/// A validated store hash, the store identifier in `/stores/{hash}/...` paths.
///
/// The hash is used verbatim; it is not URL-encoded.
///
/// # Serialization
///
/// ```rust
/// use bigcommerce_api::StoreHash;
///
/// let hash = StoreHash::new("12abc").unwrap();
/// let json = serde_json::to_string(&hash).unwrap();
/// assert_eq!(json, r#""12abc""#);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct StoreHash(String);

impl StoreHash {
    /// Creates a new validated store hash.
    ///
    /// Surrounding whitespace is trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyStoreHash`] if the hash is empty.
    pub fn new(hash: impl Into<String>) -> Result<Self, ConfigError> {
        let hash = hash.into().trim().to_string();
        if hash.is_empty() {
            return Err(ConfigError::EmptyStoreHash);
        }
        Ok(Self(hash))
    }
}

impl AsRef<str> for StoreHash {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StoreHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for StoreHash {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for StoreHash {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}
