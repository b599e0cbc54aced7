//! BigCommerce API version and response type definitions.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// BigCommerce REST API version.
///
/// The version becomes a path segment: `/stores/{hash}/v2/...` or
/// `/stores/{hash}/v3/...`.
///
/// # Example
///
/// ```rust
/// use bigcommerce_api::ApiVersion;
///
/// assert_eq!(ApiVersion::default(), ApiVersion::V2);
///
/// let version: ApiVersion = "V3".parse().unwrap();
/// assert_eq!(version, ApiVersion::V3);
/// assert_eq!(version.to_string(), "v3");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiVersion {
    /// The v2 API. Supports `.xml` responses.
    #[default]
    V2,
    /// The v3 API. JSON only.
    V3,
}

impl ApiVersion {
    /// Returns the path segment for this version.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::V2 => "v2",
            Self::V3 => "v3",
        }
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApiVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "v2" => Ok(Self::V2),
            "v3" => Ok(Self::V3),
            _ => Err(ConfigError::InvalidApiVersion {
                version: s.to_string(),
            }),
        }
    }
}

/// Representation requested from the API.
///
/// `Xml` switches the `Accept` header to `application/xml` and adds the
/// `.xml` extension to v2 paths.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseType {
    /// JSON responses (`application/json`).
    #[default]
    Json,
    /// XML responses (`application/xml`).
    Xml,
}

impl ResponseType {
    /// Returns the MIME type used for the `Accept` header.
    #[must_use]
    pub const fn accept_header(&self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::Xml => "application/xml",
        }
    }

    /// Returns the path extension appended to v2 resource paths.
    #[must_use]
    pub const fn path_extension(&self) -> &'static str {
        match self {
            Self::Json => "",
            Self::Xml => ".xml",
        }
    }
}

impl fmt::Display for ResponseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => f.write_str("json"),
            Self::Xml => f.write_str("xml"),
        }
    }
}

impl FromStr for ResponseType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "xml" => Ok(Self::Xml),
            _ => Err(ConfigError::InvalidResponseType {
                value: s.to_string(),
            }),
        }
    }
}
