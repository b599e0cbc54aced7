//! HTTP request types: methods and the per-call retry state machine.

use std::fmt;
use std::str::FromStr;

use crate::clients::errors::InvalidHttpRequestError;

/// HTTP methods supported by the BigCommerce API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for creating resources.
    Post,
    /// HTTP PUT method for updating resources.
    Put,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "get"),
            Self::Post => write!(f, "post"),
            Self::Put => write!(f, "put"),
            Self::Delete => write!(f, "delete"),
        }
    }
}

/// Parses a method name case-insensitively.
///
/// ```rust
/// use bigcommerce_api::clients::HttpMethod;
///
/// assert_eq!("POST".parse::<HttpMethod>().unwrap(), HttpMethod::Post);
/// assert_eq!("get".parse::<HttpMethod>().unwrap(), HttpMethod::Get);
/// assert!("patch".parse::<HttpMethod>().is_err());
/// ```
impl FromStr for HttpMethod {
    type Err = InvalidHttpRequestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "get" => Ok(Self::Get),
            "post" => Ok(Self::Post),
            "put" => Ok(Self::Put),
            "delete" => Ok(Self::Delete),
            _ => Err(InvalidHttpRequestError::InvalidMethod {
                method: s.to_string(),
            }),
        }
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => Self::GET,
            HttpMethod::Post => Self::POST,
            HttpMethod::Put => Self::PUT,
            HttpMethod::Delete => Self::DELETE,
        }
    }
}

/// Which attempt of a logical call is in flight.
///
/// A call starts at `First` and moves to `Retry` at most once.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Attempt {
    /// The initial request.
    First,
    /// The single retry after a rate-limited first attempt.
    Retry,
}

/// What the executor does after receiving a response.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NextStep {
    /// Decode the response and resolve or reject with it.
    Finish,
    /// Reject with a rate limit error carrying the retry-after seconds.
    FailRateLimited(f64),
    /// Sleep for the given seconds, then issue the retry.
    RetryAfter(f64),
}

impl Attempt {
    /// Decides the next step from the response status and parsed retry-after.
    ///
    /// A response is retry-eligible only when it is a 429 with a retry-after
    /// value, this is the first attempt, and `fail_on_limit_reached` is false.
    #[must_use]
    pub fn next_step(
        self,
        status: u16,
        retry_after: Option<f64>,
        fail_on_limit_reached: bool,
    ) -> NextStep {
        let Some(retry_after) = retry_after.filter(|_| status == 429) else {
            return NextStep::Finish;
        };
        match self {
            Self::Retry => NextStep::Finish,
            Self::First if fail_on_limit_reached => NextStep::FailRateLimited(retry_after),
            Self::First => NextStep::RetryAfter(retry_after),
        }
    }
}

/// Transient state of one `run()` invocation.
#[derive(Clone, Debug)]
pub struct PendingCall {
    /// HTTP method.
    pub method: HttpMethod,
    /// Path relative to the destination.
    pub path: String,
    /// Serialized JSON body.
    pub body: Option<Vec<u8>>,
    /// Current attempt.
    pub attempt: Attempt,
}

impl PendingCall {
    /// Creates a call in its first attempt.
    #[must_use]
    pub fn new(method: HttpMethod, path: impl Into<String>, body: Option<Vec<u8>>) -> Self {
        Self {
            method,
            path: path.into(),
            body,
            attempt: Attempt::First,
        }
    }
}
