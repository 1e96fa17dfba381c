//! API base URL type.

use serde::Serialize;
use std::env;
use std::fmt;
use std::str::FromStr;
use tracing::debug;
use url::Url;

use crate::error::{Error, InvalidInputError};

/// Environment variable holding the API base URL.
pub const API_ENDPOINT_ENV: &str = "API_ENDPOINT";

/// Base URL used when [`API_ENDPOINT_ENV`] is unset.
pub const DEFAULT_API_ENDPOINT: &str = "http://localhost:3000";

/// A validated base URL for the remote API.
///
/// The URL must be absolute, have a host, and use HTTP or HTTPS. Endpoint
/// URLs are built by appending a path to the base, so a base with a path prefix (`https://host/prod`) works too.
///
/// # Example
///
/// ```
/// use portal::ApiUrl;
///
/// let api = ApiUrl::new("https://api.example.com/").unwrap();
/// assert_eq!(api.endpoint("/login"), "https://api.example.com/login");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ApiUrl(Url);

impl ApiUrl {
    /// Create a new API URL from a string, validating the format.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is not valid or doesn't meet requirements.
    pub fn new(s: impl AsRef<str>) -> Result<Self, Error> {
        let s = s.as_ref();
        let url = Url::parse(s).map_err(|e| InvalidInputError::ApiUrl {
            value: s.to_string(),
            reason: e.to_string(),
        })?;

        Self::validate(&url, s)?;

        Ok(Self(url))
    }

    /// Resolve the API URL from the environment.
    ///
    /// Loads a `.env` file from the working directory if one exists, then
    /// reads [`API_ENDPOINT_ENV`], falling back to [`DEFAULT_API_ENDPOINT`].
    pub fn from_env() -> Result<Self, Error> {
        dotenvy::dotenv().ok();

        match env::var(API_ENDPOINT_ENV) {
            Ok(value) if !value.trim().is_empty() => {
                debug!(%value, "Using API endpoint from environment");
                Self::new(value.trim())
            }
            _ => Self::new(DEFAULT_API_ENDPOINT),
        }
    }

    /// Returns the full URL for a request path.
    ///
    /// The path is appended to the base as-is; a missing leading slash is
    /// supplied.
    pub fn endpoint(&self, path: &str) -> String {
        let base = self.0.as_str().trim_end_matches('/');
        if path.starts_with('/') {
            format!("{}{}", base, path)
        } else {
            format!("{}/{}", base, path)
        }
    }

    /// Returns the base URL as a string.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    fn validate(url: &Url, original: &str) -> Result<(), Error> {
        if url.cannot_be_a_base() {
            return Err(InvalidInputError::ApiUrl {
                value: original.to_string(),
                reason: "must be an absolute URL".to_string(),
            }
            .into());
        }

        if !matches!(url.scheme(), "http" | "https") {
            return Err(InvalidInputError::ApiUrl {
                value: original.to_string(),
                reason: "must use HTTP or HTTPS".to_string(),
            }
            .into());
        }

        if url.host_str().is_none() {
            return Err(InvalidInputError::ApiUrl {
                value: original.to_string(),
                reason: "must have a host".to_string(),
            }
            .into());
        }

        if url.query().is_some() || url.fragment().is_some() {
            return Err(InvalidInputError::ApiUrl {
                value: original.to_string(),
                reason: "must not carry a query or fragment".to_string(),
            }
            .into());
        }

        Ok(())
    }
}

impl Default for ApiUrl {
    fn default() -> Self {
        Self(Url::parse(DEFAULT_API_ENDPOINT).expect("default API endpoint is a valid URL"))
    }
}

impl fmt::Display for ApiUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.as_str().trim_end_matches('/'))
    }
}

impl FromStr for ApiUrl {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for ApiUrl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.0.as_str())
    }
}
