//! Token types for API authentication.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The bearer credentials issued by a successful login.
///
/// Persisted as one JSON blob (camelCase field names) and replaced or removed
/// as a whole; there are no partial updates.
///
/// # Security
///
/// - Never logged or displayed in Debug output
/// - Treat as opaque; do not parse or inspect
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthTokens {
    access_token: String,
    id_token: String,
    refresh_token: String,
    expires_in: u64,
}

impl AuthTokens {
    /// Create a token set.
    pub fn new(
        access_token: impl Into<String>,
        id_token: impl Into<String>,
        refresh_token: impl Into<String>,
        expires_in: u64,
    ) -> Self {
        Self {
            access_token: access_token.into(),
            id_token: id_token.into(),
            refresh_token: refresh_token.into(),
            expires_in,
        }
    }

    /// Returns the access token.
    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    /// Returns the ID token, which is what the API expects as the bearer.
    ///
    /// # Security
    ///
    /// Use only when constructing HTTP authorization headers.
    pub fn id_token(&self) -> &str {
        &self.id_token
    }

    /// Returns the refresh token.
    pub fn refresh_token(&self) -> &str {
        &self.refresh_token
    }

    /// Returns the lifetime in seconds reported at login.
    pub fn expires_in(&self) -> u64 {
        self.expires_in
    }
}

// Hide token values in Debug output
impl fmt::Debug for AuthTokens {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthTokens")
            .field("access_token", &"[REDACTED]")
            .field("id_token", &"[REDACTED]")
            .field("refresh_token", &"[REDACTED]")
            .field("expires_in", &self.expires_in)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn tokens_hide_values_in_debug() {
        let tokens = AuthTokens::new(
            "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9",
            "eyJid",
            "rt-value",
            3600,
        );
        let debug = format!("{:?}", tokens);
        assert!(!debug.contains("eyJ"));
        assert!(!debug.contains("rt-value"));
        assert!(debug.contains("[REDACTED]"));
        assert!(debug.contains("3600"));
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let tokens = AuthTokens::new("x", "y", "z", 3600);
        assert_eq!(
            serde_json::to_value(&tokens).unwrap(),
            json!({
                "accessToken": "x",
                "idToken": "y",
                "refreshToken": "z",
                "expiresIn": 3600
            })
        );
    }
}
