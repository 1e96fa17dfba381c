//! HTTP client implementation.

use std::error::Error as StdError;
use std::sync::Arc;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Method, StatusCode};
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, instrument, trace, warn};

use crate::storage::{KeyValueStore, TOKEN_STORAGE_KEY};
use crate::types::ApiUrl;

use super::response::{ApiFailure, ApiResponse, FailureKind};

/// Message used when a transport error carries no text of its own.
const GENERIC_NETWORK_ERROR: &str = "Network error occurred";

/// Method, extra headers and body for [`HttpClient::request`].
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub method: Method,
    pub headers: HeaderMap,
    pub body: Option<Vec<u8>>,
}

impl RequestOptions {
    /// Options for a bodiless request with the given method.
    pub fn new(method: Method) -> Self {
        Self {
            method,
            ..Default::default()
        }
    }

    /// Add a header. Caller headers override the default `Content-Type`.
    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Set a raw JSON body.
    pub fn body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = Some(body.into());
        self
    }
}

/// HTTP client for the portal API.
///
/// Every call resolves to an [`ApiResponse`]; transport, status and schema
/// failures come back as [`ApiResponse::Failure`] rather than as errors.
/// When the shared store holds a session, its ID token is sent as the bearer
/// credential.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
    api: ApiUrl,
    storage: Arc<dyn KeyValueStore>,
}

impl HttpClient {
    /// Create a new client for the given API, reading tokens from `storage`.
    pub fn new(api: ApiUrl, storage: Arc<dyn KeyValueStore>) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(concat!("portal/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("failed to build HTTP client");

        Self {
            client,
            api,
            storage,
        }
    }

    /// Returns the API URL this client is configured for.
    pub fn api(&self) -> &ApiUrl {
        &self.api
    }

    /// Issue a GET request.
    pub async fn get<T>(&self, path: &str) -> ApiResponse<T>
    where
        T: DeserializeOwned,
    {
        self.request(path, RequestOptions::new(Method::GET)).await
    }

    /// Issue a POST request with `body` serialized as JSON.
    pub async fn post<B, T>(&self, path: &str, body: &B) -> ApiResponse<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = match serde_json::to_vec(body) {
            Ok(body) => body,
            Err(e) => {
                return ApiResponse::Failure(ApiFailure::new(
                    FailureKind::Encode,
                    format!("failed to encode request body: {}", e),
                ));
            }
        };

        self.request(path, RequestOptions::new(Method::POST).body(body))
            .await
    }

    /// Perform one request and normalize the outcome.
    #[instrument(skip(self, options), fields(api = %self.api, method = %options.method))]
    pub async fn request<T>(&self, path: &str, options: RequestOptions) -> ApiResponse<T>
    where
        T: DeserializeOwned,
    {
        let url = self.api.endpoint(path);
        let headers = self.build_headers(options.headers);
        debug!(%url, authed = headers.contains_key(AUTHORIZATION), "API request");

        let mut builder = self.client.request(options.method, &url).headers(headers);
        if let Some(body) = options.body {
            builder = builder.body(body);
        }

        let response = match builder.send().await {
            Ok(response) => response,
            Err(e) => return network_failure(&e),
        };

        let status = response.status();
        trace!(status = %status, "API response");

        let body = match response.bytes().await {
            Ok(body) => body,
            Err(e) => return network_failure(&e),
        };

        if !status.is_success() {
            let message = error_message(&body, status);
            debug!(status = status.as_u16(), %message, "API request failed");
            return ApiResponse::Failure(ApiFailure::new(
                FailureKind::Status(status.as_u16()),
                message,
            ));
        }

        match serde_json::from_slice::<T>(&body) {
            Ok(data) => ApiResponse::Success(data),
            Err(e) => {
                warn!(error = %e, "Response body did not match the expected schema");
                ApiResponse::Failure(ApiFailure::new(
                    FailureKind::Decode,
                    format!("invalid response body: {}", e),
                ))
            }
        }
    }

    /// Headers for an outgoing request: JSON content type, then caller
    /// headers, then the bearer token if a session is stored.
    fn build_headers(&self, extra: HeaderMap) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.extend(extra);

        if let Some(token) = self.auth_token() {
            match HeaderValue::from_str(&format!("Bearer {}", token)) {
                Ok(mut value) => {
                    value.set_sensitive(true);
                    headers.insert(AUTHORIZATION, value);
                }
                Err(_) => warn!("Stored ID token is not a valid header value; sending without it"),
            }
        }

        headers
    }

    /// Read the ID token from the stored session blob.
    ///
    /// Unparseable blobs and empty tokens count as no session.
    fn auth_token(&self) -> Option<String> {
        let raw = self.storage.get(TOKEN_STORAGE_KEY)?;
        let blob: serde_json::Value = serde_json::from_str(&raw).ok()?;

        blob.get("idToken")
            .and_then(serde_json::Value::as_str)
            .filter(|token| !token.is_empty())
            .map(str::to_string)
    }
}

/// Build a failure for a request that never produced a usable response.
fn network_failure<T>(err: &reqwest::Error) -> ApiResponse<T> {
    let message = error_chain(err);
    debug!(error = %message, "API request did not complete");

    let message = if message.trim().is_empty() {
        GENERIC_NETWORK_ERROR.to_string()
    } else {
        message
    };

    ApiResponse::Failure(ApiFailure::new(FailureKind::Network, message))
}

/// Join an error and its sources into one line.
fn error_chain(err: &dyn StdError) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !text.is_empty() && !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}

/// The server's `error` field, or a message synthesized from the status.
fn error_message(body: &[u8], status: StatusCode) -> String {
    serde_json::from_slice::<serde_json::Value>(body)
        .ok()
        .as_ref()
        .and_then(|body| body.get("error"))
        .and_then(serde_json::Value::as_str)
        .filter(|error| !error.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| format!("HTTP error! status: {}", status.as_u16()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn client_with(storage: MemoryStore) -> HttpClient {
        let api = ApiUrl::new("https://api.example.com").unwrap();
        HttpClient::new(api, Arc::new(storage))
    }

    #[test]
    fn client_creation() {
        let client = client_with(MemoryStore::new());
        assert_eq!(client.api().as_str(), "https://api.example.com/");
    }

    #[test]
    fn no_authorization_without_session() {
        let client = client_with(MemoryStore::new());
        let headers = client.build_headers(HeaderMap::new());

        assert_eq!(headers[CONTENT_TYPE], "application/json");
        assert!(!headers.contains_key(AUTHORIZATION));
    }

    #[test]
    fn bearer_uses_id_token() {
        let storage = MemoryStore::new();
        storage
            .set(
                TOKEN_STORAGE_KEY,
                r#"{"accessToken":"a","idToken":"id-123","refreshToken":"r","expiresIn":60}"#,
            )
            .unwrap();
        let client = client_with(storage);

        let headers = client.build_headers(HeaderMap::new());
        assert_eq!(headers[AUTHORIZATION], "Bearer id-123");
        assert!(headers[AUTHORIZATION].is_sensitive());
    }

    #[test]
    fn malformed_blob_means_no_token() {
        let storage = MemoryStore::new();
        storage.set(TOKEN_STORAGE_KEY, "not json").unwrap();
        let client = client_with(storage);

        assert!(client.auth_token().is_none());
    }

    #[test]
    fn empty_id_token_means_no_token() {
        let storage = MemoryStore::new();
        storage.set(TOKEN_STORAGE_KEY, r#"{"idToken":""}"#).unwrap();
        let client = client_with(storage);

        assert!(client.auth_token().is_none());
    }

    #[test]
    fn caller_headers_override_content_type() {
        let client = client_with(MemoryStore::new());
        let mut extra = HeaderMap::new();
        extra.insert(CONTENT_TYPE, HeaderValue::from_static("text/plain"));
        extra.insert("x-request-id", HeaderValue::from_static("abc"));

        let headers = client.build_headers(extra);
        assert_eq!(headers[CONTENT_TYPE], "text/plain");
        assert_eq!(headers["x-request-id"], "abc");
    }

    #[test]
    fn error_message_prefers_server_field() {
        let body = br#"{"error":"bad creds"}"#;
        assert_eq!(error_message(body, StatusCode::UNAUTHORIZED), "bad creds");
    }

    #[test]
    fn error_message_synthesized_from_status() {
        assert_eq!(
            error_message(b"<html>oops</html>", StatusCode::BAD_GATEWAY),
            "HTTP error! status: 502"
        );
        assert_eq!(
            error_message(br#"{"error":""}"#, StatusCode::INTERNAL_SERVER_ERROR),
            "HTTP error! status: 500"
        );
        assert_eq!(
            error_message(br#"{"message":"nope"}"#, StatusCode::FORBIDDEN),
            "HTTP error! status: 403"
        );
    }
}
