//! Session management for the portal API.

use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use crate::error::{AuthError, Error, StorageError};
use crate::http::endpoints::{
    GetUserInfoResponse, LOGIN, LoginRequest, LoginResponse, REGISTER, RegisterRequest,
    RegisterResponse, USER,
};
use crate::http::{ApiFailure, ApiResponse, HttpClient};
use crate::storage::{KeyValueStore, TOKEN_STORAGE_KEY};
use crate::types::{ApiUrl, User};

use super::credentials::{Credentials, Registration};
use super::tokens::AuthTokens;

const REGISTRATION_FAILED: &str = "Registration failed";
const LOGIN_FAILED: &str = "Login failed";
const USER_INFO_FAILED: &str = "Failed to fetch user info";

/// The client-side authentication session.
///
/// A session exists exactly when a parseable [`AuthTokens`] blob is stored
/// under [`TOKEN_STORAGE_KEY`]. The store shares its [`KeyValueStore`] with
/// the [`HttpClient`] it drives, so a login is picked up by the next request.
///
/// Cheap to clone.
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use portal::{ApiUrl, Credentials, SessionStore};
/// use portal::storage::MemoryStore;
///
/// # async fn example() -> Result<(), portal::Error> {
/// let api = ApiUrl::from_env()?;
/// let session = SessionStore::new(api, Arc::new(MemoryStore::new()));
///
/// session.login(&Credentials::new("alice", "hunter2")).await?;
/// let user = session.get_user_info().await?;
/// println!("Logged in as {}", user.username);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct SessionStore {
    client: HttpClient,
    storage: Arc<dyn KeyValueStore>,
}

impl SessionStore {
    /// Create a session store talking to `api` and persisting to `storage`.
    pub fn new(api: ApiUrl, storage: Arc<dyn KeyValueStore>) -> Self {
        let client = HttpClient::new(api, Arc::clone(&storage));
        Self { client, storage }
    }

    /// Returns the HTTP client used for API calls.
    pub fn client(&self) -> &HttpClient {
        &self.client
    }

    /// Create an account. Does not log in.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::RegistrationFailed`] with the server's message,
    /// or "Registration failed" when none is available.
    #[instrument(skip(self, registration), fields(username = %registration.username()))]
    pub async fn register(&self, registration: &Registration) -> Result<(), Error> {
        info!("Registering account");

        let request = RegisterRequest {
            username: registration.username(),
            email: registration.email(),
            password: registration.password(),
        };

        let response: RegisterResponse =
            payload(self.client.post(REGISTER, &request).await, REGISTRATION_FAILED)
                .map_err(|message| AuthError::RegistrationFailed { message })?;

        debug!(
            success = response.success,
            message = response.message.as_deref().unwrap_or_default(),
            "Account registered"
        );
        Ok(())
    }

    /// Log in and persist the issued tokens.
    ///
    /// A failed login leaves any existing session untouched.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::LoginFailed`] with the server's message (or
    /// "Login failed"), or a storage error if the tokens cannot be saved.
    #[instrument(skip(self, credentials), fields(username = %credentials.username()))]
    pub async fn login(&self, credentials: &Credentials) -> Result<AuthTokens, Error> {
        info!("Logging in");

        let request = LoginRequest {
            username: credentials.username(),
            password: credentials.password(),
        };

        let response: LoginResponse =
            payload(self.client.post(LOGIN, &request).await, LOGIN_FAILED)
                .map_err(|message| AuthError::LoginFailed { message })?;

        let tokens = AuthTokens::new(
            response.access_token,
            response.id_token,
            response.refresh_token,
            response.expires_in,
        );

        self.store_tokens(&tokens)?;

        debug!(expires_in = tokens.expires_in(), "Session created");
        Ok(tokens)
    }

    /// Fetch the current user. The stored token, if any, is attached; without
    /// one the request still goes out and the server decides.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::UserInfoFailed`] with the server's message, or
    /// "Failed to fetch user info".
    #[instrument(skip(self))]
    pub async fn get_user_info(&self) -> Result<User, Error> {
        debug!("Fetching user info");

        let response: ApiResponse<Option<GetUserInfoResponse>> = self.client.get(USER).await;

        let response = payload(response, USER_INFO_FAILED)
            .map_err(|message| AuthError::UserInfoFailed { message })?;

        Ok(response.user)
    }

    /// Drop the stored session. Makes no network call.
    ///
    /// A storage backend that cannot delete the blob is logged, not
    /// reported.
    pub fn logout(&self) {
        info!("Logging out");

        if let Err(e) = self.storage.delete(TOKEN_STORAGE_KEY) {
            warn!(error = %e, "Failed to clear stored session");
        }
    }

    /// Returns true if a parseable token blob is stored.
    ///
    /// Presence only; expiry and validity are not checked.
    pub fn is_authenticated(&self) -> bool {
        self.stored_tokens().is_some()
    }

    /// Persist `tokens` as the session blob, replacing any previous one.
    pub fn store_tokens(&self, tokens: &AuthTokens) -> Result<(), Error> {
        let blob = serde_json::to_string(tokens).map_err(|e| StorageError::Encode {
            key: TOKEN_STORAGE_KEY.to_string(),
            message: e.to_string(),
        })?;

        self.storage.set(TOKEN_STORAGE_KEY, &blob)?;
        Ok(())
    }

    /// Read the stored session blob. Malformed blobs read as `None`.
    pub fn stored_tokens(&self) -> Option<AuthTokens> {
        let blob = self.storage.get(TOKEN_STORAGE_KEY)?;

        match serde_json::from_str(&blob) {
            Ok(tokens) => Some(tokens),
            Err(e) => {
                debug!(error = %e, "Ignoring malformed session blob");
                None
            }
        }
    }
}

/// Unwrap a call's payload. A JSON `null` payload counts as no data.
///
/// On failure the message is what the server, transport or decoder reported,
/// or `fallback` when there is nothing to report.
fn payload<T>(response: ApiResponse<Option<T>>, fallback: &str) -> Result<T, String> {
    match response.into_result() {
        Ok(Some(data)) => Ok(data),
        Ok(None) => {
            warn!("API response carried no data");
            Err(fallback.to_string())
        }
        Err(failure) => Err(failure_message(&failure, fallback)),
    }
}

fn failure_message(failure: &ApiFailure, fallback: &str) -> String {
    if failure.message.is_empty() {
        fallback.to_string()
    } else {
        failure.message.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::FailureKind;
    use crate::storage::MemoryStore;

    fn session_with(storage: Arc<MemoryStore>) -> SessionStore {
        let api = ApiUrl::new("https://api.example.com").unwrap();
        SessionStore::new(api, storage)
    }

    #[test]
    fn store_then_read_tokens() {
        let session = session_with(Arc::new(MemoryStore::new()));
        let tokens = AuthTokens::new("x", "y", "z", 3600);

        session.store_tokens(&tokens).unwrap();

        assert_eq!(session.stored_tokens(), Some(tokens));
        assert!(session.is_authenticated());
    }

    #[test]
    fn malformed_blob_is_not_a_session() {
        let storage = Arc::new(MemoryStore::new());
        storage.set(TOKEN_STORAGE_KEY, "{not json").unwrap();
        let session = session_with(storage);

        assert!(!session.is_authenticated());
        assert!(session.stored_tokens().is_none());
    }

    #[test]
    fn logout_clears_blob() {
        let storage = Arc::new(MemoryStore::new());
        let session = session_with(Arc::clone(&storage));
        session
            .store_tokens(&AuthTokens::new("x", "y", "z", 3600))
            .unwrap();

        session.logout();

        assert!(!session.is_authenticated());
        assert!(storage.get(TOKEN_STORAGE_KEY).is_none());
    }

    #[test]
    fn payload_surfaces_reported_messages() {
        let decode: ApiResponse<Option<u32>> = ApiResponse::Failure(ApiFailure::new(
            FailureKind::Decode,
            "invalid response body: expected value at line 1 column 1",
        ));
        assert_eq!(
            payload(decode, LOGIN_FAILED).unwrap_err(),
            "invalid response body: expected value at line 1 column 1"
        );

        let status: ApiResponse<Option<u32>> =
            ApiResponse::Failure(ApiFailure::new(FailureKind::Status(401), "bad creds"));
        assert_eq!(payload(status, LOGIN_FAILED).unwrap_err(), "bad creds");
    }

    #[test]
    fn payload_falls_back_without_data_or_message() {
        let empty: ApiResponse<Option<u32>> = ApiResponse::Success(None);
        assert_eq!(payload(empty, LOGIN_FAILED).unwrap_err(), "Login failed");

        let silent: ApiResponse<Option<u32>> =
            ApiResponse::Failure(ApiFailure::new(FailureKind::Network, ""));
        assert_eq!(payload(silent, LOGIN_FAILED).unwrap_err(), "Login failed");

        let ok: ApiResponse<Option<u32>> = ApiResponse::Success(Some(7));
        assert_eq!(payload(ok, LOGIN_FAILED), Ok(7));
    }
}
