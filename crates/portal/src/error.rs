//! Error types for the portal library.
//!
//! Transport failures never show up here: [`HttpClient`](crate::http::HttpClient)
//! folds them into an [`ApiResponse`](crate::ApiResponse). These types cover the
//! domain layer (authentication operations), token persistence, and input
//! validation.

use std::io;
use thiserror::Error;

/// The unified error type for portal operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A session operation was rejected or returned no usable data.
    ///
    /// Displays as the bare message so it can be shown to a user as-is.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// The token storage backend failed.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// Input validation errors (bad base URL).
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),
}

/// Authentication-related errors.
///
/// Each variant carries either the server-provided error message or the
/// operation's fallback message.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Registration was rejected.
    #[error("{message}")]
    RegistrationFailed { message: String },

    /// Login was rejected.
    #[error("{message}")]
    LoginFailed { message: String },

    /// The current user could not be fetched.
    #[error("{message}")]
    UserInfoFailed { message: String },
}

/// Token storage errors.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Filesystem operation failed.
    #[error("I/O error on {key}: {source}")]
    Io {
        key: String,
        #[source]
        source: io::Error,
    },

    /// The key cannot be mapped onto the backend.
    #[error("invalid storage key '{key}'")]
    InvalidKey { key: String },

    /// The value could not be encoded for storage.
    #[error("failed to encode {key}: {message}")]
    Encode { key: String, message: String },
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Invalid API base URL.
    #[error("invalid API URL '{value}': {reason}")]
    ApiUrl { value: String, reason: String },
}
