//! The uniform response envelope.

use serde::ser::{Serialize, SerializeStruct, Serializer};
use thiserror::Error;

/// Why a request did not produce data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// No response was obtained (connection, DNS, TLS, body read).
    Network,
    /// The server answered with a non-success status.
    Status(u16),
    /// The request body could not be serialized.
    Encode,
    /// The response body did not match the expected schema.
    Decode,
}

/// A failed request, with a message suitable for display.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ApiFailure {
    pub kind: FailureKind,
    pub message: String,
}

impl ApiFailure {
    /// Create a new failure.
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Returns the HTTP status code, if the server responded.
    pub fn status(&self) -> Option<u16> {
        match self.kind {
            FailureKind::Status(code) => Some(code),
            _ => None,
        }
    }
}

/// The outcome of every [`HttpClient`](super::HttpClient) call.
///
/// Serializes to `{"success": true, "data": ...}` or
/// `{"success": false, "error": "..."}`; data and error never appear
/// together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiResponse<T> {
    Success(T),
    Failure(ApiFailure),
}

impl<T> ApiResponse<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, ApiResponse::Success(_))
    }

    /// Returns the payload of a successful response.
    pub fn data(&self) -> Option<&T> {
        match self {
            ApiResponse::Success(data) => Some(data),
            ApiResponse::Failure(_) => None,
        }
    }

    /// Returns the error message of a failed response.
    pub fn error(&self) -> Option<&str> {
        match self {
            ApiResponse::Success(_) => None,
            ApiResponse::Failure(failure) => Some(&failure.message),
        }
    }

    pub fn into_result(self) -> Result<T, ApiFailure> {
        match self {
            ApiResponse::Success(data) => Ok(data),
            ApiResponse::Failure(failure) => Err(failure),
        }
    }
}

impl<T: Serialize> Serialize for ApiResponse<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("ApiResponse", 2)?;
        match self {
            ApiResponse::Success(data) => {
                state.serialize_field("success", &true)?;
                state.serialize_field("data", data)?;
            }
            ApiResponse::Failure(failure) => {
                state.serialize_field("success", &false)?;
                state.serialize_field("error", &failure.message)?;
            }
        }
        state.end()
    }
}
