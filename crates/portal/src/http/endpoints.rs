//! API endpoint paths and request/response bodies.

use serde::{Deserialize, Serialize};

use crate::types::User;

// ============================================================================
// Endpoint Paths
// ============================================================================

pub const REGISTER: &str = "/register";

pub const LOGIN: &str = "/login";

/// Requires a bearer token.
pub const USER: &str = "/user";

// ============================================================================
// Request/Response Types
// ============================================================================

/// Request body for `/register`.
#[derive(Serialize)]
pub struct RegisterRequest<'a> {
    pub username: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

/// Response from `/register`.
#[derive(Debug, Deserialize)]
pub struct RegisterResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// Request body for `/login`.
#[derive(Serialize)]
pub struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// Response from `/login`.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: String,
    pub id_token: String,
    pub refresh_token: String,
    pub expires_in: u64,
}

/// Response from `/user`.
#[derive(Debug, Serialize, Deserialize)]
pub struct GetUserInfoResponse {
    pub user: User,
}
