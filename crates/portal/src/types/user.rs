//! Server-side user identity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The authenticated user as reported by the API.
///
/// Only ever deserialized from a response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub cognito_id: String,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
