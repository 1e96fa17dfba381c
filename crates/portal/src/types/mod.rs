//! Validated and wire-level types.

mod api_url;
mod user;

pub use api_url::{API_ENDPOINT_ENV, ApiUrl, DEFAULT_API_ENDPOINT};
pub use user::User;
