//! HTTP client for the portal API.
//!
//! This module provides the request helper and the response envelope every
//! call resolves to.

mod client;
pub mod endpoints;
mod response;

pub use client::{HttpClient, RequestOptions};
pub use reqwest::Method;
pub use reqwest::header;
pub use response::{ApiFailure, ApiResponse, FailureKind};
