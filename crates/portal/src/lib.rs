//! portal - API client and auth session toolkit
//!
//! This library wraps the portal backend's HTTP API with a session-centric
//! API. Sessions are a token blob kept in an injected [`KeyValueStore`];
//! every request made through the [`HttpClient`] resolves to an
//! [`ApiResponse`] envelope, and the [`SessionStore`] turns failed envelopes
//! into [`Error`] values.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use portal::{ApiUrl, Credentials, HomeView, SessionStore};
//! use portal::storage::FileStore;
//!
//! # async fn example() -> Result<(), portal::Error> {
//! let api = ApiUrl::from_env()?;
//! let session = SessionStore::new(api, Arc::new(FileStore::new("/tmp/portal")));
//!
//! if !session.is_authenticated() {
//!     session.login(&Credentials::new("alice", "hunter2")).await?;
//! }
//!
//! match session.load_home().await {
//!     HomeView::Loaded(user) => println!("Welcome, {}", user.username),
//!     HomeView::Failed(message) => eprintln!("Error: {}", message),
//!     HomeView::Anonymous => println!("Please log in or register"),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! [`KeyValueStore`]: storage::KeyValueStore

pub mod auth;
pub mod error;
pub mod home;
pub mod http;
pub mod storage;
pub mod types;

// Re-export primary types at crate root for convenience
pub use auth::{AuthTokens, Credentials, Registration, SessionStore};
pub use error::Error;
pub use home::HomeView;
pub use http::{ApiFailure, ApiResponse, FailureKind, HttpClient};
pub use types::{ApiUrl, User};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
