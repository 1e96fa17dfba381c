//! Persistent key-value capability used for the session token blob.
//!
//! Both [`HttpClient`](crate::http::HttpClient) and
//! [`SessionStore`](crate::SessionStore) hold the same
//! `Arc<dyn KeyValueStore>`; nothing in the crate touches ambient global
//! state.

mod file;
mod memory;

use std::fmt;

use crate::error::StorageError;

pub use file::FileStore;
pub use memory::MemoryStore;

/// The well-known key holding the serialized [`AuthTokens`](crate::AuthTokens).
pub const TOKEN_STORAGE_KEY: &str = "authTokens";

/// A string-keyed store of string values.
///
/// Every write replaces the whole value for a key.
pub trait KeyValueStore: Send + Sync + fmt::Debug {
    /// Returns the value for `key`, or `None` if it is absent or unreadable.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removes `key`. Removing an absent key succeeds.
    fn delete(&self, key: &str) -> Result<(), StorageError>;
}
