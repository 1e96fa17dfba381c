//! Session wiring for the CLI.

pub mod storage;

use std::sync::Arc;

use anyhow::Result;

use portal::{ApiUrl, SessionStore};

/// Build the session store for `api`, persisted in the user's data directory.
pub fn open(api: ApiUrl) -> Result<SessionStore> {
    let store = storage::file_store()?;

    tracing::debug!(api = %api, dir = %store.dir().display(), "Opening session");

    Ok(SessionStore::new(api, Arc::new(store)))
}
