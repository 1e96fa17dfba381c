//! Location of the persisted session.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use directories::ProjectDirs;

use portal::storage::FileStore;

/// Get the directory holding the session blob.
fn data_dir() -> Result<PathBuf> {
    let dirs =
        ProjectDirs::from("", "", "portal").context("Could not determine data directory")?;

    let data_dir = dirs.data_dir();
    fs::create_dir_all(data_dir).context("Failed to create data directory")?;

    Ok(data_dir.to_path_buf())
}

/// Open the file-backed store for the current user.
pub fn file_store() -> Result<FileStore> {
    Ok(FileStore::new(data_dir()?))
}
