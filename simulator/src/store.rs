//! JSON save-file store.
//!
//! The save is a single flat document; a missing file means a fresh
//! profile, while a present but structurally invalid file is an error the
//! caller must surface.

use reelhouse_types::SaveData;
use std::{fs, io, path::Path};
use thiserror::Error;
use tracing::debug;

/// Default save-file location, relative to the working directory.
pub const DEFAULT_SAVE_PATH: &str = "data/save.json";

/// Error reading or writing the save file.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access save file: {0}")]
    Io(#[from] io::Error),
    #[error("malformed save file: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Load the save document at `path`, or a fresh default when none exists.
pub fn load(path: &Path) -> Result<SaveData, StoreError> {
    if !path.exists() {
        debug!(path = %path.display(), "no save file, starting fresh");
        return Ok(SaveData::default());
    }
    let contents = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

/// Write the save document, creating parent directories as needed.
pub fn save(path: &Path, data: &SaveData) -> Result<(), StoreError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let contents = serde_json::to_string_pretty(data)?;
    fs::write(path, contents)?;
    debug!(path = %path.display(), "profile saved");
    Ok(())
}
