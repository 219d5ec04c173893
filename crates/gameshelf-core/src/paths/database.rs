//! Database path resolution.
//!
//! Provides the canonical path to the gameshelf `SQLite` database file.

use std::env;
use std::fs;
use std::path::PathBuf;

use super::error::PathError;

/// Environment variable that overrides the data directory.
pub const DATA_DIR_ENV: &str = "GAMESHELF_DATA_DIR";

/// File name of the catalog database inside the data directory.
pub const DATABASE_FILE_NAME: &str = "gameshelf.db";

/// Get the root directory for gameshelf data.
///
/// Resolution order:
/// 1. `GAMESHELF_DATA_DIR` environment variable
/// 2. `<system data dir>/gameshelf`
pub fn data_root() -> Result<PathBuf, PathError> {
    if let Ok(path) = env::var(DATA_DIR_ENV) {
        if !path.trim().is_empty() {
            return Ok(PathBuf::from(path));
        }
    }

    let data_dir = dirs::data_local_dir().ok_or(PathError::NoDataDir)?;
    Ok(data_dir.join("gameshelf"))
}

/// Get the path to the gameshelf database file.
///
/// The data directory is created if it doesn't exist.
pub fn database_path() -> Result<PathBuf, PathError> {
    let data_dir = data_root()?;

    fs::create_dir_all(&data_dir).map_err(|e| PathError::CreateFailed {
        path: data_dir.clone(),
        reason: e.to_string(),
    })?;

    Ok(data_dir.join(DATABASE_FILE_NAME))
}
