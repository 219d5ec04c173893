//! Path utilities for gameshelf data directories.
//!
//! # Design
//!
//! - Returns `PathBuf` and `PathError` for clear error handling
//! - No interactive/terminal I/O - adapters handle user prompts separately

mod database;
mod error;

pub use database::{DATABASE_FILE_NAME, DATA_DIR_ENV, data_root, database_path};
pub use error::PathError;
