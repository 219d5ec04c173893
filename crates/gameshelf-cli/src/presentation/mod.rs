//! Shared CLI presentation utilities.
//!
//! Keep this module format-only: no domain transforms.

pub mod game_display;
pub mod tables;

use serde::Serialize;

use crate::error::CliError;

// Re-export commonly used items
pub use game_display::{display_game_detail, format_value};
pub use tables::{format_optional, print_named_table, print_separator, truncate_string};

/// How command results are rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable tables.
    #[default]
    Text,
    /// Pretty-printed JSON on stdout.
    Json,
}

impl OutputFormat {
    /// Pick the format from the `--json` switch.
    pub const fn from_json_flag(json: bool) -> Self {
        if json { Self::Json } else { Self::Text }
    }
}

/// Print any serializable value as pretty JSON.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
