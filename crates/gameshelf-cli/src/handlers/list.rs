//! List command handlers.
//!
//! Displays every game's cover art location, or just the game IDs.

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::{OutputFormat, print_json, print_separator, truncate_string};

/// Execute the list command.
pub async fn execute(ctx: &CliContext) -> Result<(), CliError> {
    let summaries = ctx.app().catalog().list_summaries().await?;

    if ctx.format() == OutputFormat::Json {
        return print_json(&summaries);
    }

    if summaries.is_empty() {
        println!("No games found in the catalog.");
        println!("Use 'gameshelf add-game' to add your first game.");
        return Ok(());
    }

    println!("Found {} game(s) in the catalog:\n", summaries.len());
    println!("{:<6} Cover", "ID");
    print_separator(60);

    for summary in summaries {
        let cover = if summary.image_url.is_empty() {
            "--"
        } else {
            summary.image_url.as_str()
        };
        println!("{:<6} {}", summary.id, truncate_string(cover, 53));
    }

    Ok(())
}

/// Execute the ids command, one ID per line.
pub async fn execute_ids(ctx: &CliContext) -> Result<(), CliError> {
    let ids = ctx.app().catalog().list_game_ids().await?;

    if ctx.format() == OutputFormat::Json {
        return print_json(&ids);
    }

    for id in ids {
        println!("{id}");
    }
    Ok(())
}
