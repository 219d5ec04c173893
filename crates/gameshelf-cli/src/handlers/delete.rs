//! Delete command handler.
//!
//! Removes a game and its genre links. Reference rows are untouched.

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::{OutputFormat, print_json};

/// Execute the delete command.
pub async fn execute(ctx: &CliContext, id: i64) -> Result<(), CliError> {
    let deleted = ctx.app().catalog().delete_game(id).await?;

    if ctx.format() == OutputFormat::Json {
        return print_json(&serde_json::json!({ "id": id, "deleted": deleted }));
    }
    if deleted {
        println!("Game {id} deleted.");
    } else {
        println!("No game found with ID {id}");
        println!("Use 'gameshelf list' to see available games.");
    }
    Ok(())
}
