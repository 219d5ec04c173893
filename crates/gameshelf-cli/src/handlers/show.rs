//! Show command handler.
//!
//! Displays one game with its genres. Reference names are loaded
//! alongside the detail so IDs can be shown as names.

use gameshelf_core::CoreError;

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::{OutputFormat, display_game_detail, print_json};

/// Execute the show command.
pub async fn execute(ctx: &CliContext, id: i64) -> Result<(), CliError> {
    let app = ctx.app();
    let (detail, refs) = tokio::try_join!(
        async { app.details().get_game_detail(id).await.map_err(CoreError::from) },
        app.catalog().load_reference_data()
    )?;

    let Some(detail) = detail else {
        println!("No game found with ID {id}");
        println!("Use 'gameshelf list' to see available games.");
        return Ok(());
    };

    match ctx.format() {
        OutputFormat::Json => print_json(&detail)?,
        OutputFormat::Text => display_game_detail(&detail, &refs),
    }
    Ok(())
}
