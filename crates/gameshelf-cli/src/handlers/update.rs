//! Update command handler.
//!
//! Loads the stored game, applies only the provided flags and writes the
//! editable fields back.

use gameshelf_core::Game;
use gameshelf_core::nullable::{parse_highscore, parse_purchase_date, parse_value};

use crate::bootstrap::CliContext;
use crate::commands::UpdateArgs;
use crate::error::CliError;
use crate::presentation::{OutputFormat, print_json};

/// Apply provided arguments to a stored game.
///
/// An empty string clears an optional field.
pub fn apply_update(game: &mut Game, args: &UpdateArgs) -> Result<(), CliError> {
    if let Some(name) = &args.name {
        game.name.clone_from(name);
    }
    if let Some(image) = &args.image {
        game.image_url.clone_from(image);
    }
    if let Some(value) = &args.value {
        game.value = parse_value(value)?;
    }
    if let Some(highscore) = &args.highscore {
        game.highscore = parse_highscore(highscore)?;
    }
    if let Some(date) = &args.purchase_date {
        game.purchase_date = parse_purchase_date(date)?;
    }
    Ok(())
}

/// Execute the update command.
pub async fn execute(ctx: &CliContext, args: &UpdateArgs) -> Result<(), CliError> {
    let catalog = ctx.app().catalog();

    let Some(mut game) = catalog.get_game(args.id).await? else {
        println!("No game found with ID {}", args.id);
        return Ok(());
    };

    apply_update(&mut game, args)?;
    let updated = catalog.update_game(&game).await?;

    if ctx.format() == OutputFormat::Json {
        return print_json(&serde_json::json!({ "id": args.id, "updated": updated }));
    }
    if updated {
        println!("Game {} updated.", args.id);
    } else {
        // Deleted between the read and the write
        println!("No game found with ID {}", args.id);
    }
    Ok(())
}
