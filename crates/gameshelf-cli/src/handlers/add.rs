//! Add-game command handler.
//!
//! Converts optional text arguments, resolves genre references and
//! inserts the game with its genre links in one step.

use gameshelf_core::NewGame;
use gameshelf_core::nullable::{blank_to_none, parse_highscore, parse_purchase_date, parse_value};

use crate::bootstrap::CliContext;
use crate::commands::AddGameArgs;
use crate::error::CliError;
use crate::presentation::{OutputFormat, print_json};

/// Build the insert payload from command arguments.
///
/// Omitted and blank optional fields are both absent.
pub fn new_game_from_args(args: &AddGameArgs) -> Result<NewGame, CliError> {
    let text = |field: &Option<String>| blank_to_none(field.clone()).unwrap_or_default();

    Ok(NewGame {
        value: parse_value(&text(&args.value))?,
        highscore: parse_highscore(&text(&args.highscore))?,
        purchase_date: parse_purchase_date(&text(&args.purchase_date))?,
        ..NewGame::new(
            args.name.clone(),
            args.image.clone(),
            args.console,
            args.developer,
            args.publisher.unwrap_or(args.developer),
        )
    })
}

/// Execute the add-game command.
pub async fn execute(ctx: &CliContext, args: &AddGameArgs) -> Result<(), CliError> {
    let catalog = ctx.app().catalog();

    let game = new_game_from_args(args)?;
    let genre_ids = catalog.resolve_genre_ids(&args.genres).await?;
    let id = catalog.create_game(game, &genre_ids).await?;

    if ctx.format() == OutputFormat::Json {
        return print_json(&serde_json::json!({ "id": id }));
    }
    println!("Game '{}' added with ID {id}.", args.name.trim());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> AddGameArgs {
        AddGameArgs {
            name: "Chrono Trigger".to_string(),
            console: 3,
            developer: 5,
            publisher: None,
            image: "ct.png".to_string(),
            value: None,
            highscore: Some(String::new()),
            purchase_date: Some("1995-08-22".to_string()),
            genres: Vec::new(),
        }
    }

    #[test]
    fn test_blank_and_omitted_fields_are_absent() {
        let game = new_game_from_args(&args()).unwrap();
        assert_eq!(game.value, None);
        assert_eq!(game.highscore, None);
        assert_eq!(game.purchase_date.unwrap().to_string(), "1995-08-22");
        assert_eq!(game.publisher_id, 5);
    }

    #[test]
    fn test_whitespace_only_fields_are_absent() {
        let padded = AddGameArgs {
            value: Some("   ".to_string()),
            purchase_date: Some("\t".to_string()),
            ..args()
        };
        let game = new_game_from_args(&padded).unwrap();
        assert_eq!(game.value, None);
        assert_eq!(game.purchase_date, None);
    }

    #[test]
    fn test_invalid_highscore_is_argument_error() {
        let bad = AddGameArgs {
            highscore: Some("lots".to_string()),
            ..args()
        };
        let err = new_game_from_args(&bad).unwrap_err();
        assert!(matches!(err, CliError::Arguments(_)));
    }
}
