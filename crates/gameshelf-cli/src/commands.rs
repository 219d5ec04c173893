//! Main commands enum and subcommand arguments.

use clap::{Args, Subcommand};

/// Available commands for the catalog tool.
#[derive(Subcommand)]
pub enum Commands {
    /// List all games with their cover art location
    List,

    /// Show one game with its genres and reference names
    Show {
        /// ID of the game
        id: i64,
    },

    /// Print all game IDs
    Ids,

    /// List all companies
    Companies,

    /// List all consoles
    Consoles,

    /// List all genres
    Genres,

    /// Add a company (developer or publisher)
    AddCompany {
        /// Company name
        name: String,
    },

    /// Add a console
    AddConsole {
        /// Console name
        name: String,
    },

    /// Add a genre
    AddGenre {
        /// Genre name
        name: String,
    },

    /// Add a game together with its genres
    AddGame(AddGameArgs),

    /// Edit a game's name, cover, value, purchase date or highscore
    Update(UpdateArgs),

    /// Delete a game and its genre links
    Delete {
        /// ID of the game
        id: i64,
    },
}

/// Arguments for `add-game`.
///
/// Optional numeric and date fields take text; an empty string means absent.
#[derive(Args, Debug, Clone)]
pub struct AddGameArgs {
    /// Game name
    pub name: String,

    /// Console ID
    #[arg(long)]
    pub console: i64,

    /// Developer company ID
    #[arg(long)]
    pub developer: i64,

    /// Publisher company ID (defaults to the developer)
    #[arg(long)]
    pub publisher: Option<i64>,

    /// Cover art location
    #[arg(long, default_value = "")]
    pub image: String,

    /// Purchase value
    #[arg(long)]
    pub value: Option<String>,

    /// Highscore
    #[arg(long)]
    pub highscore: Option<String>,

    /// Purchase date (YYYY-MM-DD)
    #[arg(long = "purchase-date")]
    pub purchase_date: Option<String>,

    /// Genre ID or name; repeat for several genres
    #[arg(short, long = "genre")]
    pub genres: Vec<String>,
}

/// Arguments for `update`.
///
/// Omitted flags keep the stored value; an empty string clears an optional field.
#[derive(Args, Debug, Clone)]
pub struct UpdateArgs {
    /// ID of the game
    pub id: i64,

    /// New name
    #[arg(long)]
    pub name: Option<String>,

    /// New cover art location
    #[arg(long)]
    pub image: Option<String>,

    /// New purchase value
    #[arg(long)]
    pub value: Option<String>,

    /// New highscore
    #[arg(long)]
    pub highscore: Option<String>,

    /// New purchase date (YYYY-MM-DD)
    #[arg(long = "purchase-date")]
    pub purchase_date: Option<String>,
}

#[cfg(test)]
mod tests {
    use crate::Cli;
    use crate::commands::Commands;
    use clap::Parser;

    #[test]
    fn test_add_game_args() {
        let cli = Cli::parse_from([
            "gameshelf",
            "add-game",
            "Chrono Trigger",
            "--console",
            "3",
            "--developer",
            "5",
            "--image",
            "ct.png",
            "--highscore",
            "",
            "-g",
            "RPG",
            "--genre",
            "2",
        ]);

        let Some(Commands::AddGame(args)) = cli.command else {
            panic!("expected add-game");
        };
        assert_eq!(args.name, "Chrono Trigger");
        assert_eq!(args.console, 3);
        assert_eq!(args.developer, 5);
        assert_eq!(args.publisher, None);
        assert_eq!(args.highscore.as_deref(), Some(""));
        assert_eq!(args.genres, vec!["RPG", "2"]);
    }

    #[test]
    fn test_update_args_default_to_unchanged() {
        let cli = Cli::parse_from(["gameshelf", "update", "7", "--value", "12.5"]);

        let Some(Commands::Update(args)) = cli.command else {
            panic!("expected update");
        };
        assert_eq!(args.id, 7);
        assert_eq!(args.value.as_deref(), Some("12.5"));
        assert!(args.name.is_none());
        assert!(args.purchase_date.is_none());
    }
}
