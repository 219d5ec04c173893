//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use clap::Parser;

use crate::commands::Commands;

/// Command-line interface for the game collection catalog.
///
/// This is the top-level parser that handles global options and dispatches
/// to subcommands.
#[derive(Parser)]
#[command(name = "gameshelf")]
#[command(about = "Catalog a video game collection")]
#[command(version)]
pub struct Cli {
    /// Database connection URL (defaults to the user data directory)
    #[arg(long = "database-url", env = "GAMESHELF_DATABASE_URL", global = true)]
    pub database_url: Option<String>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parser_builds() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_args() {
        let cli = Cli::parse_from([
            "gameshelf",
            "--verbose",
            "--database-url",
            "sqlite::memory:",
            "list",
            "--json",
        ]);
        assert!(cli.verbose);
        assert!(cli.json);
        assert_eq!(cli.database_url.as_deref(), Some("sqlite::memory:"));
        assert!(matches!(cli.command, Some(Commands::List)));
    }

    #[test]
    fn test_no_command_is_allowed() {
        let cli = Cli::parse_from(["gameshelf"]);
        assert!(cli.command.is_none());
    }
}
