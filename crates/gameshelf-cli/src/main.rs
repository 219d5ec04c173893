//! CLI entry point - the composition root.
//!
//! This is the ONLY place where infrastructure is wired together via bootstrap.
//! Command dispatch routes to handlers which delegate to `AppCore`.

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use gameshelf_cli::handlers::reference::ReferenceKind;
use gameshelf_cli::{Cli, CliConfig, CliError, Commands, OutputFormat, bootstrap, handlers};

/// Install the stderr subscriber.
///
/// `RUST_LOG` wins when set; otherwise warnings only, or debug with `--verbose`.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> Result<(), CliError> {
    // No command provided - show help
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let config = CliConfig::from_database_url(cli.database_url.as_deref())
        .map_err(|e| CliError::Config(format!("{e:#}")))?
        .format(OutputFormat::from_json_flag(cli.json));
    let ctx = bootstrap(config)
        .await
        .map_err(|e| CliError::Database(format!("{e:#}")))?;

    match command {
        Commands::List => handlers::list::execute(&ctx).await,
        Commands::Ids => handlers::list::execute_ids(&ctx).await,
        Commands::Show { id } => handlers::show::execute(&ctx, id).await,
        Commands::Companies => handlers::reference::list(&ctx, ReferenceKind::Company).await,
        Commands::Consoles => handlers::reference::list(&ctx, ReferenceKind::Console).await,
        Commands::Genres => handlers::reference::list(&ctx, ReferenceKind::Genre).await,
        Commands::AddCompany { name } => {
            handlers::reference::add(&ctx, ReferenceKind::Company, &name).await
        }
        Commands::AddConsole { name } => {
            handlers::reference::add(&ctx, ReferenceKind::Console, &name).await
        }
        Commands::AddGenre { name } => {
            handlers::reference::add(&ctx, ReferenceKind::Genre, &name).await
        }
        Commands::AddGame(args) => handlers::add::execute(&ctx, &args).await,
        Commands::Update(args) => handlers::update::execute(&ctx, &args).await,
        Commands::Delete { id } => handlers::delete::execute(&ctx, id).await,
    }
}

#[tokio::main]
async fn main() {
    // Load environment variables before clap reads GAMESHELF_DATABASE_URL
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli).await {
        eprintln!("Error: {err}");
        std::process::exit(err.exit_code());
    }
}
