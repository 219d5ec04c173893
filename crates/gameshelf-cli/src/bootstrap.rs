//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the CLI adapter: the database pool and repositories come from
//! `gameshelf-db`, the services from `gameshelf-core`.
//!
//! Command handlers receive the fully-composed `AppCore` and delegate work to it.

use anyhow::Result;
use gameshelf_core::{AppCore, DatabaseConfig, Repos};
use gameshelf_db::{CatalogFactory, setup_database};
use tracing::debug;

use crate::presentation::OutputFormat;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Database connection settings.
    pub database: DatabaseConfig,
    /// How results are rendered.
    pub format: OutputFormat,
}

impl CliConfig {
    /// Create config with the default database location.
    pub fn with_defaults() -> Result<Self> {
        Ok(Self {
            database: DatabaseConfig::with_defaults()?,
            format: OutputFormat::default(),
        })
    }

    /// Create config from an optional URL override, falling back to defaults.
    ///
    /// An in-memory URL gets a single-connection pool.
    pub fn from_database_url(url: Option<&str>) -> Result<Self> {
        let Some(url) = url else {
            return Self::with_defaults();
        };

        let mut database = DatabaseConfig::from_url(url);
        if database.is_in_memory() {
            database = database.max_connections(1);
        }
        Ok(Self {
            database,
            format: OutputFormat::default(),
        })
    }

    /// Set the output format.
    #[must_use]
    pub const fn format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }
}

/// Fully composed application context for CLI commands.
pub struct CliContext {
    /// The core application facade.
    pub app: AppCore,
    /// How results are rendered.
    pub format: OutputFormat,
}

impl CliContext {
    /// Access the `AppCore`.
    pub const fn app(&self) -> &AppCore {
        &self.app
    }

    /// Output format for this invocation.
    pub const fn format(&self) -> OutputFormat {
        self.format
    }
}

/// Bootstrap the CLI application.
///
/// Creates the database pool with full schema setup and assembles the
/// `AppCore` from its repositories.
pub async fn bootstrap(config: CliConfig) -> Result<CliContext> {
    let pool = setup_database(&config.database).await?;
    debug!(url = %config.database.url, "Database opened");

    Ok(bootstrap_with(CatalogFactory::build_repos(pool), config.format))
}

/// Bootstrap with custom repos (for testing).
pub fn bootstrap_with(repos: Repos, format: OutputFormat) -> CliContext {
    CliContext {
        app: AppCore::new(repos),
        format,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_override_wins() {
        let config = CliConfig::from_database_url(Some("sqlite:games.db")).unwrap();
        assert_eq!(config.database.url, "sqlite:games.db");
        assert_eq!(config.format, OutputFormat::Text);
    }

    #[tokio::test]
    async fn test_bootstrap_in_memory() {
        let config = CliConfig::from_database_url(Some("sqlite::memory:"))
            .unwrap()
            .format(OutputFormat::Json);
        assert_eq!(config.database.max_connections, 1);

        let ctx = bootstrap(config).await.unwrap();
        assert_eq!(ctx.format(), OutputFormat::Json);
        assert!(ctx.app().catalog().list_game_ids().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_bootstrap_rejects_foreign_scheme() {
        let config = CliConfig::from_database_url(Some("postgres://localhost/games")).unwrap();
        assert!(bootstrap(config).await.is_err());
    }
}
