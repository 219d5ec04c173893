//! Database connection configuration.
//!
//! The data layer never reads connection settings from global state; the
//! composition root builds a `DatabaseConfig` and hands it to the factory.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::paths::{PathError, database_path};

/// Default upper bound on pooled connections.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Default time to wait for a free connection before failing.
pub const DEFAULT_ACQUIRE_TIMEOUT: Duration = Duration::from_secs(30);

/// URL for a private in-memory database.
pub const IN_MEMORY_URL: &str = "sqlite::memory:";

/// Configuration for provisioning database connections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// `SQLite` connection URL (e.g. `sqlite:///home/me/gameshelf.db`).
    pub url: String,
    /// Maximum number of pooled connections.
    pub max_connections: u32,
    /// How long an operation waits for a connection.
    pub acquire_timeout: Duration,
    /// Create the database file if it does not exist yet.
    pub create_if_missing: bool,
}

/// Invalid database configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Database URL cannot be empty")]
    EmptyUrl,

    #[error("Unsupported database URL '{0}' (expected a sqlite: URL)")]
    UnsupportedScheme(String),

    #[error("max_connections must be at least 1")]
    ZeroConnections,

    #[error("An in-memory database must use a single connection, got {0}")]
    SharedInMemory(u32),

    #[error(transparent)]
    Path(#[from] PathError),
}

impl DatabaseConfig {
    /// Configuration for an explicit connection URL.
    pub fn from_url(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            acquire_timeout: DEFAULT_ACQUIRE_TIMEOUT,
            create_if_missing: true,
        }
    }

    /// Configuration for a database file at `path`.
    pub fn for_path(path: &Path) -> Self {
        Self::from_url(format!("sqlite://{}", path.display()))
    }

    /// Configuration for a private in-memory database.
    ///
    /// Every in-memory connection is its own database, so the pool is
    /// pinned to one connection.
    pub fn in_memory() -> Self {
        Self {
            max_connections: 1,
            ..Self::from_url(IN_MEMORY_URL)
        }
    }

    /// Configuration for the default database file in the user data directory.
    pub fn with_defaults() -> Result<Self, ConfigError> {
        Ok(Self::for_path(&database_path()?))
    }

    /// Set the pool size.
    #[must_use]
    pub const fn max_connections(mut self, max: u32) -> Self {
        self.max_connections = max;
        self
    }

    /// Set the acquire timeout.
    #[must_use]
    pub const fn acquire_timeout(mut self, timeout: Duration) -> Self {
        self.acquire_timeout = timeout;
        self
    }

    /// Whether this configuration targets an in-memory database.
    pub fn is_in_memory(&self) -> bool {
        self.url.contains(":memory:") || self.url.contains("mode=memory")
    }

    /// Check the configuration before connecting.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = self.url.trim();
        if url.is_empty() {
            return Err(ConfigError::EmptyUrl);
        }
        if !url.starts_with("sqlite:") {
            return Err(ConfigError::UnsupportedScheme(self.url.clone()));
        }
        if self.max_connections == 0 {
            return Err(ConfigError::ZeroConnections);
        }
        if self.is_in_memory() && self.max_connections > 1 {
            return Err(ConfigError::SharedInMemory(self.max_connections));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_url_uses_defaults() {
        let config = DatabaseConfig::from_url("sqlite:games.db");
        assert_eq!(config.max_connections, DEFAULT_MAX_CONNECTIONS);
        assert_eq!(config.acquire_timeout, DEFAULT_ACQUIRE_TIMEOUT);
        assert!(config.create_if_missing);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_for_path_builds_sqlite_url() {
        let config = DatabaseConfig::for_path(Path::new("/tmp/shelf/games.db"));
        assert_eq!(config.url, "sqlite:///tmp/shelf/games.db");
    }

    #[test]
    fn test_in_memory_is_single_connection() {
        let config = DatabaseConfig::in_memory();
        assert!(config.is_in_memory());
        assert_eq!(config.max_connections, 1);
        assert!(config.validate().is_ok());

        let shared = DatabaseConfig::in_memory().max_connections(4);
        assert!(matches!(
            shared.validate(),
            Err(ConfigError::SharedInMemory(4))
        ));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert!(matches!(
            DatabaseConfig::from_url("  ").validate(),
            Err(ConfigError::EmptyUrl)
        ));
        assert!(matches!(
            DatabaseConfig::from_url("postgres://localhost/games").validate(),
            Err(ConfigError::UnsupportedScheme(_))
        ));
        assert!(matches!(
            DatabaseConfig::from_url("sqlite:games.db")
                .max_connections(0)
                .validate(),
            Err(ConfigError::ZeroConnections)
        ));
    }
}
