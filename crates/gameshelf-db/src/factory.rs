//! Composition utilities for building `AppCore` with `SQLite` backends.
//!
//! This module provides factory functions for wiring up the application
//! with `SQLite` repositories. It is focused purely on construction and
//! should not contain any domain logic.

use std::str::FromStr;
use std::sync::Arc;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};

use gameshelf_core::{AppCore, DatabaseConfig, Repos};

use crate::repositories::SqliteCatalogRepository;

/// Factory for creating repository instances with `SQLite` backends.
pub struct CatalogFactory;

impl CatalogFactory {
    /// Create a bounded `SQLite` connection pool from an explicit config.
    ///
    /// Foreign keys are enforced on every connection. File databases use
    /// WAL journaling; in-memory databases keep their single connection
    /// open for the lifetime of the pool, since the data lives and dies
    /// with it.
    pub async fn create_pool(config: &DatabaseConfig) -> anyhow::Result<SqlitePool> {
        config.validate()?;

        let mut options = SqliteConnectOptions::from_str(&config.url)?
            .create_if_missing(config.create_if_missing)
            .foreign_keys(true);

        let mut pool_options = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.acquire_timeout);

        if config.is_in_memory() {
            pool_options = pool_options.idle_timeout(None).max_lifetime(None);
        } else {
            options = options.journal_mode(SqliteJournalMode::Wal);
        }

        let pool = pool_options.connect_with(options).await?;
        Ok(pool)
    }

    /// Build all `SQLite` repositories from a pool.
    ///
    /// Returns a `Repos` struct from `gameshelf-core` containing
    /// trait-object-wrapped repositories.
    pub fn build_repos(pool: SqlitePool) -> Repos {
        Repos::new(Arc::new(SqliteCatalogRepository::new(pool)))
    }

    /// Build a complete `AppCore` instance from a pool.
    ///
    /// Equivalent to:
    ///
    /// ```ignore
    /// let repos = CatalogFactory::build_repos(pool);
    /// let core = AppCore::new(repos);
    /// ```
    pub fn build_app_core(pool: SqlitePool) -> AppCore {
        AppCore::new(Self::build_repos(pool))
    }

    /// Create a catalog repository from a pool.
    pub fn catalog_repository(pool: SqlitePool) -> Arc<SqliteCatalogRepository> {
        Arc::new(SqliteCatalogRepository::new(pool))
    }
}

/// IDs of the reference rows inserted by [`TestDb::seed_reference_data`].
#[cfg(any(test, feature = "test-utils"))]
#[derive(Debug, Clone, Copy)]
pub struct SeededRefs {
    /// "SNES"
    pub console_id: i64,
    /// "Square"
    pub company_id: i64,
    /// "Enix"
    pub other_company_id: i64,
    /// "RPG"
    pub rpg_id: i64,
    /// "Adventure"
    pub adventure_id: i64,
}

/// Test database helper for integration tests.
///
/// Provides an in-memory `SQLite` database with the production schema
/// already applied.
#[cfg(any(test, feature = "test-utils"))]
pub struct TestDb {
    pool: SqlitePool,
}

#[cfg(any(test, feature = "test-utils"))]
impl TestDb {
    /// Create a new in-memory test database with full schema.
    pub async fn new() -> anyhow::Result<Self> {
        let pool = crate::setup::setup_test_database().await?;
        Ok(Self { pool })
    }

    /// Get a reference to the underlying pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Create a catalog repository backed by this database.
    pub fn catalog_repository(&self) -> SqliteCatalogRepository {
        SqliteCatalogRepository::new(self.pool.clone())
    }

    /// Build trait-object repositories backed by this database.
    pub fn repos(&self) -> Repos {
        CatalogFactory::build_repos(self.pool.clone())
    }

    /// Insert a fixed set of consoles, companies and genres.
    pub async fn seed_reference_data(&self) -> anyhow::Result<SeededRefs> {
        Ok(SeededRefs {
            console_id: self.insert_named("console", "SNES").await?,
            company_id: self.insert_named("company", "Square").await?,
            other_company_id: self.insert_named("company", "Enix").await?,
            rpg_id: self.insert_named("genre", "RPG").await?,
            adventure_id: self.insert_named("genre", "Adventure").await?,
        })
    }

    /// Count the rows of a table.
    pub async fn count_rows(&self, table: &str) -> anyhow::Result<i64> {
        let (count,): (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    async fn insert_named(&self, table: &str, name: &str) -> anyhow::Result<i64> {
        let result = sqlx::query(&format!("INSERT INTO {table} (name) VALUES (?)"))
            .bind(name)
            .execute(&self.pool)
            .await?;
        Ok(result.last_insert_rowid())
    }
}
