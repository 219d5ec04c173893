//! Database setup and initialization.
//!
//! This module provides the `setup_database()` function for initializing
//! the `SQLite` database with full schema. Entry points call this with an
//! explicit [`DatabaseConfig`].

use std::path::PathBuf;

use anyhow::Result;
use gameshelf_core::DatabaseConfig;
use sqlx::SqlitePool;
use tracing::debug;

use crate::factory::CatalogFactory;

/// Sets up the `SQLite` connection pool and ensures the schema exists.
///
/// This function:
/// 1. Validates the configuration
/// 2. Creates the parent directory of a file-backed database
/// 3. Opens a bounded pool with foreign keys enabled
/// 4. Creates all tables and indexes
///
/// # Example
///
/// ```rust,no_run
/// use gameshelf_core::DatabaseConfig;
/// use gameshelf_db::setup_database;
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = DatabaseConfig::from_url("sqlite:///tmp/gameshelf.db");
/// let pool = setup_database(&config).await?;
/// # Ok(())
/// # }
/// ```
pub async fn setup_database(config: &DatabaseConfig) -> Result<SqlitePool> {
    config.validate()?;

    if let Some(parent) = database_file(&config.url).and_then(|p| p.parent().map(PathBuf::from)) {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(&parent)?;
        }
    }

    let pool = CatalogFactory::create_pool(config).await?;
    create_schema(&pool).await?;

    debug!(url = %config.url, "Database ready");
    Ok(pool)
}

/// Sets up an in-memory `SQLite` database for testing.
///
/// Creates a fresh in-memory database with the full production schema.
#[cfg(any(test, feature = "test-utils"))]
pub async fn setup_test_database() -> Result<SqlitePool> {
    setup_database(&DatabaseConfig::in_memory()).await
}

/// Extract the file path from a `sqlite:` URL, if it names a file.
fn database_file(url: &str) -> Option<PathBuf> {
    let rest = url
        .strip_prefix("sqlite://")
        .or_else(|| url.strip_prefix("sqlite:"))?;
    let path = rest.split('?').next().unwrap_or_default();

    if path.is_empty() || path.contains(":memory:") {
        return None;
    }
    Some(PathBuf::from(path))
}

/// Creates the complete database schema.
///
/// It is safe to call multiple times as all operations use IF NOT EXISTS.
async fn create_schema(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS company (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL UNIQUE CHECK (length(trim(name)) > 0)
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS console (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL UNIQUE CHECK (length(trim(name)) > 0)
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS genre (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL UNIQUE CHECK (length(trim(name)) > 0)
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS game (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            value REAL CHECK (value IS NULL OR value >= 0),
            image_url TEXT NOT NULL DEFAULT '',
            highscore INTEGER,
            purchase_date TEXT,
            console_id INTEGER NOT NULL REFERENCES console(id),
            developer_id INTEGER NOT NULL REFERENCES company(id),
            publisher_id INTEGER NOT NULL REFERENCES company(id)
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Association rows cascade with either side
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS game_genre (
            game_id INTEGER NOT NULL REFERENCES game(id) ON DELETE CASCADE,
            genre_id INTEGER NOT NULL REFERENCES genre(id) ON DELETE CASCADE,
            PRIMARY KEY (game_id, genre_id)
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Reverse lookup for "games in genre"
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_game_genre_genre ON game_genre(genre_id)")
        .execute(pool)
        .await?;

    Ok(())
}
