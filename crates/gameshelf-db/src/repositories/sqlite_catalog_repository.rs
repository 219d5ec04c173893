//! `SQLite` implementation of the `CatalogRepository` trait.

use std::collections::HashSet;

use async_trait::async_trait;
use sqlx::{Sqlite, SqlitePool, Transaction};
use tracing::{debug, warn};

use gameshelf_core::{
    CatalogRepository, Company, Console, Game, GameDetail, GameSummary, Genre, NewGame,
    RepositoryError,
};

use super::errors::map_sqlx_error;
use super::row_mappers::{
    GAME_DETAIL_QUERY, GAME_SELECT_COLUMNS, GameRow, NamedRow, SummaryRow, rows_to_detail,
};

/// `SQLite` implementation of the `CatalogRepository` trait.
///
/// Holds a connection pool; every call checks out a connection for its own
/// duration and the pool takes it back on every exit path.
pub struct SqliteCatalogRepository {
    pool: SqlitePool,
}

impl SqliteCatalogRepository {
    /// Create a new `SQLite` catalog repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    async fn insert_named(&self, table: &'static str, name: &str) -> Result<(), RepositoryError> {
        // `table` is always one of the fixed reference table names.
        sqlx::query(&format!("INSERT INTO {table} (name) VALUES (?)"))
            .bind(name)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        debug!(table, name, "Inserted reference row");
        Ok(())
    }

    async fn list_named<T: From<NamedRow>>(
        &self,
        table: &'static str,
    ) -> Result<Vec<T>, RepositoryError> {
        let rows: Vec<NamedRow> =
            sqlx::query_as(&format!("SELECT id, name FROM {table} ORDER BY name"))
                .fetch_all(&self.pool)
                .await
                .map_err(map_sqlx_error)?;

        debug!(table, count = rows.len(), "Listed reference rows");
        Ok(rows.into_iter().map(T::from).collect())
    }

    async fn begin(&self) -> Result<Transaction<'static, Sqlite>, RepositoryError> {
        self.pool
            .begin()
            .await
            .map_err(|e| RepositoryError::in_transaction("beginning transaction", map_sqlx_error(e)))
    }
}

/// Commit on success, roll back on failure.
///
/// Dropping an uncommitted transaction also rolls back; the explicit
/// rollback makes the failure visible in the logs.
async fn finish<T>(
    tx: Transaction<'static, Sqlite>,
    outcome: Result<T, RepositoryError>,
    operation: &'static str,
) -> Result<T, RepositoryError> {
    match outcome {
        Ok(value) => {
            tx.commit()
                .await
                .map_err(|e| RepositoryError::in_transaction("committing", map_sqlx_error(e)))?;
            Ok(value)
        }
        Err(err) => {
            warn!(operation, error = %err, "Rolling back transaction");
            if let Err(rollback_err) = tx.rollback().await {
                warn!(operation, error = %rollback_err, "Rollback failed");
            }
            Err(err)
        }
    }
}

/// Insert the game row and one association row per distinct genre.
async fn insert_game_with_genres(
    tx: &mut Transaction<'static, Sqlite>,
    game: &NewGame,
    genre_ids: &[i64],
) -> Result<i64, RepositoryError> {
    let result = sqlx::query(
        r#"
        INSERT INTO game (name, value, image_url, highscore, purchase_date, console_id, developer_id, publisher_id)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&game.name)
    .bind(game.value)
    .bind(&game.image_url)
    .bind(game.highscore)
    .bind(game.purchase_date)
    .bind(game.console_id)
    .bind(game.developer_id)
    .bind(game.publisher_id)
    .execute(&mut **tx)
    .await
    .map_err(|e| RepositoryError::in_transaction("inserting game", map_sqlx_error(e)))?;

    let game_id = result.last_insert_rowid();

    let mut seen = HashSet::with_capacity(genre_ids.len());
    for &genre_id in genre_ids.iter().filter(|id| seen.insert(**id)) {
        sqlx::query("INSERT INTO game_genre (game_id, genre_id) VALUES (?, ?)")
            .bind(game_id)
            .bind(genre_id)
            .execute(&mut **tx)
            .await
            .map_err(|e| RepositoryError::in_transaction("linking genres", map_sqlx_error(e)))?;
    }

    Ok(game_id)
}

/// Remove a game's association rows, then the game row itself.
async fn delete_game_rows(
    tx: &mut Transaction<'static, Sqlite>,
    id: i64,
) -> Result<bool, RepositoryError> {
    sqlx::query("DELETE FROM game_genre WHERE game_id = ?")
        .bind(id)
        .execute(&mut **tx)
        .await
        .map_err(|e| RepositoryError::in_transaction("unlinking genres", map_sqlx_error(e)))?;

    let result = sqlx::query("DELETE FROM game WHERE id = ?")
        .bind(id)
        .execute(&mut **tx)
        .await
        .map_err(|e| RepositoryError::in_transaction("deleting game", map_sqlx_error(e)))?;

    Ok(result.rows_affected() > 0)
}

#[async_trait]
impl CatalogRepository for SqliteCatalogRepository {
    async fn create_company(&self, name: &str) -> Result<(), RepositoryError> {
        self.insert_named("company", name).await
    }

    async fn create_console(&self, name: &str) -> Result<(), RepositoryError> {
        self.insert_named("console", name).await
    }

    async fn create_genre(&self, name: &str) -> Result<(), RepositoryError> {
        self.insert_named("genre", name).await
    }

    async fn create_game(&self, game: &NewGame, genre_ids: &[i64]) -> Result<i64, RepositoryError> {
        let mut tx = self.begin().await?;
        let outcome = insert_game_with_genres(&mut tx, game, genre_ids).await;
        let game_id = finish(tx, outcome, "create_game").await?;

        debug!(game_id, genres = genre_ids.len(), "Inserted game");
        Ok(game_id)
    }

    async fn update_game(&self, game: &Game) -> Result<bool, RepositoryError> {
        let result = sqlx::query(
            "UPDATE game SET value = ?, name = ?, image_url = ?, purchase_date = ?, highscore = ? WHERE id = ?",
        )
        .bind(game.value)
        .bind(&game.name)
        .bind(&game.image_url)
        .bind(game.purchase_date)
        .bind(game.highscore)
        .bind(game.id)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        // SQLite counts matched rows, so an unchanged write still reports 1.
        Ok(result.rows_affected() > 0)
    }

    async fn delete_game(&self, id: i64) -> Result<bool, RepositoryError> {
        let mut tx = self.begin().await?;
        let outcome = delete_game_rows(&mut tx, id).await;
        let deleted = finish(tx, outcome, "delete_game").await?;

        debug!(game_id = id, deleted, "Delete finished");
        Ok(deleted)
    }

    async fn get_game_by_id(&self, id: i64) -> Result<Option<Game>, RepositoryError> {
        let query = format!("SELECT {GAME_SELECT_COLUMNS} FROM game WHERE id = ?");

        let row: Option<GameRow> = sqlx::query_as(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        debug!(game_id = id, found = row.is_some(), "Fetched game");
        Ok(row.map(Game::from))
    }

    async fn get_all_game_ids(&self) -> Result<Vec<i64>, RepositoryError> {
        let ids: Vec<(i64,)> = sqlx::query_as("SELECT id FROM game")
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        debug!(count = ids.len(), "Listed game IDs");
        Ok(ids.into_iter().map(|(id,)| id).collect())
    }

    async fn get_all_game_summaries(&self) -> Result<Vec<GameSummary>, RepositoryError> {
        let rows: Vec<SummaryRow> = sqlx::query_as("SELECT id, image_url FROM game")
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        debug!(count = rows.len(), "Listed game summaries");
        Ok(rows.into_iter().map(GameSummary::from).collect())
    }

    async fn get_game_detail_by_id(&self, id: i64) -> Result<Option<GameDetail>, RepositoryError> {
        let rows = sqlx::query(GAME_DETAIL_QUERY)
            .bind(id)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        debug!(game_id = id, rows = rows.len(), "Fetched game detail rows");
        rows_to_detail(&rows)
    }

    async fn get_genres_for_game(&self, game_id: i64) -> Result<Vec<Genre>, RepositoryError> {
        let rows: Vec<NamedRow> = sqlx::query_as(
            r#"
            SELECT ge.id AS id, ge.name AS name
            FROM game_genre gg
            JOIN genre ge ON ge.id = gg.genre_id
            WHERE gg.game_id = ?
            "#,
        )
        .bind(game_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        debug!(game_id, count = rows.len(), "Fetched genres for game");
        Ok(rows.into_iter().map(Genre::from).collect())
    }

    async fn get_all_companies(&self) -> Result<Vec<Company>, RepositoryError> {
        self.list_named("company").await
    }

    async fn get_all_consoles(&self) -> Result<Vec<Console>, RepositoryError> {
        self.list_named("console").await
    }

    async fn get_all_genres(&self) -> Result<Vec<Genre>, RepositoryError> {
        self.list_named("genre").await
    }
}
