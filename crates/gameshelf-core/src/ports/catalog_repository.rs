//! Catalog repository trait definition.
//!
//! This port defines the interface for reading and writing games, their
//! genre associations and the reference tables they point at.
//! Implementations must handle all storage details internally.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::{Company, Console, Game, GameDetail, GameSummary, Genre, NewGame};

/// Repository for catalog persistence operations.
///
/// Every method provisions its own connection for the duration of the call.
/// Collections come back in no guaranteed order.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// Insert a company.
    ///
    /// A duplicate name fails with a `Unique` constraint violation.
    async fn create_company(&self, name: &str) -> Result<(), RepositoryError>;

    /// Insert a console. Names are unique.
    async fn create_console(&self, name: &str) -> Result<(), RepositoryError>;

    /// Insert a genre. Names are unique.
    async fn create_genre(&self, name: &str) -> Result<(), RepositoryError>;

    /// Insert a game and link it to `genre_ids`, atomically.
    ///
    /// Returns the storage-assigned ID. On any failure nothing is persisted
    /// and the error is `RepositoryError::Transaction`.
    async fn create_game(&self, game: &NewGame, genre_ids: &[i64]) -> Result<i64, RepositoryError>;

    /// Write the mutable scalar fields (`name`, `value`, `image_url`,
    /// `purchase_date`, `highscore`) of the game matched by `game.id`.
    ///
    /// Console, developer, publisher and genre links are left untouched.
    /// Returns `false` only when no game has that ID.
    async fn update_game(&self, game: &Game) -> Result<bool, RepositoryError>;

    /// Delete a game and its genre links. Returns whether a game was removed.
    async fn delete_game(&self, id: i64) -> Result<bool, RepositoryError>;

    /// Get a game by its ID.
    async fn get_game_by_id(&self, id: i64) -> Result<Option<Game>, RepositoryError>;

    /// List every stored game ID.
    async fn get_all_game_ids(&self) -> Result<Vec<i64>, RepositoryError>;

    /// List `(id, image_url)` for every stored game.
    async fn get_all_game_summaries(&self) -> Result<Vec<GameSummary>, RepositoryError>;

    /// Get a game joined with its genres in one query.
    ///
    /// A game without genres yields an empty list, not `None`.
    async fn get_game_detail_by_id(&self, id: i64) -> Result<Option<GameDetail>, RepositoryError>;

    /// List the genres linked to a game. Unknown IDs yield an empty list.
    async fn get_genres_for_game(&self, game_id: i64) -> Result<Vec<Genre>, RepositoryError>;

    /// List all companies.
    async fn get_all_companies(&self) -> Result<Vec<Company>, RepositoryError>;

    /// List all consoles.
    async fn get_all_consoles(&self) -> Result<Vec<Console>, RepositoryError>;

    /// List all genres.
    async fn get_all_genres(&self) -> Result<Vec<Genre>, RepositoryError>;
}
