//! Game detail aggregation.
//!
//! Builds a `GameDetail` from two independent lookups keyed by the same ID:
//! the scalar game record and its genre list. Both run concurrently.

use std::sync::Arc;

use tracing::debug;

use crate::domain::GameDetail;
use crate::ports::{CatalogRepository, RepositoryError};

/// Service that assembles detail views from the catalog repository.
pub struct GameDetailService {
    repo: Arc<dyn CatalogRepository>,
}

impl GameDetailService {
    /// Create a new detail service.
    pub fn new(repo: Arc<dyn CatalogRepository>) -> Self {
        Self { repo }
    }

    /// Fetch a game and its genres concurrently and merge them.
    ///
    /// Returns `Ok(None)` when the game does not exist; the genre lookup's
    /// outcome (including an error) is discarded in that case.
    pub async fn get_game_detail(&self, id: i64) -> Result<Option<GameDetail>, RepositoryError> {
        let (game, genres) = tokio::join!(
            self.repo.get_game_by_id(id),
            self.repo.get_genres_for_game(id)
        );

        let Some(game) = game? else {
            debug!(game_id = id, "Game not found, discarding genre lookup");
            return Ok(None);
        };

        let genres = genres?;
        debug!(game_id = id, genres = genres.len(), "Assembled game detail");
        Ok(Some(GameDetail::from_parts(game, genres)))
    }
}
