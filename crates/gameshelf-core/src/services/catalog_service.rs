//! Catalog service - thin orchestrator for catalog operations.
//!
//! This service validates user input and delegates all persistence to the
//! `CatalogRepository` port. Storage errors pass through unchanged inside
//! `CoreError::Repository`.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::{Company, Console, Game, GameDetail, GameSummary, Genre, NewGame, ReferenceData};
use crate::ports::{CatalogRepository, CoreError};

/// Service for managing the game catalog.
pub struct CatalogService {
    repo: Arc<dyn CatalogRepository>,
}

/// Reject blank names, returning the trimmed name otherwise.
fn require_name<'a>(kind: &str, name: &'a str) -> Result<&'a str, CoreError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation(format!("{kind} name cannot be empty")));
    }
    Ok(trimmed)
}

impl CatalogService {
    /// Create a new catalog service.
    pub fn new(repo: Arc<dyn CatalogRepository>) -> Self {
        Self { repo }
    }

    /// Add a company (developer or publisher).
    pub async fn create_company(&self, name: &str) -> Result<(), CoreError> {
        let name = require_name("Company", name)?;
        self.repo.create_company(name).await?;
        info!(company = name, "Company created");
        Ok(())
    }

    /// Add a console.
    pub async fn create_console(&self, name: &str) -> Result<(), CoreError> {
        let name = require_name("Console", name)?;
        self.repo.create_console(name).await?;
        info!(console = name, "Console created");
        Ok(())
    }

    /// Add a genre.
    pub async fn create_genre(&self, name: &str) -> Result<(), CoreError> {
        let name = require_name("Genre", name)?;
        self.repo.create_genre(name).await?;
        info!(genre = name, "Genre created");
        Ok(())
    }

    /// Add a game with its genres. Returns the new game ID.
    pub async fn create_game(&self, game: NewGame, genre_ids: &[i64]) -> Result<i64, CoreError> {
        let name = require_name("Game", &game.name)?.to_string();
        let game = NewGame { name, ..game };

        let id = self.repo.create_game(&game, genre_ids).await?;
        info!(game_id = id, name = %game.name, genres = genre_ids.len(), "Game created");
        Ok(id)
    }

    /// Save edited scalar fields. Returns `false` when the game does not exist.
    pub async fn update_game(&self, game: &Game) -> Result<bool, CoreError> {
        let name = require_name("Game", &game.name)?.to_string();
        let game = Game { name, ..game.clone() };

        let updated = self.repo.update_game(&game).await?;
        debug!(game_id = game.id, updated, "Game update finished");
        Ok(updated)
    }

    /// Remove a game. Returns `false` when the game does not exist.
    pub async fn delete_game(&self, id: i64) -> Result<bool, CoreError> {
        let deleted = self.repo.delete_game(id).await?;
        if deleted {
            info!(game_id = id, "Game deleted");
        }
        Ok(deleted)
    }

    /// Get a game by ID.
    pub async fn get_game(&self, id: i64) -> Result<Option<Game>, CoreError> {
        Ok(self.repo.get_game_by_id(id).await?)
    }

    /// Get a game joined with its genres.
    pub async fn get_game_detail(&self, id: i64) -> Result<Option<GameDetail>, CoreError> {
        Ok(self.repo.get_game_detail_by_id(id).await?)
    }

    /// List all game IDs.
    pub async fn list_game_ids(&self) -> Result<Vec<i64>, CoreError> {
        Ok(self.repo.get_all_game_ids().await?)
    }

    /// List `(id, image_url)` for all games.
    pub async fn list_summaries(&self) -> Result<Vec<GameSummary>, CoreError> {
        Ok(self.repo.get_all_game_summaries().await?)
    }

    /// List all companies.
    pub async fn list_companies(&self) -> Result<Vec<Company>, CoreError> {
        Ok(self.repo.get_all_companies().await?)
    }

    /// List all consoles.
    pub async fn list_consoles(&self) -> Result<Vec<Console>, CoreError> {
        Ok(self.repo.get_all_consoles().await?)
    }

    /// List all genres.
    pub async fn list_genres(&self) -> Result<Vec<Genre>, CoreError> {
        Ok(self.repo.get_all_genres().await?)
    }

    /// Load companies, consoles and genres concurrently.
    pub async fn load_reference_data(&self) -> Result<ReferenceData, CoreError> {
        let (companies, consoles, genres) = tokio::try_join!(
            self.repo.get_all_companies(),
            self.repo.get_all_consoles(),
            self.repo.get_all_genres()
        )?;

        Ok(ReferenceData {
            companies,
            consoles,
            genres,
        })
    }

    /// Resolve genre references (numeric IDs or names) to genre IDs.
    ///
    /// Names match case-insensitively. Repeated genres resolve once.
    pub async fn resolve_genre_ids(&self, references: &[String]) -> Result<Vec<i64>, CoreError> {
        if references.is_empty() {
            return Ok(Vec::new());
        }

        let genres = self.repo.get_all_genres().await?;
        let mut seen = HashSet::new();
        let mut ids = Vec::with_capacity(references.len());

        for reference in references {
            let reference = reference.trim();
            let found = reference.parse::<i64>().map_or_else(
                |_| genres.iter().find(|g| g.name.eq_ignore_ascii_case(reference)),
                |id| genres.iter().find(|g| g.id == id),
            );

            let genre = found.ok_or_else(|| CoreError::Validation(format!("Unknown genre '{reference}'")))?;
            if seen.insert(genre.id) {
                ids.push(genre.id);
            }
        }

        Ok(ids)
    }
}
