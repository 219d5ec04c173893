//! `AppCore` - the primary application facade.
//!
//! Adapters (CLI, GUI) receive an `AppCore` instance and use it to access
//! all catalog functionality.

use crate::ports::Repos;

use super::{CatalogService, GameDetailService};

/// The core application facade.
///
/// # Example
///
/// ```ignore
/// let repos = CatalogFactory::build_repos(pool);
/// let core = AppCore::new(repos);
///
/// let detail = core.details().get_game_detail(7).await?;
/// ```
pub struct AppCore {
    catalog: CatalogService,
    details: GameDetailService,
}

impl AppCore {
    /// Create a new `AppCore` with the given repositories.
    pub fn new(repos: Repos) -> Self {
        Self {
            catalog: CatalogService::new(repos.catalog.clone()),
            details: GameDetailService::new(repos.catalog),
        }
    }

    /// Access the catalog service.
    pub const fn catalog(&self) -> &CatalogService {
        &self.catalog
    }

    /// Access the detail aggregator.
    pub const fn details(&self) -> &GameDetailService {
        &self.details
    }
}
