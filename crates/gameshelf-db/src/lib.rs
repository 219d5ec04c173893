//! `SQLite` persistence for the gameshelf catalog.
//!
//! Implements the `gameshelf-core` repository port on top of a bounded
//! `sqlx` connection pool. Multi-statement writes run inside a single
//! transaction and are never partially applied.
#![deny(unsafe_code)]

pub mod factory;
pub mod repositories;
pub mod setup;

// Re-export factory for convenient access
pub use factory::CatalogFactory;

// Re-export TestDb for integration tests
#[cfg(any(test, feature = "test-utils"))]
pub use factory::{SeededRefs, TestDb};

// Re-export repository implementations
pub use repositories::{SqliteCatalogRepository, map_sqlx_error};

// Re-export setup functions for convenient access
pub use setup::setup_database;
#[cfg(any(test, feature = "test-utils"))]
pub use setup::setup_test_database;
