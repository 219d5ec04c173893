//! Repository implementations using `SQLite`.
//!
//! These implementations encapsulate all SQL queries and database access.
//! The `SqlitePool` is confined to this module and never exposed through
//! the port trait signatures.

mod errors;
mod row_mappers;
mod sqlite_catalog_repository;

pub use errors::map_sqlx_error;
pub use sqlite_catalog_repository::SqliteCatalogRepository;
