//! Core domain types, ports and services for gameshelf.
//!
//! This crate has no storage dependencies. Repositories are reached through
//! the [`ports::CatalogRepository`] trait and implemented by `gameshelf-db`.
#![deny(unused_crate_dependencies)]

pub mod config;
pub mod domain;
pub mod nullable;
pub mod paths;
pub mod ports;
pub mod services;

// Re-export commonly used types for convenience
pub use config::{ConfigError, DatabaseConfig};
pub use domain::{Company, Console, Game, GameDetail, GameSummary, Genre, NewGame, ReferenceData};
pub use nullable::ConversionError;
pub use paths::{PathError, data_root, database_path};
pub use ports::{CatalogRepository, ConstraintKind, CoreError, Repos, RepositoryError};
pub use services::{AppCore, CatalogService, GameDetailService};
