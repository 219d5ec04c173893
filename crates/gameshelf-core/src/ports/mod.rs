//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from infrastructure.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No `sqlx` types in any signature
//! - Absent rows are `Option::None`, never an error
//! - Constraint failures keep their class so callers can explain them

pub mod catalog_repository;

use std::fmt;
use std::sync::Arc;
use thiserror::Error;

pub use catalog_repository::CatalogRepository;

#[cfg(test)]
pub use catalog_repository::MockCatalogRepository;

/// Container for all repository trait objects.
///
/// Adapters wire concrete repositories into this struct and hand it to
/// `AppCore`, so the core never depends on `gameshelf-db`.
#[derive(Clone)]
pub struct Repos {
    /// Catalog repository for games and their reference data.
    pub catalog: Arc<dyn CatalogRepository>,
}

impl Repos {
    /// Create a new Repos container.
    pub fn new(catalog: Arc<dyn CatalogRepository>) -> Self {
        Self { catalog }
    }
}

/// The class of a violated storage constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintKind {
    Unique,
    ForeignKey,
    Check,
    NotNull,
}

impl fmt::Display for ConstraintKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Unique => "unique",
            Self::ForeignKey => "foreign key",
            Self::Check => "check",
            Self::NotNull => "not null",
        };
        f.write_str(label)
    }
}

/// Domain-specific errors for repository operations.
///
/// This error type abstracts away storage implementation details (e.g., sqlx errors)
/// and provides a clean interface for services to handle storage failures.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The requested entity was not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// A unique, foreign-key, check or not-null constraint was violated.
    #[error("Constraint violation ({kind}): {message}")]
    Constraint {
        kind: ConstraintKind,
        message: String,
    },

    /// A step of a multi-statement transaction failed and the transaction
    /// was rolled back.
    #[error("Transaction rolled back while {stage}: {source}")]
    Transaction {
        stage: &'static str,
        source: Box<RepositoryError>,
    },

    /// Storage backend error (connectivity, timeout, decoding, etc.).
    #[error("Storage error: {0}")]
    Storage(String),
}

impl RepositoryError {
    /// Wrap a failure that happened inside a transaction.
    pub fn in_transaction(stage: &'static str, source: Self) -> Self {
        Self::Transaction {
            stage,
            source: Box::new(source),
        }
    }

    /// The constraint class behind this error, looking through transactions.
    pub fn constraint_kind(&self) -> Option<ConstraintKind> {
        match self {
            Self::Constraint { kind, .. } => Some(*kind),
            Self::Transaction { source, .. } => source.constraint_kind(),
            _ => None,
        }
    }

    /// Whether this error is a constraint violation of the given class.
    pub fn is_constraint(&self, kind: ConstraintKind) -> bool {
        self.constraint_kind() == Some(kind)
    }

    /// Whether this error came out of a rolled-back transaction.
    pub const fn is_transaction(&self) -> bool {
        matches!(self, Self::Transaction { .. })
    }
}

/// Core error type for semantic domain errors.
///
/// Adapters should map this to their own error types (CLI exit codes,
/// dialog messages).
#[derive(Debug, Error)]
pub enum CoreError {
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// User-entered text could not be converted.
    #[error(transparent)]
    Conversion(#[from] crate::nullable::ConversionError),

    /// Configuration error.
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),

    /// Validation error (invalid input).
    #[error("Validation error: {0}")]
    Validation(String),
}
