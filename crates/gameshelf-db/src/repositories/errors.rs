//! Mapping from `sqlx` errors to the storage-agnostic `RepositoryError`.

use gameshelf_core::{ConstraintKind, RepositoryError};
use sqlx::error::ErrorKind;

/// Map `SQLx` errors to `RepositoryError`, keeping the constraint class.
pub fn map_sqlx_error(e: sqlx::Error) -> RepositoryError {
    if let sqlx::Error::Database(db_err) = &e {
        let kind = match db_err.kind() {
            ErrorKind::UniqueViolation => Some(ConstraintKind::Unique),
            ErrorKind::ForeignKeyViolation => Some(ConstraintKind::ForeignKey),
            ErrorKind::CheckViolation => Some(ConstraintKind::Check),
            ErrorKind::NotNullViolation => Some(ConstraintKind::NotNull),
            _ => None,
        };

        if let Some(kind) = kind {
            return RepositoryError::Constraint {
                kind,
                message: db_err.message().to_string(),
            };
        }
    }

    RepositoryError::Storage(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_database_errors_are_storage() {
        let err = map_sqlx_error(sqlx::Error::PoolTimedOut);
        assert!(matches!(err, RepositoryError::Storage(_)));

        let err = map_sqlx_error(sqlx::Error::RowNotFound);
        assert_eq!(err.constraint_kind(), None);
    }
}
