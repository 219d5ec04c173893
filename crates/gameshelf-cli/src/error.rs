//! CLI-specific error types and mappings.
//!
//! Maps `CoreError` to exit codes and user-facing messages.

use gameshelf_core::{ConstraintKind, ConversionError, CoreError, RepositoryError};
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Argument or input error.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// Write rejected by a storage constraint (duplicate name, unknown ID).
    #[error("Rejected: {0}")]
    Rejected(String),

    /// IO error (stdout closed, permission denied, etc.).
    #[error("IO error: {0}")]
    Io(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Database error.
    #[error("Database error: {0}")]
    Database(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 0: Success
    /// - 1: General error
    /// - 2: Misuse of shell command (invalid arguments)
    /// - 64-78: Reserved for specific error categories (see sysexits.h)
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Arguments(_) => 2, // EX_USAGE
            Self::Rejected(_) => 65, // EX_DATAERR
            Self::Io(_) => 74,       // EX_IOERR
            Self::Config(_) => 78,   // EX_CONFIG
            Self::Database(_) => 73, // EX_CANTCREAT (closest fit)
        }
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Repository(repo_err) => repo_err.into(),
            CoreError::Conversion(conv_err) => Self::Arguments(conv_err.to_string()),
            CoreError::Config(config_err) => Self::Config(config_err.to_string()),
            CoreError::Validation(msg) => Self::Arguments(msg),
        }
    }
}

impl From<RepositoryError> for CliError {
    fn from(err: RepositoryError) -> Self {
        let message = match err.constraint_kind() {
            Some(ConstraintKind::Unique) => format!("name already exists ({err})"),
            Some(ConstraintKind::ForeignKey) => {
                format!("referenced console, company or genre does not exist ({err})")
            }
            Some(_) => err.to_string(),
            None => return Self::Database(err.to_string()),
        };
        Self::Rejected(message)
    }
}

impl From<ConversionError> for CliError {
    fn from(err: ConversionError) -> Self {
        Self::Arguments(err.to_string())
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        Self::Io(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_is_usage_error() {
        let err = CliError::from(CoreError::Validation("Company name cannot be empty".into()));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_constraint_failures_are_rejections() {
        let unique = RepositoryError::Constraint {
            kind: ConstraintKind::Unique,
            message: "UNIQUE constraint failed: company.name".into(),
        };
        let err = CliError::from(CoreError::from(unique));
        assert!(matches!(err, CliError::Rejected(_)));
        assert_eq!(err.exit_code(), 65);

        let fk = RepositoryError::in_transaction(
            "linking genres",
            RepositoryError::Constraint {
                kind: ConstraintKind::ForeignKey,
                message: "FOREIGN KEY constraint failed".into(),
            },
        );
        assert!(CliError::from(fk).to_string().contains("does not exist"));
    }

    #[test]
    fn test_storage_failure_is_database_error() {
        let err = CliError::from(RepositoryError::Storage("pool timed out".into()));
        assert_eq!(err.exit_code(), 73);
    }
}
