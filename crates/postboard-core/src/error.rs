//! Domain-level error types.

use thiserror::Error;

use crate::domain::PostId;

/// Domain errors - business logic failures.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: &'static str, id: PostId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Forbidden")]
    Forbidden,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
    pub fn post_not_found(id: PostId) -> Self {
        Self::NotFound {
            entity_type: "Post",
            id,
        }
    }
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Entity not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    Constraint(String),
}

impl From<RepoError> for DomainError {
    fn from(err: RepoError) -> Self {
        DomainError::Internal(err.to_string())
    }
}

/// Spreadsheet reading errors.
#[derive(Debug, Error)]
pub enum SheetError {
    #[error("Cannot open workbook {path}: {reason}")]
    Open { path: String, reason: String },

    #[error("Workbook {0} has no worksheet")]
    NoWorksheet(String),

    #[error("Worksheet has no header row")]
    MissingHeader,

    #[error("Malformed worksheet: {0}")]
    Malformed(String),
}
