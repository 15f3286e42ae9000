//! Repository Module
//!
//! CRUD over the six collections, free functions over `&SqlitePool`.
//! Denormalized fields (employee name on shifts and time entries,
//! department name on employees) are resolved by joins on every read —
//! there is no write-time denormalization, so renames surface on the
//! next reload without a migration step.

pub mod department;
pub mod employee;
pub mod notification;
pub mod permission;
pub mod shift;
pub mod time_entry;

use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err
            && db_err.is_unique_violation()
        {
            return RepoError::Duplicate(db_err.message().to_string());
        }
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;
