//! Error types for record store operations.

use thiserror::Error;

/// Errors that can occur during record store operations.
///
/// Persistence failures are deliberately not classified by kind; every
/// caller reacts the same way to all of them (report and stop).
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// Database operation failed.
    #[error("database error: {0}")]
    Database(String),

    /// Download record not found.
    #[error(
        "download record not found: id {0}\n  Suggestion: The record may have been removed or the ID is incorrect"
    )]
    RecordNotFound(i64),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        Self::Database(err.to_string())
    }
}
