//! Error taxonomy shared by the task record and the store.
//!
//! Validation failures are contract violations and always reach the caller.
//! Storage failures are environmental; the store decides per operation
//! whether to surface them or degrade to an empty result.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TodoError {
    /// A task record or change set broke a field-level rule.
    #[error("{0}")]
    Validation(String),

    /// The SQLite engine reported a failure (open, constraint, I/O).
    #[error("database error: {0}")]
    Storage(#[from] rusqlite::Error),

    /// The application data directory could not be prepared.
    #[error("data directory error: {0}")]
    Io(#[from] std::io::Error),
}

impl TodoError {
    pub fn validation(msg: impl Into<String>) -> Self {
        TodoError::Validation(msg.into())
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, TodoError::Validation(_))
    }
}

pub type Result<T, E = TodoError> = std::result::Result<T, E>;
