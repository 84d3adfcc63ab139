use thiserror::Error;

/// Errors that can occur while executing a compiled statement.
#[derive(Debug, Error)]
pub enum ExecutionError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Execution task failed: {0}")]
    Task(String),
}
