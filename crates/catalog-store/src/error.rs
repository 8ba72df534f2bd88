//! Storage error types.

use thiserror::Error;

/// Errors raised by a catalog storage backend.
///
/// Every variant is fatal to the query that hit it; the query layer never
/// retries.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The backend could not be reached.
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    /// The backend rejected or failed a query.
    #[error("Query failed: {0}")]
    Query(String),

    /// A page cursor was not produced by this backend for this index.
    #[error("Invalid cursor: {0}")]
    InvalidCursor(String),

    /// A snapshot could not be parsed or failed validation.
    #[error("Snapshot error: {0}")]
    Snapshot(String),

    /// Reading a snapshot from disk failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        StoreError::Snapshot(e.to_string())
    }
}

/// Result alias for storage calls.
pub type StoreResult<T> = Result<T, StoreError>;
