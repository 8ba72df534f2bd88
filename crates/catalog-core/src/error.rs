//! Query layer error types.

use std::time::Duration;

use catalog_store::StoreError;
use thiserror::Error;

/// Errors that can occur in catalog queries.
///
/// Missing data is not an error: lookups return `Ok(None)`, lists come back
/// empty and orphaned children are skipped. Only the conditions below abort
/// a query.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The storage layer failed or is unreachable.
    #[error("Storage error: {0}")]
    Storage(#[from] StoreError),

    /// A lookup on a unique key matched more than one record.
    #[error("Integrity violation: {matches} {entity} records share key {key:?}")]
    IntegrityViolation {
        entity: &'static str,
        key: String,
        matches: usize,
    },

    /// The query ran past its deadline.
    #[error("Query deadline exceeded after {0:?}")]
    DeadlineExceeded(Duration),

    /// The query was cancelled by its caller.
    #[error("Query cancelled")]
    Cancelled,
}

impl CatalogError {
    /// Whether this error points at corrupt catalog data rather than an
    /// infrastructure failure.
    pub fn is_integrity_violation(&self) -> bool {
        matches!(self, CatalogError::IntegrityViolation { .. })
    }

    /// Whether the query was stopped by its deadline or cancel token.
    pub fn is_interrupted(&self) -> bool {
        matches!(self, CatalogError::DeadlineExceeded(_) | CatalogError::Cancelled)
    }
}

/// Result alias for catalog queries.
pub type CatalogResult<T> = Result<T, CatalogError>;
