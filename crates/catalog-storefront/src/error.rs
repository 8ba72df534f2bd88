//! Storefront endpoint errors.

use catalog_core::CatalogError;
use thiserror::Error;

/// Errors raised while answering a storefront request.
#[derive(Error, Debug)]
pub enum StorefrontError {
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("HTTP error: {0}")]
    Http(#[from] http::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type StorefrontResult<T> = Result<T, StorefrontError>;
