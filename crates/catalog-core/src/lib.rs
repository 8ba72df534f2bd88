//! Catalog query layer for the storefront.
//!
//! Sits between a [`catalog_store::CatalogStore`] and the HTTP surface. It
//! traverses the Collection → Category → Subcollection → Subcategory →
//! Product tree, resolves unique keys, produces capped counts, searches
//! product names and enumerates every page path.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use catalog_core::prelude::*;
//!
//! let store = MemoryStore::open("catalog.json")?;
//! let catalog = Catalog::new(Arc::new(store));
//! let ctx = QueryContext::with_timeout(Duration::from_secs(5));
//!
//! for hit in catalog.search_products(&ctx, "wrench").await? {
//!     println!("/products/{}/{}/{}", hit.category_slug, hit.product.subcategory_slug, hit.product.slug);
//! }
//! ```

mod capped;
pub mod catalog;
mod context;
mod error;
mod limits;
pub mod order;
mod slug;

pub use capped::{Capped, Count};
pub use catalog::{Catalog, DataCounts, SearchHit, SubcollectionCounts};
pub use context::{CancelToken, QueryContext};
pub use error::{CatalogError, CatalogResult};
pub use limits::{CatalogLimits, DataCountLimits};
pub use slug::{derive_slug, subcollection_slug};

pub use catalog_store as store;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        derive_slug, CancelToken, Capped, Catalog, CatalogError, CatalogLimits, CatalogResult,
        Count, DataCounts, QueryContext, SearchHit,
    };
    pub use catalog_store::prelude::*;
    pub use std::time::Duration;
}
