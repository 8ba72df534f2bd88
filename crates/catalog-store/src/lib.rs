//! Indexed storage layer for the storefront catalog.
//!
//! The query layer never touches rows directly; it talks to a
//! [`CatalogStore`], which exposes exactly the indexes the catalog schema
//! declares:
//!
//! | Table | Indexes |
//! |---|---|
//! | collections | `by_slug` |
//! | categories | `by_slug`, `by_collection_id` |
//! | subcollections | `by_external_id`, `by_category_slug` |
//! | subcategories | `by_slug`, `by_subcollection_id` |
//! | products | `by_slug`, `by_subcategory_slug`, full-text on `name` |
//!
//! Scans are paged with opaque cursors and every page is bounded by
//! [`MAX_PAGE_ROWS`].
//!
//! # Example
//!
//! ```rust,ignore
//! use catalog_store::{CatalogStore, MemoryStore, PageRequest};
//!
//! let store = MemoryStore::open("catalog.json")?;
//! let page = store.products_by_subcategory("hammers", PageRequest::first(100)).await?;
//! for product in &page.items {
//!     println!("{} {}", product.slug, product.price);
//! }
//! ```

mod error;
mod ids;
mod memory;
mod page;
mod price;
mod record;
mod snapshot;
mod store;
pub mod text;

pub use error::{StoreError, StoreResult};
pub use ids::{CollectionId, SubcollectionId};
pub use memory::MemoryStore;
pub use page::{Cursor, Page, PageRequest, MAX_PAGE_ROWS};
pub use price::Price;
pub use record::{Category, Collection, Product, Subcategory, Subcollection};
pub use snapshot::CatalogSnapshot;
pub use store::{CatalogStore, Table};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        CatalogSnapshot, CatalogStore, Category, Collection, CollectionId, MemoryStore, Page,
        PageRequest, Price, Product, StoreError, StoreResult, Subcategory, Subcollection,
        SubcollectionId, Table,
    };
}
