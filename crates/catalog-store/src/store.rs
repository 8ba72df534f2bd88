//! The storage access contract the query layer is written against.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::StoreResult;
use crate::ids::{CollectionId, SubcollectionId};
use crate::page::{Page, PageRequest};
use crate::record::{Category, Collection, Product, Subcategory, Subcollection};

/// The five record tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Table {
    Collections,
    Categories,
    Subcollections,
    Subcategories,
    Products,
}

impl Table {
    /// All tables, root first.
    pub const ALL: [Table; 5] = [
        Table::Collections,
        Table::Categories,
        Table::Subcollections,
        Table::Subcategories,
        Table::Products,
    ];

    /// Table name.
    pub fn name(&self) -> &'static str {
        match self {
            Table::Collections => "collections",
            Table::Categories => "categories",
            Table::Subcollections => "subcollections",
            Table::Subcategories => "subcategories",
            Table::Products => "products",
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Read access to an indexed catalog store.
///
/// Each scan method corresponds to one index and returns a single page of at
/// most `page.limit` rows (clamped to [`crate::MAX_PAGE_ROWS`]). Rows come
/// back in index order, which is insertion order within one key. A store is
/// shared across concurrent requests, so implementations must not rely on
/// per-call mutable state.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Full scan of collections.
    async fn collections(&self, page: PageRequest) -> StoreResult<Page<Collection>>;

    /// Collections index `by_slug`.
    async fn collections_by_slug(
        &self,
        slug: &str,
        page: PageRequest,
    ) -> StoreResult<Page<Collection>>;

    /// Collections index `by_external_id`.
    async fn collections_by_external_id(
        &self,
        external_id: CollectionId,
        page: PageRequest,
    ) -> StoreResult<Page<Collection>>;

    /// Full scan of categories.
    async fn categories(&self, page: PageRequest) -> StoreResult<Page<Category>>;

    /// Categories index `by_slug`.
    async fn categories_by_slug(&self, slug: &str, page: PageRequest)
        -> StoreResult<Page<Category>>;

    /// Categories index `by_collection_id`.
    async fn categories_by_collection(
        &self,
        collection_id: CollectionId,
        page: PageRequest,
    ) -> StoreResult<Page<Category>>;

    /// Full scan of subcollections.
    async fn subcollections(&self, page: PageRequest) -> StoreResult<Page<Subcollection>>;

    /// Subcollections index `by_external_id`.
    async fn subcollections_by_external_id(
        &self,
        external_id: SubcollectionId,
        page: PageRequest,
    ) -> StoreResult<Page<Subcollection>>;

    /// Subcollections index `by_category_slug`.
    async fn subcollections_by_category(
        &self,
        category_slug: &str,
        page: PageRequest,
    ) -> StoreResult<Page<Subcollection>>;

    /// Full scan of subcategories.
    async fn subcategories(&self, page: PageRequest) -> StoreResult<Page<Subcategory>>;

    /// Subcategories index `by_slug`.
    async fn subcategories_by_slug(
        &self,
        slug: &str,
        page: PageRequest,
    ) -> StoreResult<Page<Subcategory>>;

    /// Subcategories index `by_subcollection_id`.
    async fn subcategories_by_subcollection(
        &self,
        subcollection_id: SubcollectionId,
        page: PageRequest,
    ) -> StoreResult<Page<Subcategory>>;

    /// Full scan of products.
    async fn products(&self, page: PageRequest) -> StoreResult<Page<Product>>;

    /// Products index `by_slug`.
    async fn products_by_slug(&self, slug: &str, page: PageRequest) -> StoreResult<Page<Product>>;

    /// Products index `by_subcategory_slug`.
    async fn products_by_subcategory(
        &self,
        subcategory_slug: &str,
        page: PageRequest,
    ) -> StoreResult<Page<Product>>;

    /// Full-text search over product names, best match first.
    async fn search_products(&self, text: &str, limit: usize) -> StoreResult<Vec<Product>>;

    /// Number of products under a subcategory, saturating at `up_to`.
    async fn count_products_by_subcategory(
        &self,
        subcategory_slug: &str,
        up_to: usize,
    ) -> StoreResult<usize>;

    /// Number of rows in a table, saturating at `up_to`.
    async fn count_rows(&self, table: Table, up_to: usize) -> StoreResult<usize>;
}
