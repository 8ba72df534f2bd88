//! In-memory indexed catalog store.

use std::collections::HashMap;
use std::hash::Hash;

use async_trait::async_trait;
use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::ids::{CollectionId, SubcollectionId};
use crate::page::{Cursor, Page, PageRequest, MAX_PAGE_ROWS};
use crate::record::{Category, Collection, Product, Subcategory, Subcollection};
use crate::snapshot::CatalogSnapshot;
use crate::store::{CatalogStore, Table};
use crate::text::TextIndex;

/// Secondary index: key to row positions in insertion order.
type Index<K> = HashMap<K, Vec<usize>>;

fn build_index<T, K, F>(rows: &[T], key: F) -> Index<K>
where
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let mut index: Index<K> = HashMap::new();
    for (pos, row) in rows.iter().enumerate() {
        index.entry(key(row)).or_default().push(pos);
    }
    index
}

/// Immutable catalog store holding every table in memory.
///
/// All secondary indexes and the product-name text index are built once in
/// [`MemoryStore::new`]. The store has no mutation API, so a single instance
/// can be shared behind an `Arc` by any number of concurrent readers.
#[derive(Debug)]
pub struct MemoryStore {
    collections: Vec<Collection>,
    categories: Vec<Category>,
    subcollections: Vec<Subcollection>,
    subcategories: Vec<Subcategory>,
    products: Vec<Product>,

    collections_by_slug: Index<String>,
    collections_by_external_id: Index<CollectionId>,
    categories_by_slug: Index<String>,
    categories_by_collection: Index<CollectionId>,
    subcollections_by_external_id: Index<SubcollectionId>,
    subcollections_by_category: Index<String>,
    subcategories_by_slug: Index<String>,
    subcategories_by_subcollection: Index<SubcollectionId>,
    products_by_slug: Index<String>,
    products_by_subcategory: Index<String>,
    product_names: TextIndex,
}

impl MemoryStore {
    /// Build a store and its indexes from a snapshot.
    pub fn new(snapshot: CatalogSnapshot) -> Self {
        let CatalogSnapshot {
            collections,
            categories,
            subcollections,
            subcategories,
            products,
        } = snapshot;

        let mut product_names = TextIndex::new();
        for (pos, product) in products.iter().enumerate() {
            product_names.insert(pos, &product.name);
        }

        let store = Self {
            collections_by_slug: build_index(&collections, |c| c.slug.clone()),
            collections_by_external_id: build_index(&collections, |c| c.external_id),
            categories_by_slug: build_index(&categories, |c| c.slug.clone()),
            categories_by_collection: build_index(&categories, |c| c.collection_id),
            subcollections_by_external_id: build_index(&subcollections, |s| s.external_id),
            subcollections_by_category: build_index(&subcollections, |s| s.category_slug.clone()),
            subcategories_by_slug: build_index(&subcategories, |s| s.slug.clone()),
            subcategories_by_subcollection: build_index(&subcategories, |s| s.subcollection_id),
            products_by_slug: build_index(&products, |p| p.slug.clone()),
            products_by_subcategory: build_index(&products, |p| p.subcategory_slug.clone()),
            product_names,
            collections,
            categories,
            subcollections,
            subcategories,
            products,
        };

        debug!(
            collections = store.collections.len(),
            categories = store.categories.len(),
            subcollections = store.subcollections.len(),
            subcategories = store.subcategories.len(),
            products = store.products.len(),
            search_terms = store.product_names.term_count(),
            "built in-memory catalog store"
        );

        store
    }

    /// Load a snapshot file and build a store from it.
    pub fn open(path: impl AsRef<std::path::Path>) -> StoreResult<Self> {
        Ok(Self::new(CatalogSnapshot::load(path)?))
    }

    /// Number of rows in a table.
    pub fn len(&self, table: Table) -> usize {
        match table {
            Table::Collections => self.collections.len(),
            Table::Categories => self.categories.len(),
            Table::Subcollections => self.subcollections.len(),
            Table::Subcategories => self.subcategories.len(),
            Table::Products => self.products.len(),
        }
    }
}

fn encode_cursor(offset: usize) -> Cursor {
    Cursor::new(format!("o:{offset}"))
}

fn decode_cursor(cursor: Option<&Cursor>, len: usize) -> StoreResult<usize> {
    let Some(cursor) = cursor else {
        return Ok(0);
    };

    let offset = cursor
        .as_str()
        .strip_prefix("o:")
        .and_then(|s| s.parse::<usize>().ok())
        .ok_or_else(|| StoreError::InvalidCursor(cursor.as_str().to_string()))?;

    if offset > len {
        return Err(StoreError::InvalidCursor(cursor.as_str().to_string()));
    }
    Ok(offset)
}

/// Slice one page out of `positions`, resolving each position into `rows`.
fn page_of<T: Clone>(rows: &[T], positions: &[usize], req: &PageRequest) -> StoreResult<Page<T>> {
    let len = positions.len();
    let start = decode_cursor(req.cursor.as_ref(), len)?;
    let end = start.saturating_add(req.clamped_limit()).min(len);

    let items = positions[start..end]
        .iter()
        .map(|&pos| rows[pos].clone())
        .collect();
    let next = (end < len).then(|| encode_cursor(end));

    Ok(Page { items, next })
}

/// Slice one page out of a whole table.
fn scan<T: Clone>(rows: &[T], req: &PageRequest) -> StoreResult<Page<T>> {
    let len = rows.len();
    let start = decode_cursor(req.cursor.as_ref(), len)?;
    let end = start.saturating_add(req.clamped_limit()).min(len);

    Ok(Page {
        items: rows[start..end].to_vec(),
        next: (end < len).then(|| encode_cursor(end)),
    })
}

fn lookup<'a, K, Q>(index: &'a Index<K>, key: &Q) -> &'a [usize]
where
    K: Eq + Hash + std::borrow::Borrow<Q>,
    Q: Eq + Hash + ?Sized,
{
    index.get(key).map(Vec::as_slice).unwrap_or(&[])
}

#[async_trait]
impl CatalogStore for MemoryStore {
    async fn collections(&self, page: PageRequest) -> StoreResult<Page<Collection>> {
        scan(&self.collections, &page)
    }

    async fn collections_by_slug(
        &self,
        slug: &str,
        page: PageRequest,
    ) -> StoreResult<Page<Collection>> {
        page_of(&self.collections, lookup(&self.collections_by_slug, slug), &page)
    }

    async fn collections_by_external_id(
        &self,
        external_id: CollectionId,
        page: PageRequest,
    ) -> StoreResult<Page<Collection>> {
        page_of(
            &self.collections,
            lookup(&self.collections_by_external_id, &external_id),
            &page,
        )
    }

    async fn categories(&self, page: PageRequest) -> StoreResult<Page<Category>> {
        scan(&self.categories, &page)
    }

    async fn categories_by_slug(
        &self,
        slug: &str,
        page: PageRequest,
    ) -> StoreResult<Page<Category>> {
        page_of(&self.categories, lookup(&self.categories_by_slug, slug), &page)
    }

    async fn categories_by_collection(
        &self,
        collection_id: CollectionId,
        page: PageRequest,
    ) -> StoreResult<Page<Category>> {
        page_of(
            &self.categories,
            lookup(&self.categories_by_collection, &collection_id),
            &page,
        )
    }

    async fn subcollections(&self, page: PageRequest) -> StoreResult<Page<Subcollection>> {
        scan(&self.subcollections, &page)
    }

    async fn subcollections_by_external_id(
        &self,
        external_id: SubcollectionId,
        page: PageRequest,
    ) -> StoreResult<Page<Subcollection>> {
        page_of(
            &self.subcollections,
            lookup(&self.subcollections_by_external_id, &external_id),
            &page,
        )
    }

    async fn subcollections_by_category(
        &self,
        category_slug: &str,
        page: PageRequest,
    ) -> StoreResult<Page<Subcollection>> {
        page_of(
            &self.subcollections,
            lookup(&self.subcollections_by_category, category_slug),
            &page,
        )
    }

    async fn subcategories(&self, page: PageRequest) -> StoreResult<Page<Subcategory>> {
        scan(&self.subcategories, &page)
    }

    async fn subcategories_by_slug(
        &self,
        slug: &str,
        page: PageRequest,
    ) -> StoreResult<Page<Subcategory>> {
        page_of(&self.subcategories, lookup(&self.subcategories_by_slug, slug), &page)
    }

    async fn subcategories_by_subcollection(
        &self,
        subcollection_id: SubcollectionId,
        page: PageRequest,
    ) -> StoreResult<Page<Subcategory>> {
        page_of(
            &self.subcategories,
            lookup(&self.subcategories_by_subcollection, &subcollection_id),
            &page,
        )
    }

    async fn products(&self, page: PageRequest) -> StoreResult<Page<Product>> {
        scan(&self.products, &page)
    }

    async fn products_by_slug(&self, slug: &str, page: PageRequest) -> StoreResult<Page<Product>> {
        page_of(&self.products, lookup(&self.products_by_slug, slug), &page)
    }

    async fn products_by_subcategory(
        &self,
        subcategory_slug: &str,
        page: PageRequest,
    ) -> StoreResult<Page<Product>> {
        page_of(
            &self.products,
            lookup(&self.products_by_subcategory, subcategory_slug),
            &page,
        )
    }

    async fn search_products(&self, text: &str, limit: usize) -> StoreResult<Vec<Product>> {
        let limit = limit.min(MAX_PAGE_ROWS);
        Ok(self
            .product_names
            .search(text, limit)
            .into_iter()
            .map(|pos| self.products[pos].clone())
            .collect())
    }

    async fn count_products_by_subcategory(
        &self,
        subcategory_slug: &str,
        up_to: usize,
    ) -> StoreResult<usize> {
        Ok(lookup(&self.products_by_subcategory, subcategory_slug)
            .len()
            .min(up_to))
    }

    async fn count_rows(&self, table: Table, up_to: usize) -> StoreResult<usize> {
        Ok(self.len(table).min(up_to))
    }
}
