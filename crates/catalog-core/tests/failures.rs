use std::sync::Arc;

use async_trait::async_trait;
use catalog_core::{Catalog, CatalogError, QueryContext};
use catalog_store::{
    CatalogStore, Category, Collection, CollectionId, Page, PageRequest, Product, StoreError,
    StoreResult, Subcategory, Subcollection, SubcollectionId, Table,
};

/// A store whose backend is unreachable.
struct DownStore;

fn down<T>() -> StoreResult<T> {
    Err(StoreError::Unavailable("connection refused".to_string()))
}

#[async_trait]
impl CatalogStore for DownStore {
    async fn collections(&self, _: PageRequest) -> StoreResult<Page<Collection>> {
        down()
    }
    async fn collections_by_slug(&self, _: &str, _: PageRequest) -> StoreResult<Page<Collection>> {
        down()
    }
    async fn collections_by_external_id(
        &self,
        _: CollectionId,
        _: PageRequest,
    ) -> StoreResult<Page<Collection>> {
        down()
    }
    async fn categories(&self, _: PageRequest) -> StoreResult<Page<Category>> {
        down()
    }
    async fn categories_by_slug(&self, _: &str, _: PageRequest) -> StoreResult<Page<Category>> {
        down()
    }
    async fn categories_by_collection(
        &self,
        _: CollectionId,
        _: PageRequest,
    ) -> StoreResult<Page<Category>> {
        down()
    }
    async fn subcollections(&self, _: PageRequest) -> StoreResult<Page<Subcollection>> {
        down()
    }
    async fn subcollections_by_external_id(
        &self,
        _: SubcollectionId,
        _: PageRequest,
    ) -> StoreResult<Page<Subcollection>> {
        down()
    }
    async fn subcollections_by_category(
        &self,
        _: &str,
        _: PageRequest,
    ) -> StoreResult<Page<Subcollection>> {
        down()
    }
    async fn subcategories(&self, _: PageRequest) -> StoreResult<Page<Subcategory>> {
        down()
    }
    async fn subcategories_by_slug(
        &self,
        _: &str,
        _: PageRequest,
    ) -> StoreResult<Page<Subcategory>> {
        down()
    }
    async fn subcategories_by_subcollection(
        &self,
        _: SubcollectionId,
        _: PageRequest,
    ) -> StoreResult<Page<Subcategory>> {
        down()
    }
    async fn products(&self, _: PageRequest) -> StoreResult<Page<Product>> {
        down()
    }
    async fn products_by_slug(&self, _: &str, _: PageRequest) -> StoreResult<Page<Product>> {
        down()
    }
    async fn products_by_subcategory(
        &self,
        _: &str,
        _: PageRequest,
    ) -> StoreResult<Page<Product>> {
        down()
    }
    async fn search_products(&self, _: &str, _: usize) -> StoreResult<Vec<Product>> {
        down()
    }
    async fn count_products_by_subcategory(&self, _: &str, _: usize) -> StoreResult<usize> {
        down()
    }
    async fn count_rows(&self, _: Table, _: usize) -> StoreResult<usize> {
        down()
    }
}

fn catalog() -> Catalog<DownStore> {
    Catalog::new(Arc::new(DownStore))
}

#[tokio::test]
async fn test_storage_errors_propagate() {
    let catalog = catalog();
    let ctx = QueryContext::unbounded();

    let err = catalog.category_by_slug(&ctx, "tools").await.unwrap_err();
    assert!(matches!(err, CatalogError::Storage(StoreError::Unavailable(_))));

    assert!(catalog.all_routes(&ctx).await.is_err());
    assert!(catalog.count_products_for_category(&ctx, "tools").await.is_err());
    assert!(catalog.data_counts(&ctx).await.is_err());
}

#[tokio::test]
async fn test_blank_search_skips_store() {
    let catalog = catalog();
    let ctx = QueryContext::unbounded();

    assert!(catalog.search_products(&ctx, " ").await.unwrap().is_empty());
    assert!(catalog.search_products(&ctx, "saw").await.is_err());
}
