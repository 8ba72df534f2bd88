//! Hierarchy traversal and unique lookups.

use catalog_store::{
    Category, CatalogStore, Collection, CollectionId, Cursor, PageRequest, Product, Subcategory,
    Subcollection, SubcollectionId,
};
use tracing::debug;

use super::{unique_probe, Catalog};
use crate::capped::Capped;
use crate::context::QueryContext;
use crate::error::{CatalogError, CatalogResult};
use crate::order;
use crate::slug::subcollection_slug;

/// Read state of one subcollection during the subcategory fan-out.
struct FanOut {
    id: SubcollectionId,
    /// Set once the subcollection was cut short with rows left.
    resume: Option<Cursor>,
    taken: usize,
}

impl<S: CatalogStore> Catalog<S> {
    /// All collections, ordered by name.
    pub async fn all_collections(&self, ctx: &QueryContext) -> CatalogResult<Capped<Collection>> {
        let store = self.store.as_ref();
        let mut collections = self
            .collect_capped(ctx, self.limits.list_rows, move |req| store.collections(req))
            .await?;
        order::sort_collections(&mut collections.items);
        Ok(collections)
    }

    /// All categories, ordered by name.
    pub async fn all_categories(&self, ctx: &QueryContext) -> CatalogResult<Capped<Category>> {
        let store = self.store.as_ref();
        let mut categories = self
            .collect_capped(ctx, self.limits.list_rows, move |req| store.categories(req))
            .await?;
        order::sort_categories(&mut categories.items);
        Ok(categories)
    }

    pub async fn collection_by_slug(
        &self,
        ctx: &QueryContext,
        slug: &str,
    ) -> CatalogResult<Option<Collection>> {
        let fetch = self.store.collections_by_slug(slug, unique_probe());
        self.unique(ctx, "collection", slug, fetch).await
    }

    pub async fn category_by_slug(
        &self,
        ctx: &QueryContext,
        slug: &str,
    ) -> CatalogResult<Option<Category>> {
        let fetch = self.store.categories_by_slug(slug, unique_probe());
        self.unique(ctx, "category", slug, fetch).await
    }

    pub async fn subcategory_by_slug(
        &self,
        ctx: &QueryContext,
        slug: &str,
    ) -> CatalogResult<Option<Subcategory>> {
        let fetch = self.store.subcategories_by_slug(slug, unique_probe());
        self.unique(ctx, "subcategory", slug, fetch).await
    }

    pub async fn product_by_slug(
        &self,
        ctx: &QueryContext,
        slug: &str,
    ) -> CatalogResult<Option<Product>> {
        let fetch = self.store.products_by_slug(slug, unique_probe());
        self.unique(ctx, "product", slug, fetch).await
    }

    /// Subcollection by external id. Duplicate ids resolve to the first row.
    pub async fn subcollection_by_id(
        &self,
        ctx: &QueryContext,
        id: SubcollectionId,
    ) -> CatalogResult<Option<Subcollection>> {
        let fetch = self
            .store
            .subcollections_by_external_id(id, PageRequest::first(1));
        self.first(ctx, fetch).await
    }

    /// Subcollection whose derived slug equals `slug`.
    ///
    /// There is no slug index for subcollections, so this scans the whole
    /// table page by page.
    pub async fn subcollection_by_slug(
        &self,
        ctx: &QueryContext,
        slug: &str,
    ) -> CatalogResult<Option<Subcollection>> {
        let store = self.store.as_ref();
        let all = self
            .collect_all(ctx, move |req| store.subcollections(req))
            .await?;

        let mut matches = all
            .into_iter()
            .filter(|sc| subcollection_slug(sc) == slug)
            .collect::<Vec<_>>();
        debug!(slug, matches = matches.len(), "Scanned subcollections by slug");

        match matches.len() {
            0 | 1 => Ok(matches.pop()),
            n => Err(CatalogError::IntegrityViolation {
                entity: "subcollection",
                key: slug.to_string(),
                matches: n,
            }),
        }
    }

    /// Categories in a collection, in index order.
    pub async fn categories_for_collection(
        &self,
        ctx: &QueryContext,
        collection_id: CollectionId,
    ) -> CatalogResult<Capped<Category>> {
        let store = self.store.as_ref();
        self.collect_capped(ctx, self.limits.list_rows, move |req| {
            store.categories_by_collection(collection_id, req)
        })
        .await
    }

    /// Categories in the collection with `slug`. Unknown slugs yield an
    /// empty list.
    pub async fn categories_for_collection_slug(
        &self,
        ctx: &QueryContext,
        slug: &str,
    ) -> CatalogResult<Capped<Category>> {
        match self.collection_by_slug(ctx, slug).await? {
            Some(collection) => {
                self.categories_for_collection(ctx, collection.external_id)
                    .await
            }
            None => Ok(Capped::default()),
        }
    }

    /// Subcollections in a category, ordered by name.
    pub async fn subcollections_for_category(
        &self,
        ctx: &QueryContext,
        category_slug: &str,
    ) -> CatalogResult<Capped<Subcollection>> {
        let store = self.store.as_ref();
        let mut subcollections = self
            .collect_capped(ctx, self.limits.list_rows, move |req| {
                store.subcollections_by_category(category_slug, req)
            })
            .await?;
        order::sort_subcollections(&mut subcollections.items);
        Ok(subcollections)
    }

    /// Subcategories in a subcollection, ordered by name.
    pub async fn subcategories_for_subcollection(
        &self,
        ctx: &QueryContext,
        subcollection_id: SubcollectionId,
    ) -> CatalogResult<Capped<Subcategory>> {
        let store = self.store.as_ref();
        let mut subcategories = self
            .collect_capped(ctx, self.limits.list_rows, move |req| {
                store.subcategories_by_subcollection(subcollection_id, req)
            })
            .await?;
        order::sort_subcategories(&mut subcategories.items);
        Ok(subcategories)
    }

    /// Subcategories in the subcollection whose derived slug is `slug`.
    pub async fn subcategories_for_subcollection_slug(
        &self,
        ctx: &QueryContext,
        slug: &str,
    ) -> CatalogResult<Capped<Subcategory>> {
        match self.subcollection_by_slug(ctx, slug).await? {
            Some(sc) => self.subcategories_for_subcollection(ctx, sc.external_id).await,
            None => Ok(Capped::default()),
        }
    }

    /// Subcategories across every subcollection of a category, ordered by
    /// name.
    ///
    /// Reads in rounds. Each round gives every subcollection still holding
    /// unread rows an even share of what is left of the overall cap, so one
    /// large subcollection cannot crowd out the rest, while capacity a small
    /// subcollection leaves unused goes to the ones that were cut short in
    /// the next round. No subcollection contributes more than the
    /// per-subcollection cap. The result is flagged truncated when any
    /// subcollection hit that cap or the overall cap was filled with rows
    /// still unread.
    pub async fn subcategories_for_category(
        &self,
        ctx: &QueryContext,
        category_slug: &str,
    ) -> CatalogResult<Capped<Subcategory>> {
        let parents = self.subcollections_for_category(ctx, category_slug).await?;
        let cap = self.limits.subcategories_per_category;
        let per_parent = self.limits.subcategories_per_subcollection;
        let store = self.store.as_ref();

        let mut items: Vec<Subcategory> = Vec::new();
        let mut truncated = parents.truncated;
        let mut pending: Vec<FanOut> = parents
            .iter()
            .map(|p| FanOut {
                id: p.external_id,
                resume: None,
                taken: 0,
            })
            .collect();
        let mut rounds = 0;

        while !pending.is_empty() {
            rounds += 1;
            let count = pending.len();
            let mut cut_short = Vec::new();

            for (i, mut parent) in pending.into_iter().enumerate() {
                let remaining = cap.saturating_sub(items.len());
                if remaining == 0 {
                    cut_short.push(parent);
                    continue;
                }

                let share = remaining.div_ceil(count - i);
                let take = per_parent.saturating_sub(parent.taken).min(share);
                let id = parent.id;
                let batch = self
                    .scan(ctx, parent.resume.take(), take, move |req| {
                        store.subcategories_by_subcollection(id, req)
                    })
                    .await?;

                parent.taken += batch.items.len();
                items.extend(batch.items);
                if !batch.truncated {
                    continue;
                }
                match batch.resume {
                    Some(resume) if parent.taken < per_parent => {
                        parent.resume = Some(resume);
                        cut_short.push(parent);
                    }
                    _ => truncated = true,
                }
            }

            if items.len() >= cap {
                truncated |= self.any_left(ctx, &cut_short).await?;
                break;
            }
            pending = cut_short;
        }

        debug!(
            category = category_slug,
            subcollections = parents.len(),
            subcategories = items.len(),
            rounds,
            truncated,
            "Fanned out subcategories"
        );
        order::sort_subcategories(&mut items);
        Ok(Capped { items, truncated })
    }

    /// Whether any of `parents` still has unread subcategories. Parents
    /// already cut short are known to; the rest are checked with a one-row
    /// read.
    async fn any_left(&self, ctx: &QueryContext, parents: &[FanOut]) -> CatalogResult<bool> {
        for parent in parents {
            if parent.resume.is_some() {
                return Ok(true);
            }
            let fetch = self
                .store
                .subcategories_by_subcollection(parent.id, PageRequest::first(1));
            if self.first(ctx, fetch).await?.is_some() {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Products in a subcategory, ordered by slug.
    pub async fn products_for_subcategory(
        &self,
        ctx: &QueryContext,
        subcategory_slug: &str,
    ) -> CatalogResult<Capped<Product>> {
        let store = self.store.as_ref();
        let mut products = self
            .collect_capped(ctx, self.limits.products_per_subcategory, move |req| {
                store.products_by_subcategory(subcategory_slug, req)
            })
            .await?;
        order::sort_products(&mut products.items);
        Ok(products)
    }
}
