//! Product search enriched with each hit's category.

use std::collections::{BTreeSet, HashMap};

use catalog_store::{CatalogStore, Product, Subcategory, Subcollection, SubcollectionId};
use futures::stream::{self, StreamExt, TryStreamExt};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::Catalog;
use crate::context::QueryContext;
use crate::error::CatalogResult;

/// A search result: the product plus the slug of the category it sits in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    #[serde(flatten)]
    pub product: Product,
    pub category_slug: String,
}

impl<S: CatalogStore> Catalog<S> {
    /// Full-text search over product names.
    ///
    /// Blank input returns nothing without touching the store. Each hit is
    /// joined to its category through its subcategory and subcollection;
    /// hits whose chain is broken are dropped.
    pub async fn search_products(
        &self,
        ctx: &QueryContext,
        text: &str,
    ) -> CatalogResult<Vec<SearchHit>> {
        if text.trim().is_empty() {
            return Ok(Vec::new());
        }

        ctx.checkpoint()?;
        let limit = self.limits.search_results;
        let mut products = self.store.search_products(text, limit).await?;
        products.truncate(limit);
        if products.is_empty() {
            return Ok(Vec::new());
        }

        let subcategory_slugs: BTreeSet<&str> = products
            .iter()
            .map(|p| p.subcategory_slug.as_str())
            .collect();
        let subcategories: HashMap<String, Subcategory> = stream::iter(subcategory_slugs)
            .map(|slug| self.subcategory_by_slug(ctx, slug))
            .buffered(self.limits.concurrency())
            .try_collect::<Vec<_>>()
            .await?
            .into_iter()
            .flatten()
            .map(|s| (s.slug.clone(), s))
            .collect();

        let subcollection_ids: BTreeSet<SubcollectionId> = subcategories
            .values()
            .map(|s| s.subcollection_id)
            .collect();
        let subcollections: HashMap<SubcollectionId, Subcollection> =
            stream::iter(subcollection_ids)
                .map(|id| self.subcollection_by_id(ctx, id))
                .buffered(self.limits.concurrency())
                .try_collect::<Vec<_>>()
                .await?
                .into_iter()
                .flatten()
                .map(|s| (s.external_id, s))
                .collect();

        let found = products.len();
        let hits: Vec<SearchHit> = products
            .into_iter()
            .filter_map(|product| {
                let category_slug = subcategories
                    .get(&product.subcategory_slug)
                    .and_then(|s| subcollections.get(&s.subcollection_id))
                    .map(|sc| sc.category_slug.clone());
                match category_slug {
                    Some(category_slug) => Some(SearchHit {
                        product,
                        category_slug,
                    }),
                    None => {
                        warn!(
                            product = %product.slug,
                            subcategory = %product.subcategory_slug,
                            "Dropping search hit with no category"
                        );
                        None
                    }
                }
            })
            .collect();

        debug!(query = text, found, returned = hits.len(), "Searched products");
        Ok(hits)
    }
}
