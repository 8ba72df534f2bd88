//! Capped product counts over the hierarchy.
//!
//! A subcategory count reads at most one row past its cap, so an inexact
//! result is always reported as such. Aggregate counts are the sum of their
//! subcategory counts and are inexact if any term is, or if the parents
//! feeding them were themselves truncated.

use std::collections::{BTreeMap, BTreeSet};

use catalog_store::{CatalogStore, SubcollectionId};
use futures::stream::{self, StreamExt, TryStreamExt};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::Catalog;
use crate::capped::Count;
use crate::context::QueryContext;
use crate::error::{CatalogError, CatalogResult};

/// Product counts of the subcollections in one category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubcollectionCounts {
    /// Count per subcollection, keyed by external id.
    pub counts: BTreeMap<String, Count>,
    /// Set when the category had more subcollections than were read.
    pub truncated: bool,
}

impl SubcollectionCounts {
    /// Sum of all counts; inexact when any count is or the list was cut.
    pub fn total(&self) -> Count {
        let total: Count = self.counts.values().copied().sum();
        total.or_inexact(self.truncated)
    }
}

impl<S: CatalogStore> Catalog<S> {
    /// Products in one subcategory.
    pub async fn count_products_for_subcategory(
        &self,
        ctx: &QueryContext,
        subcategory_slug: &str,
    ) -> CatalogResult<Count> {
        let cap = self.limits.counted_products_per_subcategory;
        ctx.checkpoint()?;
        let counted = self
            .store
            .count_products_by_subcategory(subcategory_slug, cap.saturating_add(1))
            .await?;
        Ok(Count::from_probe(counted, cap))
    }

    /// Products under one subcollection.
    pub async fn count_products_for_subcollection(
        &self,
        ctx: &QueryContext,
        subcollection_id: SubcollectionId,
    ) -> CatalogResult<Count> {
        let store = self.store.as_ref();
        let subcategories = self
            .collect_capped(ctx, self.limits.subcategories_per_subcollection, move |req| {
                store.subcategories_by_subcollection(subcollection_id, req)
            })
            .await?;

        let slugs = subcategories.iter().map(|s| s.slug.as_str());
        let total = self.sum_subcategory_counts(ctx, slugs).await?;
        Ok(total.or_inexact(subcategories.truncated))
    }

    /// Products under the subcollection whose derived slug is `slug`.
    /// Unknown slugs count zero.
    pub async fn count_products_for_subcollection_slug(
        &self,
        ctx: &QueryContext,
        slug: &str,
    ) -> CatalogResult<Count> {
        match self.subcollection_by_slug(ctx, slug).await? {
            Some(sc) => self.count_products_for_subcollection(ctx, sc.external_id).await,
            None => Ok(Count::ZERO),
        }
    }

    /// Products under one category.
    pub async fn count_products_for_category(
        &self,
        ctx: &QueryContext,
        category_slug: &str,
    ) -> CatalogResult<Count> {
        let per_subcollection = self.product_counts_per_subcollection(ctx, category_slug).await?;
        Ok(per_subcollection.total())
    }

    /// Product count of each subcollection in a category, keyed by the
    /// subcollection's external id.
    ///
    /// Rows sharing an external id are counted once.
    pub async fn product_counts_per_subcollection(
        &self,
        ctx: &QueryContext,
        category_slug: &str,
    ) -> CatalogResult<SubcollectionCounts> {
        let store = self.store.as_ref();
        let subcollections = self
            .collect_capped(ctx, self.limits.subcollections_per_category, move |req| {
                store.subcollections_by_category(category_slug, req)
            })
            .await?;

        let mut seen = BTreeSet::new();
        let ids: Vec<SubcollectionId> = subcollections
            .iter()
            .map(|sc| sc.external_id)
            .filter(|id| seen.insert(*id))
            .collect();

        let counts: Vec<(String, Count)> = stream::iter(ids)
            .map(|id| async move {
                let count = self.count_products_for_subcollection(ctx, id).await?;
                Ok::<_, CatalogError>((id.as_key(), count))
            })
            .buffered(self.limits.concurrency())
            .try_collect()
            .await?;

        debug!(
            category = category_slug,
            subcollections = counts.len(),
            "Counted products per subcollection"
        );

        Ok(SubcollectionCounts {
            counts: counts.into_iter().collect(),
            truncated: subcollections.truncated,
        })
    }

    async fn sum_subcategory_counts<'a>(
        &self,
        ctx: &QueryContext,
        slugs: impl Iterator<Item = &'a str>,
    ) -> CatalogResult<Count> {
        let counts: Vec<Count> = stream::iter(slugs)
            .map(|slug| self.count_products_for_subcategory(ctx, slug))
            .buffered(self.limits.concurrency())
            .try_collect()
            .await?;
        Ok(counts.into_iter().sum())
    }
}
