//! Table size statistics.

use catalog_store::{CatalogStore, Table};
use serde::{Deserialize, Serialize};

use super::Catalog;
use crate::capped::Count;
use crate::context::QueryContext;
use crate::error::CatalogResult;

/// Row counts per table, each read under its own cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataCounts {
    pub collections: Count,
    pub categories: Count,
    pub subcollections: Count,
    pub subcategories: Count,
    pub products: Count,
}

impl DataCounts {
    /// Counts in table order.
    pub fn iter(&self) -> impl Iterator<Item = (Table, Count)> {
        [
            (Table::Collections, self.collections),
            (Table::Categories, self.categories),
            (Table::Subcollections, self.subcollections),
            (Table::Subcategories, self.subcategories),
            (Table::Products, self.products),
        ]
        .into_iter()
    }
}

impl<S: CatalogStore> Catalog<S> {
    pub async fn data_counts(&self, ctx: &QueryContext) -> CatalogResult<DataCounts> {
        let caps = &self.limits.data_counts;
        Ok(DataCounts {
            collections: self.count_table(ctx, Table::Collections, caps.collections).await?,
            categories: self.count_table(ctx, Table::Categories, caps.categories).await?,
            subcollections: self
                .count_table(ctx, Table::Subcollections, caps.subcollections)
                .await?,
            subcategories: self
                .count_table(ctx, Table::Subcategories, caps.subcategories)
                .await?,
            products: self.count_table(ctx, Table::Products, caps.products).await?,
        })
    }

    async fn count_table(&self, ctx: &QueryContext, table: Table, cap: usize) -> CatalogResult<Count> {
        ctx.checkpoint()?;
        let counted = self.store.count_rows(table, cap.saturating_add(1)).await?;
        Ok(Count::from_probe(counted, cap))
    }
}
