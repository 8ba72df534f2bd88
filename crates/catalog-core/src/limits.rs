//! Result caps applied by the query layer.
//!
//! Every read that can grow with the catalog is bounded. The defaults match
//! the sizes the storefront was tuned for; deployments override them through
//! the `[limits]` config section.

use serde::{Deserialize, Serialize};

/// Caps on rows read and returned by catalog queries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogLimits {
    /// Rows requested per store page.
    pub page_size: usize,
    /// Cap for plain list reads (all collections, all categories, children
    /// of one parent).
    pub list_rows: usize,
    /// Total subcategories returned for one category.
    pub subcategories_per_category: usize,
    /// Subcategories read from one subcollection while fanning out.
    pub subcategories_per_subcollection: usize,
    /// Subcollections read from one category while counting.
    pub subcollections_per_category: usize,
    /// Products returned for one subcategory.
    pub products_per_subcategory: usize,
    /// Products counted for one subcategory before the count goes inexact.
    pub counted_products_per_subcategory: usize,
    /// Search hits returned.
    pub search_results: usize,
    /// Parallel store reads during fan-out.
    pub fan_out_concurrency: usize,
    /// Caps for the per-table statistics.
    pub data_counts: DataCountLimits,
}

impl Default for CatalogLimits {
    fn default() -> Self {
        Self {
            page_size: 1000,
            list_rows: 8000,
            subcategories_per_category: 8000,
            subcategories_per_subcollection: 1000,
            subcollections_per_category: 1000,
            products_per_subcategory: 30_000,
            counted_products_per_subcategory: 10_000,
            search_results: 50,
            fan_out_concurrency: 8,
            data_counts: DataCountLimits::default(),
        }
    }
}

impl CatalogLimits {
    /// Page size, never zero.
    pub(crate) fn page_rows(&self) -> usize {
        self.page_size.max(1)
    }

    /// Fan-out width, never zero.
    pub(crate) fn concurrency(&self) -> usize {
        self.fan_out_concurrency.max(1)
    }
}

/// Per-table caps for [`crate::DataCounts`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataCountLimits {
    pub collections: usize,
    pub categories: usize,
    pub subcollections: usize,
    pub subcategories: usize,
    pub products: usize,
}

impl Default for DataCountLimits {
    fn default() -> Self {
        Self {
            collections: 100,
            categories: 1000,
            subcollections: 6000,
            subcategories: 900,
            products: 25_000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let limits = CatalogLimits::default();
        assert_eq!(limits.subcategories_per_category, 8000);
        assert_eq!(limits.products_per_subcategory, 30_000);
        assert_eq!(limits.search_results, 50);
        assert_eq!(limits.data_counts.products, 25_000);
    }

    #[test]
    fn test_partial_override() {
        let limits: CatalogLimits =
            serde_json::from_str(r#"{"search_results": 10, "data_counts": {"products": 5}}"#)
                .unwrap();
        assert_eq!(limits.search_results, 10);
        assert_eq!(limits.data_counts.products, 5);
        assert_eq!(limits.data_counts.categories, 1000);
        assert_eq!(limits.page_size, 1000);
    }

    #[test]
    fn test_zero_guards() {
        let limits = CatalogLimits {
            page_size: 0,
            fan_out_concurrency: 0,
            ..Default::default()
        };
        assert_eq!(limits.page_rows(), 1);
        assert_eq!(limits.concurrency(), 1);
    }
}
