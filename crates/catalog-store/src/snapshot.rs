//! Serialized catalog snapshots used to provision a store.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::StoreResult;
use crate::record::{Category, Collection, Product, Subcategory, Subcollection};

/// The full contents of a catalog, one array per table.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CatalogSnapshot {
    #[serde(default)]
    pub collections: Vec<Collection>,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub subcollections: Vec<Subcollection>,
    #[serde(default)]
    pub subcategories: Vec<Subcategory>,
    #[serde(default)]
    pub products: Vec<Product>,
}

impl CatalogSnapshot {
    /// Parse a snapshot from JSON text.
    pub fn from_json(json: &str) -> StoreResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a snapshot file.
    pub fn load(path: impl AsRef<Path>) -> StoreResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&content)
    }

    /// Total number of records across all tables.
    pub fn len(&self) -> usize {
        self.collections.len()
            + self.categories.len()
            + self.subcollections.len()
            + self.subcategories.len()
            + self.products.len()
    }

    /// Whether the snapshot holds no records.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StoreError;

    #[test]
    fn test_partial_snapshot() {
        let snapshot = CatalogSnapshot::from_json(
            r#"{"collections":[{"external_id":1,"name":"Tools","slug":"tools"}]}"#,
        )
        .unwrap();
        assert_eq!(snapshot.len(), 1);
        assert!(snapshot.products.is_empty());
    }

    #[test]
    fn test_bad_snapshot() {
        let err = CatalogSnapshot::from_json(r#"{"products": 3}"#).unwrap_err();
        assert!(matches!(err, StoreError::Snapshot(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = CatalogSnapshot::load("/nonexistent/catalog.json").unwrap_err();
        assert!(matches!(err, StoreError::Io(_)));
    }
}
