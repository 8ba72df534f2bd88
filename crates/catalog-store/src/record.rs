//! Catalog record types.
//!
//! The catalog is a strict tree: Collection → Category → Subcollection →
//! Subcategory → Product. Parent links are either a slug or a numeric
//! external id, mirroring the indexes the store keeps.

use crate::ids::{CollectionId, SubcollectionId};
use crate::price::Price;
use serde::{Deserialize, Deserializer, Serialize};

/// A top-level collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Collection {
    /// Linkage key referenced by categories.
    pub external_id: CollectionId,
    /// Display name.
    pub name: String,
    /// URL slug (unique).
    pub slug: String,
}

/// A category inside a collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    /// URL slug (unique).
    pub slug: String,
    /// Display name.
    pub name: String,
    /// Parent collection.
    pub collection_id: CollectionId,
    /// Category image.
    #[serde(default, deserialize_with = "non_empty")]
    pub image_url: Option<String>,
}

/// A subcollection inside a category.
///
/// Subcollections have no stored slug; routes use the slug derived from
/// [`Subcollection::name`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Subcollection {
    /// Linkage key referenced by subcategories.
    pub external_id: SubcollectionId,
    /// Display name.
    pub name: String,
    /// Parent category.
    pub category_slug: String,
}

/// A subcategory inside a subcollection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Subcategory {
    /// URL slug (unique).
    pub slug: String,
    /// Display name.
    pub name: String,
    /// Parent subcollection.
    pub subcollection_id: SubcollectionId,
    /// Subcategory image.
    #[serde(default, deserialize_with = "non_empty")]
    pub image_url: Option<String>,
}

/// A product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Product {
    /// URL slug (unique).
    pub slug: String,
    /// Display name (full-text indexed).
    pub name: String,
    /// Long description.
    #[serde(default)]
    pub description: String,
    /// Unit price.
    pub price: Price,
    /// Parent subcategory.
    pub subcategory_slug: String,
    /// Product image.
    #[serde(default, deserialize_with = "non_empty")]
    pub image_url: Option<String>,
}

/// Treat `""` the same as a missing image.
fn non_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}
