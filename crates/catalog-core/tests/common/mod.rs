//! Shared fixture for catalog integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use catalog_core::{Catalog, CatalogLimits};
use catalog_store::{
    CatalogSnapshot, Category, Collection, CollectionId, MemoryStore, Price, Product, Subcategory,
    Subcollection, SubcollectionId,
};

/// Builder for small in-memory catalogs.
#[derive(Default)]
pub struct Fixture {
    snapshot: CatalogSnapshot,
}

impl Fixture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn collection(mut self, id: i64, name: &str, slug: &str) -> Self {
        self.snapshot.collections.push(Collection {
            external_id: CollectionId::new(id),
            name: name.to_string(),
            slug: slug.to_string(),
        });
        self
    }

    pub fn category(mut self, slug: &str, name: &str, collection_id: i64) -> Self {
        self.snapshot.categories.push(Category {
            slug: slug.to_string(),
            name: name.to_string(),
            collection_id: CollectionId::new(collection_id),
            image_url: Some(format!("https://img.test/{slug}.png")),
        });
        self
    }

    pub fn subcollection(mut self, id: i64, name: &str, category_slug: &str) -> Self {
        self.snapshot.subcollections.push(Subcollection {
            external_id: SubcollectionId::new(id),
            name: name.to_string(),
            category_slug: category_slug.to_string(),
        });
        self
    }

    pub fn subcategory(mut self, slug: &str, name: &str, subcollection_id: i64) -> Self {
        self.snapshot.subcategories.push(Subcategory {
            slug: slug.to_string(),
            name: name.to_string(),
            subcollection_id: SubcollectionId::new(subcollection_id),
            image_url: Some(format!("https://img.test/{slug}.png")),
        });
        self
    }

    pub fn product(mut self, slug: &str, name: &str, subcategory_slug: &str, cents: i64) -> Self {
        self.snapshot.products.push(Product {
            slug: slug.to_string(),
            name: name.to_string(),
            description: format!("{name} description"),
            price: Price::from_cents(cents),
            subcategory_slug: subcategory_slug.to_string(),
            image_url: None,
        });
        self
    }

    /// Add `n` products named `{prefix} {i}` under one subcategory.
    pub fn products(mut self, prefix: &str, subcategory_slug: &str, n: usize) -> Self {
        for i in 0..n {
            let name = format!("{prefix} {i:03}");
            let slug = format!("{}-{i:03}", prefix.to_lowercase());
            self = self.product(&slug, &name, subcategory_slug, 100 + i as i64);
        }
        self
    }

    pub fn snapshot(&self) -> CatalogSnapshot {
        self.snapshot.clone()
    }

    pub fn catalog(self) -> Catalog<MemoryStore> {
        Catalog::new(Arc::new(MemoryStore::new(self.snapshot)))
    }

    pub fn catalog_with(self, limits: CatalogLimits) -> Catalog<MemoryStore> {
        self.catalog().with_limits(limits)
    }
}

/// A hardware catalog with one collection, two categories and a handful of
/// products.
pub fn hardware() -> Fixture {
    Fixture::new()
        .collection(1, "Hardware", "hardware")
        .category("tools", "Tools", 1)
        .category("fasteners", "Fasteners", 1)
        .subcollection(7, "Hand Tools", "tools")
        .subcollection(8, "Power Tools", "tools")
        .subcollection(9, "Screws", "fasteners")
        .subcategory("hammers", "Hammers", 7)
        .subcategory("wrenches", "Wrenches", 7)
        .subcategory("drills", "Drills", 8)
        .subcategory("wood-screws", "Wood Screws", 9)
        .product("claw-hammer", "Claw Hammer", "hammers", 1999)
        .product("sledge-hammer", "Sledge Hammer", "hammers", 4999)
        .product("ball-peen-hammer", "Ball Peen Hammer", "hammers", 1599)
        .product("pipe-wrench", "Pipe Wrench", "wrenches", 2499)
        .product("adjustable-wrench", "Adjustable Wrench", "wrenches", 1899)
        .product("cordless-drill", "Cordless Drill", "drills", 8999)
        .product("deck-screw", "Deck Screw Box", "wood-screws", 899)
}
