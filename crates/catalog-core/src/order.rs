//! Deterministic ordering for query results.
//!
//! Names compare case-insensitively first, then by exact text so that
//! differently-cased names still have a fixed order. Remaining ties break on
//! the record's unique key.

use std::cmp::Ordering;

use catalog_store::{Category, Collection, Product, Subcategory, Subcollection};

/// Case-insensitive comparison with an exact-text tie break.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    let folded_a = a.chars().flat_map(char::to_lowercase);
    let folded_b = b.chars().flat_map(char::to_lowercase);
    folded_a.cmp(folded_b).then_with(|| a.cmp(b))
}

pub(crate) fn sort_collections(items: &mut [Collection]) {
    items.sort_by(|a, b| compare_names(&a.name, &b.name).then_with(|| a.slug.cmp(&b.slug)));
}

pub(crate) fn sort_categories(items: &mut [Category]) {
    items.sort_by(|a, b| compare_names(&a.name, &b.name).then_with(|| a.slug.cmp(&b.slug)));
}

pub(crate) fn sort_subcollections(items: &mut [Subcollection]) {
    items.sort_by(|a, b| {
        compare_names(&a.name, &b.name).then_with(|| a.external_id.cmp(&b.external_id))
    });
}

pub(crate) fn sort_subcategories(items: &mut [Subcategory]) {
    items.sort_by(|a, b| compare_names(&a.name, &b.name).then_with(|| a.slug.cmp(&b.slug)));
}

pub(crate) fn sort_products(items: &mut [Product]) {
    items.sort_by(|a, b| compare_names(&a.slug, &b.slug).then_with(|| a.name.cmp(&b.name)));
}
