mod common;

use catalog_core::{CatalogLimits, Count, QueryContext};
use catalog_store::SubcollectionId;
use common::hardware;

#[tokio::test]
async fn test_subcategory_count() {
    let catalog = hardware().catalog();
    let ctx = QueryContext::unbounded();

    let hammers = catalog.count_products_for_subcategory(&ctx, "hammers").await.unwrap();
    assert_eq!(hammers, Count::exact(3));

    let missing = catalog.count_products_for_subcategory(&ctx, "saws").await.unwrap();
    assert_eq!(missing, Count::ZERO);
}

#[tokio::test]
async fn test_counts_are_consistent() {
    let catalog = hardware().catalog();
    let ctx = QueryContext::unbounded();

    let category = catalog.count_products_for_category(&ctx, "tools").await.unwrap();

    let mut expected = Count::ZERO;
    for sc in catalog.subcategories_for_category(&ctx, "tools").await.unwrap() {
        expected = expected
            + catalog
                .count_products_for_subcategory(&ctx, &sc.slug)
                .await
                .unwrap();
    }
    assert_eq!(category, expected);
    assert_eq!(category, Count::exact(6));

    let hand_tools = catalog
        .count_products_for_subcollection(&ctx, SubcollectionId::new(7))
        .await
        .unwrap();
    assert_eq!(hand_tools, Count::exact(5));

    let by_slug = catalog
        .count_products_for_subcollection_slug(&ctx, "hand-tools")
        .await
        .unwrap();
    assert_eq!(by_slug, hand_tools);
}

#[tokio::test]
async fn test_counts_per_subcollection() {
    let catalog = hardware().catalog();
    let ctx = QueryContext::unbounded();

    let per = catalog
        .product_counts_per_subcollection(&ctx, "tools")
        .await
        .unwrap();
    assert_eq!(per.counts.len(), 2);
    assert_eq!(per.counts["7"], Count::exact(5));
    assert_eq!(per.counts["8"], Count::exact(1));
    assert_eq!(per.total(), Count::exact(6));
    assert!(!per.truncated);

    let empty = catalog
        .product_counts_per_subcollection(&ctx, "garden")
        .await
        .unwrap();
    assert!(empty.counts.is_empty());
    assert_eq!(empty.total(), Count::ZERO);
}

#[tokio::test]
async fn test_inexact_count_propagates() {
    let limits = CatalogLimits {
        counted_products_per_subcategory: 2,
        ..Default::default()
    };
    let catalog = hardware().catalog_with(limits);
    let ctx = QueryContext::unbounded();

    let category = catalog.count_products_for_category(&ctx, "tools").await.unwrap();
    assert!(!category.exact);
    assert_eq!(category.to_string(), "5+");
}

#[tokio::test]
async fn test_data_counts() {
    let catalog = hardware().catalog();
    let ctx = QueryContext::unbounded();

    let counts = catalog.data_counts(&ctx).await.unwrap();
    assert_eq!(counts.collections, Count::exact(1));
    assert_eq!(counts.categories, Count::exact(2));
    assert_eq!(counts.subcollections, Count::exact(3));
    assert_eq!(counts.subcategories, Count::exact(4));
    assert_eq!(counts.products, Count::exact(7));
    assert_eq!(counts.iter().count(), 5);

    let mut limits = CatalogLimits::default();
    limits.data_counts.products = 5;
    let capped = hardware().catalog_with(limits).data_counts(&ctx).await.unwrap();
    assert_eq!(capped.products, Count::at_least(5));
}
