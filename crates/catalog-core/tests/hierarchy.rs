mod common;

use catalog_core::{CatalogError, QueryContext};
use catalog_store::SubcollectionId;
use common::{hardware, Fixture};

#[tokio::test]
async fn test_category_by_slug() {
    let catalog = hardware().catalog();
    let ctx = QueryContext::unbounded();

    let tools = catalog.category_by_slug(&ctx, "tools").await.unwrap().unwrap();
    assert_eq!(tools.name, "Tools");
    assert!(catalog.category_by_slug(&ctx, "garden").await.unwrap().is_none());
}

#[tokio::test]
async fn test_all_categories_ordered() {
    let catalog = hardware().catalog();
    let ctx = QueryContext::unbounded();

    let categories = catalog.all_categories(&ctx).await.unwrap();
    let slugs: Vec<&str> = categories.iter().map(|c| c.slug.as_str()).collect();
    assert_eq!(slugs, vec!["fasteners", "tools"]);
    assert!(!categories.truncated);
}

#[tokio::test]
async fn test_collections() {
    let catalog = hardware().collection(2, "apparel", "apparel").catalog();
    let ctx = QueryContext::unbounded();

    let all = catalog.all_collections(&ctx).await.unwrap();
    let names: Vec<&str> = all.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["apparel", "Hardware"]);

    let hardware = catalog.collection_by_slug(&ctx, "hardware").await.unwrap().unwrap();
    let categories = catalog
        .categories_for_collection(&ctx, hardware.external_id)
        .await
        .unwrap();
    assert_eq!(categories.len(), 2);

    let by_slug = catalog
        .categories_for_collection_slug(&ctx, "apparel")
        .await
        .unwrap();
    assert!(by_slug.is_empty());
}

#[tokio::test]
async fn test_subcollection_by_derived_slug() {
    let catalog = hardware().catalog();
    let ctx = QueryContext::unbounded();

    let sc = catalog
        .subcollection_by_slug(&ctx, "hand-tools")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(sc.external_id, SubcollectionId::new(7));
    assert_eq!(sc.category_slug, "tools");

    assert!(catalog
        .subcollection_by_slug(&ctx, "Hand Tools")
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn test_subcollections_for_category() {
    let catalog = hardware().catalog();
    let ctx = QueryContext::unbounded();

    let subcollections = catalog.subcollections_for_category(&ctx, "tools").await.unwrap();
    let names: Vec<&str> = subcollections.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Hand Tools", "Power Tools"]);
}

#[tokio::test]
async fn test_subcategories() {
    let catalog = hardware().catalog();
    let ctx = QueryContext::unbounded();

    let by_id = catalog
        .subcategories_for_subcollection(&ctx, SubcollectionId::new(7))
        .await
        .unwrap();
    let slugs: Vec<&str> = by_id.iter().map(|s| s.slug.as_str()).collect();
    assert_eq!(slugs, vec!["hammers", "wrenches"]);

    let by_slug = catalog
        .subcategories_for_subcollection_slug(&ctx, "hand-tools")
        .await
        .unwrap();
    assert_eq!(by_slug, by_id);

    let for_category = catalog.subcategories_for_category(&ctx, "tools").await.unwrap();
    let slugs: Vec<&str> = for_category.iter().map(|s| s.slug.as_str()).collect();
    assert_eq!(slugs, vec!["drills", "hammers", "wrenches"]);
    assert!(!for_category.truncated);
}

#[tokio::test]
async fn test_products_for_subcategory_ordered() {
    let catalog = hardware().catalog();
    let ctx = QueryContext::unbounded();

    let products = catalog.products_for_subcategory(&ctx, "hammers").await.unwrap();
    let slugs: Vec<&str> = products.iter().map(|p| p.slug.as_str()).collect();
    assert_eq!(slugs, vec!["ball-peen-hammer", "claw-hammer", "sledge-hammer"]);

    assert!(catalog
        .products_for_subcategory(&ctx, "saws")
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn test_orphans_are_skipped() {
    let catalog = hardware()
        .category("ghost", "Ghost Category", 99)
        .subcategory("lost", "Lost", 404)
        .product("stray", "Stray Wrench", "nowhere", 100)
        .catalog();
    let ctx = QueryContext::unbounded();

    let subcategories = catalog.subcategories_for_category(&ctx, "ghost").await.unwrap();
    assert!(subcategories.is_empty());

    let stray = catalog.product_by_slug(&ctx, "stray").await.unwrap();
    assert!(stray.is_some());
}

#[tokio::test]
async fn test_duplicate_slug_is_integrity_violation() {
    let catalog = hardware()
        .category("tools", "Tools Again", 1)
        .subcollection(70, "hand tools", "fasteners")
        .catalog();
    let ctx = QueryContext::unbounded();

    let err = catalog.category_by_slug(&ctx, "tools").await.unwrap_err();
    assert!(err.is_integrity_violation());
    assert!(matches!(
        err,
        CatalogError::IntegrityViolation { entity: "category", matches: 2, .. }
    ));

    let err = catalog.subcollection_by_slug(&ctx, "hand-tools").await.unwrap_err();
    assert!(err.is_integrity_violation());
}

#[tokio::test]
async fn test_repeated_queries_are_identical() {
    let catalog = hardware().catalog();
    let ctx = QueryContext::unbounded();

    let first = catalog.subcategories_for_category(&ctx, "tools").await.unwrap();
    let second = catalog.subcategories_for_category(&ctx, "tools").await.unwrap();
    assert_eq!(first, second);

    let empty = Fixture::new().catalog();
    assert!(empty.all_categories(&ctx).await.unwrap().is_empty());
}
