mod common;

use std::time::Duration;

use catalog_core::{derive_slug, CancelToken, CatalogError, QueryContext};
use common::hardware;

#[tokio::test]
async fn test_routes_depth_first() {
    let catalog = hardware().catalog();
    let ctx = QueryContext::unbounded();

    let routes = catalog.all_routes(&ctx).await.unwrap();
    let head: Vec<&str> = routes.iter().take(6).map(String::as_str).collect();
    assert_eq!(
        head,
        vec![
            "/",
            "/hardware",
            "/products/fasteners",
            "/products/fasteners#screws",
            "/products/fasteners/wood-screws",
            "/products/fasteners/wood-screws/deck-screw",
        ]
    );
    let tools: Vec<&str> = routes.iter().skip(6).map(String::as_str).collect();
    assert_eq!(
        tools,
        vec![
            "/products/tools",
            "/products/tools#hand-tools",
            "/products/tools/hammers",
            "/products/tools/hammers/ball-peen-hammer",
            "/products/tools/hammers/claw-hammer",
            "/products/tools/hammers/sledge-hammer",
            "/products/tools/wrenches",
            "/products/tools/wrenches/adjustable-wrench",
            "/products/tools/wrenches/pipe-wrench",
            "/products/tools#power-tools",
            "/products/tools/drills",
            "/products/tools/drills/cordless-drill",
        ]
    );
}

#[tokio::test]
async fn test_routes_resolve() {
    let catalog = hardware().catalog();
    let ctx = QueryContext::unbounded();

    for route in catalog.all_routes(&ctx).await.unwrap() {
        if let Some((page, section)) = route.split_once('#') {
            let category = page.trim_start_matches("/products/");
            let sc = catalog
                .subcollection_by_slug(&ctx, section)
                .await
                .unwrap()
                .unwrap();
            assert_eq!(sc.category_slug, category);
            assert_eq!(derive_slug(&sc.name), section);
            continue;
        }

        let segments: Vec<&str> = route.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => {}
            [collection] => {
                assert!(catalog.collection_by_slug(&ctx, collection).await.unwrap().is_some());
            }
            ["products", category] => {
                assert!(catalog.category_by_slug(&ctx, category).await.unwrap().is_some());
            }
            ["products", category, subcategory] => {
                let sub = catalog
                    .subcategory_by_slug(&ctx, subcategory)
                    .await
                    .unwrap()
                    .unwrap();
                let sc = catalog
                    .subcollection_by_id(&ctx, sub.subcollection_id)
                    .await
                    .unwrap()
                    .unwrap();
                assert_eq!(sc.category_slug, **category);
            }
            ["products", _, subcategory, product] => {
                let p = catalog.product_by_slug(&ctx, product).await.unwrap().unwrap();
                assert_eq!(p.subcategory_slug, **subcategory);
            }
            other => panic!("unexpected route shape {other:?}"),
        }
    }
}

#[tokio::test]
async fn test_cancelled_query() {
    let catalog = hardware().catalog();
    let token = CancelToken::new();
    let ctx = QueryContext::with_timeout(Duration::from_secs(30)).with_cancel_token(token.clone());
    token.cancel();

    let err = catalog.all_routes(&ctx).await.unwrap_err();
    assert!(matches!(err, CatalogError::Cancelled));
    assert!(err.is_interrupted());
}

#[tokio::test]
async fn test_expired_deadline() {
    let catalog = hardware().catalog();
    let ctx = QueryContext::with_timeout(Duration::ZERO);

    let err = catalog.category_by_slug(&ctx, "tools").await.unwrap_err();
    assert!(matches!(err, CatalogError::DeadlineExceeded(_)));
}

#[tokio::test]
async fn test_messy_subcollection_names_round_trip() {
    let catalog = hardware()
        .subcollection(20, "  Power   SAWS ", "tools")
        .subcategory("circular-saws", "Circular Saws", 20)
        .catalog();
    let ctx = QueryContext::unbounded();

    let routes = catalog.all_routes(&ctx).await.unwrap();
    let expected = format!("/products/tools#{}", derive_slug("  Power   SAWS "));
    assert_eq!(expected, "/products/tools#-power-saws-");
    assert!(routes.contains(&expected));
    assert!(routes.contains(&"/products/tools/circular-saws".to_string()));

    let sc = catalog
        .subcollection_by_slug(&ctx, "-power-saws-")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(sc.external_id.get(), 20);

    let subcategories = catalog
        .subcategories_for_subcollection_slug(&ctx, "-power-saws-")
        .await
        .unwrap();
    assert_eq!(subcategories.len(), 1);
}
