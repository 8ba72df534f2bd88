//! Browse the catalog hierarchy.

use anyhow::{Context as _, Result};
use catalog_core::{derive_slug, Catalog, QueryContext};
use catalog_store::MemoryStore;
use serde_json::json;

use super::{ShowArgs, ShowTarget};
use crate::context::Context;

/// Run the show command.
pub async fn run(args: ShowArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;
    let query = ctx.query();

    match args.target {
        ShowTarget::Collections => {
            let collections = catalog.all_collections(&query).await?;
            if ctx.output.is_json() {
                ctx.output.json(&collections);
                return Ok(());
            }
            ctx.output.header(&format!("{} collections", collections.len()));
            for c in &collections {
                ctx.output.list_item(&format!("{} ({})", c.name, c.slug));
            }
            ctx.output.truncated(collections.truncated, "Collection list");
        }
        ShowTarget::Categories => {
            let categories = catalog.all_categories(&query).await?;
            if ctx.output.is_json() {
                ctx.output.json(&categories);
                return Ok(());
            }
            ctx.output.header(&format!("{} categories", categories.len()));
            for c in &categories {
                ctx.output.list_item(&format!("{} (/{})", c.name, c.slug));
            }
            ctx.output.truncated(categories.truncated, "Category list");
        }
        ShowTarget::Collection { slug } => show_collection(&catalog, &query, ctx, &slug).await?,
        ShowTarget::Category { slug } => show_category(&catalog, &query, ctx, &slug).await?,
        ShowTarget::Subcollection { slug } => {
            let Some(sc) = catalog.subcollection_by_slug(&query, &slug).await? else {
                ctx.output.warn(&format!("No subcollection with slug '{slug}'"));
                return Ok(());
            };
            let subcategories = catalog
                .subcategories_for_subcollection(&query, sc.external_id)
                .await?;
            if ctx.output.is_json() {
                ctx.output
                    .json(&json!({ "subcollection": sc, "subcategories": subcategories }));
                return Ok(());
            }
            ctx.output.header(&sc.name);
            ctx.output.kv("id", &sc.external_id.to_string());
            ctx.output.kv("category", &sc.category_slug);
            for s in &subcategories {
                ctx.output.list_item(&format!("{} ({})", s.name, s.slug));
            }
            ctx.output.truncated(subcategories.truncated, "Subcategory list");
        }
        ShowTarget::Subcategory { slug } => {
            let Some(subcategory) = catalog.subcategory_by_slug(&query, &slug).await? else {
                ctx.output.warn(&format!("No subcategory with slug '{slug}'"));
                return Ok(());
            };
            let products = catalog.products_for_subcategory(&query, &slug).await?;
            if ctx.output.is_json() {
                ctx.output
                    .json(&json!({ "subcategory": subcategory, "products": products }));
                return Ok(());
            }
            ctx.output.header(&subcategory.name);
            let widths = [40, 10];
            for p in &products {
                ctx.output
                    .table_row(&[&p.slug, &p.price.to_decimal_string()], &widths);
            }
            ctx.output.truncated(products.truncated, "Product list");
        }
        ShowTarget::Product { slug } => {
            let product = catalog
                .product_by_slug(&query, &slug)
                .await
                .with_context(|| format!("Failed to look up product '{slug}'"))?;
            let Some(product) = product else {
                ctx.output.warn(&format!("No product with slug '{slug}'"));
                return Ok(());
            };
            if ctx.output.is_json() {
                ctx.output.json(&product);
                return Ok(());
            }
            ctx.output.header(&product.name);
            ctx.output.kv("slug", &product.slug);
            ctx.output.kv("price", &product.price.to_decimal_string());
            ctx.output.kv("subcategory", &product.subcategory_slug);
            if let Some(url) = &product.image_url {
                ctx.output.kv("image", url);
            }
            if !product.description.is_empty() {
                ctx.output.kv("description", &product.description);
            }
        }
    }
    Ok(())
}

async fn show_collection(
    catalog: &Catalog<MemoryStore>,
    query: &QueryContext,
    ctx: &Context,
    slug: &str,
) -> Result<()> {
    let Some(collection) = catalog.collection_by_slug(query, slug).await? else {
        ctx.output.warn(&format!("No collection with slug '{slug}'"));
        return Ok(());
    };
    let categories = catalog
        .categories_for_collection(query, collection.external_id)
        .await?;

    if ctx.output.is_json() {
        ctx.output
            .json(&json!({ "collection": collection, "categories": categories }));
        return Ok(());
    }
    ctx.output.header(&collection.name);
    for c in &categories {
        ctx.output.list_item(&format!("{} (/{})", c.name, c.slug));
    }
    ctx.output.truncated(categories.truncated, "Category list");
    Ok(())
}

async fn show_category(
    catalog: &Catalog<MemoryStore>,
    query: &QueryContext,
    ctx: &Context,
    slug: &str,
) -> Result<()> {
    let Some(category) = catalog.category_by_slug(query, slug).await? else {
        ctx.output.warn(&format!("No category with slug '{slug}'"));
        return Ok(());
    };
    let subcollections = catalog.subcollections_for_category(query, slug).await?;
    let subcategories = catalog.subcategories_for_category(query, slug).await?;
    let total = catalog.count_products_for_category(query, slug).await?;

    if ctx.output.is_json() {
        ctx.output.json(&json!({
            "category": category,
            "subcollections": subcollections,
            "subcategories": subcategories,
            "product_count": total,
        }));
        return Ok(());
    }

    ctx.output.header(&category.name);
    ctx.output.kv("products", &total.to_string());
    for sc in &subcollections {
        ctx.output.list_item(&format!(
            "{} (/{}/{})",
            sc.name,
            category.slug,
            derive_slug(&sc.name)
        ));
    }
    ctx.output.kv("subcategories", &subcategories.len().to_string());
    ctx.output.truncated(subcategories.truncated, "Subcategory list");
    Ok(())
}
