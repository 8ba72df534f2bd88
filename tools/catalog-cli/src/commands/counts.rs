//! Product counts.

use anyhow::{Context as _, Result};
use serde_json::json;

use super::{CountTarget, CountsArgs};
use crate::context::Context;
use crate::output::count_badge;

/// Run the counts command.
pub async fn run(args: CountsArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;
    let query = ctx.query();

    match args.target {
        CountTarget::Category { slug } => {
            let per_subcollection = catalog
                .product_counts_per_subcollection(&query, &slug)
                .await
                .with_context(|| format!("Failed to count products in category '{slug}'"))?;
            let total = per_subcollection.total();

            if ctx.output.is_json() {
                ctx.output.json(&json!({
                    "category": slug,
                    "total": total,
                    "subcollections": per_subcollection.counts,
                    "truncated": per_subcollection.truncated,
                }));
                return Ok(());
            }

            ctx.output.header(&format!("Category {slug}"));
            ctx.output.kv("products", &count_badge(total));
            for (id, count) in &per_subcollection.counts {
                ctx.output
                    .list_item(&format!("subcollection {id}: {}", count_badge(*count)));
            }
            ctx.output
                .truncated(per_subcollection.truncated, "Subcollection list");
        }
        CountTarget::Subcollection { slug } => {
            let count = catalog
                .count_products_for_subcollection_slug(&query, &slug)
                .await
                .with_context(|| format!("Failed to count products in subcollection '{slug}'"))?;
            print_count(ctx, "subcollection", &slug, count);
        }
        CountTarget::Subcategory { slug } => {
            let count = catalog
                .count_products_for_subcategory(&query, &slug)
                .await
                .with_context(|| format!("Failed to count products in subcategory '{slug}'"))?;
            print_count(ctx, "subcategory", &slug, count);
        }
    }
    Ok(())
}

fn print_count(ctx: &Context, kind: &str, slug: &str, count: catalog_core::Count) {
    if ctx.output.is_json() {
        let mut body = serde_json::Map::new();
        body.insert(kind.to_string(), json!(slug));
        body.insert("count".to_string(), json!(count));
        ctx.output.json(&body);
        return;
    }
    ctx.output.kv(&format!("{kind} {slug}"), &count_badge(count));
}
