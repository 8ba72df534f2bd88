//! Product search.

use anyhow::{Context as _, Result};

use super::SearchArgs;
use crate::context::Context;

/// Run the search command.
pub async fn run(args: SearchArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;
    let hits = catalog
        .search_products(&ctx.query(), &args.query)
        .await
        .with_context(|| format!("Search for '{}' failed", args.query))?;

    if ctx.output.is_json() {
        ctx.output.json(&hits);
        return Ok(());
    }

    if hits.is_empty() {
        ctx.output.info(&format!("No products match '{}'", args.query));
        return Ok(());
    }

    ctx.output.header(&format!("{} results for '{}'", hits.len(), args.query));
    let widths = [32, 10, 48];
    ctx.output.table_row(&["PRODUCT", "PRICE", "PATH"], &widths);
    for hit in &hits {
        let path = format!(
            "/products/{}/{}/{}",
            hit.category_slug, hit.product.subcategory_slug, hit.product.slug
        );
        let price = hit.product.price.to_decimal_string();
        ctx.output
            .table_row(&[&hit.product.name, &price, &path], &widths);
    }
    Ok(())
}
