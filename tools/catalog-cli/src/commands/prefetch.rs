//! Image prefetch list for a page.

use anyhow::Result;
use catalog_storefront::{prefetch_images, Loading};

use super::PrefetchArgs;
use crate::context::Context;

/// Run the prefetch command.
pub async fn run(args: PrefetchArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;
    let images = prefetch_images(&catalog, &ctx.query(), &args.path).await;

    if ctx.output.is_json() {
        ctx.output.json(&images);
        return Ok(());
    }

    if images.is_empty() {
        ctx.output.info(&format!("No images for {}", args.path));
        return Ok(());
    }

    ctx.output.header(&format!("{} images for {}", images.len(), args.path));
    let widths = [6, 32, 60];
    for image in &images {
        let loading = match image.loading {
            Loading::Eager => "eager",
            Loading::Lazy => "lazy",
        };
        ctx.output
            .table_row(&[loading, &image.alt, &image.src], &widths);
    }
    Ok(())
}
