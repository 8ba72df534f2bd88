//! Table statistics.

use anyhow::{Context as _, Result};

use super::StatsArgs;
use crate::context::Context;
use crate::output::count_badge;

/// Run the stats command.
pub async fn run(_args: StatsArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;
    let counts = catalog
        .data_counts(&ctx.query())
        .await
        .context("Failed to count catalog rows")?;

    if ctx.output.is_json() {
        ctx.output.json(&counts);
        return Ok(());
    }

    ctx.output.header("Catalog statistics");
    let widths = [16, 10];
    ctx.output.table_row(&["TABLE", "ROWS"], &widths);
    for (table, count) in counts.iter() {
        ctx.output
            .table_row(&[table.name(), &count_badge(count)], &widths);
    }
    Ok(())
}
