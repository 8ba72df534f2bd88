//! Route manifest for static generation.

use std::time::Instant;

use anyhow::{Context as _, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;

use super::RoutesArgs;
use crate::context::Context;
use crate::output::format_elapsed;

#[derive(Serialize)]
struct RouteManifest {
    generated_at: DateTime<Utc>,
    count: usize,
    routes: Vec<String>,
}

/// Run the routes command.
pub async fn run(args: RoutesArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;
    let started = Instant::now();

    let spinner = ctx.output.spinner("Enumerating routes");
    let routes = catalog.all_routes(&ctx.query()).await;
    spinner.finish_and_clear();
    let routes = routes.context("Failed to enumerate routes")?;

    let manifest = RouteManifest {
        generated_at: Utc::now(),
        count: routes.len(),
        routes,
    };

    if let Some(path) = args.output {
        let path = ctx.resolve_path(&path);
        let content = serde_json::to_string_pretty(&manifest)?;
        std::fs::write(&path, content)
            .with_context(|| format!("Failed to write manifest: {}", path.display()))?;
        ctx.output.success(&format!(
            "Wrote {} routes to {} in {}",
            manifest.count,
            path.display(),
            format_elapsed(started.elapsed())
        ));
        return Ok(());
    }

    if ctx.output.is_json() {
        ctx.output.json(&manifest);
        return Ok(());
    }

    for route in &manifest.routes {
        println!("{route}");
    }
    ctx.output.debug(&format!(
        "{} routes in {}",
        manifest.count,
        format_elapsed(started.elapsed())
    ));
    Ok(())
}
