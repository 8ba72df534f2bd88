//! Issue a request against the storefront API in-process.

use anyhow::{Context as _, Result};
use catalog_storefront::Storefront;
use http::Request;

use super::RequestArgs;
use crate::context::Context;

/// Run the request command.
pub async fn run(args: RequestArgs, ctx: &Context) -> Result<()> {
    let mut storefront = Storefront::new(ctx.catalog()?);
    if let Some(timeout) = ctx.timeout() {
        storefront = storefront.with_timeout(timeout);
    }

    let request = Request::get(args.uri.as_str())
        .body(())
        .with_context(|| format!("Invalid request URI: {}", args.uri))?;
    let response = storefront.handle(&request).await;

    if args.include_headers {
        eprintln!("{:?} {}", response.version(), response.status());
        for (name, value) in response.headers() {
            eprintln!("{}: {}", name, value.to_str().unwrap_or("<binary>"));
        }
        eprintln!();
    }
    println!("{}", String::from_utf8_lossy(response.body()));

    if !response.status().is_success() {
        ctx.output
            .warn(&format!("Request returned {}", response.status()));
    }
    Ok(())
}
