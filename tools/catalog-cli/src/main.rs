//! Catalog CLI - query a storefront catalog snapshot from the command line.
//!
//! Commands:
//! - `catalog routes` - Enumerate every page path (static generation manifest)
//! - `catalog search` - Search products by name
//! - `catalog counts` - Product counts for a category, subcollection or subcategory
//! - `catalog show` - Browse the hierarchy
//! - `catalog prefetch` - Images a page will prefetch
//! - `catalog request` - Call the storefront API in-process
//! - `catalog stats` - Row counts per table

mod commands;
mod config;
mod context;
mod logging;
mod output;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{
    CountsArgs, PrefetchArgs, RequestArgs, RoutesArgs, SearchArgs, ShowArgs, StatsArgs,
};

/// Catalog CLI - query and export a storefront catalog
#[derive(Parser)]
#[command(name = "catalog")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Snapshot file (overrides [store] snapshot)
    #[arg(short, long, global = true)]
    snapshot: Option<PathBuf>,

    /// Query timeout in milliseconds (overrides [query] timeout_ms)
    #[arg(long, global = true)]
    timeout_ms: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Enumerate every storefront page path
    Routes(RoutesArgs),

    /// Search products by name
    Search(SearchArgs),

    /// Count products under a category, subcollection or subcategory
    Counts(CountsArgs),

    /// Show part of the catalog hierarchy
    Show(ShowArgs),

    /// List the images prefetched for a page
    Prefetch(PrefetchArgs),

    /// Send a request to the storefront API
    Request(RequestArgs),

    /// Show row counts per table
    Stats(StatsArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config, then apply flag overrides
    let mut ctx = match context::Context::load(cli.config.as_deref(), output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };
    if let Some(snapshot) = cli.snapshot {
        ctx.config.store.snapshot = Some(snapshot);
    }
    if let Some(timeout_ms) = cli.timeout_ms {
        ctx.config.query.timeout_ms = Some(timeout_ms);
    }

    logging::init(&ctx.config.log, cli.verbose);

    // Execute command
    let result = match cli.command {
        Commands::Routes(args) => commands::routes::run(args, &ctx).await,
        Commands::Search(args) => commands::search::run(args, &ctx).await,
        Commands::Counts(args) => commands::counts::run(args, &ctx).await,
        Commands::Show(args) => commands::show::run(args, &ctx).await,
        Commands::Prefetch(args) => commands::prefetch::run(args, &ctx).await,
        Commands::Request(args) => commands::request::run(args, &ctx).await,
        Commands::Stats(args) => commands::stats::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
