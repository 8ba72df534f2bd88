//! CLI command implementations.

pub mod counts;
pub mod prefetch;
pub mod request;
pub mod routes;
pub mod search;
pub mod show;
pub mod stats;

use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Arguments for the routes command.
#[derive(Args)]
pub struct RoutesArgs {
    /// Write the route manifest to this file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the search command.
#[derive(Args)]
pub struct SearchArgs {
    /// Search text.
    pub query: String,
}

/// Arguments for the counts command.
#[derive(Args)]
pub struct CountsArgs {
    #[command(subcommand)]
    pub target: CountTarget,
}

/// What to count products under.
#[derive(Subcommand)]
pub enum CountTarget {
    /// Products in a category, with a per-subcollection breakdown.
    Category { slug: String },
    /// Products in a subcollection (by derived slug).
    Subcollection { slug: String },
    /// Products in a subcategory.
    Subcategory { slug: String },
}

/// Arguments for the show command.
#[derive(Args)]
pub struct ShowArgs {
    #[command(subcommand)]
    pub target: ShowTarget,
}

/// Which part of the catalog to show.
#[derive(Subcommand)]
pub enum ShowTarget {
    /// All collections.
    Collections,
    /// All categories.
    Categories,
    /// A collection and its categories.
    Collection { slug: String },
    /// A category and its subcollections and subcategories.
    Category { slug: String },
    /// A subcollection (by derived slug) and its subcategories.
    Subcollection { slug: String },
    /// A subcategory and its products.
    Subcategory { slug: String },
    /// A single product.
    Product { slug: String },
}

/// Arguments for the prefetch command.
#[derive(Args)]
pub struct PrefetchArgs {
    /// Page path, e.g. `/products/tools/hammers`.
    pub path: String,
}

/// Arguments for the request command.
#[derive(Args)]
pub struct RequestArgs {
    /// Request URI, e.g. `/api/search?q=hammer`.
    pub uri: String,

    /// Print response headers.
    #[arg(short = 'i', long)]
    pub include_headers: bool,
}

/// Arguments for the stats command.
#[derive(Args)]
pub struct StatsArgs {}
