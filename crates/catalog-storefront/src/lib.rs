//! Storefront API endpoints over the catalog query layer.
//!
//! - `GET /api/prefetch-images/{page path}` lists the images a page will
//!   render, so the client can preload them.
//! - `GET /api/search?q=...` returns product search results with links.
//!
//! Both are plain `http::Request` → `http::Response<Vec<u8>>` functions on
//! [`Storefront`], so any server can mount them.

mod cache;
mod error;
mod handler;
mod prefetch;
mod search;

pub use cache::{CachePolicy, CacheScope};
pub use error::{StorefrontError, StorefrontResult};
pub use handler::{Storefront, PREFETCH_PREFIX, SEARCH_PATH};
pub use prefetch::{prefetch_images, Loading, PagePath, PrefetchImage};
pub use search::{search_items, SearchItem};
