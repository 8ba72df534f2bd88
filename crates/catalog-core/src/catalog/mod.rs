//! The catalog query layer.
//!
//! [`Catalog`] wraps a [`CatalogStore`] and answers the storefront's read
//! queries: hierarchy traversal, unique lookups, capped counts, search and
//! route enumeration. All reads go through store indexes and are bounded by
//! [`CatalogLimits`].

mod count;
mod lookup;
mod routes;
mod search;
mod stats;

pub use count::SubcollectionCounts;
pub use routes::{category_path, product_path, subcategory_path, subcollection_path};
pub use search::SearchHit;
pub use stats::DataCounts;

use std::future::Future;
use std::sync::Arc;

use catalog_store::{CatalogStore, Cursor, Page, PageRequest, StoreError, StoreResult};
use tracing::warn;

use crate::capped::Capped;
use crate::context::QueryContext;
use crate::error::{CatalogError, CatalogResult};
use crate::limits::CatalogLimits;

/// Read-only query API over a catalog store.
///
/// Cheap to clone; clones share the store.
#[derive(Debug)]
pub struct Catalog<S> {
    store: Arc<S>,
    limits: CatalogLimits,
}

impl<S> Clone for Catalog<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            limits: self.limits.clone(),
        }
    }
}

impl<S: CatalogStore> Catalog<S> {
    /// Create a catalog with default limits.
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            limits: CatalogLimits::default(),
        }
    }

    /// Replace the query limits.
    pub fn with_limits(mut self, limits: CatalogLimits) -> Self {
        self.limits = limits;
        self
    }

    /// The limits queries run under.
    pub fn limits(&self) -> &CatalogLimits {
        &self.limits
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Page through an index until `cap` rows are read or it runs out.
    async fn collect_capped<T, F, Fut>(
        &self,
        ctx: &QueryContext,
        cap: usize,
        fetch: F,
    ) -> CatalogResult<Capped<T>>
    where
        F: FnMut(PageRequest) -> Fut,
        Fut: Future<Output = StoreResult<Page<T>>>,
    {
        let scan = self.scan(ctx, None, cap, fetch).await?;
        Ok(Capped {
            items: scan.items,
            truncated: scan.truncated,
        })
    }

    /// Read up to `cap` rows starting at `from`, keeping the cursor to
    /// resume from when rows are left over.
    async fn scan<T, F, Fut>(
        &self,
        ctx: &QueryContext,
        from: Option<Cursor>,
        cap: usize,
        mut fetch: F,
    ) -> CatalogResult<Scan<T>>
    where
        F: FnMut(PageRequest) -> Fut,
        Fut: Future<Output = StoreResult<Page<T>>>,
    {
        let page_rows = self.limits.page_rows();
        let mut items: Vec<T> = Vec::new();
        let mut request = PageRequest {
            cursor: from,
            limit: page_rows.min(cap),
        };

        loop {
            ctx.checkpoint()?;
            let page = fetch(request).await?;
            let received = page.items.len();
            items.extend(page.items);

            let Some(next) = page.next else {
                let truncated = items.len() > cap;
                items.truncate(cap);
                return Ok(Scan {
                    items,
                    resume: None,
                    truncated,
                });
            };

            if items.len() >= cap {
                // A backend that overfills a page leaves no exact resume point.
                let resume = (items.len() == cap).then_some(next);
                items.truncate(cap);
                return Ok(Scan {
                    items,
                    resume,
                    truncated: true,
                });
            }
            if received == 0 {
                return Err(StoreError::Query("empty page with a continuation cursor".into()).into());
            }
            request = PageRequest::after(next, page_rows.min(cap - items.len()));
        }
    }

    /// Page through an entire index.
    async fn collect_all<T, F, Fut>(&self, ctx: &QueryContext, fetch: F) -> CatalogResult<Vec<T>>
    where
        F: FnMut(PageRequest) -> Fut,
        Fut: Future<Output = StoreResult<Page<T>>>,
    {
        Ok(self.collect_capped(ctx, usize::MAX, fetch).await?.items)
    }

    /// Resolve a unique key. The fetch must request at most two rows.
    async fn unique<T, Fut>(
        &self,
        ctx: &QueryContext,
        entity: &'static str,
        key: &str,
        fetch: Fut,
    ) -> CatalogResult<Option<T>>
    where
        Fut: Future<Output = StoreResult<Page<T>>>,
    {
        ctx.checkpoint()?;
        let mut items = fetch.await?.items;
        match items.len() {
            0 | 1 => Ok(items.pop()),
            matches => {
                warn!(entity, key, matches, "Unique key matched multiple records");
                Err(CatalogError::IntegrityViolation {
                    entity,
                    key: key.to_string(),
                    matches,
                })
            }
        }
    }

    /// First row of an index, if any.
    async fn first<T, Fut>(&self, ctx: &QueryContext, fetch: Fut) -> CatalogResult<Option<T>>
    where
        Fut: Future<Output = StoreResult<Page<T>>>,
    {
        ctx.checkpoint()?;
        Ok(fetch.await?.items.into_iter().next())
    }
}

/// Rows read by [`Catalog::scan`].
struct Scan<T> {
    items: Vec<T>,
    /// Where to continue when `truncated` and the position is exact.
    resume: Option<Cursor>,
    /// Rows were left unread.
    truncated: bool,
}

/// Request used for unique lookups: one row to answer, one more to detect
/// duplicates.
fn unique_probe() -> PageRequest {
    PageRequest::first(2)
}
