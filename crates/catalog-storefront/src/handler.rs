//! Request routing for the storefront API.

use std::time::Duration;

use catalog_core::{Catalog, QueryContext};
use catalog_store::CatalogStore;
use http::{header, Request, Response, StatusCode};
use serde::Serialize;
use tracing::{error, info};

use crate::cache::CachePolicy;
use crate::error::StorefrontResult;
use crate::prefetch::{prefetch_images, PrefetchImage};
use crate::search::{search_items, SearchItem};

/// Path prefix of the image prefetch endpoint; the page path follows it.
pub const PREFETCH_PREFIX: &str = "/api/prefetch-images/";

/// Path of the search endpoint.
pub const SEARCH_PATH: &str = "/api/search";

/// Storefront API over a catalog.
#[derive(Debug)]
pub struct Storefront<S> {
    catalog: Catalog<S>,
    timeout: Option<Duration>,
}

impl<S> Clone for Storefront<S> {
    fn clone(&self) -> Self {
        Self {
            catalog: self.catalog.clone(),
            timeout: self.timeout,
        }
    }
}

impl<S: CatalogStore> Storefront<S> {
    pub fn new(catalog: Catalog<S>) -> Self {
        Self {
            catalog,
            timeout: None,
        }
    }

    /// Bound every request's catalog queries by `timeout`.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn catalog(&self) -> &Catalog<S> {
        &self.catalog
    }

    fn context(&self) -> QueryContext {
        match self.timeout {
            Some(timeout) => QueryContext::with_timeout(timeout),
            None => QueryContext::unbounded(),
        }
    }

    /// Answer one request. Failures become a 500 response.
    pub async fn handle<B>(&self, req: &Request<B>) -> Response<Vec<u8>> {
        let path = req.uri().path();
        let result = if let Some(page) = path.strip_prefix(PREFETCH_PREFIX) {
            self.prefetch_response(page).await
        } else if path == SEARCH_PATH {
            let q = query_param(req.uri().query().unwrap_or(""), "q");
            self.search_response(q.as_deref()).await
        } else {
            text_response(StatusCode::NOT_FOUND, "Not found")
        };

        let response = result.unwrap_or_else(|e| {
            error!(path, error = %e, "Storefront request failed");
            Response::builder()
                .status(StatusCode::INTERNAL_SERVER_ERROR)
                .body(b"Internal server error".to_vec())
                .unwrap_or_default()
        });
        info!(path, status = response.status().as_u16(), "Handled storefront request");
        response
    }

    /// `{"images": [...]}` for the page at `page_path`.
    pub async fn prefetch_response(&self, page_path: &str) -> StorefrontResult<Response<Vec<u8>>> {
        if page_path.is_empty() {
            return text_response(StatusCode::BAD_REQUEST, "Missing url parameter");
        }
        let images = prefetch_images(&self.catalog, &self.context(), page_path).await;
        json_response(&PrefetchBody { images }, CachePolicy::PREFETCH)
    }

    /// Search results for `q`. A missing or empty query returns `[]` with no
    /// caching directive.
    pub async fn search_response(&self, q: Option<&str>) -> StorefrontResult<Response<Vec<u8>>> {
        let Some(q) = q.filter(|q| !q.is_empty()) else {
            return json_response::<[SearchItem]>(&[], CachePolicy::none());
        };
        let items = search_items(&self.catalog, &self.context(), q).await?;
        json_response(&items, CachePolicy::SEARCH)
    }
}

#[derive(Serialize)]
struct PrefetchBody {
    images: Vec<PrefetchImage>,
}

fn json_response<T: Serialize + ?Sized>(
    body: &T,
    policy: CachePolicy,
) -> StorefrontResult<Response<Vec<u8>>> {
    let mut builder = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(cache_control) = policy.cache_control_header() {
        builder = builder.header(header::CACHE_CONTROL, cache_control);
    }
    Ok(builder.body(serde_json::to_vec(body)?)?)
}

fn text_response(status: StatusCode, body: &str) -> StorefrontResult<Response<Vec<u8>>> {
    Ok(Response::builder()
        .status(status)
        .header(header::CONTENT_TYPE, "text/plain; charset=utf-8")
        .body(body.as_bytes().to_vec())?)
}

/// First value of `key` in a query string, form-decoded.
fn query_param(query: &str, key: &str) -> Option<String> {
    query.split('&').find_map(|pair| {
        let mut parts = pair.splitn(2, '=');
        let name = parts.next()?;
        if name != key {
            return None;
        }
        let value = parts.next().unwrap_or("").replace('+', " ");
        urlencoding::decode(&value).ok().map(|v| v.into_owned())
    })
}
