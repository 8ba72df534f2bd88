//! Image prefetch lists for storefront pages.
//!
//! Given a page path, returns the images that page will show so the client
//! can start loading them early. The page's own image is `eager`; images of
//! children and siblings are `lazy`.

use catalog_core::{Catalog, CatalogResult, QueryContext};
use catalog_store::CatalogStore;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

/// Browser loading hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Loading {
    Eager,
    Lazy,
}

/// One image to prefetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrefetchImage {
    pub src: String,
    pub alt: String,
    pub loading: Loading,
}

/// The page shapes that have images.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PagePath {
    Home,
    Category {
        category: String,
    },
    Subcategory {
        category: String,
        subcategory: String,
    },
    Product {
        category: String,
        subcategory: String,
        product: String,
    },
    Collection {
        collection: String,
    },
}

impl PagePath {
    /// Classify a page path. Any query or fragment is ignored and segments
    /// are percent-decoded; paths that are not a known page shape, or that
    /// fail to decode, yield `None`.
    pub fn parse(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments = path
            .split('/')
            .filter(|s| !s.is_empty())
            .map(|s| urlencoding::decode(s).map(|d| d.into_owned()).ok())
            .collect::<Option<Vec<String>>>()?;

        let page = match segments.as_slice() {
            [] => PagePath::Home,
            [products, category] if products == "products" => PagePath::Category {
                category: category.clone(),
            },
            [products, category, subcategory] if products == "products" => {
                PagePath::Subcategory {
                    category: category.clone(),
                    subcategory: subcategory.clone(),
                }
            }
            [products, category, subcategory, product] if products == "products" => {
                PagePath::Product {
                    category: category.clone(),
                    subcategory: subcategory.clone(),
                    product: product.clone(),
                }
            }
            [collection] => PagePath::Collection {
                collection: collection.clone(),
            },
            _ => return None,
        };
        Some(page)
    }
}

fn push(images: &mut Vec<PrefetchImage>, src: Option<&str>, alt: &str, loading: Loading) {
    if let Some(src) = src {
        images.push(PrefetchImage {
            src: src.to_string(),
            alt: alt.to_string(),
            loading,
        });
    }
}

/// Images to prefetch for `path`.
///
/// Unknown paths and missing records give an empty list. Catalog failures
/// are logged and also give an empty list.
pub async fn prefetch_images<S: CatalogStore>(
    catalog: &Catalog<S>,
    ctx: &QueryContext,
    path: &str,
) -> Vec<PrefetchImage> {
    let Some(page) = PagePath::parse(path) else {
        debug!(path, "No prefetch rule for path");
        return Vec::new();
    };

    match images_for(catalog, ctx, &page).await {
        Ok(images) => {
            debug!(path, images = images.len(), "Collected prefetch images");
            images
        }
        Err(e) => {
            error!(path, error = %e, "Failed to collect prefetch images");
            Vec::new()
        }
    }
}

async fn images_for<S: CatalogStore>(
    catalog: &Catalog<S>,
    ctx: &QueryContext,
    page: &PagePath,
) -> CatalogResult<Vec<PrefetchImage>> {
    let mut images = Vec::new();

    match page {
        PagePath::Home => {
            for category in catalog.all_categories(ctx).await? {
                push(&mut images, category.image_url.as_deref(), &category.name, Loading::Lazy);
            }
        }
        PagePath::Category { category } => {
            let Some(found) = catalog.category_by_slug(ctx, category).await? else {
                return Ok(images);
            };
            push(&mut images, found.image_url.as_deref(), &found.name, Loading::Eager);
            for subcategory in catalog.subcategories_for_category(ctx, category).await? {
                push(
                    &mut images,
                    subcategory.image_url.as_deref(),
                    &subcategory.name,
                    Loading::Lazy,
                );
            }
        }
        PagePath::Subcategory { subcategory, .. } => {
            let Some(found) = catalog.subcategory_by_slug(ctx, subcategory).await? else {
                return Ok(images);
            };
            push(&mut images, found.image_url.as_deref(), &found.name, Loading::Eager);
            for product in catalog.products_for_subcategory(ctx, subcategory).await? {
                push(&mut images, product.image_url.as_deref(), &product.name, Loading::Lazy);
            }
        }
        PagePath::Product {
            subcategory,
            product,
            ..
        } => {
            let Some(found) = catalog.product_by_slug(ctx, product).await? else {
                return Ok(images);
            };
            push(&mut images, found.image_url.as_deref(), &found.name, Loading::Eager);
            for sibling in catalog.products_for_subcategory(ctx, subcategory).await? {
                if sibling.slug != *product {
                    push(&mut images, sibling.image_url.as_deref(), &sibling.name, Loading::Lazy);
                }
            }
        }
        PagePath::Collection { collection } => {
            for category in catalog.categories_for_collection_slug(ctx, collection).await? {
                push(&mut images, category.image_url.as_deref(), &category.name, Loading::Lazy);
            }
        }
    }

    Ok(images)
}
