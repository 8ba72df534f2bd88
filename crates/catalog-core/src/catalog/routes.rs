//! Enumeration of every storefront page path.
//!
//! Paths follow the storefront's page scheme:
//!
//! | Page | Path |
//! |---|---|
//! | home | `/` |
//! | collection | `/{collection}` |
//! | category | `/products/{category}` |
//! | subcollection section | `/products/{category}#{subcollection}` |
//! | subcategory | `/products/{category}/{subcategory}` |
//! | product | `/products/{category}/{subcategory}/{product}` |
//!
//! Subcollections have no page of their own; they are sections of the
//! category page, addressed by their derived slug.

use catalog_store::CatalogStore;
use tracing::{info, warn};

use super::Catalog;
use crate::context::QueryContext;
use crate::error::CatalogResult;
use crate::order;
use crate::slug::subcollection_slug;

/// Path of a category page.
pub fn category_path(category: &str) -> String {
    format!("/products/{category}")
}

/// Path of a subcollection's section on its category page.
pub fn subcollection_path(category: &str, subcollection: &str) -> String {
    format!("/products/{category}#{subcollection}")
}

/// Path of a subcategory page.
pub fn subcategory_path(category: &str, subcategory: &str) -> String {
    format!("/products/{category}/{subcategory}")
}

/// Path of a product page.
pub fn product_path(category: &str, subcategory: &str, product: &str) -> String {
    format!("/products/{category}/{subcategory}/{product}")
}

impl<S: CatalogStore> Catalog<S> {
    /// Every page path in the catalog.
    ///
    /// Starts with `/` and the collection pages (by name), then walks the
    /// category tree depth first: each category (by name), then for each of
    /// its subcollections the section anchor, its subcategories and their
    /// products. Products per subcategory follow the usual product cap.
    pub async fn all_routes(&self, ctx: &QueryContext) -> CatalogResult<Vec<String>> {
        let store = self.store.as_ref();
        let mut routes = vec!["/".to_string()];

        let mut collections = self.collect_all(ctx, move |req| store.collections(req)).await?;
        order::sort_collections(&mut collections);
        routes.extend(collections.iter().map(|c| format!("/{}", c.slug)));

        let mut categories = self.collect_all(ctx, move |req| store.categories(req)).await?;
        order::sort_categories(&mut categories);

        for category in &categories {
            let slug = category.slug.as_str();
            routes.push(category_path(slug));

            let mut subcollections = self
                .collect_all(ctx, move |req| store.subcollections_by_category(slug, req))
                .await?;
            order::sort_subcollections(&mut subcollections);

            for subcollection in &subcollections {
                routes.push(subcollection_path(slug, &subcollection_slug(subcollection)));

                let id = subcollection.external_id;
                let mut subcategories = self
                    .collect_all(ctx, move |req| store.subcategories_by_subcollection(id, req))
                    .await?;
                order::sort_subcategories(&mut subcategories);

                for subcategory in &subcategories {
                    routes.push(subcategory_path(slug, &subcategory.slug));

                    let products = self.products_for_subcategory(ctx, &subcategory.slug).await?;
                    if products.truncated {
                        warn!(
                            subcategory = %subcategory.slug,
                            cap = self.limits.products_per_subcategory,
                            "Product routes truncated"
                        );
                    }
                    routes.extend(
                        products
                            .iter()
                            .map(|p| product_path(slug, &subcategory.slug, &p.slug)),
                    );
                }
            }
        }

        info!(
            routes = routes.len(),
            collections = collections.len(),
            categories = categories.len(),
            "Enumerated routes"
        );
        Ok(routes)
    }
}
