//! Search endpoint payload.

use catalog_core::catalog::product_path;
use catalog_core::{Catalog, CatalogResult, QueryContext, SearchHit};
use catalog_store::CatalogStore;
use serde::{Deserialize, Serialize};

/// One search result as sent to the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchItem {
    /// Product page path.
    pub href: String,
    pub name: String,
    pub slug: String,
    pub image_url: Option<String>,
    pub description: String,
    /// Decimal price, e.g. `"19.99"`.
    pub price: String,
    pub subcategory_slug: String,
}

impl From<SearchHit> for SearchItem {
    fn from(hit: SearchHit) -> Self {
        let SearchHit {
            product,
            category_slug,
        } = hit;
        Self {
            href: product_path(&category_slug, &product.subcategory_slug, &product.slug),
            price: product.price.to_decimal_string(),
            name: product.name,
            slug: product.slug,
            image_url: product.image_url,
            description: product.description,
            subcategory_slug: product.subcategory_slug,
        }
    }
}

/// Search products and shape the hits for the client.
pub async fn search_items<S: CatalogStore>(
    catalog: &Catalog<S>,
    ctx: &QueryContext,
    query: &str,
) -> CatalogResult<Vec<SearchItem>> {
    let hits = catalog.search_products(ctx, query).await?;
    Ok(hits.into_iter().map(SearchItem::from).collect())
}
