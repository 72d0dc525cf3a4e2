//! Catalog Layer
//!
//! Read-only access to the upstream product catalog.

mod error;
mod http;
mod cache;

use async_trait::async_trait;

use crate::domain::Product;

pub use error::{CatalogError, CatalogRequest, CatalogResult, LIST_LOAD_FAILED, PRODUCT_LOAD_FAILED};
pub use http::HttpCatalog;
pub use cache::CachedCatalog;

/// Source of catalog data
///
/// Futures are not `Send`: browser fetches run on the single UI thread.
#[async_trait(?Send)]
pub trait CatalogSource {
    /// Full product collection
    async fn list_products(&self) -> CatalogResult<Vec<Product>>;

    /// Single product by id
    async fn get_product(&self, id: u32) -> CatalogResult<Product>;
}
