//! Catalog API Wrappers
//!
//! Frontend bindings to the catalog, errors mapped to user-facing text.

use leptos::prelude::*;
use shop_core::catalog::PRODUCT_LOAD_FAILED;
use shop_core::{CachedCatalog, CatalogSource, HttpCatalog, Product, ShopConfig};

pub type ShopCatalog = CachedCatalog<HttpCatalog>;

/// Copyable catalog handle
#[derive(Clone, Copy)]
pub struct ShopApi {
    catalog: StoredValue<ShopCatalog, LocalStorage>,
}

impl ShopApi {
    pub fn new(config: &ShopConfig) -> Self {
        let catalog = CachedCatalog::new(HttpCatalog::from_config(config), config.list_stale_after);
        Self {
            catalog: StoredValue::new_local(catalog),
        }
    }

    pub async fn list_products(self) -> Result<Vec<Product>, String> {
        let catalog = self.catalog.get_value();
        catalog.list_products().await.map_err(|e| {
            log::error!("[API] {}", e);
            e.user_message().to_string()
        })
    }

    pub async fn get_product(self, id: u32) -> Result<Product, String> {
        let catalog = self.catalog.get_value();
        catalog.get_product(id).await.map_err(|e| {
            log::error!("[API] {}", e);
            e.user_message().to_string()
        })
    }

    /// Detail lookup from a raw route parameter
    pub async fn get_product_param(self, raw_id: Option<String>) -> Result<Product, String> {
        match parse_product_id(raw_id.as_deref()) {
            Some(id) => self.get_product(id).await,
            None => {
                log::warn!("[API] Invalid product id {:?}", raw_id);
                Err(PRODUCT_LOAD_FAILED.to_string())
            }
        }
    }
}

/// Parse the `:id` route segment
pub fn parse_product_id(raw: Option<&str>) -> Option<u32> {
    raw?.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_product_id() {
        assert_eq!(parse_product_id(Some("42")), Some(42));
        assert_eq!(parse_product_id(Some(" 7 ")), Some(7));
        assert_eq!(parse_product_id(Some("abc")), None);
        assert_eq!(parse_product_id(Some("-1")), None);
        assert_eq!(parse_product_id(None), None);
    }
}
