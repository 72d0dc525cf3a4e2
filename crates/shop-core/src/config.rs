//! Shop Configuration
//!
//! Defaults plus the build-time catalog URL override.

use chrono::TimeDelta;

/// Public catalog API used when nothing else is configured
pub const DEFAULT_CATALOG_URL: &str = "https://api.escuelajs.co/api/v1";

/// localStorage key holding the serialized cart
pub const CART_STORAGE_KEY: &str = "shop-explorer-cart";

/// How long a fetched product list is served from memory
pub const LIST_STALE_AFTER_SECS: i64 = 5 * 60;

#[derive(Debug, Clone, PartialEq)]
pub struct ShopConfig {
    pub catalog_base_url: String,
    pub cart_storage_key: String,
    pub list_stale_after: TimeDelta,
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            catalog_base_url: DEFAULT_CATALOG_URL.to_string(),
            cart_storage_key: CART_STORAGE_KEY.to_string(),
            list_stale_after: TimeDelta::seconds(LIST_STALE_AFTER_SECS),
        }
    }
}

impl ShopConfig {
    /// Defaults, with `SHOP_EXPLORER_API_URL` (read at compile time) as
    /// the catalog URL when set
    pub fn from_build_env() -> Self {
        let config = Self::default();
        match option_env!("SHOP_EXPLORER_API_URL") {
            Some(url) if !url.trim().is_empty() => config.with_catalog_base_url(url),
            _ => config,
        }
    }

    /// Override the catalog URL, trailing slashes dropped
    pub fn with_catalog_base_url(mut self, url: &str) -> Self {
        self.catalog_base_url = url.trim().trim_end_matches('/').to_string();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ShopConfig::default();
        assert_eq!(config.catalog_base_url, "https://api.escuelajs.co/api/v1");
        assert_eq!(config.cart_storage_key, "shop-explorer-cart");
        assert_eq!(config.list_stale_after, TimeDelta::minutes(5));
    }

    #[test]
    fn test_base_url_override_trims() {
        let config = ShopConfig::default().with_catalog_base_url(" http://localhost:8080/api/ ");
        assert_eq!(config.catalog_base_url, "http://localhost:8080/api");
    }
}
