//! HTTP Catalog Client
//!
//! `GET {base}/products` and `GET {base}/products/{id}` via reqwest.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use super::error::{CatalogError, CatalogRequest, CatalogResult};
use super::CatalogSource;
use crate::config::ShopConfig;
use crate::domain::Product;

#[derive(Debug, Clone)]
pub struct HttpCatalog {
    client: reqwest::Client,
    base_url: String,
}

impl HttpCatalog {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn from_config(config: &ShopConfig) -> Self {
        Self::new(config.catalog_base_url.clone())
    }

    fn url_for(&self, request: CatalogRequest) -> String {
        match request {
            CatalogRequest::ListProducts => format!("{}/products", self.base_url),
            CatalogRequest::Product(id) => format!("{}/products/{}", self.base_url, id),
        }
    }

    async fn fetch<T: DeserializeOwned>(&self, request: CatalogRequest) -> CatalogResult<T> {
        let url = self.url_for(request);
        log::debug!("[CATALOG] GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| CatalogError::Network { request, source })?;

        let status = response.status();
        if !status.is_success() {
            log::warn!("[CATALOG] {} answered {}", url, status);
            return Err(match request {
                // The public API answers unknown ids with 400
                CatalogRequest::Product(id)
                    if status == StatusCode::NOT_FOUND || status == StatusCode::BAD_REQUEST =>
                {
                    CatalogError::NotFound(id)
                }
                _ => CatalogError::Status {
                    request,
                    status: status.as_u16(),
                },
            });
        }

        let body = response
            .text()
            .await
            .map_err(|source| CatalogError::Network { request, source })?;
        serde_json::from_str(&body).map_err(|source| CatalogError::Decode { request, source })
    }
}

#[async_trait(?Send)]
impl CatalogSource for HttpCatalog {
    async fn list_products(&self) -> CatalogResult<Vec<Product>> {
        let products: Vec<Product> = self.fetch(CatalogRequest::ListProducts).await?;
        log::info!("[CATALOG] Loaded {} products", products.len());
        Ok(products)
    }

    async fn get_product(&self, id: u32) -> CatalogResult<Product> {
        self.fetch(CatalogRequest::Product(id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls() {
        let catalog = HttpCatalog::new("https://api.escuelajs.co/api/v1/");
        assert_eq!(catalog.base_url, "https://api.escuelajs.co/api/v1");
        assert_eq!(
            catalog.url_for(CatalogRequest::ListProducts),
            "https://api.escuelajs.co/api/v1/products"
        );
        assert_eq!(
            catalog.url_for(CatalogRequest::Product(12)),
            "https://api.escuelajs.co/api/v1/products/12"
        );
    }
}
