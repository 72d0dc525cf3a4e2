//! Product List Cache
//!
//! Serves the product list from memory while it is younger than the stale
//! time. Single-product lookups always go to the source.

use std::cell::RefCell;
use std::rc::Rc;

use async_trait::async_trait;
use chrono::{DateTime, TimeDelta, Utc};

use super::error::CatalogResult;
use super::CatalogSource;
use crate::domain::Product;

struct CachedList {
    products: Vec<Product>,
    fetched_at: DateTime<Utc>,
}

/// Stale-time cache in front of a `CatalogSource`
///
/// Clones share one cache.
pub struct CachedCatalog<C> {
    inner: C,
    stale_after: TimeDelta,
    list: Rc<RefCell<Option<CachedList>>>,
}

impl<C: Clone> Clone for CachedCatalog<C> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            stale_after: self.stale_after,
            list: Rc::clone(&self.list),
        }
    }
}

impl<C: CatalogSource> CachedCatalog<C> {
    pub fn new(inner: C, stale_after: TimeDelta) -> Self {
        Self {
            inner,
            stale_after,
            list: Rc::new(RefCell::new(None)),
        }
    }

    /// Drop the cached list so the next call refetches
    pub fn invalidate(&self) {
        self.list.borrow_mut().take();
    }

    /// `list_products` evaluated at an explicit instant
    pub async fn list_products_at(&self, now: DateTime<Utc>) -> CatalogResult<Vec<Product>> {
        if let Some(products) = self.fresh_list(now) {
            log::debug!("[CATALOG] Serving {} cached products", products.len());
            return Ok(products);
        }

        let products = self.inner.list_products().await?;
        *self.list.borrow_mut() = Some(CachedList {
            products: products.clone(),
            fetched_at: now,
        });
        Ok(products)
    }

    fn fresh_list(&self, now: DateTime<Utc>) -> Option<Vec<Product>> {
        let guard = self.list.borrow();
        let cached = guard.as_ref()?;
        (now - cached.fetched_at < self.stale_after).then(|| cached.products.clone())
    }
}

#[async_trait(?Send)]
impl<C: CatalogSource> CatalogSource for CachedCatalog<C> {
    async fn list_products(&self) -> CatalogResult<Vec<Product>> {
        self.list_products_at(Utc::now()).await
    }

    async fn get_product(&self, id: u32) -> CatalogResult<Product> {
        self.inner.get_product(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogError, CatalogRequest};
    use crate::domain::Category;
    use std::cell::Cell;

    /// Counts calls; fails list requests while `failing` is set
    #[derive(Default)]
    struct CountingCatalog {
        list_calls: Cell<u32>,
        product_calls: Cell<u32>,
        failing: Cell<bool>,
    }

    fn make_product(id: u32) -> Product {
        Product {
            id,
            title: format!("Product {}", id),
            price: 9.99,
            description: String::new(),
            images: vec![],
            category: Category {
                id: 1,
                name: "Clothes".to_string(),
                image: String::new(),
            },
        }
    }

    #[async_trait(?Send)]
    impl CatalogSource for CountingCatalog {
        async fn list_products(&self) -> CatalogResult<Vec<Product>> {
            self.list_calls.set(self.list_calls.get() + 1);
            if self.failing.get() {
                return Err(CatalogError::Status {
                    request: CatalogRequest::ListProducts,
                    status: 503,
                });
            }
            Ok(vec![make_product(1), make_product(2)])
        }

        async fn get_product(&self, id: u32) -> CatalogResult<Product> {
            self.product_calls.set(self.product_calls.get() + 1);
            Ok(make_product(id))
        }
    }

    fn start() -> DateTime<Utc> {
        DateTime::from_timestamp(1_700_000_000, 0).unwrap()
    }

    #[tokio::test]
    async fn test_serves_cached_list_within_stale_time() {
        let catalog = CachedCatalog::new(CountingCatalog::default(), TimeDelta::minutes(5));

        let first = catalog.list_products_at(start()).await.unwrap();
        let second = catalog
            .list_products_at(start() + TimeDelta::minutes(4))
            .await
            .unwrap();

        assert_eq!(first, second);
        assert_eq!(catalog.inner.list_calls.get(), 1);
    }

    #[tokio::test]
    async fn test_refetches_after_stale_time() {
        let catalog = CachedCatalog::new(CountingCatalog::default(), TimeDelta::minutes(5));

        catalog.list_products_at(start()).await.unwrap();
        catalog
            .list_products_at(start() + TimeDelta::minutes(5))
            .await
            .unwrap();

        assert_eq!(catalog.inner.list_calls.get(), 2);
    }

    #[tokio::test]
    async fn test_failures_are_not_cached() {
        let source = CountingCatalog::default();
        source.failing.set(true);
        let catalog = CachedCatalog::new(source, TimeDelta::minutes(5));

        assert!(catalog.list_products_at(start()).await.is_err());

        catalog.inner.failing.set(false);
        let products = catalog.list_products_at(start()).await.unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(catalog.inner.list_calls.get(), 2);
    }

    #[tokio::test]
    async fn test_invalidate_and_product_passthrough() {
        let catalog = CachedCatalog::new(CountingCatalog::default(), TimeDelta::minutes(5));

        catalog.list_products_at(start()).await.unwrap();
        catalog.invalidate();
        catalog.list_products_at(start()).await.unwrap();
        assert_eq!(catalog.inner.list_calls.get(), 2);

        let product = catalog.get_product(7).await.unwrap();
        catalog.get_product(7).await.unwrap();
        assert_eq!(product.id, 7);
        assert_eq!(catalog.inner.product_calls.get(), 2);
    }
}
