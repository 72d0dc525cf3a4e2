//! Shop Explorer Core
//!
//! Layered like the UI consumes it:
//! - domain: products, categories and the cart state machine
//! - store: key/value persistence and the persisted cart store
//! - catalog: HTTP catalog client and list cache
//! - filter: title/category product filtering

pub mod catalog;
pub mod config;
pub mod domain;
pub mod filter;
pub mod store;

pub use catalog::{CachedCatalog, CatalogError, CatalogSource, HttpCatalog};
pub use config::ShopConfig;
pub use domain::{format_price, CartLine, CartState, Category, CategoryOption, Product};
pub use filter::{distinct_categories, filter_products, CategorySelection, ProductFilter};
pub use store::{CartStore, KeyValueStore, MemoryStore, StorageError};
