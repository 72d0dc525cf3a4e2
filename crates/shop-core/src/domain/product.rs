//! Catalog Entities
//!
//! Products and categories as served by the catalog API.

use serde::{Deserialize, Serialize};

/// Product category (matches catalog API)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub image: String,
}

/// Product (matches catalog API)
///
/// Extra fields the API sends (slug, timestamps) are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,
    pub title: String,
    pub price: f64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub images: Vec<String>,
    pub category: Category,
}

impl Product {
    /// First image, used for cards and the detail hero image
    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// Everything after the primary image
    pub fn thumbnails(&self) -> &[String] {
        self.images.get(1..).unwrap_or(&[])
    }
}

/// Entry in the category selector
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryOption {
    pub id: u32,
    pub name: String,
}

/// Format a price as dollars with two decimals, e.g. `$12.50`
pub fn format_price(price: f64) -> String {
    format!("${:.2}", price)
}
