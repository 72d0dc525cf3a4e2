//! UI Components
//!
//! Reusable Leptos components.

mod header;
mod product_card;
mod product_filters;
mod cart_drawer;
mod status;

pub use header::Header;
pub use product_card::ProductCard;
pub use product_filters::ProductFilters;
pub use cart_drawer::CartDrawer;
pub use status::{ErrorAlert, LoadingSpinner};
