//! Domain Layer
//!
//! Catalog entities and the cart state machine.
//! This layer has no I/O (serde only).

mod product;
mod cart;

pub use product::{format_price, Category, CategoryOption, Product};
pub use cart::{CartLine, CartState};
