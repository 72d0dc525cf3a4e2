//! Routed Pages

mod product_list;
mod product_detail;

pub use product_list::ProductListPage;
pub use product_detail::ProductDetailPage;
