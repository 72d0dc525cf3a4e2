//! Shop Explorer App
//!
//! Root component: builds the cart and catalog handles, then routes
//! between the product list and product detail pages.

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use shop_core::{CartStore, ShopConfig};

use crate::api::ShopApi;
use crate::components::{CartDrawer, Header};
use crate::pages::{ProductDetailPage, ProductListPage};
use crate::storage::BrowserStorage;
use crate::store::ShopCart;

#[component]
pub fn App() -> impl IntoView {
    let config = ShopConfig::from_build_env();
    log::info!("[APP] Catalog at {}", config.catalog_base_url);

    // Both handles exist before any page renders
    let cart = ShopCart::new(CartStore::open(BrowserStorage::local(), config.cart_storage_key.clone()));
    let api = ShopApi::new(&config);

    view! {
        <Router>
            <Header cart=cart />
            <main class="main-content">
                <Routes fallback=|| view! { <p class="not-found">"Page not found."</p> }>
                    <Route path=path!("/") view=move || view! { <ProductListPage api=api cart=cart /> } />
                    <Route path=path!("/product/:id") view=move || view! { <ProductDetailPage api=api cart=cart /> } />
                </Routes>
            </main>
            <CartDrawer cart=cart />
        </Router>
    }
}
