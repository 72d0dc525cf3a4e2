//! Product Card Component
//!
//! Grid tile: image (links to the detail page), title, category, price,
//! add-to-cart button.

use leptos::prelude::*;
use leptos_router::components::A;
use shop_core::{format_price, Product};

use crate::store::ShopCart;

#[component]
pub fn ProductCard(product: Product, cart: ShopCart) -> impl IntoView {
    let detail_href = format!("/product/{}", product.id);
    let image = product.primary_image().unwrap_or_default().to_string();
    let title = product.title.clone();
    let alt = title.clone();
    let tooltip = title.clone();
    let category = product.category.name.clone();
    let price = format_price(product.price);

    let add_to_cart = move |_| cart.add(&product);

    view! {
        <div class="product-card">
            <A href=detail_href attr:class="product-card-media">
                <img src=image alt=alt />
            </A>
            <div class="product-card-content">
                <h3 class="product-card-title" title=tooltip>{title}</h3>
                <p class="product-card-category">{category}</p>
                <p class="product-card-price">{price}</p>
            </div>
            <div class="product-card-actions">
                <button class="btn btn-primary btn-small" on:click=add_to_cart>
                    "Add to cart"
                </button>
            </div>
        </div>
    }
}
