//! Product Detail Page
//!
//! Single product view (`/product/:id`).

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;
use shop_core::{format_price, Product};

use crate::api::ShopApi;
use crate::components::{ErrorAlert, LoadingSpinner};
use crate::store::ShopCart;

#[component]
pub fn ProductDetailPage(api: ShopApi, cart: ShopCart) -> impl IntoView {
    let params = use_params_map();

    // Refetches whenever the :id segment changes
    let product = LocalResource::new(move || {
        let raw_id = params.read().get("id");
        api.get_product_param(raw_id)
    });

    view! {
        <div class="page product-detail-page">
            {move || match product.get() {
                None => view! { <LoadingSpinner /> }.into_any(),
                Some(Err(message)) => view! { <ErrorAlert message=message /> }.into_any(),
                Some(Ok(product)) => view! { <ProductDetail product=product cart=cart /> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn ProductDetail(product: Product, cart: ShopCart) -> impl IntoView {
    let title = product.title.clone();
    let hero = product.primary_image().unwrap_or_default().to_string();
    let thumbnails: Vec<(usize, String)> = product.thumbnails().iter().cloned().enumerate().collect();
    let category = product.category.name.clone();
    let price = format_price(product.price);
    let description = product.description.clone();

    let thumbs_alt = title.clone();
    let hero_alt = title.clone();

    view! {
        <A href="/" attr:class="btn btn-outlined back-link">"Back to products"</A>
        <div class="product-detail">
            <img class="product-detail-hero" src=hero alt=hero_alt />
            <div class="product-detail-content">
                <h1>{title}</h1>
                <p class="product-detail-category">{category}</p>
                <p class="product-detail-price">{price}</p>
                <p class="product-detail-description">{description}</p>
                <div class="product-detail-thumbnails">
                    {thumbnails
                        .into_iter()
                        .map(|(index, image)| {
                            let alt = format!("{}-thumb-{}", thumbs_alt, index);
                            view! { <img class="thumbnail" src=image alt=alt /> }
                        })
                        .collect_view()}
                </div>
                <button class="btn btn-primary" on:click=move |_| cart.add(&product)>
                    "Add to cart"
                </button>
            </div>
        </div>
    }
}
