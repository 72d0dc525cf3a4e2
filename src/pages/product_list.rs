//! Product List Page
//!
//! Searchable, category-filterable product grid (`/`).

use leptos::prelude::*;
use shop_core::{distinct_categories, filter_products, CategorySelection, Product, ProductFilter};

use crate::api::ShopApi;
use crate::components::{ErrorAlert, LoadingSpinner, ProductCard, ProductFilters};
use crate::store::ShopCart;

#[component]
pub fn ProductListPage(api: ShopApi, cart: ShopCart) -> impl IntoView {
    // Fetched once per mount; the api layer serves repeats from its cache
    let products = LocalResource::new(move || api.list_products());

    let (search, set_search) = signal(String::new());
    let (category, set_category) = signal(CategorySelection::All);

    let loaded = move || products.get().and_then(Result::ok).unwrap_or_default();

    let categories = Memo::new(move |_| distinct_categories(&loaded()));

    let visible = Memo::new(move |_| {
        let filter = ProductFilter::new(search.get(), category.get());
        filter_products(&loaded(), &filter)
    });

    view! {
        <div class="page product-list-page">
            <div class="page-heading">
                <h1>"Discover products"</h1>
                <ProductFilters
                    search=search
                    set_search=set_search
                    category=category
                    set_category=set_category
                    categories=categories
                />
            </div>

            {move || match products.get() {
                None => view! { <LoadingSpinner /> }.into_any(),
                Some(Err(message)) => view! { <ErrorAlert message=message /> }.into_any(),
                Some(Ok(_)) => view! {
                    <div class="product-grid">
                        <For
                            each=move || visible.get()
                            key=|product: &Product| product.id
                            children=move |product| view! { <ProductCard product=product cart=cart /> }
                        />
                    </div>
                }.into_any(),
            }}
        </div>
    }
}
