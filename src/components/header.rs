//! Header Component
//!
//! App bar with the shop title and the cart button with its badge.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::store::ShopCart;

#[component]
pub fn Header(cart: ShopCart) -> impl IntoView {
    view! {
        <header class="app-bar">
            <A href="/" attr:class="app-bar-title">
                <span class="app-bar-icon">"🏬"</span>
                <span>"Shop Explorer"</span>
            </A>
            <button
                class="cart-button"
                aria-label="open shopping cart"
                on:click=move |_| cart.set_open(true)
            >
                "🛒"
                <Show when=move || { cart.count() > 0 }>
                    <span class="cart-badge">{move || cart.count()}</span>
                </Show>
            </button>
        </header>
    }
}
