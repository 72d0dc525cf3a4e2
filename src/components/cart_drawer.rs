//! Cart Drawer Component
//!
//! Right-hand panel listing cart lines with quantity controls, the total,
//! and clear / checkout actions.

use leptos::prelude::*;
use shop_core::{format_price, CartLine};

use crate::store::ShopCart;

/// One cart line with -/+ controls
#[component]
fn CartLineRow(line: CartLine, cart: ShopCart) -> impl IntoView {
    let id = line.product.id;
    let pricing = format!(
        "{} each · {}",
        format_price(line.product.price),
        format_price(line.subtotal())
    );
    let title = line.product.title.clone();
    let product = line.product;

    view! {
        <li class="cart-line">
            <div class="cart-line-text">
                <span class="cart-line-title">{title}</span>
                <span class="cart-line-pricing">{pricing}</span>
            </div>
            <div class="cart-line-controls">
                <button
                    class="icon-btn"
                    aria-label="decrease quantity"
                    on:click=move |_| cart.remove(id)
                >
                    "−"
                </button>
                <span class="cart-line-quantity">{line.quantity}</span>
                <button
                    class="icon-btn"
                    aria-label="increase quantity"
                    on:click=move |_| cart.add(&product)
                >
                    "+"
                </button>
            </div>
        </li>
    }
}

#[component]
pub fn CartDrawer(cart: ShopCart) -> impl IntoView {
    let close = move |_| cart.set_open(false);

    view! {
        <Show when=move || cart.is_open()>
            <div class="drawer-backdrop" on:click=close></div>
            <aside class="cart-drawer">
                <div class="cart-drawer-header">
                    <h2>"Your Cart"</h2>
                    <button class="icon-btn" aria-label="close cart drawer" on:click=close>
                        "✕"
                    </button>
                </div>

                <ul class="cart-lines">
                    <Show when=move || cart.is_empty()>
                        <li class="cart-empty">"Your cart is empty."</li>
                    </Show>
                    // Keyed by (id, quantity) so a quantity change re-renders the row
                    <For
                        each=move || cart.lines()
                        key=|line| (line.product.id, line.quantity)
                        children=move |line| view! { <CartLineRow line=line cart=cart /> }
                    />
                </ul>

                <div class="cart-drawer-footer">
                    <div class="cart-total">
                        <span>"Total"</span>
                        <span>{move || format_price(cart.total())}</span>
                    </div>
                    <div class="cart-actions">
                        <button
                            class="btn btn-outlined"
                            disabled=move || cart.is_empty()
                            on:click=move |_| cart.clear()
                        >
                            "Clear"
                        </button>
                        <button class="btn btn-primary" disabled=move || cart.is_empty()>
                            "Checkout"
                        </button>
                    </div>
                </div>
            </aside>
        </Show>
    }
}
