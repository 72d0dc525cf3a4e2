//! Application State Store
//!
//! Uses Leptos reactive_stores for the view-facing state and wraps the
//! persisted `CartStore` in a copyable handle.

use leptos::prelude::*;
use reactive_stores::Store;
use shop_core::{CartLine, CartState, CartStore, Product};

use crate::storage::BrowserStorage;

/// View state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct ShopState {
    /// Mirror of the persisted cart, refreshed by subscription
    pub cart: CartState,
    /// Whether the cart drawer is shown
    pub cart_open: bool,
}

/// Type alias for the store
pub type ShopStore = Store<ShopState>;

/// Cart handle passed to every component that reads or edits the cart
///
/// Built once in `App` from an opened `CartStore`; components receive it
/// as a prop.
#[derive(Clone, Copy)]
pub struct ShopCart {
    cart: StoredValue<CartStore<BrowserStorage>, LocalStorage>,
    state: ShopStore,
    count: Memo<u32>,
    total: Memo<f64>,
}

impl ShopCart {
    pub fn new(mut cart: CartStore<BrowserStorage>) -> Self {
        let state = Store::new(ShopState {
            cart: cart.state().clone(),
            cart_open: false,
        });

        cart.subscribe(move |next: &CartState| {
            *state.cart().write() = next.clone();
        });

        let count = Memo::new(move |_| state.cart().read().count());
        let total = Memo::new(move |_| state.cart().read().total());

        Self {
            cart: StoredValue::new_local(cart),
            state,
            count,
            total,
        }
    }

    pub fn add(&self, product: &Product) {
        self.cart.update_value(|cart| cart.add_to_cart(product));
    }

    pub fn remove(&self, product_id: u32) {
        self.cart.update_value(|cart| {
            cart.remove_from_cart(product_id);
        });
    }

    pub fn clear(&self) {
        self.cart.update_value(|cart| cart.clear_cart());
    }

    /// Current lines (tracked)
    pub fn lines(&self) -> Vec<CartLine> {
        self.state.cart().read().lines().to_vec()
    }

    pub fn is_empty(&self) -> bool {
        self.state.cart().read().is_empty()
    }

    /// Sum of quantities (tracked)
    pub fn count(&self) -> u32 {
        self.count.get()
    }

    /// Sum of price × quantity (tracked)
    pub fn total(&self) -> f64 {
        self.total.get()
    }

    pub fn is_open(&self) -> bool {
        self.state.cart_open().get()
    }

    pub fn set_open(&self, open: bool) {
        *self.state.cart_open().write() = open;
    }
}
