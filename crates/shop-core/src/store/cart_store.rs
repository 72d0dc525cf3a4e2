//! Persisted Cart Store
//!
//! Owns the `CartState`, writes it to a `KeyValueStore` after every
//! mutation and notifies subscribers with the new state.

use crate::domain::{CartState, Product};

use super::traits::KeyValueStore;

/// Handle returned by `CartStore::subscribe`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn Fn(&CartState)>;

/// Cart state bound to a storage key
///
/// Construct it once with `open` and hand it (or a handle to it) to every
/// consumer; there is no global instance.
pub struct CartStore<S: KeyValueStore> {
    state: CartState,
    storage: S,
    key: String,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
}

impl<S: KeyValueStore> CartStore<S> {
    /// Rehydrate from `storage[key]`.
    ///
    /// A missing key, a read failure or an unparseable value all give an
    /// empty cart.
    pub fn open(storage: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let state = load_state(&storage, &key);
        log::debug!("[CART] Opened '{}' with {} lines", key, state.lines().len());
        Self {
            state,
            storage,
            key,
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn state(&self) -> &CartState {
        &self.state
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn cart_count(&self) -> u32 {
        self.state.count()
    }

    pub fn cart_total(&self) -> f64 {
        self.state.total()
    }

    pub fn add_to_cart(&mut self, product: &Product) {
        self.state.add(product);
        log::debug!(
            "[CART] Added product {} (qty {})",
            product.id,
            self.state.quantity_of(product.id)
        );
        self.commit();
    }

    /// Decrement or drop a line. Absent products are ignored (returns false,
    /// nothing is written).
    pub fn remove_from_cart(&mut self, product_id: u32) -> bool {
        if !self.state.remove(product_id) {
            log::debug!("[CART] Remove ignored, product {} not in cart", product_id);
            return false;
        }
        log::debug!(
            "[CART] Removed one of product {} (qty {})",
            product_id,
            self.state.quantity_of(product_id)
        );
        self.commit();
        true
    }

    pub fn clear_cart(&mut self) {
        self.state.clear();
        log::debug!("[CART] Cleared");
        self.commit();
    }

    /// Register a callback run after every mutation
    pub fn subscribe(&mut self, callback: impl Fn(&CartState) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub, _)| *sub != id);
        self.subscribers.len() != before
    }

    /// Persist the full state, then notify
    fn commit(&mut self) {
        match self.state.to_json() {
            Ok(raw) => {
                if let Err(e) = self.storage.set(&self.key, &raw) {
                    log::warn!("[CART] Failed to persist cart: {}", e);
                }
            }
            Err(e) => log::warn!("[CART] Failed to serialize cart: {}", e),
        }
        for (_, callback) in &self.subscribers {
            callback(&self.state);
        }
    }
}

fn load_state<S: KeyValueStore>(storage: &S, key: &str) -> CartState {
    let raw = match storage.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return CartState::new(),
        Err(e) => {
            log::warn!("[CART] Could not read persisted cart: {}", e);
            return CartState::new();
        }
    };
    CartState::from_json(&raw).unwrap_or_else(|e| {
        log::warn!("[CART] Discarding unreadable cart under '{}': {}", key, e);
        CartState::new()
    })
}
