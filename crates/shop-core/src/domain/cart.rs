//! Cart State
//!
//! Ordered product/quantity lines with merge-on-add and
//! remove-at-zero semantics.

use serde::{Deserialize, Serialize};

use super::product::Product;

/// One product in the cart with its quantity (always >= 1)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub product: Product,
    pub quantity: u32,
}

impl CartLine {
    pub fn new(product: Product) -> Self {
        Self { product, quantity: 1 }
    }

    /// quantity × unit price
    pub fn subtotal(&self) -> f64 {
        self.product.price * f64::from(self.quantity)
    }
}

/// Full cart contents, in first-add order
///
/// Serialized as a bare JSON array of `{product, quantity}`. Deserializing
/// goes through `from_lines`, so parsed states always hold the invariants.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<CartLine>", into = "Vec<CartLine>")]
pub struct CartState {
    lines: Vec<CartLine>,
}

impl From<Vec<CartLine>> for CartState {
    fn from(lines: Vec<CartLine>) -> Self {
        Self::from_lines(lines)
    }
}

impl From<CartState> for Vec<CartLine> {
    fn from(state: CartState) -> Self {
        state.lines
    }
}

impl CartState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a state from arbitrary lines, dropping zero quantities and
    /// merging duplicate product ids into their first position.
    pub fn from_lines(lines: Vec<CartLine>) -> Self {
        let mut merged: Vec<CartLine> = Vec::with_capacity(lines.len());
        for line in lines {
            if line.quantity == 0 {
                continue;
            }
            match merged.iter_mut().find(|l| l.product.id == line.product.id) {
                Some(existing) => existing.quantity = existing.quantity.saturating_add(line.quantity),
                None => merged.push(line),
            }
        }
        Self { lines: merged }
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Quantity held for a product (0 when absent)
    pub fn quantity_of(&self, product_id: u32) -> u32 {
        self.lines
            .iter()
            .find(|line| line.product.id == product_id)
            .map_or(0, |line| line.quantity)
    }

    /// Increment an existing line in place or append a new one
    pub fn add(&mut self, product: &Product) {
        match self.lines.iter_mut().find(|line| line.product.id == product.id) {
            Some(line) => line.quantity = line.quantity.saturating_add(1),
            None => self.lines.push(CartLine::new(product.clone())),
        }
    }

    /// Decrement a line, deleting it at zero.
    ///
    /// Returns false (and changes nothing) if the product is not in the cart.
    pub fn remove(&mut self, product_id: u32) -> bool {
        let Some(index) = self.lines.iter().position(|line| line.product.id == product_id) else {
            return false;
        };
        if self.lines[index].quantity <= 1 {
            self.lines.remove(index);
        } else {
            self.lines[index].quantity -= 1;
        }
        true
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Sum of all line quantities, saturating at `u32::MAX`
    pub fn count(&self) -> u32 {
        self.lines
            .iter()
            .fold(0u32, |acc, line| acc.saturating_add(line.quantity))
    }

    /// Sum of quantity × price over all lines
    pub fn total(&self) -> f64 {
        self.lines.iter().map(CartLine::subtotal).sum()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Parse persisted JSON, normalizing lines that break the cart invariants
    pub fn from_json(raw: &str) -> serde_json::Result<Self> {
        serde_json::from_str(raw)
    }
}
