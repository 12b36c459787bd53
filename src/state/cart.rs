//! Persistent shopping cart.

#[cfg(test)]
#[path = "cart_test.rs"]
mod cart_test;

use leptos::prelude::*;

use crate::net::types::Product;
use crate::util::storage::{BrowserStorage, CART_KEY, KeyValueStorage};

/// One cart entry: a product snapshot frozen at add time plus a quantity.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CartLine {
    pub product: Product,
    pub quantity: u32,
}

/// Insertion-ordered cart contents.
///
/// Invariants: at most one line per product id, every quantity >= 1, and
/// line order is add order (quantity updates never reorder).
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct CartState {
    pub lines: Vec<CartLine>,
}

impl CartState {
    /// Add one unit of `product`. An existing line for the same id keeps its
    /// original snapshot and gains quantity; otherwise a new line is
    /// appended at the end.
    pub fn add(&mut self, product: Product) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.product.id == product.id) {
            line.quantity = line.quantity.saturating_add(1);
        } else {
            self.lines.push(CartLine { product, quantity: 1 });
        }
    }

    /// Set a line's quantity, clamped to at least 1. Unknown ids are a
    /// no-op; removal is only ever explicit.
    pub fn set_quantity(&mut self, product_id: &str, quantity: i64) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.product.id == product_id) {
            line.quantity = u32::try_from(quantity.max(1)).unwrap_or(u32::MAX);
        }
    }

    /// Remove the line for `product_id` if present.
    pub fn remove(&mut self, product_id: &str) {
        self.lines.retain(|l| l.product.id != product_id);
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Cart total, recomputed on every call.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.lines
            .iter()
            .map(|l| l.product.price * f64::from(l.quantity))
            .sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct lines (navbar badge).
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }
}

/// Owned cart store: reactive contents plus write-through persistence.
///
/// Every mutation flushes the whole cart to storage before returning;
/// `clear` erases the persisted slot instead of writing an empty list.
#[derive(Clone, Copy)]
pub struct CartStore<S: KeyValueStorage = BrowserStorage> {
    storage: S,
    state: RwSignal<CartState>,
}

impl<S: KeyValueStorage> CartStore<S> {
    /// Create the store, rehydrating once from the persisted slot. An
    /// absent or unparseable slot yields an empty cart.
    #[must_use]
    pub fn new(storage: S) -> Self {
        let initial = storage
            .get(CART_KEY)
            .and_then(|json| serde_json::from_str(&json).ok())
            .unwrap_or_default();
        Self {
            storage,
            state: RwSignal::new(initial),
        }
    }

    /// Read the current contents, tracking them reactively.
    #[must_use]
    pub fn get(&self) -> CartState {
        self.state.get()
    }

    /// Read the current contents without tracking (event handlers).
    #[must_use]
    pub fn get_untracked(&self) -> CartState {
        self.state.get_untracked()
    }

    pub fn add(&self, product: Product) {
        self.state.update(|c| c.add(product));
        self.persist();
    }

    pub fn set_quantity(&self, product_id: &str, quantity: i64) {
        self.state.update(|c| c.set_quantity(product_id, quantity));
        self.persist();
    }

    pub fn remove(&self, product_id: &str) {
        self.state.update(|c| c.remove(product_id));
        self.persist();
    }

    /// Empty the cart and erase the persisted copy.
    pub fn clear(&self) {
        self.state.update(CartState::clear);
        self.storage.remove(CART_KEY);
    }

    fn persist(&self) {
        if let Ok(json) = serde_json::to_string(&self.state.get_untracked()) {
            self.storage.set(CART_KEY, &json);
        }
    }
}
