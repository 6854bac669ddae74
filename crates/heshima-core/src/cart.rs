//! # Cart Store
//!
//! The visitor's working set of selected services ("project plan").
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  UI Action                Operation             Cart Change             │
//! │  ─────────                ─────────             ───────────             │
//! │                                                                         │
//! │  "Add to plan" ─────────► add(&product) ──────► push snapshot           │
//! │                                                 (no-op if id present)   │
//! │                                                                         │
//! │  "remove" ──────────────► remove(id) ─────────► retain(id != x)         │
//! │                                                 (no-op if absent)       │
//! │                                                                         │
//! │  Summary line ──────────► total() ────────────► (read only)             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! This is not a shopping basket: there are no quantities and nothing is
//! persisted. Entries are unique by product id and kept in insertion order.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::money::{format_usd, Money};
use crate::types::{Product, ProductId};

/// A service in the cart.
///
/// ## Snapshot
/// The name and price are copied when the entry is added. If the catalog is
/// reloaded afterwards the entry keeps what the visitor saw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartEntry {
    pub id: ProductId,
    pub name: String,
    pub base_price: Option<Money>,
}

impl CartEntry {
    /// Creates an entry by snapshotting a product.
    pub fn from_product(product: &Product) -> Self {
        CartEntry {
            id: product.id,
            name: product.name.clone(),
            base_price: product.base_price,
        }
    }

    /// Price contribution to the total (absent price counts as zero).
    #[inline]
    pub fn price(&self) -> Money {
        self.base_price.unwrap_or_default()
    }
}

/// The cart.
///
/// ## Invariants
/// - No two entries share an `id`
/// - Entry order is insertion order; re-adding never reorders
/// - `total()` is a pure function of the current entries
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    entries: Vec<CartEntry>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart::default()
    }

    /// Adds a product snapshot unless its id is already present.
    ///
    /// Returns `true` when a new entry was appended.
    pub fn add(&mut self, product: &Product) -> bool {
        if self.contains(product.id) {
            debug!(product_id = %product.id, "Product already in cart");
            return false;
        }

        self.entries.push(CartEntry::from_product(product));
        debug!(product_id = %product.id, items = self.entries.len(), "Added to cart");
        true
    }

    /// Removes the entry with the given id.
    ///
    /// Returns `true` when an entry was removed; an absent id is a no-op.
    pub fn remove(&mut self, product_id: ProductId) -> bool {
        let initial_len = self.entries.len();
        self.entries.retain(|entry| entry.id != product_id);

        let removed = self.entries.len() != initial_len;
        if removed {
            debug!(product_id = %product_id, items = self.entries.len(), "Removed from cart");
        }
        removed
    }

    /// Empties the cart.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Sum of entry prices.
    pub fn total(&self) -> Money {
        self.entries.iter().map(CartEntry::price).sum()
    }

    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    pub fn contains(&self, product_id: ProductId) -> bool {
        self.entries.iter().any(|entry| entry.id == product_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Cart summary for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartSummary {
    pub item_count: usize,
    pub total: Money,
    /// "Estimated total: $1,950.00"
    pub total_display: String,
}

impl From<&Cart> for CartSummary {
    fn from(cart: &Cart) -> Self {
        let total = cart.total();
        CartSummary {
            item_count: cart.len(),
            total,
            total_display: format!("Estimated total: {}", format_usd(total)),
        }
    }
}
