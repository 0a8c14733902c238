//! # Cart State
//!
//! Holds the single `CartStore` of the running storefront.
//!
//! ## Thread Safety
//! The store is wrapped in `Arc<Mutex<T>>` because:
//! 1. Every command that touches the cart goes through this one owner
//! 2. Only one command may modify the cart at a time
//! 3. Each command holds the lock for its whole read-modify-respond cycle,
//!    so mutations are serialized even if commands arrive concurrently
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart State Operations                                │
//! │                                                                         │
//! │  User Action              Command                 Cart State Change     │
//! │  ───────────              ───────                 ─────────────────     │
//! │                                                                         │
//! │  "Add to cart" / "+" ────► add_to_cart() ───────► qty += 1              │
//! │                                                                         │
//! │  "-" ────────────────────► decrease_cart_item() ► qty -= 1 (or delete)  │
//! │                                                                         │
//! │  "Remove" ───────────────► remove_from_cart() ──► delete entry          │
//! │                                                                         │
//! │  View cart ──────────────► get_cart() ──────────► (read only)           │
//! │                                                                         │
//! │  NOTE: All operations acquire the Mutex lock exclusively.               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::{Deserialize, Serialize};
use storefront_core::{CartEntry, CartStore, Catalog};
use tracing::debug;

/// One cart line as sent to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub product_id: u32,
    pub name: String,
    pub unit_price: i64,
    pub quantity: u32,
    pub line_total: i64,
}

impl From<&CartEntry<'_>> for CartLine {
    fn from(entry: &CartEntry<'_>) -> Self {
        CartLine {
            product_id: entry.product.id.get(),
            name: entry.product.name.clone(),
            unit_price: entry.product.price.minor(),
            quantity: entry.quantity,
            line_total: entry.line_total().minor(),
        }
    }
}

/// Cart totals summary for responses (badge count and cart footer).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    pub line_count: usize,
    pub total_items: u64,
    pub total_amount: i64,
}

impl From<&CartStore> for CartTotals {
    fn from(cart: &CartStore) -> Self {
        CartTotals {
            line_count: cart.line_count(),
            total_items: cart.total_item_count(),
            total_amount: cart.total_amount().minor(),
        }
    }
}

/// Shared cart state.
///
/// ## Why Not RwLock?
/// Cart operations are quick and most of them modify state.
/// A RwLock would add complexity with minimal benefit.
#[derive(Debug, Clone)]
pub struct CartState {
    cart: Arc<Mutex<CartStore>>,
}

impl CartState {
    /// Creates an empty cart over `catalog`.
    ///
    /// A listener is subscribed that logs every cart change, which is how
    /// re-render triggers show up in the logs.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        let mut store = CartStore::new(catalog);
        store.subscribe(|event| {
            debug!(product_id = %event.product_id(), ?event, "Cart changed");
        });

        CartState {
            cart: Arc::new(Mutex::new(store)),
        }
    }

    /// Executes a function with read access to the cart.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let totals = cart_state.with_cart(|cart| CartTotals::from(cart));
    /// ```
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&CartStore) -> R,
    {
        let cart = self.lock();
        f(&cart)
    }

    /// Executes a function with write access to the cart.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// cart_state.with_cart_mut(|cart| cart.add(product_id))?;
    /// ```
    pub fn with_cart_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut CartStore) -> R,
    {
        let mut cart = self.lock();
        f(&mut cart)
    }

    // A panic inside a command leaves the store itself consistent (every
    // mutation is a single map operation), so a poisoned lock is recovered.
    fn lock(&self) -> MutexGuard<'_, CartStore> {
        self.cart.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::ProductId;

    #[test]
    fn test_cart_state_mutation_and_totals() {
        let state = CartState::new(Arc::new(Catalog::demo()));

        state.with_cart_mut(|c| {
            c.add(ProductId::new(2)).unwrap();
            c.add(ProductId::new(2)).unwrap();
            c.add(ProductId::new(6)).unwrap();
        });

        let totals = state.with_cart(|c| CartTotals::from(c));
        assert_eq!(
            totals,
            CartTotals {
                line_count: 2,
                total_items: 3,
                total_amount: 2 * 2499 + 149,
            }
        );
    }

    #[test]
    fn test_cart_line_from_entry() {
        let state = CartState::new(Arc::new(Catalog::demo()));
        state.with_cart_mut(|c| c.add(ProductId::new(5)).unwrap());

        let lines: Vec<CartLine> =
            state.with_cart(|c| c.line_items().iter().map(CartLine::from).collect());
        assert_eq!(
            lines,
            vec![CartLine {
                product_id: 5,
                name: "Coffee Mug".to_string(),
                unit_price: 299,
                quantity: 1,
                line_total: 299,
            }]
        );
    }

    #[test]
    fn test_clones_share_one_cart() {
        let state = CartState::new(Arc::new(Catalog::demo()));
        let other = state.clone();

        other.with_cart_mut(|c| c.add(ProductId::new(1)).unwrap());
        assert_eq!(state.with_cart(|c| c.quantity_of(ProductId::new(1))), 1);
    }
}
