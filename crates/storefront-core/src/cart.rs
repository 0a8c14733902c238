//! # Cart Module
//!
//! `CartStore` owns the mapping from product id to quantity and derives every
//! cart view (line items, counts, totals, checkout summary) from it.
//!
//! ## Entry State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Lifecycle of One Cart Entry                          │
//! │                                                                         │
//! │            add            add               decrease                    │
//! │  absent ───────► qty=1 ───────► qty=N ──────────────► qty=N-1 ...       │
//! │    ▲               │                                                    │
//! │    │   decrease    │                                                    │
//! │    └───────────────┘                                                    │
//! │    ▲                                                                    │
//! │    │  remove (from any quantity)                                        │
//! │    └──────────────────────────────────────────────────────────────      │
//! │                                                                         │
//! │  A zero quantity is unrepresentable: entries are NonZeroU32 and the     │
//! │  key is deleted instead of being decremented to 0.                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Ownership
//! Mutations take `&mut self`, so only the single owner of a `CartStore` can
//! change it. Other components read derived views or subscribe to
//! [`CartEvent`]s to re-render after each change.

use std::collections::BTreeMap;
use std::fmt;
use std::num::NonZeroU32;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use ts_rs::TS;

use crate::catalog::Catalog;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{Product, ProductId};

// =============================================================================
// Events & Subscriptions
// =============================================================================

/// Emitted to subscribers after every mutation that changed the cart.
///
/// `quantity` is the quantity after the change. No-op calls (decreasing or
/// removing an absent product) emit nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum CartEvent {
    #[serde(rename_all = "camelCase")]
    Added { product_id: ProductId, quantity: u32 },

    #[serde(rename_all = "camelCase")]
    Decreased { product_id: ProductId, quantity: u32 },

    #[serde(rename_all = "camelCase")]
    Removed { product_id: ProductId },
}

impl CartEvent {
    pub fn product_id(&self) -> ProductId {
        match self {
            CartEvent::Added { product_id, .. }
            | CartEvent::Decreased { product_id, .. }
            | CartEvent::Removed { product_id } => *product_id,
        }
    }
}

/// Handle returned by [`CartStore::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type CartListener = Box<dyn Fn(&CartEvent) + Send>;

// =============================================================================
// Derived Views
// =============================================================================

/// A cart line: a catalog product and its quantity. Derived, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartEntry<'a> {
    pub product: &'a Product,
    pub quantity: u32,
}

impl CartEntry<'_> {
    /// Unit price × quantity.
    #[inline]
    pub fn line_total(&self) -> Money {
        self.product.line_total(self.quantity)
    }
}

/// Totals captured by a successful checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutSummary {
    pub item_count: u64,
    pub total_amount: Money,
}

// =============================================================================
// Cart Store
// =============================================================================

/// The shopping cart.
///
/// ## Invariants
/// - Every key references a product of the store's catalog
/// - Every quantity is >= 1
pub struct CartStore {
    catalog: Arc<Catalog>,
    quantities: BTreeMap<ProductId, NonZeroU32>,
    listeners: Vec<(SubscriptionId, CartListener)>,
    next_subscription: u64,
}

impl CartStore {
    /// Creates an empty cart over `catalog`.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        CartStore {
            catalog,
            quantities: BTreeMap::new(),
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    /// The catalog this cart resolves products against.
    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    // -------------------------------------------------------------------------
    // Mutations
    // -------------------------------------------------------------------------

    /// Adds one unit of a product, returning the new quantity.
    ///
    /// ## Errors
    /// - [`CoreError::InvalidProductId`] if the id is not in the catalog
    /// - [`CoreError::QuantityOverflow`] if the quantity is already `u32::MAX`
    /// - [`CoreError::AmountOverflow`] if the cart total would not fit in `i64`
    ///
    /// The cart is unchanged when an error is returned.
    pub fn add(&mut self, product_id: ProductId) -> CoreResult<u32> {
        if !self.catalog.contains(product_id) {
            warn!(%product_id, "Rejected add of unknown product");
            return Err(CoreError::InvalidProductId(product_id));
        }

        let quantity = match self.quantities.get(&product_id) {
            Some(current) => current
                .checked_add(1)
                .ok_or(CoreError::QuantityOverflow(product_id))?,
            None => NonZeroU32::MIN,
        };

        if self.checked_total_with(product_id, quantity).is_none() {
            warn!(%product_id, "Rejected add: cart total would overflow");
            return Err(CoreError::AmountOverflow(product_id));
        }

        self.quantities.insert(product_id, quantity);
        self.notify(&CartEvent::Added {
            product_id,
            quantity: quantity.get(),
        });

        Ok(quantity.get())
    }

    /// Removes one unit of a product, returning the remaining quantity.
    ///
    /// ## Behavior
    /// - Absent product: no-op, returns 0
    /// - Quantity 1: the entry is deleted, returns 0
    /// - Otherwise: decremented by one
    pub fn decrease(&mut self, product_id: ProductId) -> u32 {
        let Some(current) = self.quantities.get(&product_id).copied() else {
            return 0;
        };

        match NonZeroU32::new(current.get() - 1) {
            Some(quantity) => {
                self.quantities.insert(product_id, quantity);
                self.notify(&CartEvent::Decreased {
                    product_id,
                    quantity: quantity.get(),
                });
                quantity.get()
            }
            None => {
                self.quantities.remove(&product_id);
                self.notify(&CartEvent::Removed { product_id });
                0
            }
        }
    }

    /// Deletes a product's entry whatever its quantity.
    ///
    /// Returns false (and does nothing) if the product was not in the cart.
    pub fn remove(&mut self, product_id: ProductId) -> bool {
        if self.quantities.remove(&product_id).is_none() {
            return false;
        }

        self.notify(&CartEvent::Removed { product_id });
        true
    }

    // -------------------------------------------------------------------------
    // Derived Queries
    // -------------------------------------------------------------------------

    /// Quantity of a product in the cart, 0 when absent.
    pub fn quantity_of(&self, product_id: ProductId) -> u32 {
        self.quantities.get(&product_id).map_or(0, |q| q.get())
    }

    /// Cart lines in ascending product id order.
    pub fn line_items(&self) -> Vec<CartEntry<'_>> {
        self.quantities
            .iter()
            .filter_map(|(id, quantity)| {
                self.catalog.get(*id).map(|product| CartEntry {
                    product,
                    quantity: quantity.get(),
                })
            })
            .collect()
    }

    /// Sum of all quantities.
    pub fn total_item_count(&self) -> u64 {
        self.quantities.values().map(|q| u64::from(q.get())).sum()
    }

    /// Sum of price × quantity over all lines.
    ///
    /// `add` refuses any change whose total would overflow, so every line
    /// total and partial sum here fits in `i64`.
    pub fn total_amount(&self) -> Money {
        self.line_items().iter().map(CartEntry::line_total).sum()
    }

    /// Number of distinct products in the cart.
    pub fn line_count(&self) -> usize {
        self.quantities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quantities.is_empty()
    }

    /// Plain copy of the id → quantity mapping.
    pub fn snapshot(&self) -> BTreeMap<ProductId, u32> {
        self.quantities
            .iter()
            .map(|(id, quantity)| (*id, quantity.get()))
            .collect()
    }

    /// Captures the totals for a demo order.
    ///
    /// The cart is not cleared: the demo storefront keeps its contents after
    /// an order is placed.
    ///
    /// ## Errors
    /// [`CoreError::EmptyCart`] when there are no line items.
    pub fn checkout(&self) -> CoreResult<CheckoutSummary> {
        if self.is_empty() {
            debug!("Checkout attempted on empty cart");
            return Err(CoreError::EmptyCart);
        }

        Ok(CheckoutSummary {
            item_count: self.total_item_count(),
            total_amount: self.total_amount(),
        })
    }

    // -------------------------------------------------------------------------
    // Subscriptions
    // -------------------------------------------------------------------------

    /// Registers a listener called synchronously after each cart change.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: Fn(&CartEvent) + Send + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes a listener. Returns false if the id was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    /// Cart total with `product_id` set to `quantity`, or `None` on overflow.
    fn checked_total_with(&self, product_id: ProductId, quantity: NonZeroU32) -> Option<Money> {
        self.quantities
            .iter()
            .filter(|(id, _)| **id != product_id)
            .map(|(id, qty)| (*id, *qty))
            .chain(std::iter::once((product_id, quantity)))
            .try_fold(Money::zero(), |total, (id, qty)| {
                let line = self.catalog.get(id)?.price.checked_multiply_quantity(qty.get())?;
                total.checked_add(line)
            })
    }

    fn notify(&self, event: &CartEvent) {
        for (_, listener) in &self.listeners {
            listener(event);
        }
    }
}

impl fmt::Debug for CartStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartStore")
            .field("quantities", &self.snapshot())
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
