//! # Checkout Command
//!
//! Places a demo order from the current cart.
//!
//! ## User Workflow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Click "Checkout (Demo)"                                                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CartStore::checkout()                                                  │
//! │       │                                                                 │
//! │       ├── empty ──► ApiError EMPTY_CART "Your cart is empty."          │
//! │       │                                                                 │
//! │       └── ok ─────► "Order placed! Items: 3, Total: ₹4297. (Demo only)" │
//! │                                                                         │
//! │  No payment, no persistence: the cart keeps its contents afterwards.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::{CartState, ConfigState};

/// Confirmation shown after a successful demo checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutConfirmation {
    /// Reference for this demo order (nothing is stored under it).
    pub order_ref: String,
    pub placed_at: DateTime<Utc>,
    pub item_count: u64,
    pub total_amount: i64,
    /// Ready-to-display confirmation text.
    pub message: String,
}

/// Checks out the cart.
///
/// ## Returns
/// The confirmation, or EMPTY_CART when there is nothing to order
pub fn checkout(cart: &CartState, config: &ConfigState) -> Result<CheckoutConfirmation, ApiError> {
    debug!("checkout command");

    let summary = cart.with_cart(|c| c.checkout())?;

    let order_ref = Uuid::new_v4().to_string();
    let message = format!(
        "Order placed! Items: {}, Total: {}. (Demo only)",
        summary.item_count,
        config.format_currency(summary.total_amount.minor())
    );

    info!(
        order_ref = %order_ref,
        items = summary.item_count,
        total = %summary.total_amount,
        "Demo order placed"
    );

    Ok(CheckoutConfirmation {
        order_ref,
        placed_at: Utc::now(),
        item_count: summary.item_count,
        total_amount: summary.total_amount.minor(),
        message,
    })
}
