//! # Cart Commands
//!
//! Commands for cart manipulation. Every command returns the full updated
//! cart so the presentation layer can re-render the panel and badge from a
//! single response.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────────┐                    │
//! │  │  Empty   │────►│ In Cart  │────►│ Demo order   │                    │
//! │  │  Cart    │     │          │     │ confirmation │                    │
//! │  └──────────┘     └──────────┘     └──────────────┘                    │
//! │       ▲                │                  │                             │
//! │       │           add_to_cart         checkout                          │
//! │       │           decrease_cart_item  (checkout.rs, cart kept)          │
//! │       │           remove_from_cart                                      │
//! │       │                │                                                │
//! │       └────────────────┘  (last line removed)                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use storefront_core::{CartStore, ProductId};
use tracing::debug;

use crate::error::ApiError;
use crate::state::{CartLine, CartState, CartTotals};

/// Cart response including items and totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub items: Vec<CartLine>,
    pub totals: CartTotals,
}

impl From<&CartStore> for CartResponse {
    fn from(cart: &CartStore) -> Self {
        CartResponse {
            items: cart.line_items().iter().map(CartLine::from).collect(),
            totals: CartTotals::from(cart),
        }
    }
}

/// Gets the current cart contents.
pub fn get_cart(cart: &CartState) -> CartResponse {
    debug!("get_cart command");
    cart.with_cart(|c| CartResponse::from(c))
}

/// Adds one unit of a product ("Add to cart" and "+").
///
/// ## Returns
/// Updated cart, or NOT_FOUND if the id is not in the catalog
pub fn add_to_cart(cart: &CartState, product_id: u32) -> Result<CartResponse, ApiError> {
    debug!(product_id = %product_id, "add_to_cart command");

    cart.with_cart_mut(|c| {
        c.add(ProductId::new(product_id))?;
        Ok::<CartResponse, ApiError>(CartResponse::from(&*c))
    })
}

/// Removes one unit of a product ("-").
///
/// Decreasing the last unit deletes the line; decreasing a product that is
/// not in the cart is a no-op.
pub fn decrease_cart_item(cart: &CartState, product_id: u32) -> CartResponse {
    debug!(product_id = %product_id, "decrease_cart_item command");

    cart.with_cart_mut(|c| {
        c.decrease(ProductId::new(product_id));
        CartResponse::from(&*c)
    })
}

/// Deletes a product's line whatever its quantity ("Remove").
pub fn remove_from_cart(cart: &CartState, product_id: u32) -> CartResponse {
    debug!(product_id = %product_id, "remove_from_cart command");

    cart.with_cart_mut(|c| {
        c.remove(ProductId::new(product_id));
        CartResponse::from(&*c)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::state::CatalogState;

    fn cart() -> CartState {
        CartState::new(CatalogState::default().shared())
    }

    #[test]
    fn test_add_decrease_remove_flow() {
        let cart = cart();

        add_to_cart(&cart, 1).unwrap();
        let response = add_to_cart(&cart, 1).unwrap();
        assert_eq!(response.items.len(), 1);
        assert_eq!(response.items[0].quantity, 2);
        assert_eq!(response.totals.total_items, 2);
        assert_eq!(response.totals.total_amount, 2 * 1999);

        let response = decrease_cart_item(&cart, 1);
        assert_eq!(response.items[0].quantity, 1);

        let response = remove_from_cart(&cart, 1);
        assert!(response.items.is_empty());
        assert_eq!(response.totals.total_items, 0);
        assert_eq!(response.totals.total_amount, 0);
    }

    #[test]
    fn test_add_unknown_product() {
        let cart = cart();

        let err = add_to_cart(&cart, 77).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert!(get_cart(&cart).items.is_empty());
    }

    #[test]
    fn test_decrease_absent_is_noop() {
        let cart = cart();
        add_to_cart(&cart, 2).unwrap();

        let response = decrease_cart_item(&cart, 5);
        assert_eq!(response, get_cart(&cart));
        assert_eq!(response.totals.line_count, 1);
    }

    #[test]
    fn test_response_serializes_camel_case() {
        let cart = cart();
        add_to_cart(&cart, 6).unwrap();

        let json = serde_json::to_value(get_cart(&cart)).unwrap();
        assert_eq!(json["items"][0]["productId"], 6);
        assert_eq!(json["items"][0]["lineTotal"], 149);
        assert_eq!(json["totals"]["totalItems"], 1);
    }
}
