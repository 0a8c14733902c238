//! # storefront-core: Pure Business Logic for the Storefront
//!
//! This crate holds the catalog queries and the cart state machine as pure,
//! synchronous code with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Storefront Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                Presentation (shell / web frontend)              │   │
//! │  │    Search box ──► Category select ──► Cart panel ──► Checkout   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    App Commands                                 │   │
//! │  │    search_products, add_to_cart, decrease_cart_item, checkout   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ storefront-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │  catalog  │  │   cart    │  │ validation│  │   │
//! │  │   │ ProductId │  │  Catalog  │  │ CartStore │  │   rules   │  │   │
//! │  │   │  Product  │  │  Filter   │  │ CartEvent │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (ProductId, Product)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`catalog`] - The immutable product list and its filtered queries
//! - [`cart`] - CartStore: quantities, derived totals, checkout, subscriptions
//! - [`error`] - Domain error types
//! - [`validation`] - Catalog input validation
//!
//! ## Example Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use storefront_core::{CartStore, Catalog, ProductId};
//!
//! let catalog = Arc::new(Catalog::demo());
//! let mut cart = CartStore::new(catalog);
//!
//! cart.add(ProductId::new(5)).unwrap(); // Coffee Mug, 299
//! cart.add(ProductId::new(5)).unwrap();
//!
//! assert_eq!(cart.total_item_count(), 2);
//! assert_eq!(cart.total_amount().minor(), 598);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use storefront_core::Money` instead of
// `use storefront_core::money::Money`

pub use cart::{CartEntry, CartEvent, CartStore, CheckoutSummary, SubscriptionId};
pub use catalog::{Catalog, ProductFilter};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Category selector value that matches every product.
///
/// It is always the first entry of [`Catalog::list_categories`] and can
/// never be used as a real product category.
pub const ALL_CATEGORIES: &str = "All";
