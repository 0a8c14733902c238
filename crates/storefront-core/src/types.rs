//! # Domain Types
//!
//! Core domain types used throughout the storefront.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                             │
//! │  │    ProductId    │   │     Product     │                             │
//! │  │  ─────────────  │   │  ─────────────  │                             │
//! │  │  u32 (> 0)      │◄──│  id             │                             │
//! │  └─────────────────┘   │  name           │                             │
//! │                        │  price (Money)  │                             │
//! │                        │  category       │                             │
//! │                        └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Products are created once as part of the static catalog and never
//! mutated afterwards.

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Product Id
// =============================================================================

/// Identifier of a catalog product.
///
/// Catalog construction rejects zero, so every id reachable through a
/// [`Catalog`](crate::Catalog) is a positive integer.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub struct ProductId(u32);

impl ProductId {
    #[inline]
    pub const fn new(id: u32) -> Self {
        ProductId(id)
    }

    #[inline]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product listed in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier.
    pub id: ProductId,

    /// Display name; searched case-insensitively.
    pub name: String,

    /// Unit price in minor currency units.
    pub price: Money,

    /// Category shown in the category selector.
    pub category: String,
}

impl Product {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        price_minor: i64,
        category: impl Into<String>,
    ) -> Self {
        Product {
            id: ProductId::new(id),
            name: name.into(),
            price: Money::from_minor(price_minor),
            category: category.into(),
        }
    }

    /// Returns the price of `qty` units of this product.
    #[inline]
    pub fn line_total(&self, qty: u32) -> Money {
        self.price.multiply_quantity(qty)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
