//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer minor units                                      │
//! │    Every price and total is a whole number of the smallest unit.        │
//! │    Cart totals are exact sums and products, no rounding drift.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use storefront_core::money::Money;
//!
//! let price = Money::from_minor(1999);
//! let line_total = price.multiply_quantity(3);
//! assert_eq!(line_total.minor(), 5997);
//!
//! let total: Money = [price, Money::from_minor(1)].into_iter().sum();
//! assert_eq!(total.minor(), 2000);
//! ```
//!
//! Currency symbols and decimal placement are a presentation concern; see the
//! app's `ConfigState::format_currency`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit.
///
/// ## Design Decisions
/// - **i64 (signed)**: matches the integer width used for all totals
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support for JSON serialization
///
/// ```text
/// Product.price ──► CartEntry.line_total ──► CartStore.total_amount
///                                                  │
///                                                  ▼
///                                       CheckoutSummary.total_amount
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from minor units.
    #[inline]
    pub const fn from_minor(minor: i64) -> Self {
        Money(minor)
    }

    /// Returns the value in minor units.
    #[inline]
    pub const fn minor(&self) -> i64 {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Multiplies a unit price by a cart quantity.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::money::Money;
    ///
    /// let unit_price = Money::from_minor(299);
    /// assert_eq!(unit_price.multiply_quantity(3).minor(), 897);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: u32) -> Self {
        Money(self.0 * qty as i64)
    }

    /// Like [`Money::multiply_quantity`], but `None` on overflow.
    #[inline]
    pub const fn checked_multiply_quantity(&self, qty: u32) -> Option<Self> {
        match self.0.checked_mul(qty as i64) {
            Some(minor) => Some(Money(minor)),
            None => None,
        }
    }

    /// Checked addition; `None` on overflow.
    #[inline]
    pub const fn checked_add(&self, other: Money) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(minor) => Some(Money(minor)),
            None => None,
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Displays the raw minor-unit amount. For logs only; user-facing output
/// goes through the app's currency formatter.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_minor() {
        let money = Money::from_minor(1999);
        assert_eq!(money.minor(), 1999);
        assert!(!money.is_zero());
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_minor(1000);
        let b = Money::from_minor(500);
        assert_eq!((a + b).minor(), 1500);

        let mut c = a;
        c += b;
        assert_eq!(c.minor(), 1500);
    }

    #[test]
    fn test_sum_of_empty_iterator_is_zero() {
        let total: Money = std::iter::empty().sum();
        assert!(total.is_zero());
    }

    #[test]
    fn test_multiply_quantity() {
        assert_eq!(Money::from_minor(2499).multiply_quantity(2).minor(), 4998);
        assert_eq!(Money::from_minor(2499).multiply_quantity(0).minor(), 0);
    }

    #[test]
    fn test_checked_operations() {
        let half = Money::from_minor(i64::MAX / 2 + 1);
        assert_eq!(half.checked_multiply_quantity(1), Some(half));
        assert_eq!(half.checked_multiply_quantity(2), None);
        assert_eq!(half.checked_add(half), None);
        assert_eq!(
            Money::from_minor(1999).checked_add(Money::from_minor(1)),
            Some(Money::from_minor(2000))
        );
    }

    #[test]
    fn test_serializes_as_plain_integer() {
        let json = serde_json::to_string(&Money::from_minor(149)).unwrap();
        assert_eq!(json, "149");
    }
}
