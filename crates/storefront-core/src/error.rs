//! # Error Types
//!
//! Domain-specific error types for storefront-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  storefront-core errors (this file)                                    │
//! │  ├── CoreError        - Cart and catalog failures                      │
//! │  └── ValidationError  - Catalog input validation failures              │
//! │                                                                         │
//! │  App errors (apps/storefront)                                          │
//! │  └── ApiError         - What the presentation layer sees (serialized)  │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Shell output           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Operations that are deliberately permissive (`decrease`/`remove` on an
//! absent product, filters that match nothing) never produce an error.

use thiserror::Error;

use crate::types::ProductId;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// `add` was called with an id that is not in the catalog.
    ///
    /// The cart is left untouched: no phantom entry is created.
    #[error("Product not found in catalog: {0}")]
    InvalidProductId(ProductId),

    /// `checkout` was called on a cart with no line items.
    ///
    /// ## User Workflow
    /// ```text
    /// Click "Checkout"
    ///      │
    ///      ▼
    /// cart.checkout() → EmptyCart
    ///      │
    ///      ▼
    /// UI shows: "Your cart is empty."
    /// ```
    #[error("Cart is empty")]
    EmptyCart,

    /// Adding one more unit would overflow the quantity counter.
    #[error("Quantity for product {0} cannot be increased any further")]
    QuantityOverflow(ProductId),

    /// Adding one more unit would push the cart total past `i64::MAX`
    /// minor units.
    #[error("Cart total would overflow when adding product {0}")]
    AmountOverflow(ProductId),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors raised while building a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Duplicate value (e.g., duplicate product id).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },

    /// Value is reserved for internal use (e.g., the "All" category).
    #[error("{field} '{value}' is reserved")]
    Reserved { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
