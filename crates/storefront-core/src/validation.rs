//! # Validation Module
//!
//! Input validation for catalog products.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Where Validation Happens                           │
//! │                                                                         │
//! │  Catalog::new(products)                                                │
//! │  ├── validate_product(p) for every product  ◄── THIS MODULE            │
//! │  └── id uniqueness across the whole list                               │
//! │                                                                         │
//! │  Catalog::filter / CartStore::decrease / CartStore::remove             │
//! │  └── no validation: every input is accepted (permissive by contract)   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use storefront_core::validation::{validate_category, validate_price_minor};
//!
//! assert!(validate_price_minor(1999).is_ok());
//! assert!(validate_category("All").is_err());
//! ```

use crate::error::ValidationError;
use crate::types::Product;
use crate::ALL_CATEGORIES;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

const MAX_NAME_LEN: usize = 200;
const MAX_CATEGORY_LEN: usize = 100;

/// Validates a product id. Zero is reserved as "no product".
pub fn validate_product_id(id: u32) -> ValidationResult<()> {
    if id == 0 {
        return Err(ValidationError::MustBePositive {
            field: "id".to_string(),
        });
    }

    Ok(())
}

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - Must be at most 200 characters
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates a price in minor units.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items)
pub fn validate_price_minor(minor: i64) -> ValidationResult<()> {
    if minor < 0 {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a product category.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - Must be at most 100 characters
/// - Must not be the "All" selector value
pub fn validate_category(category: &str) -> ValidationResult<()> {
    let category = category.trim();

    if category.is_empty() {
        return Err(ValidationError::Required {
            field: "category".to_string(),
        });
    }

    if category.chars().count() > MAX_CATEGORY_LEN {
        return Err(ValidationError::TooLong {
            field: "category".to_string(),
            max: MAX_CATEGORY_LEN,
        });
    }

    if category == ALL_CATEGORIES {
        return Err(ValidationError::Reserved {
            field: "category".to_string(),
            value: category.to_string(),
        });
    }

    Ok(())
}

/// Validates every field of a product.
pub fn validate_product(product: &Product) -> ValidationResult<()> {
    validate_product_id(product.id.get())?;
    validate_product_name(&product.name)?;
    validate_price_minor(product.price.minor())?;
    validate_category(&product.category)?;
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_product_id() {
        assert!(validate_product_id(1).is_ok());
        assert!(validate_product_id(0).is_err());
    }

    #[test]
    fn test_validate_product_name() {
        assert!(validate_product_name("Coffee Mug").is_ok());
        assert!(validate_product_name("").is_err());
        assert!(validate_product_name("   ").is_err());
        assert!(validate_product_name(&"A".repeat(300)).is_err());
    }

    #[test]
    fn test_validate_price_minor() {
        assert!(validate_price_minor(0).is_ok());
        assert!(validate_price_minor(1999).is_ok());
        assert!(validate_price_minor(-1).is_err());
    }

    #[test]
    fn test_validate_category() {
        assert!(validate_category("Electronics").is_ok());
        assert!(validate_category("").is_err());
        assert_eq!(
            validate_category("All"),
            Err(ValidationError::Reserved {
                field: "category".to_string(),
                value: "All".to_string(),
            })
        );
    }

    #[test]
    fn test_validate_product() {
        assert!(validate_product(&Product::new(1, "Backpack", 1299, "Fashion")).is_ok());
        assert!(validate_product(&Product::new(0, "Backpack", 1299, "Fashion")).is_err());
        assert!(validate_product(&Product::new(1, "Backpack", -5, "Fashion")).is_err());
    }
}
