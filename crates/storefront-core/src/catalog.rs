//! # Catalog Module
//!
//! The immutable product list and its read-only queries.
//!
//! ## Filter Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Product Filter Flow                                  │
//! │                                                                         │
//! │  User types " SHOES " and picks "All"                                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ProductFilter::new(" SHOES ", "All")                                  │
//! │       │  search term trimmed + lowercased → "shoes"                    │
//! │       ▼                                                                 │
//! │  ┌───────────────────────────────────────────┐                         │
//! │  │  for each product, in catalog order:      │                         │
//! │  │    category == "All" || category matches  │                         │
//! │  │    AND lowercase(name) contains "shoes"   │                         │
//! │  └───────────────────────────────────────────┘                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  [Running Shoes]                                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Unknown categories are not an error: they match nothing.

use std::collections::HashSet;

use tracing::debug;

use crate::error::{CoreResult, ValidationError};
use crate::types::{Product, ProductId};
use crate::validation::validate_product;
use crate::ALL_CATEGORIES;

// =============================================================================
// Product Filter
// =============================================================================

/// Search and category selection, as held by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductFilter {
    search: String,
    category: String,
}

impl ProductFilter {
    /// Creates a filter. The search term is normalised once here so that
    /// matching every product does not re-trim and re-lowercase it.
    pub fn new(search: &str, category: &str) -> Self {
        ProductFilter {
            search: normalize_search_term(search),
            category: category.to_string(),
        }
    }

    /// The normalised (trimmed, lowercased) search term.
    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// Returns true if `product` passes both the category and search checks.
    pub fn matches(&self, product: &Product) -> bool {
        let matches_category =
            self.category == ALL_CATEGORIES || product.category == self.category;

        matches_category && product.name.to_lowercase().contains(&self.search)
    }
}

impl Default for ProductFilter {
    /// Empty search, "All" categories: matches the whole catalog.
    fn default() -> Self {
        ProductFilter::new("", ALL_CATEGORIES)
    }
}

/// Lowercases and strips surrounding whitespace from a search term.
fn normalize_search_term(term: &str) -> String {
    term.trim().to_lowercase()
}

// =============================================================================
// Catalog
// =============================================================================

/// An ordered, immutable list of products with unique ids.
///
/// Insertion order is the display order for the "All" category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Builds a catalog, validating every product and id uniqueness.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::{Catalog, Product};
    ///
    /// let ok = Catalog::new(vec![Product::new(1, "Mug", 299, "Home")]);
    /// assert!(ok.is_ok());
    ///
    /// let dup = Catalog::new(vec![
    ///     Product::new(1, "Mug", 299, "Home"),
    ///     Product::new(1, "Cup", 199, "Home"),
    /// ]);
    /// assert!(dup.is_err());
    /// ```
    pub fn new(products: Vec<Product>) -> CoreResult<Self> {
        let mut seen = HashSet::with_capacity(products.len());

        for product in &products {
            validate_product(product)?;

            if !seen.insert(product.id) {
                return Err(ValidationError::Duplicate {
                    field: "id".to_string(),
                    value: product.id.to_string(),
                }
                .into());
            }
        }

        debug!(products = products.len(), "Catalog loaded");
        Ok(Catalog { products })
    }

    /// The six-product demo catalog the storefront ships with.
    pub fn demo() -> Self {
        Catalog {
            products: demo_products(),
        }
    }

    /// All products in display order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Looks up a product by id.
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Returns `"All"` followed by each distinct category once, in the order
    /// the categories first appear in the catalog.
    pub fn list_categories(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut categories = vec![ALL_CATEGORIES];

        for product in &self.products {
            if seen.insert(product.category.as_str()) {
                categories.push(product.category.as_str());
            }
        }

        categories
    }

    /// Returns the products matching `search_term` within `category`,
    /// preserving catalog order.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::Catalog;
    ///
    /// let catalog = Catalog::demo();
    /// let hits = catalog.filter(" SHOES ", "All");
    /// assert_eq!(hits.len(), 1);
    /// assert_eq!(hits[0].name, "Running Shoes");
    /// ```
    pub fn filter(&self, search_term: &str, category: &str) -> Vec<&Product> {
        self.filter_by(&ProductFilter::new(search_term, category))
    }

    /// Same as [`Catalog::filter`], taking a prepared [`ProductFilter`].
    pub fn filter_by(&self, filter: &ProductFilter) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|product| filter.matches(product))
            .collect()
    }
}

fn demo_products() -> Vec<Product> {
    vec![
        Product::new(1, "Wireless Headphones", 1999, "Electronics"),
        Product::new(2, "Smart Watch", 2499, "Electronics"),
        Product::new(3, "Running Shoes", 1799, "Fashion"),
        Product::new(4, "Backpack", 1299, "Fashion"),
        Product::new(5, "Coffee Mug", 299, "Home"),
        Product::new(6, "Notebook", 149, "Stationery"),
    ]
}

// =============================================================================
// Unit Tests
// =============================================================================
