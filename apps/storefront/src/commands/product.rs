//! # Product Commands
//!
//! Commands for the product listing: category selector and filtered grid.
//!
//! ## Listing Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Product Listing Flow                                 │
//! │                                                                         │
//! │  User types "mug" and picks "Home"                                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  search_products(search: "mug", category: "Home")                      │
//! │       │                                                                 │
//! │       ├── Catalog::filter (pure, catalog order preserved)              │
//! │       │                                                                 │
//! │       └── CartStore::quantity_of (for the "N in cart" label)           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Vec<ProductDto> rendered as the product grid                          │
//! │  (empty → "No products match your search.")                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::time::Instant;
use storefront_core::{Product, ProductId};
use tracing::debug;

use crate::error::ApiError;
use crate::state::{CartState, CatalogState};

/// Product DTO (Data Transfer Object) for the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub id: u32,
    pub name: String,
    pub price: i64,
    pub category: String,
    /// Quantity currently in the cart; the "-" button is shown when > 0.
    pub in_cart: u32,
}

impl ProductDto {
    fn new(product: &Product, in_cart: u32) -> Self {
        ProductDto {
            id: product.id.get(),
            name: product.name.clone(),
            price: product.price.minor(),
            category: product.category.clone(),
            in_cart,
        }
    }
}

/// Returns the category selector options: "All" then each category once.
pub fn list_categories(catalog: &CatalogState) -> Vec<String> {
    debug!("list_categories command");
    catalog
        .inner()
        .list_categories()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Lists the products matching a search term and category.
///
/// ## Arguments
/// * `search` - Free text, matched case-insensitively against product names
///   after trimming; empty matches everything
/// * `category` - `"All"` or an exact category name; unknown names match
///   nothing
///
/// ## Returns
/// Matching products in catalog order, each with its current cart quantity.
pub fn search_products(
    catalog: &CatalogState,
    cart: &CartState,
    search: &str,
    category: &str,
) -> Vec<ProductDto> {
    let start = Instant::now();

    let products = catalog.inner().filter(search, category);
    let dtos: Vec<ProductDto> = cart.with_cart(|c| {
        products
            .iter()
            .map(|product| ProductDto::new(product, c.quantity_of(product.id)))
            .collect()
    });

    debug!(
        search = %search,
        category = %category,
        count = dtos.len(),
        elapsed_us = start.elapsed().as_micros() as u64,
        "search_products command"
    );

    dtos
}

/// Gets a single product by id.
///
/// ## Returns
/// The product if found, or ApiError::NotFound
pub fn get_product_by_id(
    catalog: &CatalogState,
    cart: &CartState,
    id: u32,
) -> Result<ProductDto, ApiError> {
    debug!(id = %id, "get_product_by_id command");

    let product_id = ProductId::new(id);
    let product = catalog
        .inner()
        .get(product_id)
        .ok_or_else(|| ApiError::not_found("Product", &id.to_string()))?;

    Ok(ProductDto::new(
        product,
        cart.with_cart(|c| c.quantity_of(product_id)),
    ))
}
