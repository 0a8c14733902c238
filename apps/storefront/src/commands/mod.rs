//! # Commands Module
//!
//! One function per user action. The shell (or any other front end) calls
//! these and serializes the result.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs       ◄─── You are here (exports)
//! ├── product.rs   ◄─── Category list, filtered product listing
//! ├── cart.rs      ◄─── Add / decrease / remove, cart view
//! ├── checkout.rs  ◄─── Demo order confirmation
//! └── config.rs    ◄─── Configuration retrieval
//! ```
//!
//! ## State Injection
//! Each command declares only the state it needs:
//! ```rust,ignore
//! // Only needs the catalog
//! fn list_categories(catalog: &CatalogState)
//!
//! // Only needs the cart
//! fn get_cart(cart: &CartState)
//!
//! // Needs both
//! fn search_products(catalog: &CatalogState, cart: &CartState, ...)
//! ```

pub mod cart;
pub mod checkout;
pub mod config;
pub mod product;
