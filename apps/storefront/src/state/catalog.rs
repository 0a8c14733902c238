//! # Catalog State
//!
//! Wraps the process-wide `Catalog` for use in commands.
//!
//! ## Thread Safety
//! The catalog is immutable after startup, so it is shared through an `Arc`
//! with no locking. The same `Arc` is handed to the `CartStore` so cart lines
//! resolve against exactly the products the shell lists.

use std::sync::Arc;

use storefront_core::Catalog;

/// Wrapper around the shared `Catalog`.
#[derive(Debug, Clone)]
pub struct CatalogState {
    catalog: Arc<Catalog>,
}

impl CatalogState {
    pub fn new(catalog: Catalog) -> Self {
        CatalogState {
            catalog: Arc::new(catalog),
        }
    }

    /// Returns a reference to the inner Catalog.
    pub fn inner(&self) -> &Catalog {
        &self.catalog
    }

    /// Returns a new handle to the shared catalog.
    pub fn shared(&self) -> Arc<Catalog> {
        Arc::clone(&self.catalog)
    }
}

impl Default for CatalogState {
    /// The demo catalog.
    fn default() -> Self {
        CatalogState::new(Catalog::demo())
    }
}
