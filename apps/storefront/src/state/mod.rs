//! # Application State
//!
//! Each concern gets its own small state type, and every command takes only
//! the state it needs:
//!
//! ```text
//! ┌──────────────────┐ ┌──────────────────┐ ┌──────────────────────┐
//! │   CatalogState   │ │    CartState     │ │    ConfigState       │
//! │                  │ │                  │ │                      │
//! │  • Arc<Catalog>  │ │  • CartStore     │ │  • Store name        │
//! │  • read-only     │ │  • Mutex-guarded │ │  • Currency format   │
//! └──────────────────┘ └──────────────────┘ └──────────────────────┘
//! ```

mod cart;
mod catalog;
mod config;

pub use cart::{CartLine, CartState, CartTotals};
pub use catalog::CatalogState;
pub use config::ConfigState;
