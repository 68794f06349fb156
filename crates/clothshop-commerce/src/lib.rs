//! Domain types and logic for the clothshop cart widget.
//!
//! This crate is free of I/O and of any DOM dependency:
//!
//! - **Catalog**: Products as served by `GET /api/products`
//! - **Cart**: The cart store with merge-on-add, removal by key and subscriptions
//! - **Search**: Brand chip and free-text visibility rules for the product grid
//! - **Checkout**: Request/response payloads and the outcome of a checkout attempt
//!
//! # Example
//!
//! ```rust
//! use clothshop_commerce::prelude::*;
//!
//! let shirt = Product::new(101, "Cotton T-Shirt", "UrbanCo", 499)
//!     .with_sizes(["S", "M", "L"]);
//!
//! let mut cart = CartStore::new();
//! cart.add(&shirt, "M").unwrap();
//! cart.add(&shirt, "M").unwrap();
//!
//! assert_eq!(cart.len(), 1);
//! assert_eq!(cart.total(), Price::new(998));
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod catalog;
pub mod cart;
pub mod checkout;
pub mod search;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Price};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Price};

    // Catalog
    pub use crate::catalog::{Catalog, Product};

    // Cart
    pub use crate::cart::{CartEvent, CartLine, CartStore, CartView, LineKey, MAX_QUANTITY_PER_LINE};

    // Checkout
    pub use crate::checkout::{CheckoutOutcome, CheckoutRequest, CheckoutResponse, OrderSummary};

    // Search
    pub use crate::search::{BrandChip, FilterState};
}
