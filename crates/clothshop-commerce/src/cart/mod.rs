//! Shopping cart module.
//!
//! Contains the cart line type, its identity key, and the cart store.

mod line;
mod store;

pub use line::{CartLine, LineKey, MAX_QUANTITY_PER_LINE};
pub use store::{CartEvent, CartStore, CartView};
