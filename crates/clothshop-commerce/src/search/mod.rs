//! Search module.
//!
//! Client-side visibility rules for the product grid.

mod filter;

pub use filter::{BrandChip, FilterState, ALL_BRANDS};
