//! Product catalog module.

mod product;

pub use product::{Catalog, Product};
