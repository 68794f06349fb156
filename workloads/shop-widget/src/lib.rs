//! Clothshop cart widget.
//!
//! Renders the product grid, keeps the in-memory cart, filters cards by
//! brand chip and search text, and posts the cart to the checkout endpoint.
//!
//! - `ShopWidget` - Catalog loading, cart panel, filters and checkout over a [`Page`]
//! - `sections` - Markup for the grid, cart, skeletons, banners and order history
//! - `WidgetConfig` - Endpoints, element ids, currency and timings
//!
//! On `wasm32` the `web` module binds the widget to the live document and
//! starts it when the module loads.

mod action;
mod config;
mod error;
mod page;
pub mod sections;
mod widget;

#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(test)]
mod testing;

pub use action::{ClickAction, ClickTarget};
pub use config::{DomIds, WidgetConfig};
pub use error::WidgetError;
pub use page::{Field, Page, Slot};
pub use widget::ShopWidget;

#[cfg(target_arch = "wasm32")]
pub use web::{start, ConsoleSink, DomPage, CONFIG_ELEMENT_ID};
