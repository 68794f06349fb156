//! Data access for the clothshop widget.
//!
//! This crate provides:
//! - `ShopApi` - The products / checkout / orders calls the widget depends on
//! - `HttpShopApi` - `reqwest` implementation, usable natively and on `wasm32`
//! - `ApiEndpoints` / `Endpoint` - Where each call goes
//! - `FetchError` - Transport, status and decoding failures as values

mod client;
mod endpoint;
mod http;

pub use client::*;
pub use endpoint::*;
pub use http::*;
