//! Checkout module.
//!
//! Contains the checkout payload, the server's reply, the outcome shown to
//! the shopper, and order history rows.

mod order;
mod outcome;
mod request;

pub use order::OrderSummary;
pub use outcome::CheckoutOutcome;
pub use request::{CheckoutRequest, CheckoutResponse, DEFAULT_PAYMENT};
