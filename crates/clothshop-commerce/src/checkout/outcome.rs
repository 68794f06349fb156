//! Result of a checkout attempt as presented to the shopper.

use crate::checkout::CheckoutResponse;
use crate::ids::OrderId;
use serde::{Deserialize, Serialize};

/// What happened when the shopper pressed checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CheckoutOutcome {
    /// The server accepted the order. The cart was cleared.
    Placed { order_id: OrderId },
    /// The server answered `ok: false`. The cart is untouched.
    Rejected { message: String },
    /// Nothing to check out; no request was sent.
    EmptyCart,
    /// The request or its reply failed. The cart is untouched.
    Failed { message: String },
    /// A checkout request is already pending; no request was sent.
    InFlight,
}

impl CheckoutOutcome {
    /// Map a server reply to an outcome.
    ///
    /// An `ok: true` reply without an order id still counts as placed.
    pub fn from_response(response: CheckoutResponse) -> Self {
        if response.ok {
            CheckoutOutcome::Placed {
                order_id: OrderId::new(response.order_id.unwrap_or_default()),
            }
        } else {
            CheckoutOutcome::Rejected {
                message: response
                    .error
                    .filter(|e| !e.trim().is_empty())
                    .unwrap_or_else(|| "unknown".to_string()),
            }
        }
    }

    /// Check if the order went through.
    pub fn is_placed(&self) -> bool {
        matches!(self, CheckoutOutcome::Placed { .. })
    }

    /// Check if the cart was left as it was.
    pub fn cart_kept(&self) -> bool {
        !self.is_placed()
    }

    /// Blocking alert text for this outcome, if any.
    pub fn alert_message(&self) -> Option<String> {
        match self {
            CheckoutOutcome::Placed { order_id } => Some(format!("Order placed: {}", order_id)),
            CheckoutOutcome::Rejected { message } => Some(format!("Failed: {}", message)),
            CheckoutOutcome::EmptyCart => Some("Cart empty".to_string()),
            CheckoutOutcome::Failed { message } => Some(format!(
                "Checkout failed: {}. Your cart was kept, please try again.",
                message
            )),
            CheckoutOutcome::InFlight => None,
        }
    }
}
