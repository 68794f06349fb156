//! Checkout payload and server reply.

use crate::cart::{CartLine, CartView};
use crate::error::CommerceError;
use crate::money::Price;
use serde::{Deserialize, Serialize};

/// Payment method the server assumes when none is chosen.
pub const DEFAULT_PAYMENT: &str = "COD";

/// Body of `POST /api/checkout`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CheckoutRequest {
    /// Cart lines at submission time.
    pub items: Vec<CartLine>,
    /// Σ price × qty over `items`.
    pub total: Price,
    /// Trimmed delivery address.
    pub address: String,
    /// Selected payment method.
    pub payment: String,
}

impl CheckoutRequest {
    /// Build a request from the current cart.
    ///
    /// Fails with [`CommerceError::EmptyCart`] when there are no lines and
    /// with [`CommerceError::Overflow`] when the total does not fit. The
    /// address is trimmed and an empty payment falls back to
    /// [`DEFAULT_PAYMENT`].
    pub fn from_cart(
        cart: CartView<'_>,
        address: &str,
        payment: &str,
    ) -> Result<Self, CommerceError> {
        if cart.is_empty() {
            return Err(CommerceError::EmptyCart);
        }

        let total = cart.checked_total()?;
        let payment = payment.trim();
        Ok(Self {
            items: cart.lines().to_vec(),
            total,
            address: address.trim().to_string(),
            payment: if payment.is_empty() {
                DEFAULT_PAYMENT.to_string()
            } else {
                payment.to_string()
            },
        })
    }

    /// Total number of units across all lines.
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.qty)).sum()
    }
}

/// Reply of `POST /api/checkout`.
///
/// Error envelopes such as `{"error": "unauthorized"}` carry no `ok` field
/// and decode as a rejection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct CheckoutResponse {
    /// Whether the order was placed.
    #[serde(default)]
    pub ok: bool,
    /// Server-issued order id on success.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    /// Server error message on failure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CheckoutResponse {
    /// A successful reply.
    pub fn placed(order_id: impl Into<String>) -> Self {
        Self {
            ok: true,
            order_id: Some(order_id.into()),
            error: None,
        }
    }

    /// A rejection with a message.
    pub fn rejected(error: impl Into<String>) -> Self {
        Self {
            ok: false,
            order_id: None,
            error: Some(error.into()),
        }
    }
}
