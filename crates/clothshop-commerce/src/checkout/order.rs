//! Order history rows.

use crate::ids::OrderId;
use crate::money::Price;
use serde::{Deserialize, Serialize};

/// One row of `GET /api/orders`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderSummary {
    /// Server-issued order id.
    pub order_id: OrderId,
    /// Account that placed the order.
    #[serde(default)]
    pub user: String,
    /// Order total as submitted.
    pub total: Price,
    /// Number of units in the order.
    #[serde(default)]
    pub count: u64,
}

impl OrderSummary {
    /// Most recent orders first; the server appends to its index.
    pub fn newest_first(mut orders: Vec<OrderSummary>) -> Vec<OrderSummary> {
        orders.reverse();
        orders
    }
}
