//! Order history list.

use clothshop_commerce::checkout::OrderSummary;
use clothshop_commerce::Currency;

use super::{html_escape, render_error_banner, RETRY_ORDERS_ACTION};

/// Render the shopper's orders, newest first as given.
pub fn render_order_history(orders: &[OrderSummary], currency: Currency) -> String {
    if orders.is_empty() {
        return r#"<p class="muted">No orders yet.</p>"#.to_string();
    }

    let rows: String = orders
        .iter()
        .map(|o| {
            let items = if o.count == 1 { "item" } else { "items" };
            format!(
                r#"<li class="row" data-order-id="{id}">
    <div>{id}</div>
    <div class="muted">{count} {items}</div>
    <div>{total}</div>
</li>"#,
                id = html_escape(o.order_id.as_str()),
                count = o.count,
                items = items,
                total = o.total.display(currency),
            )
        })
        .collect();

    format!(r#"<ul class="orders">{}</ul>"#, rows)
}

/// Banner shown when the order history fails to load.
pub fn render_orders_error(message: &str) -> String {
    render_error_banner("Unable to load orders", message, RETRY_ORDERS_ACTION)
}
