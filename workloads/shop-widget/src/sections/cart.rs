//! Cart panel - line items, total and checkout button labels.

use clothshop_commerce::cart::CartLine;
use clothshop_commerce::{Currency, Price};

use super::html_escape;

/// Checkout button label at rest.
pub const CHECKOUT_LABEL: &str = "Place order";
/// Checkout button label while the order is being submitted.
pub const CHECKOUT_PENDING_LABEL: &str = "Placing order\u{2026}";
/// Cart panel text when there are no lines.
pub const EMPTY_CART_TEXT: &str = "Your cart is empty.";

/// Render the cart line items.
pub fn render_cart(lines: &[CartLine], currency: Currency) -> String {
    if lines.is_empty() {
        return format!(r#"<p class="muted">{}</p>"#, EMPTY_CART_TEXT);
    }

    lines.iter().map(|line| render_cart_line(line, currency)).collect()
}

fn render_cart_line(line: &CartLine, currency: Currency) -> String {
    let key = html_escape(&line.key().to_string());
    format!(
        r##"<div class="row" data-key="{key}">
    <div>{name} ({size}) &times; {qty}</div>
    <div>{subtotal}</div>
    <a href="#" data-action="remove" data-key="{key}" aria-label="Remove">x</a>
</div>"##,
        key = key,
        name = html_escape(&line.name),
        size = html_escape(&line.size),
        qty = line.qty,
        subtotal = line.subtotal().display(currency),
    )
}

/// Text of the total element.
pub fn render_total(total: Price, currency: Currency) -> String {
    total.display(currency)
}
