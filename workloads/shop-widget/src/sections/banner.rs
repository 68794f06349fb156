//! Inline error banners with a retry control.

use super::html_escape;

/// `data-action` of the retry button after a failed product load.
pub const RETRY_LOAD_ACTION: &str = "retry-load";
/// `data-action` of the retry button after a failed order history load.
pub const RETRY_ORDERS_ACTION: &str = "retry-orders";

/// Render an error banner whose button carries `retry_action`.
pub fn render_error_banner(title: &str, message: &str, retry_action: &str) -> String {
    format!(
        r#"<div class="error-state" role="alert">
    <h4>{}</h4>
    <p>{}</p>
    <button type="button" data-action="{}">Try again</button>
</div>"#,
        html_escape(title),
        html_escape(message),
        html_escape(retry_action)
    )
}

/// Banner shown in the grid when products fail to load.
pub fn render_load_error(message: &str) -> String {
    render_error_banner("Unable to load products", message, RETRY_LOAD_ACTION)
}
