//! Section renderers for the shop widget.
//!
//! Every renderer returns the full markup of one container; the page
//! replaces the container's content wholesale.

mod banner;
mod cart;
mod grid;
mod orders;
mod skeleton;

pub use banner::*;
pub use cart::*;
pub use grid::*;
pub use orders::*;
pub use skeleton::*;

/// Escape text for use in element content and quoted attributes.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
