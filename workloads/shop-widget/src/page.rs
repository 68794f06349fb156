//! The page the widget draws into.
//!
//! [`ShopWidget`](crate::ShopWidget) only talks to the DOM through this
//! trait. The browser binding implements it over `web-sys`; tests use a
//! recording fake.

use std::time::Duration;

use clothshop_commerce::search::BrandChip;
use clothshop_commerce::ProductId;

/// Elements whose content the widget replaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Grid,
    CartItems,
    Total,
    CartEmpty,
    CheckoutButton,
    Orders,
}

/// Form controls the widget reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Address,
    Payment,
    Search,
}

/// DOM primitives used by the widget.
///
/// Operations on elements the page does not have are silently skipped.
pub trait Page {
    /// Replace the markup of a slot.
    fn set_html(&self, slot: Slot, html: &str);

    /// Replace the text of a slot.
    fn set_text(&self, slot: Slot, text: &str);

    /// Enable or disable a control.
    fn set_disabled(&self, slot: Slot, disabled: bool);

    /// Show or hide an element.
    fn set_hidden(&self, slot: Slot, hidden: bool);

    /// Current value of a form control, empty if absent.
    fn value(&self, field: Field) -> String;

    /// Show or hide one product card without removing it.
    fn set_card_visible(&self, id: ProductId, visible: bool);

    /// Mark one chip active and every other chip inactive.
    fn set_active_chip(&self, chip: &BrandChip);

    /// Show a notification that hides itself after `duration`.
    fn show_toast(&self, message: &str, duration: Duration);

    /// Blocking alert.
    fn alert(&self, message: &str);

    /// Leave the page.
    fn navigate(&self, path: &str);
}
