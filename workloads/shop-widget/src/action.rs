//! Delegated click decoding.

use clothshop_commerce::search::BrandChip;
use clothshop_commerce::ProductId;

use crate::sections::{RETRY_LOAD_ACTION, RETRY_ORDERS_ACTION};

/// Attributes read from the elements around a click target.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClickTarget {
    /// The click landed inside the checkout button.
    pub checkout: bool,
    /// Dataset value of the enclosing chip; empty when the chip has none.
    pub chip: Option<String>,
    /// `data-action` of the enclosing control.
    pub action: Option<String>,
    /// `data-product-id` of that control.
    pub product_id: Option<String>,
    /// `data-key` of that control.
    pub key: Option<String>,
}

/// What a click asks the widget to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickAction {
    Checkout,
    SelectChip(BrandChip),
    Add(ProductId),
    Remove(String),
    RetryLoad,
    RetryOrders,
}

impl ClickAction {
    /// Decode a click. Checkout wins over chips, chips over `data-action`.
    pub fn decode(target: &ClickTarget) -> Option<Self> {
        if target.checkout {
            return Some(ClickAction::Checkout);
        }
        if let Some(value) = &target.chip {
            return Some(ClickAction::SelectChip(BrandChip::from_dataset(value)));
        }

        match target.action.as_deref()? {
            "add" => target
                .product_id
                .as_deref()
                .and_then(|id| id.parse::<ProductId>().ok())
                .map(ClickAction::Add),
            "remove" => target.key.clone().map(ClickAction::Remove),
            RETRY_LOAD_ACTION => Some(ClickAction::RetryLoad),
            RETRY_ORDERS_ACTION => Some(ClickAction::RetryOrders),
            _ => None,
        }
    }

    /// Whether the browser's default handling should be suppressed.
    pub fn prevents_default(&self) -> bool {
        matches!(self, ClickAction::Checkout | ClickAction::Remove(_))
    }
}
