//! Widget configuration.

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use clothshop_commerce::checkout::DEFAULT_PAYMENT;
use clothshop_commerce::Currency;
use clothshop_data::ApiEndpoints;
use clothshop_observability::LoggingConfig;
use serde::{Deserialize, Serialize};

/// Widget configuration. Every field has a default, so an empty document
/// is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    /// Server endpoints.
    pub api: ApiEndpoints,
    /// Where the browser goes after a placed order.
    pub orders_page: String,
    /// Currency prices are shown in.
    pub currency: Currency,
    /// How long the toast stays up, in milliseconds.
    pub toast_ms: u64,
    /// Message shown when a line is added.
    pub toast_message: String,
    /// Placeholder cards mounted while products load.
    pub skeleton_count: usize,
    /// Payment method used when the selector is empty.
    pub default_payment: String,
    /// Element ids and selectors.
    pub dom: DomIds,
    /// Logging setup.
    pub logging: LoggingConfig,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            api: ApiEndpoints::default(),
            orders_page: "/orders".to_string(),
            currency: Currency::INR,
            toast_ms: 1200,
            toast_message: "Added to cart".to_string(),
            skeleton_count: 8,
            default_payment: DEFAULT_PAYMENT.to_string(),
            dom: DomIds::default(),
            logging: LoggingConfig::default().with_component("shop-widget"),
        }
    }
}

impl WidgetConfig {
    /// Parse a JSON document.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse JSON widget config")
    }

    /// Parse a TOML document.
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("Failed to parse TOML widget config")
    }

    /// Load a config file; `.json` files are JSON, anything else TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let is_json = path
            .extension()
            .map_or(false, |ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            Self::from_json(&content)
                .with_context(|| format!("Invalid config file: {}", path.display()))
        } else {
            Self::from_toml(&content)
                .with_context(|| format!("Invalid config file: {}", path.display()))
        }
    }

    /// Override the server base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.api = self.api.with_base_url(base_url);
        self
    }

    /// Toast display time.
    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_ms)
    }

    /// Payment method to submit for a selector value.
    pub fn payment_or_default<'a>(&'a self, selected: &'a str) -> &'a str {
        let selected = selected.trim();
        if selected.is_empty() {
            &self.default_payment
        } else {
            selected
        }
    }
}

/// Ids of the page elements the widget binds to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DomIds {
    pub grid: String,
    pub cart_items: String,
    pub total: String,
    pub address: String,
    pub payment: String,
    pub checkout_button: String,
    pub cart_empty: String,
    pub search: String,
    pub toast: String,
    /// Container for the order history list, on the orders page.
    pub orders: String,
    /// CSS selector matching the brand chips.
    pub chip_selector: String,
    /// `data-*` key holding a chip's brand.
    pub chip_dataset_key: String,
}

impl Default for DomIds {
    fn default() -> Self {
        Self {
            grid: "product-grid".to_string(),
            cart_items: "cart-items".to_string(),
            total: "total".to_string(),
            address: "address".to_string(),
            payment: "payment".to_string(),
            checkout_button: "checkout-btn".to_string(),
            cart_empty: "cart-empty".to_string(),
            search: "search".to_string(),
            toast: "toast".to_string(),
            orders: "order-list".to_string(),
            chip_selector: ".chip".to_string(),
            chip_dataset_key: "brand".to_string(),
        }
    }
}
