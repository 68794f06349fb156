//! Whole-unit prices and their display currency.
//!
//! The catalog quotes prices as non-negative integers in whole currency
//! units (no minor units), so a price is a plain `u64` newtype. The
//! currency only affects how a price is shown.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;

/// Display currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    INR,
    USD,
    EUR,
    GBP,
}

impl Currency {
    /// Get the currency code (e.g., "INR").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::INR => "INR",
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
        }
    }

    /// Get the currency symbol (e.g., "₹").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::INR => "\u{20b9}",
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
            Currency::GBP => "\u{00a3}",
        }
    }

}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A price in whole currency units.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Price(u64);

impl Price {
    /// Zero.
    pub const ZERO: Price = Price(0);

    /// Create a price from whole units.
    pub const fn new(amount: u64) -> Self {
        Self(amount)
    }

    /// Amount in whole units.
    pub const fn amount(self) -> u64 {
        self.0
    }

    /// Multiply by a quantity, returning `None` on overflow.
    pub fn try_multiply(self, qty: u32) -> Option<Price> {
        self.0.checked_mul(u64::from(qty)).map(Price)
    }

    /// Multiply by a quantity, clamping at `u64::MAX`.
    pub fn saturating_multiply(self, qty: u32) -> Price {
        Price(self.0.saturating_mul(u64::from(qty)))
    }

    /// Add another price, returning `None` on overflow.
    pub fn try_add(self, other: Price) -> Option<Price> {
        self.0.checked_add(other.0).map(Price)
    }

    /// Add another price, clamping at `u64::MAX`.
    pub fn saturating_add(self, other: Price) -> Price {
        Price(self.0.saturating_add(other.0))
    }

    /// Sum prices, returning `None` on overflow.
    pub fn try_sum(iter: impl IntoIterator<Item = Price>) -> Option<Price> {
        iter.into_iter().try_fold(Price::ZERO, Price::try_add)
    }

    /// Format with a currency symbol (e.g., "₹499").
    pub fn display(self, currency: Currency) -> String {
        format!("{}{}", currency.symbol(), self.0)
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Price>>(iter: I) -> Price {
        iter.fold(Price::ZERO, Price::saturating_add)
    }
}

impl From<u64> for Price {
    fn from(amount: u64) -> Self {
        Self(amount)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
