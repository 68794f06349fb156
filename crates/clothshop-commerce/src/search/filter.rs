//! Brand chip and free-text filters for the product grid.

use crate::catalog::{Catalog, Product};
use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// Dataset value of the chip that disables brand filtering.
pub const ALL_BRANDS: &str = "all";

/// The active category chip. Exactly one chip is active at a time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum BrandChip {
    /// No brand filter.
    #[default]
    All,
    /// Only products of this brand (compared case-insensitively).
    Brand(String),
}

impl BrandChip {
    /// Build from a chip's `data-brand` value; `"all"` (any case) or an
    /// empty value means no brand filter.
    pub fn from_dataset(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() || value.eq_ignore_ascii_case(ALL_BRANDS) {
            BrandChip::All
        } else {
            BrandChip::Brand(value.to_string())
        }
    }

    /// The `data-brand` value for this chip.
    pub fn dataset_value(&self) -> &str {
        match self {
            BrandChip::All => ALL_BRANDS,
            BrandChip::Brand(brand) => brand,
        }
    }

    /// Check whether a product brand passes this chip.
    pub fn admits(&self, brand: &str) -> bool {
        match self {
            BrandChip::All => true,
            BrandChip::Brand(chip) => chip.to_lowercase() == brand.to_lowercase(),
        }
    }

    /// Check whether a chip element carrying this `data-brand` value is the
    /// one to highlight, using the same trimming and case rules as
    /// [`BrandChip::from_dataset`] and [`BrandChip::admits`].
    pub fn matches_dataset(&self, value: &str) -> bool {
        match (self, BrandChip::from_dataset(value)) {
            (BrandChip::All, BrandChip::All) => true,
            (BrandChip::Brand(_), BrandChip::Brand(other)) => self.admits(&other),
            _ => false,
        }
    }
}

/// Current search text plus active chip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct FilterState {
    /// Free-text search as typed.
    pub search: String,
    /// Active chip.
    pub chip: BrandChip,
}

impl FilterState {
    /// No search text, "all" chip.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the search text.
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Set the active chip.
    pub fn with_chip(mut self, chip: BrandChip) -> Self {
        self.chip = chip;
        self
    }

    /// Check if neither search nor chip restricts anything.
    pub fn is_inactive(&self) -> bool {
        self.search.trim().is_empty() && self.chip == BrandChip::All
    }

    /// Visibility of a card with the given name and brand.
    ///
    /// Visible when the chip admits the brand and either the search text is
    /// empty or it is a case-insensitive substring of the name or brand.
    pub fn matches(&self, name: &str, brand: &str) -> bool {
        if !self.chip.admits(brand) {
            return false;
        }

        let needle = self.search.trim().to_lowercase();
        needle.is_empty()
            || name.to_lowercase().contains(&needle)
            || brand.to_lowercase().contains(&needle)
    }

    /// Visibility of a product.
    pub fn matches_product(&self, product: &Product) -> bool {
        self.matches(&product.name, &product.brand)
    }

    /// Visibility of every product, in catalog order.
    pub fn visibility(&self, catalog: &Catalog) -> Vec<(ProductId, bool)> {
        catalog
            .iter()
            .map(|p| (p.id, self.matches_product(p)))
            .collect()
    }
}
