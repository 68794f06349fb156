//! Cart line and its identity key.

use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Price;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum quantity allowed per cart line.
pub const MAX_QUANTITY_PER_LINE: u32 = 9999;

/// Separator between product id and size in the string form of a key.
const KEY_SEPARATOR: &str = "::";

/// Identity of a cart line: the (product id, size) pair.
///
/// The string form `"{id}::{size}"` is what removal controls carry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LineKey {
    /// Product id.
    pub product_id: ProductId,
    /// Chosen size label.
    pub size: String,
}

impl LineKey {
    /// Create a key.
    pub fn new(product_id: ProductId, size: impl Into<String>) -> Self {
        Self {
            product_id,
            size: size.into(),
        }
    }

    /// Parse the `"{id}::{size}"` string form.
    ///
    /// Splits on the first separator, so sizes may themselves contain `::`.
    /// The id part must be the canonical decimal form, so a parsed key
    /// always renders back to `key`.
    pub fn parse(key: &str) -> Result<Self, CommerceError> {
        let invalid = || CommerceError::InvalidLineKey(key.to_string());
        let (id, size) = key.split_once(KEY_SEPARATOR).ok_or_else(invalid)?;
        let product_id = id.parse::<ProductId>().map_err(|_| invalid())?;
        if product_id.to_string() != id {
            return Err(invalid());
        }
        Ok(Self::new(product_id, size))
    }
}

impl fmt::Display for LineKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.product_id, KEY_SEPARATOR, self.size)
    }
}

/// A line in the cart.
///
/// Name, price and image are copied from the product when the line is
/// created and are never refreshed afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartLine {
    /// Product id.
    pub id: ProductId,
    /// Product name at add time.
    pub name: String,
    /// Unit price at add time.
    pub price: Price,
    /// Chosen size.
    pub size: String,
    /// Quantity, always at least 1.
    pub qty: u32,
    /// Image URL at add time.
    pub img: String,
}

impl CartLine {
    /// Snapshot a product into a new line with quantity 1.
    pub fn from_product(product: &Product, size: impl Into<String>) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            price: product.price,
            size: size.into(),
            qty: 1,
            img: product.img.clone(),
        }
    }

    /// Identity key of this line.
    pub fn key(&self) -> LineKey {
        LineKey::new(self.id, self.size.clone())
    }

    /// Check whether this line has the given identity.
    pub fn matches(&self, key: &LineKey) -> bool {
        self.id == key.product_id && self.size == key.size
    }

    /// Line subtotal (price × qty), clamped on overflow.
    pub fn subtotal(&self) -> Price {
        self.price.saturating_multiply(self.qty)
    }

    /// Increase quantity by one.
    pub fn increment(&mut self) -> Result<u32, CommerceError> {
        let qty = self.qty.checked_add(1).ok_or(CommerceError::Overflow)?;
        if qty > MAX_QUANTITY_PER_LINE {
            return Err(CommerceError::QuantityExceedsLimit(qty, MAX_QUANTITY_PER_LINE));
        }
        self.qty = qty;
        Ok(qty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_round_trip() {
        let key = LineKey::new(ProductId::new(101), "M");
        assert_eq!(key.to_string(), "101::M");
        assert_eq!(LineKey::parse("101::M").unwrap(), key);
    }

    #[test]
    fn test_key_parse_keeps_separator_in_size() {
        let key = LineKey::parse("7::A::B").unwrap();
        assert_eq!(key.product_id, ProductId::new(7));
        assert_eq!(key.size, "A::B");
    }

    #[test]
    fn test_key_parse_rejects_garbage() {
        assert!(LineKey::parse("no-separator").is_err());
        assert!(LineKey::parse("abc::M").is_err());
        assert!(LineKey::parse(" 101::M").is_err());
        assert!(LineKey::parse("+101::M").is_err());
        assert!(LineKey::parse("0101::M").is_err());
    }

    #[test]
    fn test_line_snapshots_product() {
        let product = Product::new(102, "Slim Fit Jeans", "DenimX", 1499).with_img("jeans.jpg");
        let line = CartLine::from_product(&product, "32");
        assert_eq!(line.qty, 1);
        assert_eq!(line.name, "Slim Fit Jeans");
        assert_eq!(line.img, "jeans.jpg");
        assert!(line.matches(&LineKey::new(ProductId::new(102), "32")));
        assert!(!line.matches(&LineKey::new(ProductId::new(102), "34")));
    }

    #[test]
    fn test_increment_respects_limit() {
        let product = Product::new(1, "Sock", "Feet", 10);
        let mut line = CartLine::from_product(&product, "One");
        line.qty = MAX_QUANTITY_PER_LINE;
        assert_eq!(
            line.increment(),
            Err(CommerceError::QuantityExceedsLimit(
                MAX_QUANTITY_PER_LINE + 1,
                MAX_QUANTITY_PER_LINE
            ))
        );
        assert_eq!(line.qty, MAX_QUANTITY_PER_LINE);
    }

    #[test]
    fn test_line_wire_shape() {
        let product = Product::new(101, "Cotton T-Shirt", "UrbanCo", 499).with_img("t.jpg");
        let line = CartLine::from_product(&product, "S");
        let value = serde_json::to_value(&line).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "id": 101, "name": "Cotton T-Shirt", "price": 499,
                "size": "S", "qty": 1, "img": "t.jpg"
            })
        );
    }
}
