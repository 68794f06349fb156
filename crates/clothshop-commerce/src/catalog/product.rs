//! Product and catalog types.

use crate::ids::ProductId;
use crate::money::Price;
use serde::{Deserialize, Serialize};

/// A product as served by the products endpoint.
///
/// Immutable once fetched. The wire name of the size list is `size`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Product {
    /// Server-assigned identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Brand, also used by the brand chips.
    pub brand: String,
    /// Price in whole units.
    pub price: Price,
    /// Image URL.
    pub img: String,
    /// Ordered size labels.
    #[serde(rename = "size", default)]
    pub sizes: Vec<String>,
}

impl Product {
    /// Create a product with no image and no sizes.
    pub fn new(
        id: u64,
        name: impl Into<String>,
        brand: impl Into<String>,
        price: u64,
    ) -> Self {
        Self {
            id: ProductId::new(id),
            name: name.into(),
            brand: brand.into(),
            price: Price::new(price),
            img: String::new(),
            sizes: Vec::new(),
        }
    }

    /// Set the image URL.
    pub fn with_img(mut self, img: impl Into<String>) -> Self {
        self.img = img.into();
        self
    }

    /// Set the size labels.
    pub fn with_sizes<I, S>(mut self, sizes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sizes = sizes.into_iter().map(Into::into).collect();
        self
    }

    /// The size preselected in the card's size selector.
    pub fn default_size(&self) -> Option<&str> {
        self.sizes.first().map(String::as_str)
    }

    /// Check whether a size label is offered for this product.
    pub fn has_size(&self, size: &str) -> bool {
        self.sizes.iter().any(|s| s == size)
    }
}

/// The product list loaded for the page lifetime.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the product list wholesale.
    pub fn replace(&mut self, products: Vec<Product>) {
        self.products = products;
    }

    /// Look up a product by id.
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Iterate products in server order.
    pub fn iter(&self) -> std::slice::Iter<'_, Product> {
        self.products.iter()
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if no products are loaded.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Distinct brands in first-seen order.
    pub fn brands(&self) -> Vec<&str> {
        let mut brands: Vec<&str> = Vec::new();
        for product in &self.products {
            if !brands
                .iter()
                .any(|b| b.eq_ignore_ascii_case(&product.brand))
            {
                brands.push(&product.brand);
            }
        }
        brands
    }
}

impl From<Vec<Product>> for Catalog {
    fn from(products: Vec<Product>) -> Self {
        Self { products }
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.iter()
    }
}
