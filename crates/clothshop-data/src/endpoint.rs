//! Endpoint locations.

use serde::{Deserialize, Serialize};

use crate::client::FetchError;

/// The three calls the widget makes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// `GET` the product list.
    Products,
    /// `POST` a checkout.
    Checkout,
    /// `GET` the shopper's order history.
    Orders,
}

impl Endpoint {
    /// Get the name of this endpoint.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Products => "products",
            Self::Checkout => "checkout",
            Self::Orders => "orders",
        }
    }

    /// HTTP method used for this endpoint.
    pub fn method(&self) -> &'static str {
        match self {
            Self::Checkout => "POST",
            Self::Products | Self::Orders => "GET",
        }
    }
}

/// Base URL plus per-endpoint paths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiEndpoints {
    /// Scheme and host, e.g. `https://shop.example.com`. Empty means the
    /// page origin, which the browser binding fills in at startup.
    pub base_url: String,
    /// Products path.
    pub products_path: String,
    /// Checkout path.
    pub checkout_path: String,
    /// Order history path.
    pub orders_path: String,
}

impl Default for ApiEndpoints {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            products_path: "/api/products".to_string(),
            checkout_path: "/api/checkout".to_string(),
            orders_path: "/api/orders".to_string(),
        }
    }
}

impl ApiEndpoints {
    /// Default paths under the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Set the base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Path configured for an endpoint.
    pub fn path(&self, endpoint: Endpoint) -> &str {
        match endpoint {
            Endpoint::Products => &self.products_path,
            Endpoint::Checkout => &self.checkout_path,
            Endpoint::Orders => &self.orders_path,
        }
    }

    /// Absolute URL for an endpoint.
    pub fn url(&self, endpoint: Endpoint) -> Result<String, FetchError> {
        let base = self.base_url.trim().trim_end_matches('/');
        if base.is_empty() {
            return Err(FetchError::InvalidUrl(format!(
                "no base URL configured for {}",
                endpoint.name()
            )));
        }
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(FetchError::InvalidUrl(format!(
                "base URL must be http(s): {}",
                base
            )));
        }

        let path = self.path(endpoint).trim();
        if path.starts_with('/') {
            Ok(format!("{}{}", base, path))
        } else {
            Ok(format!("{}/{}", base, path))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths() {
        let endpoints = ApiEndpoints::new("http://localhost:5000/");
        assert_eq!(
            endpoints.url(Endpoint::Products).unwrap(),
            "http://localhost:5000/api/products"
        );
        assert_eq!(
            endpoints.url(Endpoint::Checkout).unwrap(),
            "http://localhost:5000/api/checkout"
        );
        assert_eq!(Endpoint::Checkout.method(), "POST");
    }

    #[test]
    fn test_relative_path_is_joined() {
        let mut endpoints = ApiEndpoints::new("https://shop.example.com");
        endpoints.orders_path = "v2/orders".to_string();
        assert_eq!(
            endpoints.url(Endpoint::Orders).unwrap(),
            "https://shop.example.com/v2/orders"
        );
    }

    #[test]
    fn test_missing_base_is_an_error() {
        let endpoints = ApiEndpoints::default();
        assert!(matches!(
            endpoints.url(Endpoint::Products),
            Err(FetchError::InvalidUrl(_))
        ));
        assert!(ApiEndpoints::new("ftp://x").url(Endpoint::Products).is_err());
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let endpoints: ApiEndpoints =
            serde_json::from_str(r#"{"base_url": "http://127.0.0.1:8000"}"#).unwrap();
        assert_eq!(endpoints.checkout_path, "/api/checkout");
    }
}
