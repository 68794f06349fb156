//! The widget's view of the shop server.

use std::rc::Rc;

use async_trait::async_trait;
use clothshop_commerce::catalog::Product;
use clothshop_commerce::checkout::{CheckoutRequest, CheckoutResponse, OrderSummary};

/// Error type for fetch operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("HTTP error: {status} for {url}")]
    Http { status: u16, url: String },

    #[error("Timeout: {0}")]
    Timeout(String),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Request error: {0}")]
    Request(String),
}

impl FetchError {
    /// Short text for inline banners and alerts.
    pub fn user_message(&self) -> String {
        match self {
            FetchError::Http { status, .. } => format!("the server answered {}", status),
            FetchError::Timeout(_) => "the server took too long to answer".to_string(),
            FetchError::Connection(_) => "the server could not be reached".to_string(),
            FetchError::Deserialization(_) => "the server sent an unexpected reply".to_string(),
            FetchError::InvalidUrl(_) | FetchError::Request(_) => {
                "the request could not be sent".to_string()
            }
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::Deserialization(e.to_string())
    }
}

/// Calls the widget makes to the shop server.
///
/// Futures are not `Send`: the widget runs on the page's single UI thread.
#[async_trait(?Send)]
pub trait ShopApi {
    /// `GET` the full product list.
    async fn fetch_products(&self) -> Result<Vec<Product>, FetchError>;

    /// `POST` a checkout. A decoded `ok: false` reply is `Ok`.
    async fn submit_checkout(
        &self,
        request: &CheckoutRequest,
    ) -> Result<CheckoutResponse, FetchError>;

    /// `GET` the shopper's order history.
    async fn fetch_orders(&self) -> Result<Vec<OrderSummary>, FetchError>;
}

#[async_trait(?Send)]
impl<T: ShopApi + ?Sized> ShopApi for Rc<T> {
    async fn fetch_products(&self) -> Result<Vec<Product>, FetchError> {
        (**self).fetch_products().await
    }

    async fn submit_checkout(
        &self,
        request: &CheckoutRequest,
    ) -> Result<CheckoutResponse, FetchError> {
        (**self).submit_checkout(request).await
    }

    async fn fetch_orders(&self) -> Result<Vec<OrderSummary>, FetchError> {
        (**self).fetch_orders().await
    }
}
