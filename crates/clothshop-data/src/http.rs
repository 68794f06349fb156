//! `reqwest` implementation of [`ShopApi`].

use async_trait::async_trait;
use clothshop_commerce::catalog::Product;
use clothshop_commerce::checkout::{CheckoutRequest, CheckoutResponse, OrderSummary};
use serde::de::DeserializeOwned;

use crate::client::{FetchError, ShopApi};
use crate::endpoint::{ApiEndpoints, Endpoint};

/// Shop server client over HTTP.
///
/// One request per call: no retries, no caching.
#[derive(Debug, Clone)]
pub struct HttpShopApi {
    client: reqwest::Client,
    endpoints: ApiEndpoints,
}

impl HttpShopApi {
    /// Create a client for the given endpoints.
    pub fn new(endpoints: ApiEndpoints) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoints,
        }
    }

    /// Create a client with a whole-request timeout.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn with_timeout(
        endpoints: ApiEndpoints,
        timeout: std::time::Duration,
    ) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::Request(e.to_string()))?;
        Ok(Self { client, endpoints })
    }

    async fn get_json<T: DeserializeOwned>(&self, endpoint: Endpoint) -> Result<T, FetchError> {
        let url = self.endpoints.url(endpoint)?;
        tracing::debug!(endpoint = endpoint.name(), url = %url, "GET");

        let resp = self
            .client
            .get(&url)
            .header("accept", "application/json")
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = resp.status().as_u16();
        let bytes = resp.bytes().await.map_err(map_reqwest_error)?;
        decode_success(status, &url, &bytes)
    }
}

#[async_trait(?Send)]
impl ShopApi for HttpShopApi {
    async fn fetch_products(&self) -> Result<Vec<Product>, FetchError> {
        self.get_json(Endpoint::Products).await
    }

    async fn submit_checkout(
        &self,
        request: &CheckoutRequest,
    ) -> Result<CheckoutResponse, FetchError> {
        let url = self.endpoints.url(Endpoint::Checkout)?;
        let body = serde_json::to_vec(request)
            .map_err(|e| FetchError::Request(e.to_string()))?;
        tracing::debug!(
            url = %url,
            lines = request.items.len(),
            total = request.total.amount(),
            "POST checkout"
        );

        let resp = self
            .client
            .post(&url)
            .header("content-type", "application/json")
            .header("accept", "application/json")
            .body(body)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = resp.status().as_u16();
        let bytes = resp.bytes().await.map_err(map_reqwest_error)?;
        decode_checkout(status, &url, &bytes)
    }

    async fn fetch_orders(&self) -> Result<Vec<OrderSummary>, FetchError> {
        let orders: Vec<OrderSummary> = self.get_json(Endpoint::Orders).await?;
        Ok(OrderSummary::newest_first(orders))
    }
}

/// Decode the body of a GET; any status of 400 or above is an error.
fn decode_success<T: DeserializeOwned>(
    status: u16,
    url: &str,
    bytes: &[u8],
) -> Result<T, FetchError> {
    if status >= 400 {
        return Err(FetchError::Http {
            status,
            url: url.to_string(),
        });
    }
    Ok(serde_json::from_slice(bytes)?)
}

/// Decode a checkout reply.
///
/// The server answers rejections with a JSON envelope on 4xx statuses, so
/// the body is decoded whatever the status; a status error is reported only
/// when the body is not a checkout reply.
fn decode_checkout(status: u16, url: &str, bytes: &[u8]) -> Result<CheckoutResponse, FetchError> {
    match serde_json::from_slice::<CheckoutResponse>(bytes) {
        Ok(response) => {
            if status >= 400 && response.ok {
                return Err(FetchError::Http {
                    status,
                    url: url.to_string(),
                });
            }
            Ok(response)
        }
        Err(_) if status >= 400 => Err(FetchError::Http {
            status,
            url: url.to_string(),
        }),
        Err(e) => Err(e.into()),
    }
}

fn map_reqwest_error(e: reqwest::Error) -> FetchError {
    if e.is_timeout() {
        FetchError::Timeout(e.to_string())
    } else if e.is_decode() {
        FetchError::Deserialization(e.to_string())
    } else if e.is_builder() {
        FetchError::InvalidUrl(e.to_string())
    } else if e.is_request() || e.is_body() {
        FetchError::Request(e.to_string())
    } else {
        FetchError::Connection(e.to_string())
    }
}
