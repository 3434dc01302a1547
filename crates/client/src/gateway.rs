// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! HTTP access to the external ordering endpoints.
//!
//! The endpoints are consumed only through the documented
//! request/response contracts in `comanda-api`; route handling and
//! storage behind them belong to the external collaborator.

use comanda_api::{
    ListOrdersResponse, OrderInfo, OrderStatusQuery, OrderStatusResponse, SubmitOrderRequest,
    UpdateOrderStatusRequest, normalize_catalog_options,
};
use comanda_domain::VariationOption;
use tracing::debug;

/// Errors that can occur while calling the ordering endpoints.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// The HTTP request itself failed (connect, timeout, decode).
    #[error("HTTP error calling ordering API: {0}")]
    Http(#[from] reqwest::Error),
    /// The server answered outside the 2xx range.
    ///
    /// Non-2xx responses carry no guaranteed body, so only the status is
    /// reported; callers surface a generic failure and allow retry.
    #[error("Ordering API returned unexpected status {status}")]
    UnexpectedStatus {
        /// The HTTP status code.
        status: u16,
    },
}

/// The consumed ordering endpoints.
///
/// The HTTP implementation is [`HttpOrderGateway`]; tests substitute
/// in-memory implementations.
pub trait OrderGateway {
    /// Fetches all orders (`GET /orders`, staff dashboard).
    fn fetch_orders(&self)
    -> impl Future<Output = Result<Vec<OrderInfo>, GatewayError>> + Send;

    /// Fetches one tracked order (`GET /order-status`).
    fn fetch_order_status(
        &self,
        query: &OrderStatusQuery,
    ) -> impl Future<Output = Result<OrderInfo, GatewayError>> + Send;

    /// Submits an order (`POST /orders`).
    fn submit_order(
        &self,
        request: &SubmitOrderRequest,
    ) -> impl Future<Output = Result<OrderInfo, GatewayError>> + Send;

    /// Updates an order's status (`PUT /updateorderstatus`).
    fn update_order_status(
        &self,
        request: &UpdateOrderStatusRequest,
    ) -> impl Future<Output = Result<(), GatewayError>> + Send;

    /// Fetches a category's options (`GET /items?category={name}`),
    /// normalized into [`VariationOption`]s.
    fn fetch_catalog_options(
        &self,
        category: &str,
    ) -> impl Future<Output = Result<Vec<VariationOption>, GatewayError>> + Send;
}

/// Reqwest-backed gateway for the ordering endpoints.
#[derive(Debug, Clone)]
pub struct HttpOrderGateway {
    base_url: String,
    http: reqwest::Client,
}

impl HttpOrderGateway {
    /// Creates a gateway rooted at the given base URL.
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

impl OrderGateway for HttpOrderGateway {
    async fn fetch_orders(&self) -> Result<Vec<OrderInfo>, GatewayError> {
        let response = self.http.get(self.url("/orders")).send().await?;
        let body: ListOrdersResponse = expect_success(response)?.json().await?;

        debug!(orders = body.orders.len(), "Fetched order list");
        Ok(body.orders)
    }

    async fn fetch_order_status(
        &self,
        query: &OrderStatusQuery,
    ) -> Result<OrderInfo, GatewayError> {
        let response = self
            .http
            .get(self.url("/order-status"))
            .query(&[query.query_pair()])
            .send()
            .await?;
        let body: OrderStatusResponse = expect_success(response)?.json().await?;

        Ok(body.order)
    }

    async fn submit_order(&self, request: &SubmitOrderRequest) -> Result<OrderInfo, GatewayError> {
        let response = self
            .http
            .post(self.url("/orders"))
            .json(request)
            .send()
            .await?;
        let order: OrderInfo = expect_success(response)?.json().await?;

        Ok(order)
    }

    async fn update_order_status(
        &self,
        request: &UpdateOrderStatusRequest,
    ) -> Result<(), GatewayError> {
        let response = self
            .http
            .put(self.url("/updateorderstatus"))
            .json(request)
            .send()
            .await?;
        expect_success(response)?;

        Ok(())
    }

    async fn fetch_catalog_options(
        &self,
        category: &str,
    ) -> Result<Vec<VariationOption>, GatewayError> {
        let response = self
            .http
            .get(self.url("/items"))
            .query(&[("category", category)])
            .send()
            .await?;
        let items: Vec<serde_json::Value> = expect_success(response)?.json().await?;

        Ok(normalize_catalog_options(&items))
    }
}

/// Maps non-2xx responses to [`GatewayError::UnexpectedStatus`].
fn expect_success(response: reqwest::Response) -> Result<reqwest::Response, GatewayError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(GatewayError::UnexpectedStatus {
            status: status.as_u16(),
        })
    }
}
