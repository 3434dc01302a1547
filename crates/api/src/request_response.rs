// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! Field names serialize to the external endpoints' exact wire form:
//! camelCase throughout, with the literal lowercase `ordertype` the
//! endpoints use.

use comanda_domain::{CartItem, OrderStatus, OrderType};

/// Customer-supplied checkout details.
///
/// This is an input to submission preparation, not a wire type; the wire
/// body is [`SubmitOrderRequest`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerDetails {
    /// The customer's name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Contact phone number.
    pub phone: String,
    /// The chosen payment method (e.g. "cash", "card").
    pub payment_method: String,
    /// Delivery charge in minor currency units; zero for non-delivery.
    pub delivery_charge: u32,
}

/// Request body for `POST /orders`.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitOrderRequest {
    /// The customer's name.
    pub customer_name: String,
    /// Contact email.
    pub email: String,
    /// Contact phone number.
    pub phone: String,
    /// Delivery area name; empty for non-delivery orders.
    pub area: String,
    /// Table number; empty for non-dine-in orders.
    pub table_number: String,
    /// The order type.
    pub ordertype: OrderType,
    /// Delivery charge in minor currency units.
    pub delivery_charge: u32,
    /// The chosen payment method.
    pub payment_method: String,
    /// The cart lines being ordered.
    pub items: Vec<CartItem>,
    /// Cart total plus delivery charge, in minor currency units.
    pub total_amount: u64,
    /// Always `Received` on submission.
    pub status: OrderStatus,
}

/// A server-side order as returned by the status endpoints.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderInfo {
    /// The unique order number.
    pub order_number: String,
    /// The current lifecycle status.
    pub status: OrderStatus,
    /// The ordered lines.
    #[serde(default)]
    pub items: Vec<CartItem>,
    /// Order total in minor currency units.
    #[serde(default)]
    pub total_amount: u64,
    /// Delivery charge in minor currency units.
    #[serde(default)]
    pub delivery_charge: u32,
    /// The payment method, if recorded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
    /// The order type.
    pub ordertype: OrderType,
    /// The customer's name, if recorded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    /// Table number for dine-in orders.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table_number: Option<String>,
    /// Area name for delivery orders.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area: Option<String>,
    /// Server-side creation timestamp (ISO 8601), if provided.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Response body for `GET /orders`.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ListOrdersResponse {
    /// All orders visible to the staff dashboard.
    pub orders: Vec<OrderInfo>,
}

/// Response body for `GET /order-status`.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct OrderStatusResponse {
    /// The tracked order.
    pub order: OrderInfo,
}

/// Request body for `PUT /updateorderstatus`.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrderStatusRequest {
    /// The order to update.
    pub order_number: String,
    /// The requested status.
    pub status: OrderStatus,
}

/// The lookup key a customer tracker polls `GET /order-status` with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderStatusQuery {
    /// Track a single order by its number.
    OrderNumber(String),
    /// Track the latest order for a dine-in table.
    TableId(String),
}

impl OrderStatusQuery {
    /// The query-string pair for this lookup.
    #[must_use]
    pub fn query_pair(&self) -> (&'static str, &str) {
        match self {
            Self::OrderNumber(value) => ("orderNumber", value),
            Self::TableId(value) => ("tableId", value),
        }
    }
}

/// The current cart contents and total for one order context.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartSummary {
    /// The cart lines.
    pub items: Vec<CartItem>,
    /// Running total in minor currency units.
    pub total_amount: u64,
}
