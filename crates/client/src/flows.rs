// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! End-to-end order flows over a gateway.
//!
//! Each flow runs its local validation before touching the network and
//! leaves local state untouched when a call fails: the cart is cleared
//! only after the server confirms a submission, and an invalid status
//! transition never produces a request at all.

use crate::error::ClientError;
use crate::gateway::OrderGateway;
use comanda::SelectionEngine;
use comanda_api::{
    CustomerDetails, OrderInfo, UpdateOrderStatusRequest, check_status_transition,
    confirm_order_submitted, prepare_order_submission,
};
use comanda_domain::{OrderContext, OrderStatus, OrderType};
use comanda_persistence::Persistence;
use tracing::info;

/// Submits a context's cart as an order.
///
/// On a confirmed success the cart record is cleared; on any failure the
/// cart is preserved so the customer can retry manually.
///
/// # Errors
///
/// Returns `ClientError::Api` if the cart is empty, or
/// `ClientError::Gateway` if the submission call fails.
pub async fn submit_cart_order<G: OrderGateway>(
    gateway: &G,
    persistence: &mut Persistence,
    context: &OrderContext,
    details: &CustomerDetails,
) -> Result<OrderInfo, ClientError> {
    let request = prepare_order_submission(persistence, context, details)?;

    let order = gateway.submit_order(&request).await?;

    confirm_order_submitted(persistence, context)?;
    info!(order_number = %order.order_number, "Order submitted");

    Ok(order)
}

/// Advances an order's status after the local lifecycle check.
///
/// A transition outside the allowed set is rejected before any network
/// call, with the attempted transition named in the error.
///
/// # Errors
///
/// Returns `ClientError::Api` if the transition is not permitted, or
/// `ClientError::Gateway` if the update call fails.
pub async fn transition_order_status<G: OrderGateway>(
    gateway: &G,
    order_number: &str,
    order_type: OrderType,
    current: OrderStatus,
    requested: OrderStatus,
) -> Result<(), ClientError> {
    check_status_transition(order_type, current, requested)?;

    gateway
        .update_order_status(&UpdateOrderStatusRequest {
            order_number: order_number.to_string(),
            status: requested,
        })
        .await?;

    info!(
        order_number,
        from = current.as_str(),
        to = requested.as_str(),
        "Order status updated"
    );
    Ok(())
}

/// Fetches a category's options and installs them into the engine.
///
/// The engine's generation token is snapshotted before the fetch; if the
/// session resets or reconfigures while the fetch is in flight, the
/// result is discarded and `false` is returned.
///
/// # Errors
///
/// Returns `ClientError::Gateway` if the catalog fetch fails. An empty
/// option list is a valid result, not an error.
pub async fn refresh_category_options<G: OrderGateway>(
    gateway: &G,
    engine: &mut SelectionEngine,
    category_id: &str,
    category_name: &str,
) -> Result<bool, ClientError> {
    let token = engine.generation();

    let options = gateway.fetch_catalog_options(category_name).await?;

    Ok(engine.apply_fetched_options(token, category_id, options))
}
