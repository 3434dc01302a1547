// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions for cart, context, and order lifecycle operations.
//!
//! Handlers orchestrate the pure engines against persistence. Every cart
//! mutation goes through [`comanda::CartState`] and re-persists under the
//! context's storage key, keeping the total and the persistence invariants
//! intact.

use comanda::CartState;
use comanda_domain::{
    CartItem, ContextSignal, OrderContext, OrderStatus, OrderType, validate_cart_item,
};
use comanda_persistence::Persistence;
use tracing::{debug, info};

use crate::error::{ApiResult, translate_domain_error, translate_persistence_error};
use crate::request_response::{CartSummary, CustomerDetails, SubmitOrderRequest};

/// Resolves the active order context from ambient signals.
///
/// The previously resolved context is read from the durable side store so
/// navigation that drops query parameters keeps its identifier; the result
/// is stored back for the next resolution.
///
/// # Errors
///
/// Returns an error if the side store cannot be read or written.
pub fn resolve_order_context(
    persistence: &mut Persistence,
    signal: &ContextSignal,
) -> ApiResult<OrderContext> {
    let last_known = persistence
        .load_last_context()
        .map_err(|e| translate_persistence_error(&e))?;

    let resolved = comanda_domain::resolve_order_context(signal, last_known.as_ref());

    persistence
        .store_last_context(&resolved)
        .map_err(|e| translate_persistence_error(&e))?;

    info!(
        order_type = resolved.order_type().as_str(),
        identifier = resolved.identifier(),
        "Resolved order context"
    );
    Ok(resolved)
}

/// Returns the cart persisted for a context, empty if none.
///
/// # Errors
///
/// Returns an error if the cart record cannot be read.
pub fn get_cart(
    persistence: &mut Persistence,
    context: &OrderContext,
) -> ApiResult<CartSummary> {
    let cart = load_cart_state(persistence, context)?;
    Ok(summarize(&cart))
}

/// Adds an item to a context's cart, merging identical lines.
///
/// # Errors
///
/// Returns an error if the item fails field validation or persistence
/// fails.
pub fn add_item_to_cart(
    persistence: &mut Persistence,
    context: &OrderContext,
    item: CartItem,
) -> ApiResult<CartSummary> {
    validate_cart_item(&item).map_err(translate_domain_error)?;

    let mut cart = load_cart_state(persistence, context)?;
    cart.add(item);
    persist_cart_state(persistence, context, &cart)?;

    Ok(summarize(&cart))
}

/// Removes matching lines from a context's cart.
///
/// With no variations given, only lines without variations match.
///
/// # Errors
///
/// Returns an error if persistence fails.
pub fn remove_item_from_cart(
    persistence: &mut Persistence,
    context: &OrderContext,
    item_id: &str,
    variations: Option<&[String]>,
) -> ApiResult<CartSummary> {
    let mut cart = load_cart_state(persistence, context)?;
    cart.remove(item_id, variations);
    persist_cart_state(persistence, context, &cart)?;

    Ok(summarize(&cart))
}

/// Sets the quantity of matching lines, floored at 1.
///
/// # Errors
///
/// Returns an error if persistence fails.
pub fn update_cart_quantity(
    persistence: &mut Persistence,
    context: &OrderContext,
    item_id: &str,
    quantity: u32,
    variations: Option<&[String]>,
) -> ApiResult<CartSummary> {
    let mut cart = load_cart_state(persistence, context)?;
    cart.update_quantity(item_id, quantity, variations);
    persist_cart_state(persistence, context, &cart)?;

    Ok(summarize(&cart))
}

/// Empties the cart for one context only.
///
/// # Errors
///
/// Returns an error if persistence fails.
pub fn clear_cart(persistence: &mut Persistence, context: &OrderContext) -> ApiResult<()> {
    persistence
        .delete_cart(&context.storage_key())
        .map_err(|e| translate_persistence_error(&e))?;

    debug!(storage_key = %context.storage_key(), "Cleared cart");
    Ok(())
}

/// Builds the `POST /orders` body from a context's cart.
///
/// The cart is left untouched: it is cleared only by
/// [`confirm_order_submitted`] after the server confirms success, so a
/// failed submission loses nothing.
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` if the cart is empty, or an internal
/// error if the cart record cannot be read.
pub fn prepare_order_submission(
    persistence: &mut Persistence,
    context: &OrderContext,
    details: &CustomerDetails,
) -> ApiResult<SubmitOrderRequest> {
    let cart = load_cart_state(persistence, context)?;

    if cart.is_empty() {
        return Err(crate::ApiError::InvalidInput {
            field: String::from("items"),
            message: String::from("cart is empty"),
        });
    }

    let order_type = context.order_type();
    let table_number = match order_type {
        OrderType::DineIn => context.identifier().to_string(),
        OrderType::Delivery | OrderType::Pickup => String::new(),
    };
    let area = match order_type {
        OrderType::Delivery => context.identifier().to_string(),
        OrderType::DineIn | OrderType::Pickup => String::new(),
    };

    let total_amount = cart.total_amount() + u64::from(details.delivery_charge);

    Ok(SubmitOrderRequest {
        customer_name: details.name.clone(),
        email: details.email.clone(),
        phone: details.phone.clone(),
        area,
        table_number,
        ordertype: order_type,
        delivery_charge: details.delivery_charge,
        payment_method: details.payment_method.clone(),
        items: cart.into_items(),
        total_amount,
        status: OrderStatus::Received,
    })
}

/// Clears the submitted cart after the server confirmed the order.
///
/// # Errors
///
/// Returns an error if persistence fails.
pub fn confirm_order_submitted(
    persistence: &mut Persistence,
    context: &OrderContext,
) -> ApiResult<()> {
    clear_cart(persistence, context)?;

    info!(
        storage_key = %context.storage_key(),
        "Order confirmed, cart cleared"
    );
    Ok(())
}

/// Checks a status transition against the lifecycle rules.
///
/// This runs locally, before any network call, so an invalid staff action
/// never reaches the server.
///
/// # Errors
///
/// Returns `ApiError::DomainRuleViolation` naming the attempted
/// transition if it is not permitted.
pub fn check_status_transition(
    order_type: OrderType,
    current: OrderStatus,
    requested: OrderStatus,
) -> ApiResult<()> {
    current
        .validate_transition(requested, order_type)
        .map_err(translate_domain_error)
}

/// Loads a context's cart state, empty if no record exists.
fn load_cart_state(
    persistence: &mut Persistence,
    context: &OrderContext,
) -> ApiResult<CartState> {
    let items = persistence
        .load_cart(&context.storage_key())
        .map_err(|e| translate_persistence_error(&e))?
        .unwrap_or_default();

    Ok(CartState::from_items(items))
}

/// Persists a cart state under its context's storage key.
///
/// An empty cart deletes the record per the persistence contract.
fn persist_cart_state(
    persistence: &mut Persistence,
    context: &OrderContext,
    cart: &CartState,
) -> ApiResult<()> {
    persistence
        .save_cart(&context.storage_key(), cart.items())
        .map_err(|e| translate_persistence_error(&e))
}

fn summarize(cart: &CartState) -> CartSummary {
    CartSummary {
        items: cart.items().to_vec(),
        total_amount: cart.total_amount(),
    }
}
