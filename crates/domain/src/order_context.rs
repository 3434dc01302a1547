// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Order context resolution.
//!
//! An order context scopes a cart to a dine-in table, a delivery area, or a
//! pickup session. Contexts are derived from ambient request signals; a
//! durable side store supplies the last-known context so navigation that
//! drops query parameters re-resolves to the same cart.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The fixed identifier used for pickup contexts.
pub const PICKUP_IDENTIFIER: &str = "default";

/// How an order reaches the customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderType {
    /// Served at a numbered table.
    DineIn,
    /// Delivered to a named area.
    Delivery,
    /// Collected at the counter.
    Pickup,
}

impl OrderType {
    /// Returns the wire string for this order type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::DineIn => "dinein",
            Self::Delivery => "delivery",
            Self::Pickup => "pickup",
        }
    }
}

impl FromStr for OrderType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dinein" => Ok(Self::DineIn),
            "delivery" => Ok(Self::Delivery),
            "pickup" => Ok(Self::Pickup),
            _ => Err(DomainError::InvalidOrderType(s.to_string())),
        }
    }
}

impl std::fmt::Display for OrderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The `(order type, identifier)` pair that scopes a cart.
///
/// The identifier is a table number for dine-in, an area name for delivery,
/// and the fixed sentinel for pickup. Each context's cart is isolated:
/// changing context never merges or deletes another context's cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderContext {
    order_type: OrderType,
    identifier: String,
}

impl OrderContext {
    /// Creates a new context.
    #[must_use]
    pub const fn new(order_type: OrderType, identifier: String) -> Self {
        Self {
            order_type,
            identifier,
        }
    }

    /// Creates the pickup context.
    #[must_use]
    pub fn pickup() -> Self {
        Self::new(OrderType::Pickup, PICKUP_IDENTIFIER.to_string())
    }

    /// Returns the order type.
    #[must_use]
    pub const fn order_type(&self) -> OrderType {
        self.order_type
    }

    /// Returns the raw identifier.
    #[must_use]
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// The storage key this context's cart persists under.
    ///
    /// Invariant: `cart-{ordertype}-{identifier}` with every whitespace
    /// character in the identifier replaced by `_`.
    #[must_use]
    pub fn storage_key(&self) -> String {
        format!(
            "cart-{}-{}",
            self.order_type.as_str(),
            sanitize_identifier(&self.identifier)
        )
    }
}

/// Ambient signals a context is resolved from.
///
/// All fields are optional; blank strings count as absent.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContextSignal {
    /// Explicit order type hint (e.g. a query parameter).
    pub type_hint: Option<String>,
    /// Table identifier, if present.
    pub table: Option<String>,
    /// Delivery area identifier, if present.
    pub area: Option<String>,
}

impl ContextSignal {
    /// Creates an empty signal set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            type_hint: None,
            table: None,
            area: None,
        }
    }
}

/// Replaces each whitespace character with an underscore.
fn sanitize_identifier(identifier: &str) -> String {
    identifier
        .chars()
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .collect()
}

/// Returns a trimmed, non-empty signal field.
fn present(value: Option<&String>) -> Option<&str> {
    value.map(|s| s.trim()).filter(|s| !s.is_empty())
}

/// Resolves the canonical order context from ambient signals.
///
/// Priority, first match wins: an explicit type hint of `delivery`,
/// `pickup`, or `dinein`; otherwise a present table identifier implies
/// dine-in, a present area identifier implies delivery, and the fallback
/// is pickup.
///
/// The identifier comes from the matching signal field. When the signal
/// does not supply one, the last-known context's identifier is retained if
/// it has the same order type; the final fallback is the pickup sentinel.
#[must_use]
pub fn resolve_order_context(
    signal: &ContextSignal,
    last_known: Option<&OrderContext>,
) -> OrderContext {
    let table = present(signal.table.as_ref());
    let area = present(signal.area.as_ref());

    let order_type = match present(signal.type_hint.as_ref()) {
        Some("delivery") => OrderType::Delivery,
        Some("pickup") => OrderType::Pickup,
        Some("dinein") => OrderType::DineIn,
        _ => {
            if table.is_some() {
                OrderType::DineIn
            } else if area.is_some() {
                OrderType::Delivery
            } else {
                OrderType::Pickup
            }
        }
    };

    let retained = last_known
        .filter(|ctx| ctx.order_type() == order_type)
        .map(OrderContext::identifier);

    let identifier = match order_type {
        OrderType::DineIn => table.or(retained).unwrap_or(PICKUP_IDENTIFIER),
        OrderType::Delivery => area.or(retained).unwrap_or(PICKUP_IDENTIFIER),
        OrderType::Pickup => PICKUP_IDENTIFIER,
    };

    OrderContext::new(order_type, identifier.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signal(type_hint: Option<&str>, table: Option<&str>, area: Option<&str>) -> ContextSignal {
        ContextSignal {
            type_hint: type_hint.map(String::from),
            table: table.map(String::from),
            area: area.map(String::from),
        }
    }

    #[test]
    fn test_explicit_hint_wins_over_identifiers() {
        let resolved = resolve_order_context(&signal(Some("delivery"), Some("12"), Some("Area A")), None);
        assert_eq!(resolved.order_type(), OrderType::Delivery);
        assert_eq!(resolved.identifier(), "Area A");
    }

    #[test]
    fn test_table_implies_dine_in() {
        let resolved = resolve_order_context(&signal(None, Some("12"), None), None);
        assert_eq!(resolved.order_type(), OrderType::DineIn);
        assert_eq!(resolved.identifier(), "12");
    }

    #[test]
    fn test_area_implies_delivery() {
        let resolved = resolve_order_context(&signal(None, None, Some("North Side")), None);
        assert_eq!(resolved.order_type(), OrderType::Delivery);
        assert_eq!(resolved.identifier(), "North Side");
    }

    #[test]
    fn test_no_signal_falls_back_to_pickup() {
        let resolved = resolve_order_context(&ContextSignal::new(), None);
        assert_eq!(resolved.order_type(), OrderType::Pickup);
        assert_eq!(resolved.identifier(), PICKUP_IDENTIFIER);
    }

    #[test]
    fn test_unknown_hint_falls_through_to_identifiers() {
        let resolved = resolve_order_context(&signal(Some("drive-thru"), Some("7"), None), None);
        assert_eq!(resolved.order_type(), OrderType::DineIn);
        assert_eq!(resolved.identifier(), "7");
    }

    #[test]
    fn test_last_known_identifier_retained_for_same_type() {
        let last = OrderContext::new(OrderType::DineIn, String::from("12"));
        let resolved = resolve_order_context(&signal(Some("dinein"), None, None), Some(&last));
        assert_eq!(resolved.identifier(), "12");
    }

    #[test]
    fn test_last_known_identifier_ignored_across_types() {
        let last = OrderContext::new(OrderType::DineIn, String::from("12"));
        let resolved = resolve_order_context(&signal(Some("delivery"), None, None), Some(&last));
        assert_eq!(resolved.identifier(), PICKUP_IDENTIFIER);
    }

    #[test]
    fn test_blank_signal_fields_count_as_absent() {
        let resolved = resolve_order_context(&signal(None, Some("  "), Some("Area A")), None);
        assert_eq!(resolved.order_type(), OrderType::Delivery);
    }

    #[test]
    fn test_storage_key_sanitizes_whitespace() {
        let ctx = OrderContext::new(OrderType::Delivery, String::from("Area A"));
        assert_eq!(ctx.storage_key(), "cart-delivery-Area_A");
    }

    #[test]
    fn test_storage_key_for_pickup() {
        assert_eq!(OrderContext::pickup().storage_key(), "cart-pickup-default");
    }
}
