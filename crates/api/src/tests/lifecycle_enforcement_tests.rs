// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for local status lifecycle enforcement.
//!
//! These verify that invalid transitions are rejected at the API boundary
//! with the lifecycle rule named, before anything reaches the network.

use crate::error::ApiError;
use crate::handlers::check_status_transition;
use comanda_domain::{OrderStatus, OrderType};

#[test]
fn test_received_to_preparing_is_accepted() {
    let result = check_status_transition(
        OrderType::DineIn,
        OrderStatus::Received,
        OrderStatus::Preparing,
    );

    assert!(result.is_ok());
}

#[test]
fn test_completed_to_preparing_is_rejected_with_rule() {
    let result = check_status_transition(
        OrderType::DineIn,
        OrderStatus::Completed,
        OrderStatus::Preparing,
    );

    match result.unwrap_err() {
        ApiError::DomainRuleViolation { rule, message } => {
            assert_eq!(rule, "status_lifecycle");
            assert!(message.contains("'Completed'"));
            assert!(message.contains("'Preparing'"));
        }
        other => panic!("Expected DomainRuleViolation, got {other:?}"),
    }
}

#[test]
fn test_out_for_delivery_rejected_for_pickup() {
    let result = check_status_transition(
        OrderType::Pickup,
        OrderStatus::Ready,
        OrderStatus::OutForDelivery,
    );

    assert!(matches!(
        result,
        Err(ApiError::DomainRuleViolation { .. })
    ));
}

#[test]
fn test_delivery_round_trip_between_ready_and_out() {
    assert!(
        check_status_transition(
            OrderType::Delivery,
            OrderStatus::Ready,
            OrderStatus::OutForDelivery,
        )
        .is_ok()
    );
    assert!(
        check_status_transition(
            OrderType::Delivery,
            OrderStatus::OutForDelivery,
            OrderStatus::Ready,
        )
        .is_ok()
    );
}
