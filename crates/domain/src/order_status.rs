// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Order status tracking and transition logic.
//!
//! This module defines order lifecycle states and valid transitions.
//! Status transitions are staff-initiated only; the system never advances
//! status based on time alone.

use crate::error::DomainError;
use crate::order_context::OrderType;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Order lifecycle states.
///
/// Orders are created at `Received` and end at `Completed` or `Cancelled`.
/// The wire strings match the external API exactly, including the
/// space-separated "Out for delivery".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    /// Order accepted, not yet in preparation.
    Received,
    /// Kitchen is working on the order.
    Preparing,
    /// Order is ready for handoff.
    Ready,
    /// Order has left with a rider (delivery orders only).
    #[serde(rename = "Out for delivery")]
    OutForDelivery,
    /// Order fulfilled.
    Completed,
    /// Order cancelled.
    Cancelled,
}

impl OrderStatus {
    /// Returns the string representation of the status.
    ///
    /// This is used for persistence and API serialization.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Received => "Received",
            Self::Preparing => "Preparing",
            Self::Ready => "Ready",
            Self::OutForDelivery => "Out for delivery",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
        }
    }

    /// Parses a status from its string representation.
    fn parse_str(s: &str) -> Result<Self, DomainError> {
        match s {
            "Received" => Ok(Self::Received),
            "Preparing" => Ok(Self::Preparing),
            "Ready" => Ok(Self::Ready),
            "Out for delivery" => Ok(Self::OutForDelivery),
            "Completed" => Ok(Self::Completed),
            "Cancelled" => Ok(Self::Cancelled),
            _ => Err(DomainError::InvalidOrderStatus(s.to_string())),
        }
    }

    /// Returns true if this status is terminal.
    ///
    /// Terminal statuses only permit their own self-loop.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }

    /// Returns true if this status exists for the given order type.
    ///
    /// `Out for delivery` only exists for delivery orders; dine-in and
    /// pickup orders skip it.
    #[must_use]
    pub const fn is_available_for(&self, order_type: OrderType) -> bool {
        match self {
            Self::OutForDelivery => matches!(order_type, OrderType::Delivery),
            _ => true,
        }
    }

    /// The ordered status set for an order type.
    #[must_use]
    pub const fn statuses_for(order_type: OrderType) -> &'static [Self] {
        match order_type {
            OrderType::Delivery => &[
                Self::Received,
                Self::Preparing,
                Self::Ready,
                Self::OutForDelivery,
                Self::Completed,
                Self::Cancelled,
            ],
            OrderType::DineIn | OrderType::Pickup => &[
                Self::Received,
                Self::Preparing,
                Self::Ready,
                Self::Completed,
                Self::Cancelled,
            ],
        }
    }

    /// Validates a transition from this status to another for an order type.
    ///
    /// The check runs locally before any network call so that an invalid
    /// staff action never reaches the server.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::StatusUnavailableForOrderType` if the target
    /// status does not exist for the order type, or
    /// `DomainError::InvalidStatusTransition` if the lifecycle rules do not
    /// permit the move.
    pub fn validate_transition(
        &self,
        new_status: Self,
        order_type: OrderType,
    ) -> Result<(), DomainError> {
        if !new_status.is_available_for(order_type) {
            return Err(DomainError::StatusUnavailableForOrderType {
                status: new_status.as_str().to_string(),
                order_type: order_type.as_str().to_string(),
            });
        }

        // Terminal states permit only their own self-loop
        if self.is_terminal() {
            if new_status == *self {
                return Ok(());
            }
            return Err(DomainError::InvalidStatusTransition {
                from: self.as_str().to_string(),
                to: new_status.as_str().to_string(),
                reason: "cannot transition from terminal state".to_string(),
            });
        }

        let valid = match self {
            Self::Received => matches!(
                new_status,
                Self::Preparing
                    | Self::Ready
                    | Self::OutForDelivery
                    | Self::Completed
                    | Self::Cancelled
            ),
            Self::Preparing => matches!(
                new_status,
                Self::Ready | Self::OutForDelivery | Self::Completed | Self::Cancelled
            ),
            Self::Ready => matches!(
                new_status,
                Self::OutForDelivery | Self::Completed | Self::Cancelled
            ),
            Self::OutForDelivery => {
                matches!(new_status, Self::Ready | Self::Completed | Self::Cancelled)
            }
            Self::Completed | Self::Cancelled => false,
        };

        if valid {
            Ok(())
        } else {
            Err(DomainError::InvalidStatusTransition {
                from: self.as_str().to_string(),
                to: new_status.as_str().to_string(),
                reason: "transition not permitted by order lifecycle rules".to_string(),
            })
        }
    }
}

impl FromStr for OrderStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
