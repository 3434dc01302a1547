// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An order status string is not a recognized status.
    InvalidOrderStatus(String),
    /// A status transition is not permitted by the lifecycle rules.
    InvalidStatusTransition {
        /// The current status.
        from: String,
        /// The requested status.
        to: String,
        /// Why the transition was rejected.
        reason: String,
    },
    /// A status does not exist for the given order type.
    StatusUnavailableForOrderType {
        /// The requested status.
        status: String,
        /// The order type it was requested for.
        order_type: String,
    },
    /// An order type string is not a recognized order type.
    InvalidOrderType(String),
    /// A selection kind string is not `single` or `multiple`.
    InvalidSelectionKind(String),
    /// An order context identifier is empty or invalid.
    InvalidIdentifier(String),
    /// A cart item fails basic field constraints.
    InvalidCartItem(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidOrderStatus(status) => {
                write!(f, "Invalid order status: '{status}'")
            }
            Self::InvalidStatusTransition { from, to, reason } => {
                write!(f, "Cannot transition order from '{from}' to '{to}': {reason}")
            }
            Self::StatusUnavailableForOrderType { status, order_type } => {
                write!(
                    f,
                    "Status '{status}' is not available for {order_type} orders"
                )
            }
            Self::InvalidOrderType(order_type) => {
                write!(f, "Invalid order type: '{order_type}'")
            }
            Self::InvalidSelectionKind(kind) => {
                write!(
                    f,
                    "Invalid selection kind: '{kind}'. Must be 'single' or 'multiple'"
                )
            }
            Self::InvalidIdentifier(msg) => write!(f, "Invalid identifier: {msg}"),
            Self::InvalidCartItem(msg) => write!(f, "Invalid cart item: {msg}"),
        }
    }
}

impl std::error::Error for DomainError {}
