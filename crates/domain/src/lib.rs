// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod cart;
mod error;
mod order_context;
mod order_status;
mod validation;
mod variation;

#[cfg(test)]
mod tests;

pub use cart::{CartItem, normalized_variations};
pub use error::DomainError;
pub use order_context::{
    ContextSignal, OrderContext, OrderType, PICKUP_IDENTIFIER, resolve_order_context,
};
pub use order_status::OrderStatus;
pub use validation::{
    ValidationResult, validate_cart_item, validate_order_context, validate_selections,
};
pub use variation::{
    SelectedVariation, SelectionKind, SimpleVariation, VariationCategory, VariationConfig,
    VariationOption, VariationSelections,
};
