// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::cart::CartItem;
use crate::error::DomainError;
use crate::order_context::OrderContext;
use crate::variation::{VariationConfig, VariationSelections};
use serde::{Deserialize, Serialize};

/// The outcome of validating a selection state.
///
/// Derived, never stored; recomputed on every selection change. Errors
/// block checkout, warnings do not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// True when there are no errors.
    pub is_valid: bool,
    /// Blocking problems, e.g. a missing required category.
    pub errors: Vec<String>,
    /// Non-blocking notices, e.g. a rejected over-cap selection.
    pub warnings: Vec<String>,
}

impl ValidationResult {
    /// Creates a result from collected errors and warnings.
    #[must_use]
    pub fn new(errors: Vec<String>, warnings: Vec<String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
            warnings,
        }
    }

    /// A result with no errors or warnings.
    #[must_use]
    pub const fn valid() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }
}

/// Validates a selection state against its configuration.
///
/// Every `required` category with no selection contributes an error naming
/// the category. Cardinality caps are enforced at selection time, not here,
/// so this check never reports them.
#[must_use]
pub fn validate_selections(
    config: &VariationConfig,
    selections: &VariationSelections,
) -> ValidationResult {
    let errors: Vec<String> = config
        .categories
        .iter()
        .filter(|category| category.required)
        .filter(|category| selections.category_selections(&category.id).is_empty())
        .map(|category| format!("{} is required", category.name))
        .collect();

    ValidationResult::new(errors, Vec::new())
}

/// Validates a cart item's basic field constraints.
///
/// # Errors
///
/// Returns `DomainError::InvalidCartItem` if the id or title is empty, or
/// the quantity is zero.
pub fn validate_cart_item(item: &CartItem) -> Result<(), DomainError> {
    if item.id.trim().is_empty() {
        return Err(DomainError::InvalidCartItem(String::from(
            "item id cannot be empty",
        )));
    }

    if item.title.trim().is_empty() {
        return Err(DomainError::InvalidCartItem(String::from(
            "item title cannot be empty",
        )));
    }

    if item.quantity == 0 {
        return Err(DomainError::InvalidCartItem(String::from(
            "quantity must be at least 1",
        )));
    }

    Ok(())
}

/// Validates that an order context carries a usable identifier.
///
/// # Errors
///
/// Returns `DomainError::InvalidIdentifier` if the identifier is blank.
pub fn validate_order_context(context: &OrderContext) -> Result<(), DomainError> {
    if context.identifier().trim().is_empty() {
        return Err(DomainError::InvalidIdentifier(String::from(
            "context identifier cannot be empty",
        )));
    }

    Ok(())
}
