// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The normalized variation model.
//!
//! Menu items attach priced modifiers in two shapes: a flat "simple" list
//! with no heading, or named categories whose options are bound in from the
//! catalog. Both are normalized into these types at the ingestion boundary
//! so the selection engine never branches on the source shape.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;

/// Cardinality of a selectable group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SelectionKind {
    /// At most one option may be selected; selecting replaces.
    #[default]
    Single,
    /// Options toggle independently, optionally capped.
    Multiple,
}

impl SelectionKind {
    /// Returns the string representation of the kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Multiple => "multiple",
        }
    }
}

impl FromStr for SelectionKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "single" => Ok(Self::Single),
            "multiple" => Ok(Self::Multiple),
            _ => Err(DomainError::InvalidSelectionKind(s.to_string())),
        }
    }
}

/// One selectable modifier bound into a category from the catalog.
///
/// Prices are in minor currency units. Options are immutable once
/// normalized from catalog data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariationOption {
    /// The catalog identifier for this option.
    pub id: String,
    /// The display name.
    pub name: String,
    /// The price delta in minor currency units.
    pub price: u32,
    /// Whether the option is currently in stock.
    pub available: bool,
}

impl VariationOption {
    /// Creates a new option.
    #[must_use]
    pub const fn new(id: String, name: String, price: u32, available: bool) -> Self {
        Self {
            id,
            name,
            price,
            available,
        }
    }
}

/// A named group of options with cardinality and requiredness rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariationCategory {
    /// The category identifier.
    pub id: String,
    /// The heading shown above the options (e.g. "Meat", "Soup").
    pub name: String,
    /// Single or multiple selection.
    #[serde(rename = "type")]
    pub kind: SelectionKind,
    /// Whether at least one selection is required before checkout.
    pub required: bool,
    /// Upper bound on selections for `multiple` categories.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_selections: Option<usize>,
    /// The selectable options.
    pub options: Vec<VariationOption>,
}

impl VariationCategory {
    /// Creates a new category with no options.
    #[must_use]
    pub const fn new(id: String, name: String, kind: SelectionKind, required: bool) -> Self {
        Self {
            id,
            name,
            kind,
            required,
            max_selections: None,
            options: Vec::new(),
        }
    }

    /// Sets the selection cap for `multiple` categories.
    #[must_use]
    pub const fn with_max_selections(mut self, max: usize) -> Self {
        self.max_selections = Some(max);
        self
    }

    /// Replaces the option list.
    #[must_use]
    pub fn with_options(mut self, options: Vec<VariationOption>) -> Self {
        self.options = options;
        self
    }

    /// Looks up an option by id.
    #[must_use]
    pub fn option(&self, option_id: &str) -> Option<&VariationOption> {
        self.options.iter().find(|o| o.id == option_id)
    }
}

/// A flat modifier attached directly to a menu item, with no heading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimpleVariation {
    /// The variation identifier.
    pub id: String,
    /// The display name.
    pub name: String,
    /// The price delta in minor currency units.
    pub price: u32,
}

impl SimpleVariation {
    /// Creates a new simple variation.
    #[must_use]
    pub const fn new(id: String, name: String, price: u32) -> Self {
        Self { id, name, price }
    }
}

/// Per-item selection configuration.
///
/// In practice exactly one of `simple_variations` / `categories` is
/// populated (menu item vs. platter), though the model permits both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariationConfig {
    /// Flat modifiers, if any.
    #[serde(default)]
    pub simple_variations: Vec<SimpleVariation>,
    /// Cardinality of the flat modifier list.
    #[serde(default)]
    pub simple_selection: SelectionKind,
    /// Category-bound option groups, if any.
    #[serde(default)]
    pub categories: Vec<VariationCategory>,
    /// Whether selections may span more than one category at once.
    #[serde(default)]
    pub allow_multiple_categories: bool,
    /// Cap on the combined selection count across the whole item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_max_selections: Option<usize>,
}

impl VariationConfig {
    /// Creates a configuration with only flat modifiers.
    #[must_use]
    pub const fn simple(variations: Vec<SimpleVariation>, selection: SelectionKind) -> Self {
        Self {
            simple_variations: variations,
            simple_selection: selection,
            categories: Vec::new(),
            allow_multiple_categories: false,
            total_max_selections: None,
        }
    }

    /// Creates a configuration with only category groups.
    #[must_use]
    pub const fn categorized(
        categories: Vec<VariationCategory>,
        allow_multiple_categories: bool,
    ) -> Self {
        Self {
            simple_variations: Vec::new(),
            simple_selection: SelectionKind::Single,
            categories,
            allow_multiple_categories,
            total_max_selections: None,
        }
    }

    /// Sets the combined selection cap.
    #[must_use]
    pub const fn with_total_max_selections(mut self, max: usize) -> Self {
        self.total_max_selections = Some(max);
        self
    }

    /// Looks up a category by id.
    #[must_use]
    pub fn category(&self, category_id: &str) -> Option<&VariationCategory> {
        self.categories.iter().find(|c| c.id == category_id)
    }

    /// Looks up a simple variation by id.
    #[must_use]
    pub fn simple_variation(&self, variation_id: &str) -> Option<&SimpleVariation> {
        self.simple_variations.iter().find(|v| v.id == variation_id)
    }
}

impl Default for VariationConfig {
    fn default() -> Self {
        Self::simple(Vec::new(), SelectionKind::Single)
    }
}

/// One chosen modifier.
///
/// `category_id` is absent for selections from the flat list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedVariation {
    /// The owning category, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    /// The selected option's identifier.
    pub option_id: String,
    /// The selected option's display name.
    pub option_name: String,
    /// The price delta in minor currency units.
    pub price: u32,
}

impl SelectedVariation {
    /// Creates a selection from a flat modifier.
    #[must_use]
    pub fn from_simple(variation: &SimpleVariation) -> Self {
        Self {
            category_id: None,
            option_id: variation.id.clone(),
            option_name: variation.name.clone(),
            price: variation.price,
        }
    }

    /// Creates a selection from a category-bound option.
    #[must_use]
    pub fn from_option(category_id: &str, option: &VariationOption) -> Self {
        Self {
            category_id: Some(category_id.to_string()),
            option_id: option.id.clone(),
            option_name: option.name.clone(),
            price: option.price,
        }
    }
}

/// In-progress selection state for one item configuration session.
///
/// Created empty when a selection session opens, mutated by select and
/// deselect actions, and discarded once converted into a cart line.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VariationSelections {
    /// Selections from the flat modifier list.
    pub simple: Vec<SelectedVariation>,
    /// Selections per category id.
    pub categories: BTreeMap<String, Vec<SelectedVariation>>,
}

impl VariationSelections {
    /// Creates an empty selection state.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            simple: Vec::new(),
            categories: BTreeMap::new(),
        }
    }

    /// Returns true if nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.simple.is_empty() && self.categories.values().all(Vec::is_empty)
    }

    /// The number of selections across the flat list and all categories.
    #[must_use]
    pub fn selection_count(&self) -> usize {
        self.simple.len() + self.categories.values().map(Vec::len).sum::<usize>()
    }

    /// The selections for one category, empty if none.
    #[must_use]
    pub fn category_selections(&self, category_id: &str) -> &[SelectedVariation] {
        self.categories.get(category_id).map_or(&[], Vec::as_slice)
    }

    /// The sum of all selected price deltas in minor currency units.
    ///
    /// Commutative over the selection set, so the value is independent of
    /// the order selections were made in.
    #[must_use]
    pub fn variation_total(&self) -> u64 {
        let simple: u64 = self.simple.iter().map(|s| u64::from(s.price)).sum();
        let categories: u64 = self
            .categories
            .values()
            .flat_map(|v| v.iter())
            .map(|s| u64::from(s.price))
            .sum();
        simple + categories
    }
}
