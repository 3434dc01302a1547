// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The variation selection engine.
//!
//! One engine instance covers one item configuration session: it owns the
//! item's `VariationConfig`, accepts select/deselect actions, and produces
//! a validated selection state with a deterministic total price. Catalog
//! data arrives asynchronously, so every action on an unknown option is a
//! silent no-op rather than an error, and fetched options are applied only
//! under a generation token that stale fetches cannot satisfy.

use comanda_domain::{
    CartItem, SelectedVariation, SelectionKind, ValidationResult, VariationConfig,
    VariationOption, VariationSelections, validate_selections,
};

/// The result of one select/deselect action.
///
/// Cap violations are rejections with a user-facing warning, never errors;
/// actions referencing options the config does not know are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// The option was selected.
    Applied,
    /// The option was already selected and has been toggled off.
    Removed,
    /// The selection was refused; the warning names the violated cap.
    Rejected {
        /// User-facing warning text.
        warning: String,
    },
    /// The option or category is not part of the current config.
    Ignored,
}

/// Selection state machine for one item configuration session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionEngine {
    config: VariationConfig,
    selections: VariationSelections,
    generation: u64,
}

impl SelectionEngine {
    /// Creates an engine with empty selections for the given config.
    #[must_use]
    pub const fn new(config: VariationConfig) -> Self {
        Self {
            config,
            selections: VariationSelections::new(),
            generation: 0,
        }
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &VariationConfig {
        &self.config
    }

    /// The current selection state.
    #[must_use]
    pub const fn selections(&self) -> &VariationSelections {
        &self.selections
    }

    /// The session generation token.
    ///
    /// Callers snapshot this before starting an asynchronous catalog fetch
    /// and pass it back to [`Self::apply_fetched_options`]; any reset or
    /// config change in between invalidates the token.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Selects or toggles a flat modifier by id.
    ///
    /// Unknown ids are ignored. Under `Single` cardinality the selection
    /// replaces any previous one; under `Multiple` it toggles, bounded by
    /// the config's combined selection cap.
    pub fn select_simple(&mut self, variation_id: &str) -> SelectionOutcome {
        let Some(variation) = self.config.simple_variation(variation_id) else {
            return SelectionOutcome::Ignored;
        };
        let selected = SelectedVariation::from_simple(variation);

        match self.config.simple_selection {
            SelectionKind::Single => {
                self.selections.simple = vec![selected];
                SelectionOutcome::Applied
            }
            SelectionKind::Multiple => {
                if let Some(position) = self
                    .selections
                    .simple
                    .iter()
                    .position(|s| s.option_id == variation_id)
                {
                    self.selections.simple.remove(position);
                    return SelectionOutcome::Removed;
                }

                if let Some(warning) =
                    self.total_cap_warning(self.selections.selection_count())
                {
                    return SelectionOutcome::Rejected { warning };
                }

                self.selections.simple.push(selected);
                SelectionOutcome::Applied
            }
        }
    }

    /// Selects or toggles a category-bound option.
    ///
    /// Unknown categories, unknown options, and unavailable options are
    /// ignored. When the config disallows spanning categories, selecting
    /// into a new category clears the others first.
    pub fn select_category(&mut self, category_id: &str, option_id: &str) -> SelectionOutcome {
        let Some(category) = self.config.category(category_id) else {
            return SelectionOutcome::Ignored;
        };
        let Some(option) = category.option(option_id) else {
            return SelectionOutcome::Ignored;
        };
        if !option.available {
            return SelectionOutcome::Ignored;
        }

        let selected = SelectedVariation::from_option(category_id, option);
        let kind = category.kind;
        let max_selections = category.max_selections;
        let category_name = category.name.clone();

        // Toggle-off applies before any cap or exclusivity handling
        if let Some(position) = self
            .selections
            .category_selections(category_id)
            .iter()
            .position(|s| s.option_id == option_id)
        {
            if let Some(existing) = self.selections.categories.get_mut(category_id) {
                existing.remove(position);
            }
            return SelectionOutcome::Removed;
        }

        // Selections that exclusivity is about to clear must not count
        // against the combined cap
        let surviving_count = if self.config.allow_multiple_categories {
            self.selections.selection_count()
        } else {
            self.selections.simple.len()
                + self.selections.category_selections(category_id).len()
        };

        match kind {
            SelectionKind::Single => {
                if self.selections.category_selections(category_id).is_empty()
                    && let Some(warning) = self.total_cap_warning(surviving_count)
                {
                    return SelectionOutcome::Rejected { warning };
                }
                self.clear_other_categories(category_id);
                self.selections
                    .categories
                    .insert(category_id.to_string(), vec![selected]);
                SelectionOutcome::Applied
            }
            SelectionKind::Multiple => {
                let current = self.selections.category_selections(category_id).len();
                if let Some(max) = max_selections
                    && current >= max
                {
                    return SelectionOutcome::Rejected {
                        warning: format!("max {max} selections for {category_name}"),
                    };
                }
                if let Some(warning) = self.total_cap_warning(surviving_count) {
                    return SelectionOutcome::Rejected { warning };
                }

                self.clear_other_categories(category_id);
                self.selections
                    .categories
                    .entry(category_id.to_string())
                    .or_default()
                    .push(selected);
                SelectionOutcome::Applied
            }
        }
    }

    /// Clears all flat-modifier selections.
    pub fn clear_simple(&mut self) {
        self.selections.simple.clear();
    }

    /// Clears one category's selections.
    pub fn clear_category(&mut self, category_id: &str) {
        self.selections.categories.remove(category_id);
    }

    /// Validates the current selections against the config.
    #[must_use]
    pub fn validate(&self) -> ValidationResult {
        validate_selections(&self.config, &self.selections)
    }

    /// The total price for a base price, in minor currency units.
    ///
    /// Depends only on the selected set, not the order of actions.
    #[must_use]
    pub fn total_price(&self, base_price: u32) -> u64 {
        u64::from(base_price) + self.selections.variation_total()
    }

    /// The flattened display form of the selections.
    ///
    /// Option names only; category headings are dropped. Flat selections
    /// come first, then categories in config order.
    #[must_use]
    pub fn flattened(&self) -> Vec<String> {
        let mut flattened: Vec<String> = self
            .selections
            .simple
            .iter()
            .map(|s| s.option_name.clone())
            .collect();

        for category in &self.config.categories {
            flattened.extend(
                self.selections
                    .category_selections(&category.id)
                    .iter()
                    .map(|s| s.option_name.clone()),
            );
        }

        flattened
    }

    /// Converts the session into a priced cart line.
    ///
    /// The line's unit price folds the selected variation deltas into the
    /// base price; the selection state itself is not persisted.
    #[must_use]
    pub fn build_cart_item(
        &self,
        item_id: &str,
        title: &str,
        base_price: u32,
        image: Option<String>,
    ) -> CartItem {
        let unit_price =
            u32::try_from(self.total_price(base_price)).unwrap_or(u32::MAX);

        let mut item = CartItem::new(item_id.to_string(), title.to_string(), unit_price)
            .with_variations(self.flattened());
        item.image = image;
        item
    }

    /// Replaces the config, pruning selections whose option vanished.
    ///
    /// Returns one warning per pruned selection. Bumps the generation so
    /// in-flight catalog fetches against the old config are discarded.
    pub fn update_config(&mut self, config: VariationConfig) -> Vec<String> {
        let mut warnings = Vec::new();

        self.selections.simple.retain(|s| {
            let kept = config.simple_variation(&s.option_id).is_some();
            if !kept {
                warnings.push(format!("{} is no longer available", s.option_name));
            }
            kept
        });

        for (category_id, selections) in &mut self.selections.categories {
            selections.retain(|s| {
                let kept = config
                    .category(category_id)
                    .and_then(|c| c.option(&s.option_id))
                    .is_some_and(|o| o.available);
                if !kept {
                    warnings.push(format!("{} is no longer available", s.option_name));
                }
                kept
            });
        }
        self.selections.categories.retain(|_, v| !v.is_empty());

        self.config = config;
        self.generation += 1;
        warnings
    }

    /// Discards all selections and invalidates outstanding fetch tokens.
    ///
    /// Used when a configuration session closes or reopens; catalog
    /// fetches started before the reset can no longer write state.
    pub fn reset(&mut self) {
        self.selections = VariationSelections::new();
        self.generation += 1;
    }

    /// Installs asynchronously fetched options into a category.
    ///
    /// Returns true if applied. A token from a previous generation, or a
    /// category the config no longer carries, leaves the state untouched.
    /// An empty option list is valid ("no options yet").
    pub fn apply_fetched_options(
        &mut self,
        token: u64,
        category_id: &str,
        options: Vec<VariationOption>,
    ) -> bool {
        if token != self.generation {
            return false;
        }

        let Some(category) = self
            .config
            .categories
            .iter_mut()
            .find(|c| c.id == category_id)
        else {
            return false;
        };

        category.options = options;
        true
    }

    /// Warning for the combined selection cap, if adding one more to the
    /// given count would exceed it.
    fn total_cap_warning(&self, current_count: usize) -> Option<String> {
        self.config
            .total_max_selections
            .and_then(|max| (current_count >= max).then(|| format!("max {max} selections")))
    }

    /// Removes every category's selections except the named one.
    ///
    /// No-op when the config allows spanning categories.
    fn clear_other_categories(&mut self, category_id: &str) {
        if !self.config.allow_multiple_categories {
            self.selections
                .categories
                .retain(|id, _| id == category_id);
        }
    }
}
