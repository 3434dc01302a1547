// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for selection actions, caps, validation, and catalog races.

use super::helpers::{option, platter_config, simple_multi_config};
use crate::{SelectionEngine, SelectionOutcome};
use comanda_domain::{
    SelectionKind, SimpleVariation, VariationCategory, VariationConfig, VariationOption,
};

#[test]
fn test_single_category_selection_replaces() {
    let mut engine = SelectionEngine::new(platter_config());

    assert_eq!(
        engine.select_category("meat", "chicken"),
        SelectionOutcome::Applied
    );
    assert_eq!(
        engine.select_category("meat", "beef"),
        SelectionOutcome::Applied
    );

    let selected = engine.selections().category_selections("meat");
    assert_eq!(selected.len(), 1);
    assert_eq!(selected[0].option_id, "beef");
}

#[test]
fn test_multiple_category_toggles() {
    let mut engine = SelectionEngine::new(platter_config());

    assert_eq!(
        engine.select_category("extras", "cheese"),
        SelectionOutcome::Applied
    );
    assert_eq!(
        engine.select_category("extras", "cheese"),
        SelectionOutcome::Removed
    );
    assert!(engine.selections().category_selections("extras").is_empty());
}

#[test]
fn test_multiple_category_cap_rejects_with_warning() {
    let mut engine = SelectionEngine::new(platter_config());

    engine.select_category("extras", "cheese");
    engine.select_category("extras", "sauce");

    let outcome = engine.select_category("extras", "chili");
    assert_eq!(
        outcome,
        SelectionOutcome::Rejected {
            warning: String::from("max 2 selections for Extras"),
        }
    );
    assert_eq!(engine.selections().category_selections("extras").len(), 2);
}

#[test]
fn test_unknown_category_and_option_are_ignored() {
    let mut engine = SelectionEngine::new(platter_config());

    assert_eq!(
        engine.select_category("soup", "lentil"),
        SelectionOutcome::Ignored
    );
    assert_eq!(
        engine.select_category("meat", "lamb"),
        SelectionOutcome::Ignored
    );
    assert!(engine.selections().is_empty());
}

#[test]
fn test_unavailable_option_is_ignored() {
    let category = VariationCategory::new(
        String::from("meat"),
        String::from("Meat"),
        SelectionKind::Single,
        true,
    )
    .with_options(vec![VariationOption::new(
        String::from("beef"),
        String::from("Beef"),
        150,
        false,
    )]);
    let mut engine = SelectionEngine::new(VariationConfig::categorized(vec![category], true));

    assert_eq!(
        engine.select_category("meat", "beef"),
        SelectionOutcome::Ignored
    );
}

#[test]
fn test_simple_single_replaces() {
    let config = VariationConfig::simple(
        vec![
            SimpleVariation::new(String::from("sm"), String::from("Small"), 0),
            SimpleVariation::new(String::from("lg"), String::from("Large"), 100),
        ],
        SelectionKind::Single,
    );
    let mut engine = SelectionEngine::new(config);

    engine.select_simple("sm");
    engine.select_simple("lg");

    assert_eq!(engine.selections().simple.len(), 1);
    assert_eq!(engine.selections().simple[0].option_name, "Large");
}

#[test]
fn test_simple_multiple_respects_total_cap() {
    let config = simple_multi_config().with_total_max_selections(2);
    let mut engine = SelectionEngine::new(config);

    assert_eq!(engine.select_simple("xc"), SelectionOutcome::Applied);
    assert_eq!(engine.select_simple("fr"), SelectionOutcome::Applied);
    assert_eq!(
        engine.select_simple("cs"),
        SelectionOutcome::Rejected {
            warning: String::from("max 2 selections"),
        }
    );

    // Toggling one off frees a slot
    assert_eq!(engine.select_simple("xc"), SelectionOutcome::Removed);
    assert_eq!(engine.select_simple("cs"), SelectionOutcome::Applied);
}

#[test]
fn test_unknown_simple_variation_is_ignored() {
    let mut engine = SelectionEngine::new(simple_multi_config());

    assert_eq!(engine.select_simple("nope"), SelectionOutcome::Ignored);
}

#[test]
fn test_disallowed_category_spanning_clears_others() {
    let mut config = platter_config();
    config.allow_multiple_categories = false;
    let mut engine = SelectionEngine::new(config);

    engine.select_category("meat", "beef");
    engine.select_category("extras", "cheese");

    assert!(engine.selections().category_selections("meat").is_empty());
    assert_eq!(engine.selections().category_selections("extras").len(), 1);
}

#[test]
fn test_required_category_validation() {
    let mut engine = SelectionEngine::new(platter_config());

    let result = engine.validate();
    assert!(!result.is_valid);
    assert_eq!(result.errors, vec![String::from("Meat is required")]);

    engine.select_category("meat", "chicken");
    assert!(engine.validate().is_valid);
}

#[test]
fn test_clear_category_reopens_required_gap() {
    let mut engine = SelectionEngine::new(platter_config());

    engine.select_category("meat", "chicken");
    engine.clear_category("meat");

    assert!(!engine.validate().is_valid);
}

#[test]
fn test_flattened_drops_category_headings() {
    let mut engine = SelectionEngine::new(platter_config());

    engine.select_category("extras", "cheese");
    engine.select_category("meat", "beef");

    // Config order: meat before extras, headings dropped
    assert_eq!(
        engine.flattened(),
        vec![String::from("Beef"), String::from("Cheese")]
    );
}

#[test]
fn test_update_config_prunes_vanished_selections() {
    let mut engine = SelectionEngine::new(platter_config());
    engine.select_category("meat", "beef");
    engine.select_category("extras", "cheese");

    // Beef vanished from the re-fetched catalog
    let meat = VariationCategory::new(
        String::from("meat"),
        String::from("Meat"),
        SelectionKind::Single,
        true,
    )
    .with_options(vec![option("chicken", "Chicken", 0)]);
    let extras = VariationCategory::new(
        String::from("extras"),
        String::from("Extras"),
        SelectionKind::Multiple,
        false,
    )
    .with_max_selections(2)
    .with_options(vec![option("cheese", "Cheese", 50)]);

    let warnings = engine.update_config(VariationConfig::categorized(vec![meat, extras], true));

    assert_eq!(warnings, vec![String::from("Beef is no longer available")]);
    assert!(engine.selections().category_selections("meat").is_empty());
    assert_eq!(engine.selections().category_selections("extras").len(), 1);
    assert!(!engine.validate().is_valid);
}

#[test]
fn test_stale_fetch_token_is_discarded() {
    let mut engine = SelectionEngine::new(platter_config());
    let token = engine.generation();

    // The session closes and reopens before the fetch lands
    engine.reset();

    let applied = engine.apply_fetched_options(token, "meat", vec![option("lamb", "Lamb", 200)]);

    assert!(!applied);
    assert!(engine.config().category("meat").unwrap().option("lamb").is_none());
}

#[test]
fn test_current_fetch_token_applies_options() {
    let mut engine = SelectionEngine::new(platter_config());

    let applied = engine.apply_fetched_options(
        engine.generation(),
        "meat",
        vec![option("lamb", "Lamb", 200)],
    );

    assert!(applied);
    assert_eq!(
        engine.select_category("meat", "lamb"),
        SelectionOutcome::Applied
    );
}

#[test]
fn test_empty_fetched_options_are_valid() {
    let mut engine = SelectionEngine::new(platter_config());

    assert!(engine.apply_fetched_options(engine.generation(), "extras", Vec::new()));
    assert_eq!(
        engine.select_category("extras", "cheese"),
        SelectionOutcome::Ignored
    );
}

#[test]
fn test_reset_discards_selections() {
    let mut engine = SelectionEngine::new(platter_config());
    engine.select_category("meat", "beef");

    engine.reset();

    assert!(engine.selections().is_empty());
}
