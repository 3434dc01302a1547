// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Shared fixtures for the engine tests.

use comanda_domain::{
    CartItem, SelectionKind, SimpleVariation, VariationCategory, VariationConfig, VariationOption,
};

/// The platter scenario: one required single-select "Meat" category
/// (Chicken +0, Beef +150) and one optional multiple-select "Extras"
/// category capped at 2 (Cheese +50, Sauce +30, Chili +20).
pub fn platter_config() -> VariationConfig {
    let meat = VariationCategory::new(
        String::from("meat"),
        String::from("Meat"),
        SelectionKind::Single,
        true,
    )
    .with_options(vec![
        option("chicken", "Chicken", 0),
        option("beef", "Beef", 150),
    ]);

    let extras = VariationCategory::new(
        String::from("extras"),
        String::from("Extras"),
        SelectionKind::Multiple,
        false,
    )
    .with_max_selections(2)
    .with_options(vec![
        option("cheese", "Cheese", 50),
        option("sauce", "Sauce", 30),
        option("chili", "Chili", 20),
    ]);

    VariationConfig::categorized(vec![meat, extras], true)
}

/// A flat multi-select config: Extra Cheese +50, Fries +100, Coleslaw +40.
pub fn simple_multi_config() -> VariationConfig {
    VariationConfig::simple(
        vec![
            SimpleVariation::new(String::from("xc"), String::from("Extra Cheese"), 50),
            SimpleVariation::new(String::from("fr"), String::from("Fries"), 100),
            SimpleVariation::new(String::from("cs"), String::from("Coleslaw"), 40),
        ],
        SelectionKind::Multiple,
    )
}

pub fn option(id: &str, name: &str, price: u32) -> VariationOption {
    VariationOption::new(id.to_string(), name.to_string(), price, true)
}

pub fn burger(variations: &[&str]) -> CartItem {
    CartItem::new(String::from("m1"), String::from("Burger"), 500)
        .with_variations(variations.iter().map(ToString::to_string).collect())
}
