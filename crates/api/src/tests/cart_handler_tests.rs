// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for the cart handlers and their persistence invariants.

use super::helpers::{burger, delivery_context, dinein_context, test_persistence};
use crate::error::ApiError;
use crate::handlers::{
    add_item_to_cart, clear_cart, get_cart, remove_item_from_cart, update_cart_quantity,
};
use comanda_domain::CartItem;

#[test]
fn test_add_persists_and_merges() {
    let mut persistence = test_persistence();
    let context = dinein_context("12");

    add_item_to_cart(&mut persistence, &context, burger(&["Large"])).unwrap();
    let summary = add_item_to_cart(&mut persistence, &context, burger(&["Large"])).unwrap();

    assert_eq!(summary.items.len(), 1);
    assert_eq!(summary.items[0].quantity, 2);
    assert_eq!(summary.total_amount, 1000);

    // The merged line survives a reload from persistence
    let reloaded = get_cart(&mut persistence, &context).unwrap();
    assert_eq!(reloaded, summary);
}

#[test]
fn test_add_rejects_invalid_item() {
    let mut persistence = test_persistence();
    let context = dinein_context("12");

    let result = add_item_to_cart(
        &mut persistence,
        &context,
        CartItem::new(String::new(), String::from("Burger"), 500),
    );

    assert!(matches!(result, Err(ApiError::InvalidInput { .. })));
}

#[test]
fn test_contexts_are_isolated() {
    let mut persistence = test_persistence();
    let table = dinein_context("12");
    let area = delivery_context("Area A");

    add_item_to_cart(&mut persistence, &table, burger(&[])).unwrap();

    // The new context starts empty
    let area_cart = get_cart(&mut persistence, &area).unwrap();
    assert!(area_cart.items.is_empty());

    // Switching back restores the original cart
    let table_cart = get_cart(&mut persistence, &table).unwrap();
    assert_eq!(table_cart.items.len(), 1);
}

#[test]
fn test_clear_affects_current_context_only() {
    let mut persistence = test_persistence();
    let table = dinein_context("12");
    let area = delivery_context("Area A");

    add_item_to_cart(&mut persistence, &table, burger(&[])).unwrap();
    add_item_to_cart(&mut persistence, &area, burger(&[])).unwrap();

    clear_cart(&mut persistence, &table).unwrap();

    assert!(get_cart(&mut persistence, &table).unwrap().items.is_empty());
    assert_eq!(get_cart(&mut persistence, &area).unwrap().items.len(), 1);
}

#[test]
fn test_removing_last_line_deletes_the_record() {
    let mut persistence = test_persistence();
    let context = dinein_context("12");

    add_item_to_cart(&mut persistence, &context, burger(&["Large"])).unwrap();
    let summary = remove_item_from_cart(
        &mut persistence,
        &context,
        "m1",
        Some(&[String::from("Large")]),
    )
    .unwrap();

    assert!(summary.items.is_empty());
    assert_eq!(summary.total_amount, 0);
}

#[test]
fn test_update_quantity_floors_at_one_and_persists() {
    let mut persistence = test_persistence();
    let context = dinein_context("12");

    add_item_to_cart(&mut persistence, &context, burger(&[])).unwrap();
    let summary =
        update_cart_quantity(&mut persistence, &context, "m1", 0, None).unwrap();

    assert_eq!(summary.items[0].quantity, 1);

    let reloaded = get_cart(&mut persistence, &context).unwrap();
    assert_eq!(reloaded.items[0].quantity, 1);
}
