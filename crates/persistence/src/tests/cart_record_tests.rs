// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for the keyed cart record store.

use crate::Persistence;
use comanda_domain::CartItem;

fn burger(quantity: u32) -> CartItem {
    let mut item = CartItem::new(String::from("m1"), String::from("Burger"), 500)
        .with_variations(vec![String::from("Large")]);
    item.quantity = quantity;
    item
}

#[test]
fn test_load_missing_key_returns_none() {
    let mut persistence = Persistence::new_in_memory().expect("Failed to create persistence");

    let loaded = persistence.load_cart("cart-pickup-default").unwrap();

    assert!(loaded.is_none());
}

#[test]
fn test_save_and_load_round_trip() {
    let mut persistence = Persistence::new_in_memory().expect("Failed to create persistence");
    let items = vec![burger(2)];

    persistence.save_cart("cart-dinein-12", &items).unwrap();
    let loaded = persistence.load_cart("cart-dinein-12").unwrap();

    assert_eq!(loaded, Some(items));
}

#[test]
fn test_saving_empty_cart_deletes_the_record() {
    let mut persistence = Persistence::new_in_memory().expect("Failed to create persistence");
    persistence.save_cart("cart-dinein-12", &[burger(1)]).unwrap();

    persistence.save_cart("cart-dinein-12", &[]).unwrap();

    // Absence of the record is the "no cart yet" sentinel
    assert!(persistence.load_cart("cart-dinein-12").unwrap().is_none());
}

#[test]
fn test_save_overwrites_previous_record() {
    let mut persistence = Persistence::new_in_memory().expect("Failed to create persistence");
    persistence.save_cart("cart-dinein-12", &[burger(1)]).unwrap();

    persistence.save_cart("cart-dinein-12", &[burger(4)]).unwrap();

    let loaded = persistence.load_cart("cart-dinein-12").unwrap().unwrap();
    assert_eq!(loaded[0].quantity, 4);
}

#[test]
fn test_keys_are_isolated() {
    let mut persistence = Persistence::new_in_memory().expect("Failed to create persistence");

    persistence.save_cart("cart-dinein-12", &[burger(1)]).unwrap();
    persistence
        .save_cart("cart-delivery-Area_A", &[burger(3)])
        .unwrap();
    persistence.delete_cart("cart-dinein-12").unwrap();

    assert!(persistence.load_cart("cart-dinein-12").unwrap().is_none());
    let other = persistence.load_cart("cart-delivery-Area_A").unwrap().unwrap();
    assert_eq!(other[0].quantity, 3);
}

#[test]
fn test_delete_missing_key_is_a_no_op() {
    let mut persistence = Persistence::new_in_memory().expect("Failed to create persistence");

    assert!(persistence.delete_cart("cart-pickup-default").is_ok());
}
