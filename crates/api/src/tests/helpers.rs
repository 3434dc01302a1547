// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Shared fixtures for the API handler tests.

use comanda_domain::{CartItem, OrderContext, OrderType};
use comanda_persistence::Persistence;

use crate::request_response::CustomerDetails;

pub fn test_persistence() -> Persistence {
    Persistence::new_in_memory().expect("Failed to create in-memory persistence")
}

pub fn dinein_context(table: &str) -> OrderContext {
    OrderContext::new(OrderType::DineIn, table.to_string())
}

pub fn delivery_context(area: &str) -> OrderContext {
    OrderContext::new(OrderType::Delivery, area.to_string())
}

pub fn burger(variations: &[&str]) -> CartItem {
    CartItem::new(String::from("m1"), String::from("Burger"), 500)
        .with_variations(variations.iter().map(ToString::to_string).collect())
}

pub fn customer(delivery_charge: u32) -> CustomerDetails {
    CustomerDetails {
        name: String::from("Ada"),
        email: String::from("ada@example.com"),
        phone: String::from("0300-0000000"),
        payment_method: String::from("cash"),
        delivery_charge,
    }
}
