// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! In-memory cart state for one order context.
//!
//! All cart mutations go through this type so the total and the
//! persistence invariants stay intact; nothing else touches the line
//! vector. Persistence keying is the caller's concern.

use comanda_domain::CartItem;

/// The cart lines for one order context.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CartState {
    items: Vec<CartItem>,
}

impl CartState {
    /// Creates an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Restores a cart from persisted lines.
    #[must_use]
    pub const fn from_items(items: Vec<CartItem>) -> Self {
        Self { items }
    }

    /// The current lines.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Consumes the cart, yielding its lines.
    #[must_use]
    pub fn into_items(self) -> Vec<CartItem> {
        self.items
    }

    /// Returns true if the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The number of distinct lines.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.items.len()
    }

    /// Adds an item, merging with an existing line of the same identity.
    ///
    /// A matching line's quantity grows by exactly 1 per call; otherwise
    /// the item is appended as a new line at quantity 1 regardless of the
    /// quantity on the input.
    pub fn add(&mut self, item: CartItem) {
        if let Some(existing) = self
            .items
            .iter_mut()
            .find(|line| line.matches_line(&item.id, &item.variations))
        {
            existing.quantity = existing.quantity.saturating_add(1);
            return;
        }

        let mut line = item;
        line.quantity = 1;
        self.items.push(line);
    }

    /// Removes all lines matching the identity.
    ///
    /// With no variations given, only lines that themselves have no
    /// variations match.
    pub fn remove(&mut self, id: &str, variations: Option<&[String]>) {
        let variations = variations.unwrap_or(&[]);
        self.items
            .retain(|line| !line.matches_line(id, variations));
    }

    /// Sets the quantity of matching lines, floored at 1.
    ///
    /// There is no remove-via-zero path; removal is a separate explicit
    /// action.
    pub fn update_quantity(&mut self, id: &str, quantity: u32, variations: Option<&[String]>) {
        let variations = variations.unwrap_or(&[]);
        let quantity = quantity.max(1);

        for line in self
            .items
            .iter_mut()
            .filter(|line| line.matches_line(id, variations))
        {
            line.quantity = quantity;
        }
    }

    /// Empties the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// The running total in minor currency units.
    #[must_use]
    pub fn total_amount(&self) -> u64 {
        self.items.iter().map(CartItem::line_total).sum()
    }
}
