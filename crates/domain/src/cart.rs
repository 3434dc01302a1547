// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Cart line items.

use serde::{Deserialize, Serialize};

/// One priced line in a cart.
///
/// `price` is the per-unit price after variation deltas have been folded
/// in; `variations` is the flattened display form of the selections that
/// produced it. Line identity for merging is `(id, variations)` with the
/// variations normalized, so two entries with the same base item but
/// different variation sets stay distinct lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    /// The base menu item identifier.
    pub id: String,
    /// The display title.
    pub title: String,
    /// Unit price in minor currency units, post-variation.
    pub price: u32,
    /// Line quantity, always at least 1.
    pub quantity: u32,
    /// Optional image reference for display.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Flattened variation names.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub variations: Vec<String>,
}

impl CartItem {
    /// Creates a line with no variations at quantity 1.
    #[must_use]
    pub const fn new(id: String, title: String, price: u32) -> Self {
        Self {
            id,
            title,
            price,
            quantity: 1,
            image: None,
            variations: Vec::new(),
        }
    }

    /// Attaches flattened variations.
    #[must_use]
    pub fn with_variations(mut self, variations: Vec<String>) -> Self {
        self.variations = variations;
        self
    }

    /// Attaches an image reference.
    #[must_use]
    pub fn with_image(mut self, image: String) -> Self {
        self.image = Some(image);
        self
    }

    /// The line total in minor currency units.
    #[must_use]
    pub fn line_total(&self) -> u64 {
        u64::from(self.price) * u64::from(self.quantity)
    }

    /// Returns true if this line matches the given merge identity.
    ///
    /// Variations are compared as normalized sets, so insertion order does
    /// not split identical selections into separate lines.
    #[must_use]
    pub fn matches_line(&self, id: &str, variations: &[String]) -> bool {
        self.id == id && normalized_variations(&self.variations) == normalized_variations(variations)
    }
}

/// Returns a sorted copy of a variations array for identity comparison.
#[must_use]
pub fn normalized_variations(variations: &[String]) -> Vec<String> {
    let mut normalized = variations.to_vec();
    normalized.sort_unstable();
    normalized
}
