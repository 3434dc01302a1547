// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Catalog ingestion.
//!
//! `GET /items` returns menu items in two historical shapes: the current
//! `{id, name, price, status}` form and a legacy `{uuid, title, name}`
//! form with no price or status. Both are normalized into
//! [`VariationOption`] in this single pass so the selection engine never
//! branches on the source shape.

use comanda_domain::VariationOption;
use serde_json::Value;
use tracing::warn;

/// The stock status string that marks an option selectable.
const IN_STOCK: &str = "in stock";

/// Normalizes raw catalog items into variation options.
///
/// Items missing an identifier or a display name are skipped with a log
/// line rather than failing the whole fetch; an empty input is valid and
/// yields an empty option list ("no options yet").
#[must_use]
pub fn normalize_catalog_options(items: &[Value]) -> Vec<VariationOption> {
    items
        .iter()
        .filter_map(|item| {
            let option = normalize_item(item);
            if option.is_none() {
                warn!(?item, "Skipping catalog item with no id or name");
            }
            option
        })
        .collect()
}

fn normalize_item(item: &Value) -> Option<VariationOption> {
    let id = string_field(item, &["id", "uuid"])?;
    // Menu item titles become option names; legacy rows may only carry `name`
    let name = string_field(item, &["title", "name"])?;
    let price = price_field(item);
    let available = item
        .get("status")
        .and_then(Value::as_str)
        .is_none_or(|status| status == IN_STOCK);

    Some(VariationOption::new(id, name, price, available))
}

/// Reads the first present field as a string, accepting numeric values.
fn string_field(item: &Value, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| match item.get(*key) {
        Some(Value::String(s)) if !s.trim().is_empty() => Some(s.clone()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// Reads the price in minor currency units, defaulting to zero.
///
/// Legacy rows carry no price; negative or non-numeric values also fall
/// back to zero rather than failing the fetch.
fn price_field(item: &Value) -> u32 {
    item.get("price")
        .and_then(Value::as_f64)
        .filter(|p| p.is_finite() && *p >= 0.0)
        .map_or(0, |p| {
            let rounded = p.round();
            if rounded >= f64::from(u32::MAX) {
                u32::MAX
            } else {
                // Cast is safe: rounded is non-negative and below u32::MAX
                #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                {
                    rounded as u32
                }
            }
        })
}
