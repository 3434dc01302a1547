// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::diesel_schema::{cart_records, last_context};
use diesel::prelude::*;

/// Row form of a persisted cart record.
///
/// `items_json` holds the JSON array of cart lines; the row exists only
/// while the cart is non-empty.
#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = cart_records)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct CartRecordRow {
    pub storage_key: String,
    pub items_json: String,
    pub updated_at: String,
}

/// Row form of the single last-context record.
#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = last_context)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct LastContextRow {
    pub context_id: i32,
    pub order_type: String,
    pub identifier: String,
}
