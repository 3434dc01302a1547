// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the comanda ordering system.
//!
//! This crate provides database persistence for context-keyed cart records
//! and the last-resolved order context. It is built on Diesel over `SQLite`.
//!
//! ## Cart record contract
//!
//! A cart persists under its context's storage key whenever it has lines,
//! and the record is **deleted** when the cart becomes empty: the absence
//! of a row doubles as the "no cart yet" sentinel, so an empty array is
//! never written. Records are isolated per key; switching context never
//! merges or deletes another key's record.
//!
//! ## Testing
//!
//! Tests run against unique shared in-memory databases; each call to
//! [`Persistence::new_in_memory`] receives its own instance via an atomic
//! counter, eliminating time-based collisions.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod data_models;
mod diesel_schema;
mod error;
mod sqlite;

#[cfg(test)]
mod tests;

pub use error::PersistenceError;

use diesel::prelude::*;
use std::path::Path;
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::debug;

use comanda_domain::{CartItem, OrderContext, OrderType};
use data_models::{CartRecordRow, LastContextRow};
use diesel_schema::{cart_records, last_context};

/// Atomic counter for generating unique in-memory database names.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// The single row id used by the last-context side store.
const LAST_CONTEXT_ROW_ID: i32 = 1;

/// Persistence adapter for cart records and the context side store.
pub struct Persistence {
    conn: SqliteConnection,
}

impl Persistence {
    /// Creates a persistence adapter with an in-memory `SQLite` database.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let db_name = format!("memdb_test_{db_id}");
        let shared_memory_url = format!("file:{db_name}?mode=memory&cache=shared");

        let conn = sqlite::initialize_database(&shared_memory_url)?;

        Ok(Self { conn })
    }

    /// Creates a persistence adapter with a file-based `SQLite` database.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the `SQLite` database file
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let mut conn = sqlite::initialize_database(path_str)?;

        // WAL improves read concurrency for file-backed databases
        sqlite::enable_wal_mode(&mut conn)?;

        Ok(Self { conn })
    }

    // ========================================================================
    // Cart records
    // ========================================================================

    /// Loads the cart persisted under a storage key.
    ///
    /// Returns `None` when no cart has been persisted for the key.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or the stored JSON is corrupt.
    pub fn load_cart(&mut self, storage_key: &str) -> Result<Option<Vec<CartItem>>, PersistenceError> {
        let row: Option<CartRecordRow> = cart_records::table
            .find(storage_key)
            .first(&mut self.conn)
            .optional()?;

        row.map(|record| serde_json::from_str(&record.items_json).map_err(Into::into))
            .transpose()
    }

    /// Persists a cart under a storage key.
    ///
    /// An empty cart deletes the record instead of writing an empty array.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn save_cart(
        &mut self,
        storage_key: &str,
        items: &[CartItem],
    ) -> Result<(), PersistenceError> {
        if items.is_empty() {
            return self.delete_cart(storage_key);
        }

        let row = CartRecordRow {
            storage_key: storage_key.to_string(),
            items_json: serde_json::to_string(items)?,
            updated_at: sqlite::iso_timestamp(),
        };

        diesel::replace_into(cart_records::table)
            .values(&row)
            .execute(&mut self.conn)?;

        debug!(storage_key, lines = items.len(), "Persisted cart record");
        Ok(())
    }

    /// Removes the cart record for a storage key, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub fn delete_cart(&mut self, storage_key: &str) -> Result<(), PersistenceError> {
        diesel::delete(cart_records::table.find(storage_key)).execute(&mut self.conn)?;

        debug!(storage_key, "Deleted cart record");
        Ok(())
    }

    // ========================================================================
    // Context side store
    // ========================================================================

    /// Stores the last-resolved order context.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    pub fn store_last_context(&mut self, context: &OrderContext) -> Result<(), PersistenceError> {
        let row = LastContextRow {
            context_id: LAST_CONTEXT_ROW_ID,
            order_type: context.order_type().as_str().to_string(),
            identifier: context.identifier().to_string(),
        };

        diesel::replace_into(last_context::table)
            .values(&row)
            .execute(&mut self.conn)?;

        Ok(())
    }

    /// Loads the last-resolved order context, if one was stored.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or the stored order type is
    /// not recognized.
    pub fn load_last_context(&mut self) -> Result<Option<OrderContext>, PersistenceError> {
        let row: Option<LastContextRow> = last_context::table
            .find(LAST_CONTEXT_ROW_ID)
            .first(&mut self.conn)
            .optional()?;

        row.map(|record| {
            let order_type = OrderType::from_str(&record.order_type)
                .map_err(|e| PersistenceError::SerializationError(e.to_string()))?;
            Ok(OrderContext::new(order_type, record.identifier))
        })
        .transpose()
    }
}
