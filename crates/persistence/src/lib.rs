// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the escort roster system.
//!
//! This crate stores the application state as a small key-value snapshot
//! set: one JSON payload per collection (officers, schedule, time off),
//! keyed by a fixed name in a single `SQLite` table. It is built on Diesel
//! with embedded migrations.
//!
//! ## Durability model
//!
//! - `save_state` writes all three payloads inside one transaction on every
//!   commit (write-through).
//! - `load_state` never fails: a missing or unparseable payload falls back
//!   to the built-in seed dataset for that collection and logs the error.
//!   This is the only recovery behavior in the system.
//!
//! ## Testing
//!
//! `new_in_memory()` hands out an isolated shared-memory database per call
//! via an atomic counter, so tests are deterministic and need no external
//! infrastructure.

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

use diesel::prelude::*;
use diesel::SqliteConnection;
use escort_roster::RosterState;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{error, info};

/// Atomic counter for generating unique in-memory database names.
///
/// This ensures deterministic test isolation by eliminating time-based
/// collisions. Each call to `new_in_memory()` receives a unique sequential
/// ID.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

mod diesel_schema;
mod error;
mod seed;
mod sqlite;

#[cfg(test)]
mod tests;

pub use error::PersistenceError;
pub use seed::{seed_officers, seed_schedule, seed_state, seed_time_off};

/// Snapshot key for the officer roster.
const KEY_OFFICERS: &str = "escort-roster-officers";
/// Snapshot key for the transport schedule.
const KEY_SCHEDULE: &str = "escort-roster-schedule";
/// Snapshot key for the time-off list.
const KEY_TIME_OFF: &str = "escort-roster-timeoff";

/// Persistence adapter for roster state snapshots.
///
/// Holds a single `SQLite` connection; callers serialize access (the server
/// wraps the adapter in a mutex).
pub struct Persistence {
    pub(crate) conn: SqliteConnection,
}

impl Persistence {
    /// Creates a new persistence adapter with an in-memory `SQLite`
    /// database.
    ///
    /// Each call receives a unique database instance via atomic counter,
    /// ensuring deterministic test isolation without time-based collisions.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id: u64 = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let db_name: String = format!("memdb_roster_{db_id}");
        let shared_memory_url: String = format!("file:{db_name}?mode=memory&cache=shared");

        let conn: SqliteConnection = sqlite::initialize_database(&shared_memory_url)?;
        Ok(Self { conn })
    }

    /// Creates a new persistence adapter backed by a `SQLite` file.
    ///
    /// WAL mode is enabled for file-based databases.
    ///
    /// # Arguments
    ///
    /// * `path` - Filesystem path of the database file
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_with_file(path: &str) -> Result<Self, PersistenceError> {
        let mut conn: SqliteConnection = sqlite::initialize_database(path)?;
        sqlite::enable_wal_mode(&mut conn)?;
        Ok(Self { conn })
    }

    /// Persists the full state snapshot.
    ///
    /// All three collections are written inside one transaction so a failed
    /// write never leaves a partially updated snapshot behind.
    ///
    /// # Arguments
    ///
    /// * `state` - The snapshot to persist
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the database write fails.
    pub fn save_state(&mut self, state: &RosterState) -> Result<(), PersistenceError> {
        let officers_payload: String = to_payload(&state.officers)?;
        let schedule_payload: String = to_payload(&state.schedule)?;
        let time_off_payload: String = to_payload(&state.time_off)?;

        self.conn.transaction::<_, PersistenceError, _>(|conn| {
            upsert_snapshot(conn, KEY_OFFICERS, &officers_payload)?;
            upsert_snapshot(conn, KEY_SCHEDULE, &schedule_payload)?;
            upsert_snapshot(conn, KEY_TIME_OFF, &time_off_payload)?;
            Ok(())
        })
    }

    /// Loads the full state snapshot.
    ///
    /// Never fails: each collection falls back to its seed data when the
    /// stored payload is missing or cannot be read, and the failure is
    /// logged.
    pub fn load_state(&mut self) -> RosterState {
        let seed: RosterState = seed::seed_state();
        RosterState {
            officers: self.load_collection(KEY_OFFICERS, seed.officers),
            schedule: self.load_collection(KEY_SCHEDULE, seed.schedule),
            time_off: self.load_collection(KEY_TIME_OFF, seed.time_off),
        }
    }

    /// Loads one collection, substituting `fallback` on any failure.
    fn load_collection<T: DeserializeOwned>(&mut self, key: &str, fallback: Vec<T>) -> Vec<T> {
        match self.read_payload(key) {
            Ok(Some(payload)) => match serde_json::from_str::<Vec<T>>(&payload) {
                Ok(items) => items,
                Err(e) => {
                    error!(key, error = %e, "Corrupt snapshot payload, using seed data");
                    fallback
                }
            },
            Ok(None) => {
                info!(key, "No stored snapshot, using seed data");
                fallback
            }
            Err(e) => {
                error!(key, error = %e, "Failed to read snapshot, using seed data");
                fallback
            }
        }
    }

    /// Reads the raw payload stored under a snapshot key, if any.
    fn read_payload(&mut self, key: &str) -> Result<Option<String>, PersistenceError> {
        use crate::diesel_schema::roster_snapshots::dsl;

        dsl::roster_snapshots
            .filter(dsl::snapshot_key.eq(key))
            .select(dsl::payload)
            .first::<String>(&mut self.conn)
            .optional()
            .map_err(Into::into)
    }
}

/// Serializes a collection to its JSON payload.
fn to_payload<T: Serialize>(items: &[T]) -> Result<String, PersistenceError> {
    serde_json::to_string(items).map_err(Into::into)
}

/// Inserts or replaces one snapshot row.
fn upsert_snapshot(
    conn: &mut SqliteConnection,
    key: &str,
    payload: &str,
) -> Result<(), PersistenceError> {
    let updated_at: String = chrono::Utc::now().to_rfc3339();

    diesel::replace_into(diesel_schema::roster_snapshots::table)
        .values((
            diesel_schema::roster_snapshots::snapshot_key.eq(key),
            diesel_schema::roster_snapshots::payload.eq(payload),
            diesel_schema::roster_snapshots::updated_at.eq(&updated_at),
        ))
        .execute(conn)?;
    Ok(())
}
