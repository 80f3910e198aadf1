//! SQLite implementation of the slot store.
//!
//! # Responsibility
//! - Map the `KvStore` contract onto the `slots` table.
//! - Keep SQL details inside the store boundary.
//!
//! # Invariants
//! - `set` is an upsert: the previous value for a key is fully replaced.
//! - `remove` on an absent key succeeds without effect.

use super::{KvStore, StoreResult};
use rusqlite::{params, Connection, OptionalExtension};

/// Slot store backed by a migrated SQLite connection.
///
/// A lightweight handle over a borrowed connection; copies share the same
/// underlying store.
#[derive(Clone, Copy)]
pub struct SqliteStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteStore<'conn> {
    /// Wraps a connection returned by [`super::open_store`] or
    /// [`super::open_store_in_memory`].
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl KvStore for SqliteStore<'_> {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM slots WHERE key = ?1;",
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        self.conn.execute(
            "INSERT INTO slots (key, value, updated_at)
             VALUES (?1, ?2, strftime('%s', 'now') * 1000)
             ON CONFLICT(key) DO UPDATE
             SET value = excluded.value,
                 updated_at = excluded.updated_at;",
            params![key, value],
        )?;
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        self.conn
            .execute("DELETE FROM slots WHERE key = ?1;", [key])?;
        Ok(())
    }
}
