//! Key-value persistence contract and SQLite bootstrap.
//!
//! # Responsibility
//! - Define the string-keyed slot store the rest of the core persists into.
//! - Open and configure SQLite connections backing that store.
//! - Apply schema migrations in deterministic order.
//!
//! # Invariants
//! - Migration version is tracked via `PRAGMA user_version`.
//! - Core code must not read/write slots before migrations succeed.
//! - Slot reads/writes are whole-value: no partial or delta updates.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod migrations;
mod open;
mod sqlite;

pub use open::{open_store, open_store_in_memory};
pub use sqlite::SqliteStore;

pub type StoreResult<T> = Result<T, StoreError>;

/// Storage transport and bootstrap errors.
#[derive(Debug)]
pub enum StoreError {
    Sqlite(rusqlite::Error),
    UnsupportedSchemaVersion {
        db_version: u32,
        latest_supported: u32,
    },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::UnsupportedSchemaVersion {
                db_version,
                latest_supported,
            } => write!(
                f,
                "store schema version {db_version} is newer than supported {latest_supported}"
            ),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::UnsupportedSchemaVersion { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

/// String-keyed slot store used by every persistence path in the core.
///
/// The contract is deliberately small: synchronous whole-value get/set/remove
/// by key. Repositories serialize complete collections into single slots and
/// never write deltas.
pub trait KvStore {
    /// Reads the slot value, or `None` when the key has never been written
    /// (or was removed).
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Writes the slot value, replacing any previous value for the key.
    fn set(&self, key: &str, value: &str) -> StoreResult<()>;

    /// Deletes the slot. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> StoreResult<()>;
}
