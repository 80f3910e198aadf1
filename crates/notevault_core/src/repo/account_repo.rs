//! Account directory and session-slot repository.
//!
//! # Responsibility
//! - Provide typed access to the `users` directory and `user` session slots.
//! - Keep JSON slot encoding inside the persistence boundary.
//!
//! # Invariants
//! - The directory is append-only: writes never edit or drop existing
//!   entries.
//! - Directory order is insertion order; login scans rely on it for
//!   first-match semantics.
//! - Read paths reject malformed persisted values instead of masking them.

use crate::model::account::Account;
use crate::store::{KvStore, StoreError};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Fixed slot holding the persisted current session.
pub const SESSION_KEY: &str = "user";
/// Fixed slot holding the registered-account directory.
pub const DIRECTORY_KEY: &str = "users";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for slot persistence and decoding.
#[derive(Debug)]
pub enum RepoError {
    Store(StoreError),
    Serde {
        key: String,
        source: serde_json::Error,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Store(err) => write!(f, "{err}"),
            Self::Serde { key, source } => {
                write!(f, "invalid persisted value under `{key}`: {source}")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            Self::Serde { source, .. } => Some(source),
        }
    }
}

impl From<StoreError> for RepoError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Repository interface for account directory and session persistence.
pub trait AccountRepository {
    /// Returns the full registered-account directory, oldest first.
    ///
    /// An unwritten directory slot reads as empty.
    fn load_directory(&self) -> RepoResult<Vec<Account>>;

    /// Appends one account and rewrites the whole directory slot.
    fn append_account(&self, account: &Account) -> RepoResult<()>;

    /// Returns the persisted session account, if one exists.
    fn load_session(&self) -> RepoResult<Option<Account>>;

    /// Persists `account` as the current session.
    fn save_session(&self, account: &Account) -> RepoResult<()>;

    /// Removes the persisted session slot.
    fn clear_session(&self) -> RepoResult<()>;
}

/// Slot-store-backed account repository.
pub struct KvAccountRepository<S: KvStore> {
    store: S,
}

impl<S: KvStore> KvAccountRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

impl<S: KvStore> AccountRepository for KvAccountRepository<S> {
    fn load_directory(&self) -> RepoResult<Vec<Account>> {
        match self.store.get(DIRECTORY_KEY)? {
            Some(raw) => decode_slot(DIRECTORY_KEY, &raw),
            None => Ok(Vec::new()),
        }
    }

    fn append_account(&self, account: &Account) -> RepoResult<()> {
        let mut directory = self.load_directory()?;
        directory.push(account.clone());
        let encoded = encode_slot(DIRECTORY_KEY, &directory)?;
        self.store.set(DIRECTORY_KEY, &encoded)?;
        Ok(())
    }

    fn load_session(&self) -> RepoResult<Option<Account>> {
        match self.store.get(SESSION_KEY)? {
            Some(raw) => decode_slot(SESSION_KEY, &raw).map(Some),
            None => Ok(None),
        }
    }

    fn save_session(&self, account: &Account) -> RepoResult<()> {
        let encoded = encode_slot(SESSION_KEY, account)?;
        self.store.set(SESSION_KEY, &encoded)?;
        Ok(())
    }

    fn clear_session(&self) -> RepoResult<()> {
        self.store.remove(SESSION_KEY)?;
        Ok(())
    }
}

pub(crate) fn encode_slot<T: serde::Serialize>(key: &str, value: &T) -> RepoResult<String> {
    serde_json::to_string(value).map_err(|source| RepoError::Serde {
        key: key.to_string(),
        source,
    })
}

pub(crate) fn decode_slot<T: serde::de::DeserializeOwned>(
    key: &str,
    raw: &str,
) -> RepoResult<T> {
    serde_json::from_str(raw).map_err(|source| RepoError::Serde {
        key: key.to_string(),
        source,
    })
}
