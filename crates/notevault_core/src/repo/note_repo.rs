//! Per-account notes collection repository.
//!
//! # Responsibility
//! - Provide typed access to the `notes_<email>` slots.
//! - Own the email-to-slot-key derivation.
//!
//! # Invariants
//! - Every write persists the complete, current collection for the account;
//!   there is no delta persistence.
//! - An unwritten collection slot reads as empty, never as an error.

use crate::model::note::Note;
use crate::repo::account_repo::{decode_slot, encode_slot, RepoResult};
use crate::store::KvStore;

/// Returns the slot key holding `email`'s notes collection.
pub fn notes_key(email: &str) -> String {
    format!("notes_{email}")
}

/// Repository interface for whole-collection note persistence.
pub trait NoteRepository {
    /// Returns the stored collection for `email`, oldest first.
    fn load_notes(&self, email: &str) -> RepoResult<Vec<Note>>;

    /// Rewrites the full collection slot for `email`.
    fn save_notes(&self, email: &str, notes: &[Note]) -> RepoResult<()>;
}

/// Slot-store-backed notes repository.
pub struct KvNoteRepository<S: KvStore> {
    store: S,
}

impl<S: KvStore> KvNoteRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

impl<S: KvStore> NoteRepository for KvNoteRepository<S> {
    fn load_notes(&self, email: &str) -> RepoResult<Vec<Note>> {
        let key = notes_key(email);
        match self.store.get(&key)? {
            Some(raw) => decode_slot(&key, &raw),
            None => Ok(Vec::new()),
        }
    }

    fn save_notes(&self, email: &str, notes: &[Note]) -> RepoResult<()> {
        let key = notes_key(email);
        let encoded = encode_slot(&key, &notes)?;
        self.store.set(&key, &encoded)?;
        Ok(())
    }
}
