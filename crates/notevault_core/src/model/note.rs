//! Note domain model.
//!
//! # Responsibility
//! - Define the per-account note record and its id stamping.
//! - Provide the substring match used by read-side filtering.
//!
//! # Invariants
//! - `id` is the creation timestamp in epoch milliseconds and is never
//!   rewritten after creation.
//! - Successive ids minted in one process are strictly increasing; clock
//!   collisions across process restarts are accepted.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Stable identifier for a note: its creation time in epoch milliseconds.
pub type NoteId = i64;

// Last id handed out by this process. Same-millisecond creations are nudged
// forward by one so delete/edit-by-id stays well-defined within a session.
static LAST_ISSUED_ID: AtomicI64 = AtomicI64::new(0);

/// Single note owned by one account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Creation-timestamp id, unique within a process lifetime.
    pub id: NoteId,
    /// Free-form note text.
    pub content: String,
}

impl Note {
    /// Creates a note stamped with a fresh id.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            id: next_note_id(),
            content: content.into(),
        }
    }

    /// Creates a note with a caller-provided id.
    ///
    /// Used when rehydrating persisted collections and by tests that need
    /// deterministic ids.
    pub fn with_id(id: NoteId, content: impl Into<String>) -> Self {
        Self {
            id,
            content: content.into(),
        }
    }

    /// Returns whether `query` occurs in the content, case-insensitively.
    ///
    /// The empty query matches every note.
    pub fn matches(&self, query: &str) -> bool {
        self.content
            .to_lowercase()
            .contains(&query.to_lowercase())
    }
}

fn next_note_id() -> NoteId {
    let now = epoch_ms();
    let mut candidate = now;
    loop {
        let last = LAST_ISSUED_ID.load(Ordering::SeqCst);
        if candidate <= last {
            candidate = last + 1;
        }
        if LAST_ISSUED_ID
            .compare_exchange(last, candidate, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok()
        {
            return candidate;
        }
        candidate = epoch_ms();
    }
}

fn epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::Note;

    #[test]
    fn successive_ids_are_strictly_increasing() {
        let first = Note::new("first");
        let second = Note::new("second");
        let third = Note::new("third");
        assert!(first.id < second.id);
        assert!(second.id < third.id);
    }

    #[test]
    fn matches_is_case_insensitive_substring() {
        let note = Note::with_id(1, "Call Bob tomorrow");
        assert!(note.matches("bob"));
        assert!(note.matches("CALL"));
        assert!(!note.matches("alice"));
    }

    #[test]
    fn empty_query_matches_everything() {
        let note = Note::with_id(1, "anything");
        assert!(note.matches(""));
    }
}
