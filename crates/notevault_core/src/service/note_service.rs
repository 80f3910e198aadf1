//! Notes use-case service.
//!
//! # Responsibility
//! - Own the in-memory notes collection for the logged-in account.
//! - Provide add/edit/delete mutations and the read-side filter projection.
//!
//! # Invariants
//! - Every mutation persists the complete collection before returning.
//! - The persisted collection always equals the in-memory collection after a
//!   successful mutation.
//! - Filtering never mutates collection or store.

use crate::model::note::{Note, NoteId};
use crate::repo::account_repo::RepoResult;
use crate::repo::note_repo::NoteRepository;
use log::{debug, info};

/// Transient per-dashboard view state.
///
/// Owned by the presentation layer and passed into mutations explicitly, so
/// the service keeps no hidden editor state. Never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComposeState {
    /// Content of the note being composed or edited.
    pub draft: String,
    /// Id of the note under edit; `None` while composing a new note.
    pub editing: Option<NoteId>,
    /// Current filter substring typed into the dashboard.
    pub filter: String,
}

/// Use-case service for one account's notes collection.
///
/// Requires an active session: the owning email comes from the logged-in
/// account, and callers must drop this service on logout.
pub struct NoteService<R: NoteRepository> {
    repo: R,
    email: String,
    notes: Vec<Note>,
}

impl<R: NoteRepository> NoteService<R> {
    /// Loads the stored collection for `email` and wraps it for mutation.
    ///
    /// A never-written collection loads as empty; absence is not an error.
    pub fn open(repo: R, email: impl Into<String>) -> RepoResult<Self> {
        let email = email.into();
        let notes = repo.load_notes(&email)?;
        info!(
            "event=notes_load module=notes status=ok count={}",
            notes.len()
        );
        Ok(Self { repo, email, notes })
    }

    /// Returns the owning account email.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the live collection in insertion order.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Appends a note built from the compose draft.
    ///
    /// # Contract
    /// - An empty draft is a no-op returning `Ok(None)`; nothing persists and
    ///   the draft is left as-is.
    /// - Otherwise the note is stamped with a fresh id, the collection is
    ///   persisted, the draft is cleared, and the new id is returned.
    pub fn add(&mut self, compose: &mut ComposeState) -> RepoResult<Option<NoteId>> {
        if compose.draft.is_empty() {
            return Ok(None);
        }

        let note = Note::new(compose.draft.clone());
        let id = note.id;
        self.notes.push(note);
        self.persist()?;
        compose.draft.clear();
        debug!(
            "event=note_add module=notes status=ok count={}",
            self.notes.len()
        );
        Ok(Some(id))
    }

    /// Starts editing the note with `id`.
    ///
    /// Copies its content into the compose draft and records the under-edit
    /// marker; returns the content. Returns `None` without touching state
    /// when the id is unknown (callers only pass ids from a rendered list).
    pub fn begin_edit(&self, id: NoteId, compose: &mut ComposeState) -> Option<&str> {
        let note = self.notes.iter().find(|note| note.id == id)?;
        compose.draft = note.content.clone();
        compose.editing = Some(id);
        Some(note.content.as_str())
    }

    /// Replaces the content of the note recorded as under edit.
    ///
    /// # Contract
    /// - With no under-edit marker this is a no-op returning `Ok(None)`.
    /// - Every note whose id equals the marker takes the draft as its new
    ///   content; all other notes are unchanged.
    /// - The collection is persisted, then draft and marker are cleared.
    pub fn commit_edit(&mut self, compose: &mut ComposeState) -> RepoResult<Option<NoteId>> {
        let Some(id) = compose.editing else {
            return Ok(None);
        };

        for note in &mut self.notes {
            if note.id == id {
                note.content = compose.draft.clone();
            }
        }
        self.persist()?;
        compose.draft.clear();
        compose.editing = None;
        debug!("event=note_edit module=notes status=ok");
        Ok(Some(id))
    }

    /// Removes the note with `id` and persists the remaining collection.
    ///
    /// Unknown ids are a no-op on the collection; the (unchanged) collection
    /// is still persisted, mirroring the delete-then-store flow.
    pub fn delete(&mut self, id: NoteId) -> RepoResult<()> {
        self.notes.retain(|note| note.id != id);
        self.persist()?;
        debug!(
            "event=note_delete module=notes status=ok count={}",
            self.notes.len()
        );
        Ok(())
    }

    /// Returns the notes whose content contains `query`, case-insensitively.
    ///
    /// Pure read-side projection: insertion order is preserved, the empty
    /// query returns the whole collection, and neither the collection nor
    /// the store is touched.
    pub fn filter(&self, query: &str) -> Vec<&Note> {
        self.notes.iter().filter(|note| note.matches(query)).collect()
    }

    fn persist(&self) -> RepoResult<()> {
        self.repo.save_notes(&self.email, &self.notes)
    }
}
