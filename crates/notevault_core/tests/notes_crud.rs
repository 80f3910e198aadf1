use notevault_core::{
    notes_key, open_store_in_memory, ComposeState, KvNoteRepository, KvStore, NoteRepository,
    NoteService, SqliteStore,
};

#[test]
fn add_appends_note_and_clears_draft() {
    let conn = open_store_in_memory().unwrap();
    let store = SqliteStore::new(&conn);
    let mut notes = NoteService::open(KvNoteRepository::new(store), "a@x.com").unwrap();
    let mut compose = ComposeState {
        draft: "buy milk".to_string(),
        ..ComposeState::default()
    };

    let id = notes.add(&mut compose).unwrap().unwrap();

    assert!(compose.draft.is_empty());
    assert_eq!(notes.notes().len(), 1);
    assert_eq!(notes.notes()[0].id, id);
    assert_eq!(notes.notes()[0].content, "buy milk");
}

#[test]
fn add_with_empty_draft_is_a_noop() {
    let conn = open_store_in_memory().unwrap();
    let store = SqliteStore::new(&conn);
    let mut notes = NoteService::open(KvNoteRepository::new(store), "a@x.com").unwrap();
    let mut compose = ComposeState::default();

    assert!(notes.add(&mut compose).unwrap().is_none());

    assert!(notes.notes().is_empty());
    assert!(store.get(&notes_key("a@x.com")).unwrap().is_none());
}

#[test]
fn every_mutation_persists_the_full_collection() {
    let conn = open_store_in_memory().unwrap();
    let store = SqliteStore::new(&conn);
    let inspect = KvNoteRepository::new(store);
    let mut notes = NoteService::open(KvNoteRepository::new(store), "a@x.com").unwrap();
    let mut compose = ComposeState::default();

    compose.draft = "buy milk".to_string();
    let first = notes.add(&mut compose).unwrap().unwrap();
    assert_eq!(inspect.load_notes("a@x.com").unwrap(), notes.notes());

    compose.draft = "call bob".to_string();
    notes.add(&mut compose).unwrap().unwrap();
    assert_eq!(inspect.load_notes("a@x.com").unwrap(), notes.notes());

    notes.begin_edit(first, &mut compose).unwrap();
    compose.draft = "buy oat milk".to_string();
    notes.commit_edit(&mut compose).unwrap();
    assert_eq!(inspect.load_notes("a@x.com").unwrap(), notes.notes());

    notes.delete(first).unwrap();
    assert_eq!(inspect.load_notes("a@x.com").unwrap(), notes.notes());
}

#[test]
fn begin_edit_copies_content_and_marks_note_under_edit() {
    let conn = open_store_in_memory().unwrap();
    let store = SqliteStore::new(&conn);
    let mut notes = NoteService::open(KvNoteRepository::new(store), "a@x.com").unwrap();
    let mut compose = ComposeState {
        draft: "call bob".to_string(),
        ..ComposeState::default()
    };
    let id = notes.add(&mut compose).unwrap().unwrap();

    let content = notes.begin_edit(id, &mut compose).unwrap();

    assert_eq!(content, "call bob");
    assert_eq!(compose.draft, "call bob");
    assert_eq!(compose.editing, Some(id));
}

#[test]
fn begin_edit_with_unknown_id_leaves_state_untouched() {
    let conn = open_store_in_memory().unwrap();
    let store = SqliteStore::new(&conn);
    let notes = NoteService::open(KvNoteRepository::new(store), "a@x.com").unwrap();
    let mut compose = ComposeState::default();

    assert!(notes.begin_edit(12345, &mut compose).is_none());
    assert!(compose.draft.is_empty());
    assert_eq!(compose.editing, None);
}

#[test]
fn commit_edit_replaces_only_the_target_note() {
    let conn = open_store_in_memory().unwrap();
    let store = SqliteStore::new(&conn);
    let mut notes = NoteService::open(KvNoteRepository::new(store), "a@x.com").unwrap();
    let mut compose = ComposeState::default();

    compose.draft = "buy milk".to_string();
    let first = notes.add(&mut compose).unwrap().unwrap();
    compose.draft = "call bob".to_string();
    let second = notes.add(&mut compose).unwrap().unwrap();

    notes.begin_edit(first, &mut compose).unwrap();
    compose.draft = "buy oat milk".to_string();
    let edited = notes.commit_edit(&mut compose).unwrap();

    assert_eq!(edited, Some(first));
    assert_eq!(notes.notes()[0].content, "buy oat milk");
    assert_eq!(notes.notes()[1].id, second);
    assert_eq!(notes.notes()[1].content, "call bob");
    assert!(compose.draft.is_empty());
    assert_eq!(compose.editing, None);
}

#[test]
fn commit_edit_without_marker_is_a_noop() {
    let conn = open_store_in_memory().unwrap();
    let store = SqliteStore::new(&conn);
    let mut notes = NoteService::open(KvNoteRepository::new(store), "a@x.com").unwrap();
    let mut compose = ComposeState {
        draft: "orphan draft".to_string(),
        ..ComposeState::default()
    };

    assert!(notes.commit_edit(&mut compose).unwrap().is_none());
    assert!(notes.notes().is_empty());
    assert_eq!(compose.draft, "orphan draft");
}

#[test]
fn delete_removes_only_the_matching_note() {
    let conn = open_store_in_memory().unwrap();
    let store = SqliteStore::new(&conn);
    let mut notes = NoteService::open(KvNoteRepository::new(store), "a@x.com").unwrap();
    let mut compose = ComposeState::default();

    compose.draft = "buy milk".to_string();
    notes.add(&mut compose).unwrap().unwrap();
    compose.draft = "call bob".to_string();
    let second = notes.add(&mut compose).unwrap().unwrap();

    notes.delete(second).unwrap();

    assert_eq!(notes.notes().len(), 1);
    assert_eq!(notes.notes()[0].content, "buy milk");
}

#[test]
fn delete_with_unknown_id_keeps_the_collection() {
    let conn = open_store_in_memory().unwrap();
    let store = SqliteStore::new(&conn);
    let inspect = KvNoteRepository::new(store);
    let mut notes = NoteService::open(KvNoteRepository::new(store), "a@x.com").unwrap();
    let mut compose = ComposeState {
        draft: "buy milk".to_string(),
        ..ComposeState::default()
    };
    notes.add(&mut compose).unwrap().unwrap();

    notes.delete(99999).unwrap();

    assert_eq!(notes.notes().len(), 1);
    assert_eq!(inspect.load_notes("a@x.com").unwrap(), notes.notes());
}

#[test]
fn collections_are_scoped_per_account_email() {
    let conn = open_store_in_memory().unwrap();
    let store = SqliteStore::new(&conn);
    let mut alice = NoteService::open(KvNoteRepository::new(store), "a@x.com").unwrap();
    let mut bob = NoteService::open(KvNoteRepository::new(store), "b@x.com").unwrap();
    let mut compose = ComposeState::default();

    compose.draft = "alice note".to_string();
    alice.add(&mut compose).unwrap().unwrap();
    compose.draft = "bob note".to_string();
    bob.add(&mut compose).unwrap().unwrap();

    let inspect = KvNoteRepository::new(store);
    let alice_stored = inspect.load_notes("a@x.com").unwrap();
    let bob_stored = inspect.load_notes("b@x.com").unwrap();
    assert_eq!(alice_stored.len(), 1);
    assert_eq!(alice_stored[0].content, "alice note");
    assert_eq!(bob_stored.len(), 1);
    assert_eq!(bob_stored[0].content, "bob note");
}

#[test]
fn open_with_no_stored_collection_loads_empty() {
    let conn = open_store_in_memory().unwrap();
    let store = SqliteStore::new(&conn);
    let notes = NoteService::open(KvNoteRepository::new(store), "fresh@x.com").unwrap();
    assert_eq!(notes.email(), "fresh@x.com");
    assert!(notes.notes().is_empty());
}

#[test]
fn reopen_restores_the_persisted_collection() {
    let conn = open_store_in_memory().unwrap();
    let store = SqliteStore::new(&conn);
    let mut compose = ComposeState {
        draft: "buy milk".to_string(),
        ..ComposeState::default()
    };
    let first_id = {
        let mut notes = NoteService::open(KvNoteRepository::new(store), "a@x.com").unwrap();
        notes.add(&mut compose).unwrap().unwrap()
    };

    let reopened = NoteService::open(KvNoteRepository::new(store), "a@x.com").unwrap();

    assert_eq!(reopened.notes().len(), 1);
    assert_eq!(reopened.notes()[0].id, first_id);
    assert_eq!(reopened.notes()[0].content, "buy milk");
}
