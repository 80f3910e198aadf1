use notevault_core::{open_store, open_store_in_memory, KvStore, SqliteStore};

#[test]
fn set_then_get_roundtrips() {
    let conn = open_store_in_memory().unwrap();
    let store = SqliteStore::new(&conn);

    store.set("greeting", "hello").unwrap();

    assert_eq!(store.get("greeting").unwrap().as_deref(), Some("hello"));
}

#[test]
fn get_of_unwritten_key_returns_none() {
    let conn = open_store_in_memory().unwrap();
    let store = SqliteStore::new(&conn);

    assert!(store.get("missing").unwrap().is_none());
}

#[test]
fn set_replaces_the_previous_value() {
    let conn = open_store_in_memory().unwrap();
    let store = SqliteStore::new(&conn);

    store.set("slot", "first").unwrap();
    store.set("slot", "second").unwrap();

    assert_eq!(store.get("slot").unwrap().as_deref(), Some("second"));
}

#[test]
fn remove_deletes_the_slot() {
    let conn = open_store_in_memory().unwrap();
    let store = SqliteStore::new(&conn);

    store.set("slot", "value").unwrap();
    store.remove("slot").unwrap();

    assert!(store.get("slot").unwrap().is_none());
}

#[test]
fn remove_of_absent_key_is_not_an_error() {
    let conn = open_store_in_memory().unwrap();
    let store = SqliteStore::new(&conn);

    store.remove("never written").unwrap();
}

#[test]
fn slot_values_survive_reopening_a_file_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notevault.db");

    {
        let conn = open_store(&path).unwrap();
        let store = SqliteStore::new(&conn);
        store.set("slot", "persisted").unwrap();
    }

    let conn = open_store(&path).unwrap();
    let store = SqliteStore::new(&conn);
    assert_eq!(store.get("slot").unwrap().as_deref(), Some("persisted"));
}
