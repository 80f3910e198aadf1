//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `notevault_core` linkage.
//! - Walk one register/login/notes round against an in-memory store to keep
//!   output deterministic for quick local sanity checks.

use notevault_core::{
    open_store_in_memory, ComposeState, KvAccountRepository, KvNoteRepository, NoteService,
    SessionService, SqliteStore,
};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    println!("notevault_core ping={}", notevault_core::ping());
    println!("notevault_core version={}", notevault_core::core_version());

    let conn = open_store_in_memory()?;
    let store = SqliteStore::new(&conn);

    let mut sessions = SessionService::new(KvAccountRepository::new(store));
    sessions.register("Alice", "a@x.com", "pw1")?;
    let welcome = sessions.login("a@x.com", "pw1")?;
    println!("{}", welcome.greeting());

    let email = sessions
        .current_account()
        .map(|account| account.email.clone())
        .unwrap_or_default();
    let mut notes = NoteService::open(KvNoteRepository::new(store), email)?;
    let mut compose = ComposeState::default();
    for content in ["buy milk", "call bob"] {
        compose.draft = content.to_string();
        notes.add(&mut compose)?;
    }
    compose.filter = "bob".to_string();
    for note in notes.filter(&compose.filter) {
        println!("match id={} content={}", note.id, note.content);
    }

    sessions.logout()?;
    println!("logged_in={}", sessions.is_logged_in());
    Ok(())
}
