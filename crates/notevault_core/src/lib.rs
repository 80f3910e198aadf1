//! Core domain logic for NoteVault.
//! This crate is the single source of truth for auth and notes invariants.

pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::account::{Account, AccountValidationError};
pub use model::note::{Note, NoteId};
pub use repo::account_repo::{
    AccountRepository, KvAccountRepository, RepoError, RepoResult, DIRECTORY_KEY, SESSION_KEY,
};
pub use repo::note_repo::{notes_key, KvNoteRepository, NoteRepository};
pub use service::note_service::{ComposeState, NoteService};
pub use service::session_service::{AuthError, AuthResult, SessionService, Welcome};
pub use store::{open_store, open_store_in_memory, KvStore, SqliteStore, StoreError};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
