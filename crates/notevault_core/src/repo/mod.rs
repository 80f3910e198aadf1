//! Repository layer abstractions and slot-store implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts.
//! - Isolate slot keys and JSON encoding from service orchestration.
//!
//! # Invariants
//! - Repository writes always rewrite whole slots (directory, session,
//!   per-account collection) rather than deltas.
//! - Repository reads treat absent slots as empty state, not errors.

pub mod account_repo;
pub mod note_repo;
