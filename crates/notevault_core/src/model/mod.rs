//! Domain model for accounts and notes.
//!
//! # Responsibility
//! - Define the canonical records shared by session and notes logic.
//! - Keep field-level validation next to the data it guards.
//!
//! # Invariants
//! - Accounts are immutable after registration and are never deleted.
//! - Every note is identified by a creation-timestamp `NoteId`.

pub mod account;
pub mod note;
