//! Account domain model.
//!
//! # Responsibility
//! - Define the registered-user record and its field validation.
//!
//! # Invariants
//! - `email` is the lookup key for login; uniqueness is NOT enforced, and
//!   directory scans return the first match in insertion order.
//! - Accounts are append-only: no operation edits or removes one after
//!   registration.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Registered-user record.
///
/// Credentials are stored as plain text; this core deliberately carries no
/// hashing or credential protection (single-device, browser-local trust
/// model).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Display name shown in the welcome payload.
    pub name: String,
    /// Login identifier, matched exactly (case-sensitive, no normalization).
    pub email: String,
    /// Login secret, matched exactly.
    pub password: String,
}

/// Validation failure for registration input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountValidationError {
    /// One of the three required fields is empty.
    MissingField(&'static str),
}

impl Display for AccountValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField(field) => write!(f, "missing required field `{field}`"),
        }
    }
}

impl Error for AccountValidationError {}

impl Account {
    /// Creates an account record from raw registration input.
    ///
    /// Does not validate; call [`Account::validate`] before persisting.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
        }
    }

    /// Checks that all three registration fields are present.
    ///
    /// Emptiness is literal: whitespace-only input counts as present, matching
    /// the registration form contract.
    pub fn validate(&self) -> Result<(), AccountValidationError> {
        if self.name.is_empty() {
            return Err(AccountValidationError::MissingField("name"));
        }
        if self.email.is_empty() {
            return Err(AccountValidationError::MissingField("email"));
        }
        if self.password.is_empty() {
            return Err(AccountValidationError::MissingField("password"));
        }
        Ok(())
    }

    /// Returns whether the given credentials match this account exactly.
    pub fn matches_credentials(&self, email: &str, password: &str) -> bool {
        self.email == email && self.password == password
    }
}
