//! Session and account use-case service.
//!
//! # Responsibility
//! - Own the registered-account directory and the current session.
//! - Provide register/login/logout/restore entry points for the
//!   presentation layer.
//!
//! # Invariants
//! - At most one account is current at a time.
//! - Registration never establishes a session; login does.
//! - A failed login leaves both the session and the directory untouched.
//! - Log events are metadata-only: no names, emails or passwords.

use crate::model::account::{Account, AccountValidationError};
use crate::repo::account_repo::{AccountRepository, RepoError};
use log::{debug, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type AuthResult<T> = Result<T, AuthError>;

/// Authentication-layer error taxonomy.
///
/// `Validation` and `InvalidCredentials` are user-recoverable and surface as
/// message strings; `Repo` wraps persistence failures and is fatal to the
/// caller's flow.
#[derive(Debug)]
pub enum AuthError {
    /// A required registration field is empty.
    Validation(AccountValidationError),
    /// No directory entry matches the submitted email/password pair.
    InvalidCredentials,
    Repo(RepoError),
}

impl Display for AuthError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::InvalidCredentials => write!(f, "invalid email or password"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for AuthError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::InvalidCredentials => None,
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<AccountValidationError> for AuthError {
    fn from(value: AccountValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<RepoError> for AuthError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Success payload returned by [`SessionService::login`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Welcome {
    /// Display name of the account that just logged in.
    pub name: String,
}

impl Welcome {
    /// Renders the user-visible greeting line.
    pub fn greeting(&self) -> String {
        format!("Welcome back, {}!", self.name)
    }
}

/// Use-case service owning the account directory and the current session.
pub struct SessionService<R: AccountRepository> {
    repo: R,
    current: Option<Account>,
}

impl<R: AccountRepository> SessionService<R> {
    /// Creates a session service with no active session.
    ///
    /// Call [`SessionService::restore`] to pick up a persisted session from a
    /// previous process run.
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            current: None,
        }
    }

    /// Restores a previously persisted session, if one exists.
    ///
    /// Absence of a persisted session is not an error.
    pub fn restore(&mut self) -> AuthResult<Option<&Account>> {
        self.current = self.repo.load_session()?;
        debug!(
            "event=session_restore module=session status=ok present={}",
            self.current.is_some()
        );
        Ok(self.current.as_ref())
    }

    /// Registers a new account in the directory.
    ///
    /// # Contract
    /// - All three fields must be non-empty.
    /// - Appends to the directory without touching existing entries; a
    ///   duplicate email is accepted (login resolves to the first match).
    /// - Does NOT establish a session; the caller logs in separately.
    pub fn register(&self, name: &str, email: &str, password: &str) -> AuthResult<()> {
        let account = Account::new(name, email, password);
        if let Err(err) = account.validate() {
            warn!(
                "event=register module=session status=error error_code=validation field={}",
                match err {
                    AccountValidationError::MissingField(field) => field,
                }
            );
            return Err(err.into());
        }

        self.repo.append_account(&account)?;
        info!("event=register module=session status=ok");
        Ok(())
    }

    /// Logs in with exact-match credentials.
    ///
    /// Scans the directory in insertion order and establishes the first
    /// account whose email and password both match. The established session
    /// is persisted so a later process can restore it.
    ///
    /// # Errors
    /// - [`AuthError::InvalidCredentials`] when no entry matches; the session
    ///   state is left unchanged.
    pub fn login(&mut self, email: &str, password: &str) -> AuthResult<Welcome> {
        let directory = self.repo.load_directory()?;
        let matched = directory
            .iter()
            .find(|account| account.matches_credentials(email, password));

        let Some(account) = matched else {
            warn!("event=login module=session status=error error_code=invalid_credentials");
            return Err(AuthError::InvalidCredentials);
        };

        self.repo.save_session(account)?;
        self.current = Some(account.clone());
        info!("event=login module=session status=ok");
        Ok(Welcome {
            name: account.name.clone(),
        })
    }

    /// Clears the current session and removes its persisted record.
    ///
    /// Any notes state held for the prior user must be discarded by the
    /// caller; a `NoteService` has no meaning without an active session.
    pub fn logout(&mut self) -> AuthResult<()> {
        self.repo.clear_session()?;
        self.current = None;
        info!("event=logout module=session status=ok");
        Ok(())
    }

    /// Returns the logged-in account, if any.
    pub fn current_account(&self) -> Option<&Account> {
        self.current.as_ref()
    }

    /// Returns whether a session is active.
    ///
    /// The presentation layer switches between the auth form and the notes
    /// dashboard on this.
    pub fn is_logged_in(&self) -> bool {
        self.current.is_some()
    }
}
