//! # Session Service
//!
//! Mock authentication with persisted sessions: a fixed credential pair, a
//! user record stored under one well-known key, and restore-on-launch that
//! survives corrupt payloads.
//!
//! ## Philosophy
//!
//! - **Store-agnostic**: persistence goes through `KeyValueStore`, so tests
//!   run on `MemoryStore` and hosts pick their own backing
//! - **Field-addressed errors**: every validation error names the form
//!   field it belongs to
//! - **Self-healing restore**: a corrupt stored session is logged, removed
//!   and treated as signed out, never surfaced as a failure
//!
//! ## Non-Goals
//!
//! - Real credential verification, token expiry, schema versioning

pub mod store;

pub use store::{FileStore, KeyValueStore, MemoryStore, StoreError};

use core_types::ComponentId;
use event_log::{EventLog, LogEntry, LogLevel};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Storage key for the persisted session
pub const SESSION_KEY: &str = "intro_auth_user";

/// The one accepted credential pair
pub const VALID_EMAIL: &str = "designer@callourstudio.com";
pub const VALID_PASSWORD: &str = "testing1234";

/// Credentials the sign-in form offers to autofill
///
/// Deliberately not the valid pair; submitting the autofill as-is exercises
/// the invalid-credentials path.
pub const DEMO_EMAIL: &str = "designer@gmail.com";
pub const DEMO_PASSWORD: &str = "test1234";

/// The signed-in user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub email: String,
    pub name: String,
}

/// Form field a validation error belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialField {
    Email,
    Password,
}

/// Sign-in errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Email is required")]
    EmptyEmail,
    #[error("Password is required")]
    EmptyPassword,
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl AuthError {
    /// The form field this error should be shown under
    pub fn field(&self) -> Option<CredentialField> {
        match self {
            AuthError::EmptyEmail => Some(CredentialField::Email),
            AuthError::EmptyPassword | AuthError::InvalidCredentials => {
                Some(CredentialField::Password)
            }
            AuthError::Store(_) => None,
        }
    }
}

/// Session lifecycle over an injected store
pub struct SessionService<S: KeyValueStore> {
    store: S,
    user: Option<User>,
    log: EventLog,
}

impl<S: KeyValueStore> SessionService<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            user: None,
            log: EventLog::new(),
        }
    }

    pub fn current_user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }

    pub fn log(&self) -> &EventLog {
        &self.log
    }

    /// Validates credentials, persists the session and returns the user
    ///
    /// Empty fields (after trimming) are reported before the credential
    /// check; both-empty reports the email first.
    pub fn sign_in(&mut self, email: &str, password: &str) -> Result<User, AuthError> {
        if email.trim().is_empty() {
            return Err(AuthError::EmptyEmail);
        }
        if password.trim().is_empty() {
            return Err(AuthError::EmptyPassword);
        }
        if email != VALID_EMAIL || password != VALID_PASSWORD {
            return Err(AuthError::InvalidCredentials);
        }

        let user = User {
            email: email.to_string(),
            name: "Designer User".to_string(),
        };
        let payload =
            serde_json::to_string(&user).map_err(|e| StoreError::WriteFailed(e.to_string()))?;
        self.store.set(SESSION_KEY, &payload)?;
        self.log.record(
            LogEntry::new(LogLevel::Info, "user signed in")
                .with_source(ComponentId::new("session"))
                .with_field("email", user.email.as_str()),
        );
        self.user = Some(user.clone());
        Ok(user)
    }

    /// Loads a persisted session, if one parses
    ///
    /// A corrupt payload is logged and removed; the caller sees the same
    /// signed-out state as a missing one.
    pub fn restore(&mut self) -> Result<Option<User>, StoreError> {
        let Some(payload) = self.store.get(SESSION_KEY)? else {
            return Ok(None);
        };
        match serde_json::from_str::<User>(&payload) {
            Ok(user) => {
                self.user = Some(user.clone());
                Ok(Some(user))
            }
            Err(e) => {
                self.log.record(
                    LogEntry::new(LogLevel::Warn, "discarding corrupt stored session")
                        .with_source(ComponentId::new("session"))
                        .with_field("error", e.to_string()),
                );
                self.store.remove(SESSION_KEY)?;
                Ok(None)
            }
        }
    }

    /// Clears the in-memory session and the stored one
    pub fn sign_out(&mut self) -> Result<(), StoreError> {
        self.user = None;
        self.store.remove(SESSION_KEY)?;
        self.log.record(
            LogEntry::new(LogLevel::Info, "user signed out")
                .with_source(ComponentId::new("session")),
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> SessionService<MemoryStore> {
        SessionService::new(MemoryStore::new())
    }

    #[test]
    fn test_sign_in_success() {
        let mut session = service();
        let user = session.sign_in(VALID_EMAIL, VALID_PASSWORD).unwrap();

        assert_eq!(user.email, VALID_EMAIL);
        assert_eq!(user.name, "Designer User");
        assert!(session.is_signed_in());
    }

    #[test]
    fn test_empty_email_reported_first() {
        let mut session = service();
        let err = session.sign_in("", "").unwrap_err();
        assert_eq!(err, AuthError::EmptyEmail);
        assert_eq!(err.field(), Some(CredentialField::Email));
        assert_eq!(err.to_string(), "Email is required");
    }

    #[test]
    fn test_empty_password() {
        let mut session = service();
        let err = session.sign_in(VALID_EMAIL, "   ").unwrap_err();
        assert_eq!(err, AuthError::EmptyPassword);
        assert_eq!(err.field(), Some(CredentialField::Password));
        assert_eq!(err.to_string(), "Password is required");
    }

    #[test]
    fn test_invalid_credentials() {
        let mut session = service();
        let err = session.sign_in(VALID_EMAIL, "wrong").unwrap_err();
        assert_eq!(err, AuthError::InvalidCredentials);
        assert_eq!(err.field(), Some(CredentialField::Password));
        assert_eq!(err.to_string(), "Invalid email or password");
        assert!(!session.is_signed_in());
    }

    #[test]
    fn test_demo_credentials_do_not_sign_in() {
        let mut session = service();
        let err = session.sign_in(DEMO_EMAIL, DEMO_PASSWORD).unwrap_err();
        assert_eq!(err, AuthError::InvalidCredentials);
    }

    #[test]
    fn test_session_persists_to_store() {
        let mut store = MemoryStore::new();
        {
            let mut session = SessionService::new(store.clone());
            session.sign_in(VALID_EMAIL, VALID_PASSWORD).unwrap();
            store = session.store;
        }

        let mut session = SessionService::new(store);
        let restored = session.restore().unwrap().unwrap();
        assert_eq!(restored.email, VALID_EMAIL);
        assert!(session.is_signed_in());
    }

    #[test]
    fn test_restore_without_session() {
        let mut session = service();
        assert_eq!(session.restore().unwrap(), None);
        assert!(!session.is_signed_in());
    }

    #[test]
    fn test_restore_corrupt_payload_heals() {
        let mut store = MemoryStore::new();
        store.set(SESSION_KEY, "not json {").unwrap();

        let mut session = SessionService::new(store);
        assert_eq!(session.restore().unwrap(), None);
        assert!(!session.is_signed_in());

        // The corrupt entry was removed and the discard logged
        assert_eq!(session.store.get(SESSION_KEY).unwrap(), None);
        assert!(session
            .log()
            .entries()
            .iter()
            .any(|e| e.level == LogLevel::Warn));
    }

    #[test]
    fn test_sign_out_clears_everything() {
        let mut session = service();
        session.sign_in(VALID_EMAIL, VALID_PASSWORD).unwrap();
        session.sign_out().unwrap();

        assert!(!session.is_signed_in());
        assert_eq!(session.store.get(SESSION_KEY).unwrap(), None);
    }
}
