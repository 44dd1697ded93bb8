//! Client-held session and its persisted form.
//!
//! A [`Session`] is either empty or carries both a user record and a role;
//! the three observable fields (`user`, `isAuthenticated`, `role`) are
//! derived from that single option so they can never disagree.
//!
//! The persisted value lives under [`SESSION_STORAGE_KEY`] as
//!
//! ```json
//! {"state": {"user": {...} | null, "isAuthenticated": bool, "role": "admin" | "user" | null},
//!  "version": 0}
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::errors::StorageError;
use crate::models::{Role, UserRecord};
use crate::storage::KeyValueStorage;

/// Storage key holding the serialized session.
pub const SESSION_STORAGE_KEY: &str = "auth-storage";

/// Envelope version written by this client.
pub const SESSION_FORMAT_VERSION: u32 = 0;

#[derive(Debug, Clone, PartialEq)]
struct Identity {
    user: UserRecord,
    role: Role,
}

/// Snapshot of who is logged in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    identity: Option<Identity>,
}

impl Session {
    /// The unauthenticated session.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// A session for `user` acting as `role`.
    #[must_use]
    pub fn authenticated(user: UserRecord, role: Role) -> Self {
        Self {
            identity: Some(Identity { user, role }),
        }
    }

    /// The logged-in user record.
    #[must_use]
    pub fn user(&self) -> Option<&UserRecord> {
        self.identity.as_ref().map(|identity| &identity.user)
    }

    /// Whether a user is logged in.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }

    /// Role of the logged-in user.
    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.identity.as_ref().map(|identity| identity.role)
    }

    /// Serialize into the persisted envelope.
    ///
    /// # Errors
    /// Fails only if the user record holds values `serde_json` cannot encode.
    pub fn encode(&self) -> Result<String, serde_json::Error> {
        let envelope = PersistedEnvelope {
            state: PersistedState {
                user: self.user().cloned(),
                is_authenticated: self.is_authenticated(),
                role: self.role(),
            },
            version: SESSION_FORMAT_VERSION,
        };
        serde_json::to_string(&envelope)
    }

    /// Parse a persisted envelope.
    ///
    /// # Errors
    /// Returns a [`SessionDecodeError`] when the value is not valid JSON,
    /// was written by an unknown format version, or breaks the
    /// authenticated-iff-user-and-role invariant.
    pub fn decode(raw: &str) -> Result<Self, SessionDecodeError> {
        let envelope: PersistedEnvelope = serde_json::from_str(raw)
            .map_err(|err| SessionDecodeError::Malformed(err.to_string()))?;
        if envelope.version != SESSION_FORMAT_VERSION {
            return Err(SessionDecodeError::UnsupportedVersion(envelope.version));
        }

        let PersistedState {
            user,
            is_authenticated,
            role,
        } = envelope.state;
        match (is_authenticated, user, role) {
            (true, Some(user), Some(role)) => Ok(Self::authenticated(user, role)),
            (false, None, None) => Ok(Self::empty()),
            _ => Err(SessionDecodeError::Inconsistent),
        }
    }
}

/// Reasons a persisted session is discarded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionDecodeError {
    /// Not a session envelope.
    #[error("malformed session envelope: {0}")]
    Malformed(String),
    /// Written by a different format version.
    #[error("unsupported session format version {0}")]
    UnsupportedVersion(u32),
    /// `isAuthenticated` disagrees with the presence of `user` and `role`.
    #[error("session fields are inconsistent")]
    Inconsistent,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PersistedState {
    #[serde(default)]
    user: Option<UserRecord>,
    #[serde(default)]
    is_authenticated: bool,
    #[serde(default)]
    role: Option<Role>,
}

#[derive(Debug, Serialize, Deserialize)]
struct PersistedEnvelope {
    state: PersistedState,
    #[serde(default)]
    version: u32,
}

/// Owned session container that writes through to durable storage.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionStore<S> {
    storage: S,
    session: Session,
}

impl<S: KeyValueStorage> SessionStore<S> {
    /// Build the store from whatever `storage` holds.
    ///
    /// Runs synchronously so the first routing decision already sees the
    /// restored session. Absent, unreadable or malformed values yield the
    /// empty session.
    pub fn rehydrate(storage: S) -> Self {
        let session = match storage.get(SESSION_STORAGE_KEY) {
            Ok(Some(raw)) => Session::decode(&raw).unwrap_or_else(|err| {
                warn!(error = %err, "discarding persisted session");
                Session::empty()
            }),
            Ok(None) => Session::empty(),
            Err(err) => {
                warn!(error = %err, "session storage unreadable, starting signed out");
                Session::empty()
            }
        };
        debug!(
            authenticated = session.is_authenticated(),
            role = session.role().map(Role::as_str),
            "session rehydrated"
        );
        Self { storage, session }
    }

    /// Current session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Owned copy of the current session.
    pub fn snapshot(&self) -> Session {
        self.session.clone()
    }

    /// The logged-in user record.
    pub fn user(&self) -> Option<&UserRecord> {
        self.session.user()
    }

    /// Whether a user is logged in.
    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    /// Role of the logged-in user.
    pub fn role(&self) -> Option<Role> {
        self.session.role()
    }

    /// Whether the session belongs to an admin.
    pub fn is_admin(&self) -> bool {
        self.role() == Some(Role::Admin)
    }

    /// Whether the session belongs to a regular user.
    pub fn is_user(&self) -> bool {
        self.role() == Some(Role::User)
    }

    /// Backing storage.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Replace the session with `user` acting as `role` and persist it.
    ///
    /// The caller vouches for the record; nothing is verified here.
    pub fn login(&mut self, user: UserRecord, role: Role) {
        self.session = Session::authenticated(user, role);
        self.persist_or_warn();
    }

    /// Clear the session and persist the empty state.
    pub fn logout(&mut self) {
        self.session = Session::empty();
        self.persist_or_warn();
    }

    /// Write the current session to storage.
    ///
    /// # Errors
    /// Returns a [`StorageError`] when encoding or the write fails.
    pub fn persist(&self) -> Result<(), StorageError> {
        let encoded = self
            .session
            .encode()
            .map_err(|err| StorageError::serialization(SESSION_STORAGE_KEY, &err))?;
        self.storage.set(SESSION_STORAGE_KEY, &encoded)
    }

    // The in-memory state stays authoritative when the write fails.
    fn persist_or_warn(&self) {
        if let Err(err) = self.persist() {
            warn!(error = %err, "failed to persist session");
        }
    }
}
