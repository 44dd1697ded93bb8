//! Local authentication paths.
//!
//! The client ships with two demo accounts and a browser-local directory of
//! self-registered students. Neither path talks to a server; whatever they
//! return is handed to [`SessionStore::login`](crate::session::SessionStore::login)
//! as-is. The external token exchange lives in the web crate.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::StorageError;
use crate::models::{Role, UserId, UserRecord};
use crate::storage::KeyValueStorage;

/// Storage key holding self-registered accounts.
pub const REGISTERED_USERS_KEY: &str = "registeredUsers";

/// Authentication failures surfaced to the login and signup forms.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// Email/password pair did not match the selected role.
    #[error("Invalid credentials")]
    InvalidCredentials,
    /// Signup with an email that already has an account.
    #[error("Email already registered")]
    EmailTaken,
    /// The account directory could not be written.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Built-in account used for demonstrations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoAccount {
    /// Login email.
    pub email: &'static str,
    /// Login password.
    pub password: &'static str,
    /// Display name given to the session.
    pub name: &'static str,
    /// Role granted on success.
    pub role: Role,
}

/// The demo student and the demo admin.
pub const DEMO_ACCOUNTS: [DemoAccount; 2] = [
    DemoAccount {
        email: "student@example.com",
        password: "student123",
        name: "Student User",
        role: Role::User,
    },
    DemoAccount {
        email: "admin@example.com",
        password: "admin123",
        name: "Admin User",
        role: Role::Admin,
    },
];

/// Demo account for `role`.
#[must_use]
pub fn demo_account(role: Role) -> DemoAccount {
    match role {
        Role::User => DEMO_ACCOUNTS[0],
        Role::Admin => DEMO_ACCOUNTS[1],
    }
}

fn session_id() -> String {
    Uuid::new_v4().simple().to_string().chars().take(9).collect()
}

/// Check `email`/`password` against the demo account for `role`.
///
/// # Errors
/// [`AuthError::InvalidCredentials`] when the pair does not match.
pub fn demo_login(email: &str, password: &str, role: Role) -> Result<UserRecord, AuthError> {
    let account = demo_account(role);
    if email.trim() != account.email || password != account.password {
        return Err(AuthError::InvalidCredentials);
    }
    info!(role = %role, "demo login accepted");
    Ok(
        UserRecord::new(UserId::Text(session_id()), account.name, account.email, role)
            .with_extra("loginTime", Utc::now().to_rfc3339()),
    )
}

/// A self-registered student account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RegisteredAccount {
    /// Millisecond timestamp of registration.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Login email.
    pub email: String,
    /// Hex SHA-256 of the password.
    pub password_hash: String,
    /// Always [`Role::User`].
    pub role: Role,
    /// RFC 3339 registration time.
    pub join_date: String,
}

impl RegisteredAccount {
    fn to_user(&self) -> UserRecord {
        UserRecord::new(
            UserId::Number(self.id),
            self.name.clone(),
            self.email.clone(),
            self.role,
        )
    }
}

fn hash_password(password: &str) -> String {
    Sha256::digest(password.as_bytes())
        .iter()
        .map(|byte| format!("{byte:02x}"))
        .collect()
}

/// Browser-local directory of self-registered accounts.
#[derive(Debug, Clone, PartialEq)]
pub struct AccountDirectory<S> {
    storage: S,
}

impl<S: KeyValueStorage> AccountDirectory<S> {
    /// Directory over `storage`.
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// All registered accounts. Unreadable or malformed data reads as empty.
    pub fn accounts(&self) -> Vec<RegisteredAccount> {
        match self.storage.get(REGISTERED_USERS_KEY) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|err| {
                warn!(error = %err, "ignoring malformed account directory");
                Vec::new()
            }),
            Ok(None) => Vec::new(),
            Err(err) => {
                warn!(error = %err, "account directory unreadable");
                Vec::new()
            }
        }
    }

    /// Register a student and return the record to log in with.
    ///
    /// # Errors
    /// [`AuthError::EmailTaken`] for a duplicate email,
    /// [`AuthError::Storage`] when the directory cannot be saved.
    pub fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<UserRecord, AuthError> {
        let email = email.trim();
        let mut accounts = self.accounts();
        if accounts
            .iter()
            .any(|account| account.email.eq_ignore_ascii_case(email))
        {
            return Err(AuthError::EmailTaken);
        }

        let now = Utc::now();
        let account = RegisteredAccount {
            id: now.timestamp_millis(),
            name: name.trim().to_string(),
            email: email.to_string(),
            password_hash: hash_password(password),
            role: Role::User,
            join_date: now.to_rfc3339(),
        };
        let user = account.to_user();
        accounts.push(account);

        let encoded = serde_json::to_string(&accounts)
            .map_err(|err| StorageError::serialization(REGISTERED_USERS_KEY, &err))?;
        self.storage.set(REGISTERED_USERS_KEY, &encoded)?;
        info!(accounts = accounts.len(), "student registered");
        Ok(user)
    }

    /// Look up a registered account by credentials.
    ///
    /// # Errors
    /// [`AuthError::InvalidCredentials`] when no account matches.
    pub fn verify(&self, email: &str, password: &str) -> Result<UserRecord, AuthError> {
        let hash = hash_password(password);
        self.accounts()
            .iter()
            .find(|account| {
                account.email.eq_ignore_ascii_case(email.trim()) && account.password_hash == hash
            })
            .map(RegisteredAccount::to_user)
            .ok_or(AuthError::InvalidCredentials)
    }
}

/// Resolve a login form submission: the demo account for `role` first,
/// then, for students, the local directory.
///
/// # Errors
/// [`AuthError::InvalidCredentials`] when neither path accepts the pair.
pub fn authenticate<S: KeyValueStorage>(
    directory: &AccountDirectory<S>,
    email: &str,
    password: &str,
    role: Role,
) -> Result<UserRecord, AuthError> {
    match demo_login(email, password, role) {
        Err(AuthError::InvalidCredentials) if role == Role::User => {
            directory.verify(email, password)
        }
        other => other,
    }
}
