//! Accounts and authentication.

use crate::core::algorithms::search::find_first;
use crate::errors::{AppError, AppResult};
use crate::models::user::{Role, UserAccount};
use crate::store::RecordStore;

/// Turns a password into what is stored, and checks a supplied password
/// against it. Keeps the hashing decision out of the account schema.
pub trait CredentialVerifier {
    fn seal(&self, password: &str) -> String;
    fn verify(&self, stored: &str, supplied: &str) -> bool;
}

/// Stores passwords as typed. Compatible with existing users.csv files.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlaintextVerifier;

impl CredentialVerifier for PlaintextVerifier {
    fn seal(&self, password: &str) -> String {
        password.to_string()
    }

    fn verify(&self, stored: &str, supplied: &str) -> bool {
        stored == supplied
    }
}

/// An authenticated user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub username: String,
    pub role: Role,
}

impl Session {
    pub fn require(&self, role: Role) -> AppResult<()> {
        if self.role.permits(role) {
            Ok(())
        } else {
            Err(AppError::PermissionDenied {
                user: self.username.clone(),
                required: role.to_string(),
            })
        }
    }
}

pub struct AuthLogic;

impl AuthLogic {
    /// First account whose username and password both match.
    pub fn authenticate<S: RecordStore, V: CredentialVerifier>(
        store: &S,
        verifier: &V,
        username: &str,
        password: &str,
    ) -> AppResult<Option<Session>> {
        let users: Vec<UserAccount> = store.load_all()?;

        Ok(
            find_first(&users, |u| {
                u.username == username && verifier.verify(&u.password, password)
            })
            .map(|u| Session {
                username: u.username.clone(),
                role: u.role,
            }),
        )
    }

    /// Append a new worker account; refuses a username that already exists.
    pub fn register_worker<S: RecordStore, V: CredentialVerifier>(
        store: &S,
        verifier: &V,
        username: &str,
        password: &str,
    ) -> AppResult<UserAccount> {
        let users: Vec<UserAccount> = store.load_all()?;

        if find_first(&users, |u| u.username == username).is_some() {
            return Err(AppError::DuplicateUsername(username.to_string()));
        }

        let account = UserAccount {
            username: username.to_string(),
            password: verifier.seal(password),
            role: Role::Worker,
        };
        store.append_one(&account)?;
        Ok(account)
    }

    pub fn list_users<S: RecordStore>(store: &S) -> AppResult<Vec<UserAccount>> {
        store.load_all()
    }
}
