use crate::core::auth::CredentialVerifier;
use crate::errors::AppResult;
use crate::models::user::{Role, UserAccount};
use crate::store::{Collection, RecordStore};

/// Seeded on first run. Operators are expected to replace it.
pub const DEFAULT_ADMIN_USERNAME: &str = "admin";
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin";

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SetupReport {
    pub created: Vec<Collection>,
    pub seeded_admin: bool,
}

pub struct SetupLogic;

impl SetupLogic {
    /// Create every missing collection with its header, then seed the
    /// default administrator if there are no users at all.
    pub fn initialize<S: RecordStore, V: CredentialVerifier>(
        store: &S,
        verifier: &V,
    ) -> AppResult<SetupReport> {
        let mut report = SetupReport::default();

        for collection in Collection::ALL {
            if store.initialize(collection)? {
                report.created.push(collection);
            }
        }

        let users: Vec<UserAccount> = store.load_all()?;
        if users.is_empty() {
            store.append_one(&UserAccount {
                username: DEFAULT_ADMIN_USERNAME.to_string(),
                password: verifier.seal(DEFAULT_ADMIN_PASSWORD),
                role: Role::Admin,
            })?;
            report.seeded_admin = true;
        }

        Ok(report)
    }
}
