use crate::store::{Collection, StoredRecord};
use crate::utils::table::Tabular;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    /// Also the role of a row whose role cell is missing.
    #[default]
    #[serde(alias = "pekerja")]
    Worker,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Worker => "worker",
        }
    }

    /// Admins may do everything a worker may do.
    pub fn permits(&self, required: Role) -> bool {
        matches!((self, required), (Role::Admin, _) | (Role::Worker, Role::Worker))
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// ⇔ users.csv
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAccount {
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub role: Role,
}

impl StoredRecord for UserAccount {
    const COLLECTION: Collection = Collection::Users;

    fn key(&self) -> &str {
        &self.username
    }
}

// passwords are never shown
impl Tabular for UserAccount {
    const HEADERS: &'static [&'static str] = &["username", "role"];

    fn cells(&self) -> Vec<String> {
        vec![self.username.clone(), self.role.to_string()]
    }
}
