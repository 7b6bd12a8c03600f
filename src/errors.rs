//! Unified application error type.
//! All modules (store, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use crate::store::Collection;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Storage
    // ---------------------------
    #[error("Cannot access {collection} storage at {}: {source}", .path.display())]
    Storage {
        collection: Collection,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Cannot encode or decode {collection} records: {source}")]
    Codec {
        collection: Collection,
        #[source]
        source: csv::Error,
    },

    #[error("{count} {collection} row(s) could not be read; fix the file before changing it")]
    UnreadableRows { collection: Collection, count: usize },

    #[error("Storage for {0} has not been initialized (run `herdbook init`)")]
    NotInitialized(Collection),

    // ---------------------------
    // Lookup errors
    // ---------------------------
    #[error("{kind} '{key}' not found")]
    NotFound { kind: &'static str, key: String },

    #[error("Username '{0}' already exists")]
    DuplicateUsername(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Invalid quantity: {0}")]
    InvalidQuantity(String),

    // ---------------------------
    // Access control
    // ---------------------------
    #[error("Wrong username or password")]
    AuthenticationFailed,

    #[error("User '{user}' is not allowed to run this command (requires {required})")]
    PermissionDenied { user: String, required: String },

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Backup / export errors
    // ---------------------------
    #[error("Backup error: {0}")]
    Backup(String),

    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

impl AppError {
    pub fn livestock_not_found(id: &str) -> Self {
        AppError::NotFound {
            kind: "Livestock",
            key: id.to_string(),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
