pub mod backup;
pub mod config;
pub mod export;
pub mod feed;
pub mod health;
pub mod init;
pub mod livestock;
pub mod log;
pub mod report;
pub mod user;
pub mod weigh;

use crate::config::Config;
use crate::core::auth::{PlaintextVerifier, Session};
use crate::core::log::ActivityLogic;
use crate::core::setup::{
    DEFAULT_ADMIN_PASSWORD, DEFAULT_ADMIN_USERNAME, SetupLogic, SetupReport,
};
use crate::errors::AppResult;
use crate::store::{CsvStore, RecordStore};
use crate::ui::messages::{info, warning};

/// Print what setup created.
pub(crate) fn announce_setup(store: &CsvStore, report: &SetupReport) {
    for collection in &report.created {
        info(format!("Created {}", store.path_of(*collection).display()));
    }
    if report.seeded_admin {
        warning(format!(
            "Default account '{DEFAULT_ADMIN_USERNAME}' (password '{DEFAULT_ADMIN_PASSWORD}') has been added. Register your own accounts."
        ));
    }
}

/// Store for the configured data directory, with missing files created.
pub(crate) fn open_store(cfg: &Config) -> AppResult<CsvStore> {
    let store = CsvStore::new(cfg.data_path());
    let report = SetupLogic::initialize(&store, &PlaintextVerifier)?;
    announce_setup(&store, &report);
    Ok(store)
}

/// Append an activity log line for `session` (non-blocking).
pub(crate) fn audit<S: RecordStore>(
    store: &S,
    session: &Session,
    operation: &str,
    target: &str,
    message: &str,
) {
    ActivityLogic::record(store, &session.username, operation, target, message);
}

/// Ids and pen codes are case-insensitive on input.
pub(crate) fn normalize_id(id: &str) -> String {
    id.trim().to_uppercase()
}
