use crate::store::{Collection, StoredRecord};
use serde::{Deserialize, Serialize};

/// ⇔ activity_log.csv: one line per mutating command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub timestamp: String, // RFC 3339, local time
    pub username: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}

impl StoredRecord for ActivityEntry {
    const COLLECTION: Collection = Collection::ActivityLog;

    fn key(&self) -> &str {
        &self.timestamp
    }
}
