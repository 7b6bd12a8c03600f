//! Collection names, backing file names and on-disk column order.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Users,
    Livestock,
    HealthRecords,
    FeedingLog,
    ActivityLog,
}

const USERS_HEADERS: &[&str] = &["username", "password", "role"];
const LIVESTOCK_HEADERS: &[&str] = &[
    "id",
    "species",
    "birth_date",
    "current_weight",
    "health_status",
    "pen_id",
];
const HEALTH_HEADERS: &[&str] = &[
    "id",
    "livestock_id",
    "date",
    "symptoms",
    "action_taken",
    "recorded_by",
];
const FEEDING_HEADERS: &[&str] = &[
    "id",
    "pen_id",
    "date",
    "feed_type",
    "amount_kg",
    "recorded_by",
];
const ACTIVITY_HEADERS: &[&str] = &["timestamp", "username", "operation", "target", "message"];

impl Collection {
    /// Every collection, in setup order.
    pub const ALL: [Collection; 5] = [
        Collection::Users,
        Collection::Livestock,
        Collection::HealthRecords,
        Collection::FeedingLog,
        Collection::ActivityLog,
    ];

    pub fn file_name(&self) -> &'static str {
        match self {
            Collection::Users => "users.csv",
            Collection::Livestock => "livestock.csv",
            Collection::HealthRecords => "health_records.csv",
            Collection::FeedingLog => "feeding_log.csv",
            Collection::ActivityLog => "activity_log.csv",
        }
    }

    /// Header row; must match the serde field order of the record type.
    pub fn headers(&self) -> &'static [&'static str] {
        match self {
            Collection::Users => USERS_HEADERS,
            Collection::Livestock => LIVESTOCK_HEADERS,
            Collection::HealthRecords => HEALTH_HEADERS,
            Collection::FeedingLog => FEEDING_HEADERS,
            Collection::ActivityLog => ACTIVITY_HEADERS,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Collection::Users => "users",
            Collection::Livestock => "livestock",
            Collection::HealthRecords => "health records",
            Collection::FeedingLog => "feeding log",
            Collection::ActivityLog => "activity log",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
