use crate::store::{Collection, StoredRecord};
use crate::utils::table::Tabular;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const HEALTH_ID_PREFIX: &str = "H";

/// Stored in place of empty symptoms.
pub const ROUTINE_CHECKUP: &str = "Routine checkup";

/// ⇔ health_records.csv (append-only)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthRecord {
    #[serde(alias = "record_id")]
    pub id: String,
    #[serde(alias = "ternak_id", default)]
    pub livestock_id: String,
    #[serde(alias = "tanggal", default)]
    pub date: String,
    #[serde(alias = "gejala", default)]
    pub symptoms: String,
    #[serde(alias = "tindakan", default)]
    pub action_taken: String,
    #[serde(alias = "dicatat_oleh", default)]
    pub recorded_by: String,
}

impl StoredRecord for HealthRecord {
    const COLLECTION: Collection = Collection::HealthRecords;

    fn key(&self) -> &str {
        &self.id
    }
}

impl Tabular for HealthRecord {
    const HEADERS: &'static [&'static str] = &[
        "id",
        "livestock_id",
        "date",
        "symptoms",
        "action_taken",
        "recorded_by",
    ];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.livestock_id.clone(),
            self.date.clone(),
            self.symptoms.clone(),
            self.action_taken.clone(),
            self.recorded_by.clone(),
        ]
    }
}

#[derive(Debug, Clone)]
pub struct NewHealthCheck {
    pub livestock_id: String,
    /// Empty when the animal showed nothing unusual.
    pub symptoms: String,
    pub action_taken: String,
    pub recorded_by: String,
    pub date: NaiveDate,
}
