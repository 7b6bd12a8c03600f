use super::quantity::Kilograms;
use crate::core::algorithms::sort::{SortKey, Sortable};
use crate::store::{Collection, StoredRecord};
use crate::utils::table::Tabular;
use chrono::NaiveDate;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const FEEDING_ID_PREFIX: &str = "F";

/// ⇔ feeding_log.csv (append-only)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedingLogEntry {
    #[serde(alias = "log_id")]
    pub id: String,
    #[serde(alias = "kandang_id", default)]
    pub pen_id: String,
    #[serde(alias = "tanggal", default)]
    pub date: String,
    #[serde(alias = "jenis_pakan", default)]
    pub feed_type: String,
    #[serde(alias = "jumlah_kg", default)]
    pub amount_kg: Kilograms,
    #[serde(alias = "dicatat_oleh", default)]
    pub recorded_by: String,
}

impl StoredRecord for FeedingLogEntry {
    const COLLECTION: Collection = Collection::FeedingLog;

    fn key(&self) -> &str {
        &self.id
    }
}

impl Tabular for FeedingLogEntry {
    const HEADERS: &'static [&'static str] = &[
        "id",
        "pen_id",
        "date",
        "feed_type",
        "amount_kg",
        "recorded_by",
    ];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.pen_id.clone(),
            self.date.clone(),
            self.feed_type.clone(),
            self.amount_kg.to_string(),
            self.recorded_by.clone(),
        ]
    }
}

#[derive(Debug, Clone)]
pub struct NewFeeding {
    pub pen_id: String,
    pub feed_type: String,
    pub amount: Kilograms,
    pub recorded_by: String,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FeedingField {
    Id,
    Pen,
    Date,
    FeedType,
    Amount,
}

impl fmt::Display for FeedingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FeedingField::Id => "id",
            FeedingField::Pen => "pen_id",
            FeedingField::Date => "date",
            FeedingField::FeedType => "feed_type",
            FeedingField::Amount => "amount_kg",
        })
    }
}

impl Sortable for FeedingLogEntry {
    type Field = FeedingField;

    fn sort_key(&self, field: FeedingField) -> SortKey<'_> {
        match field {
            FeedingField::Id => SortKey::Text(&self.id),
            FeedingField::Pen => SortKey::Text(&self.pen_id),
            FeedingField::Date => SortKey::Text(&self.date),
            FeedingField::FeedType => SortKey::Text(&self.feed_type),
            FeedingField::Amount => SortKey::Numeric(self.amount_kg.as_str()),
        }
    }
}
