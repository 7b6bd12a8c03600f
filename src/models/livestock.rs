use super::health_status::HealthStatus;
use super::quantity::Kilograms;
use crate::core::algorithms::sort::{SortKey, Sortable};
use crate::store::{Collection, StoredRecord};
use crate::utils::table::Tabular;
use ansi_term::Colour;
use chrono::NaiveDate;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const LIVESTOCK_ID_PREFIX: &str = "S";

/// ⇔ livestock.csv
///
/// Also reads files with the Indonesian column names (`ternak_id`, ...).
/// Missing trailing cells load as empty and are written back empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LivestockRecord {
    #[serde(alias = "ternak_id")]
    pub id: String,
    #[serde(alias = "jenis_ternak", default)]
    pub species: String,
    #[serde(alias = "tgl_lahir", default)]
    pub birth_date: String, // YYYY-MM-DD
    #[serde(alias = "berat_sekarang", default)]
    pub current_weight: Kilograms,
    #[serde(alias = "status_kesehatan", default = "HealthStatus::blank")]
    pub health_status: HealthStatus,
    #[serde(alias = "kandang_id", default)]
    pub pen_id: String,
}

impl StoredRecord for LivestockRecord {
    const COLLECTION: Collection = Collection::Livestock;

    fn key(&self) -> &str {
        &self.id
    }
}

impl Tabular for LivestockRecord {
    const HEADERS: &'static [&'static str] = &[
        "id",
        "species",
        "birth_date",
        "weight_kg",
        "health_status",
        "pen_id",
    ];

    fn cells(&self) -> Vec<String> {
        let status = match &self.health_status {
            HealthStatus::Healthy => Colour::Green.paint("Healthy").to_string(),
            HealthStatus::Sick => Colour::Red.paint("Sick").to_string(),
            HealthStatus::Other(text) => text.clone(),
        };

        vec![
            self.id.clone(),
            self.species.clone(),
            self.birth_date.clone(),
            self.current_weight.to_string(),
            status,
            self.pen_id.clone(),
        ]
    }
}

/// Input for a new animal; the id is generated and the status starts Healthy.
#[derive(Debug, Clone)]
pub struct NewLivestock {
    pub species: String,
    pub birth_date: NaiveDate,
    pub weight: Kilograms,
    pub pen_id: String,
}

/// One in-place change to a stored animal.
#[derive(Debug, Clone, PartialEq)]
pub enum LivestockUpdate {
    Species(String),
    BirthDate(NaiveDate),
    Weight(Kilograms),
    Status(HealthStatus),
    Pen(String),
}

impl LivestockUpdate {
    pub fn apply_to(&self, record: &mut LivestockRecord) {
        match self {
            LivestockUpdate::Species(s) => record.species = s.clone(),
            LivestockUpdate::BirthDate(d) => record.birth_date = d.format("%Y-%m-%d").to_string(),
            LivestockUpdate::Weight(w) => record.current_weight = w.clone(),
            LivestockUpdate::Status(s) => record.health_status = s.clone(),
            LivestockUpdate::Pen(p) => record.pen_id = p.clone(),
        }
    }

    pub fn field(&self) -> LivestockField {
        match self {
            LivestockUpdate::Species(_) => LivestockField::Species,
            LivestockUpdate::BirthDate(_) => LivestockField::BirthDate,
            LivestockUpdate::Weight(_) => LivestockField::Weight,
            LivestockUpdate::Status(_) => LivestockField::Status,
            LivestockUpdate::Pen(_) => LivestockField::Pen,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LivestockField {
    Id,
    Species,
    BirthDate,
    Weight,
    Status,
    Pen,
}

impl LivestockField {
    pub fn as_str(&self) -> &'static str {
        match self {
            LivestockField::Id => "id",
            LivestockField::Species => "species",
            LivestockField::BirthDate => "birth_date",
            LivestockField::Weight => "current_weight",
            LivestockField::Status => "health_status",
            LivestockField::Pen => "pen_id",
        }
    }
}

impl fmt::Display for LivestockField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Sortable for LivestockRecord {
    type Field = LivestockField;

    fn sort_key(&self, field: LivestockField) -> SortKey<'_> {
        match field {
            LivestockField::Id => SortKey::Text(&self.id),
            LivestockField::Species => SortKey::Text(&self.species),
            LivestockField::BirthDate => SortKey::Text(&self.birth_date),
            LivestockField::Weight => SortKey::Numeric(self.current_weight.as_str()),
            LivestockField::Status => SortKey::Text(self.health_status.as_str()),
            LivestockField::Pen => SortKey::Text(&self.pen_id),
        }
    }
}
