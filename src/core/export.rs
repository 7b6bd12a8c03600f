//! Export of a collection to CSV or JSON.

use crate::core::algorithms::sort::{SortOrder, sort_by};
use crate::errors::{AppError, AppResult};
use crate::models::feeding::FeedingLogEntry;
use crate::models::health_record::HealthRecord;
use crate::models::livestock::{LivestockField, LivestockRecord};
use crate::store::RecordStore;
use crate::ui::messages::{info, success, warning};
use crate::utils::path::ensure_writable;
use clap::ValueEnum;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportTarget {
    Livestock,
    Health,
    Feeding,
}

pub struct ExportLogic;

impl ExportLogic {
    /// Write the selected collection to `file` (absolute path).
    ///
    /// `sort` only applies to the livestock target. Returns the number of
    /// records written; nothing is written for an empty collection.
    pub fn export<S: RecordStore>(
        store: &S,
        target: ExportTarget,
        format: ExportFormat,
        file: &str,
        sort: Option<(LivestockField, SortOrder)>,
        force: bool,
    ) -> AppResult<usize> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {file}"
            )));
        }

        match target {
            ExportTarget::Livestock => {
                let herd: Vec<LivestockRecord> = store.load_all()?;
                let herd = match sort {
                    Some((field, order)) => sort_by(&herd, field, order),
                    None => herd,
                };
                write_records(&herd, format, path, force)
            }
            ExportTarget::Health => {
                let records: Vec<HealthRecord> = store.load_all()?;
                write_records(&records, format, path, force)
            }
            ExportTarget::Feeding => {
                let log: Vec<FeedingLogEntry> = store.load_all()?;
                write_records(&log, format, path, force)
            }
        }
    }
}

/// An existing `path` is only touched (and confirmed) when there is
/// something to write.
fn write_records<R: Serialize>(
    records: &[R],
    format: ExportFormat,
    path: &Path,
    force: bool,
) -> AppResult<usize> {
    if records.is_empty() {
        warning("No records to export.");
        return Ok(0);
    }

    ensure_writable(path, force)?;

    info(format!(
        "Exporting to {}: {}",
        format.as_str().to_uppercase(),
        path.display()
    ));

    match format {
        ExportFormat::Csv => {
            // header comes from the serde field names
            let mut wtr = csv::Writer::from_path(path)
                .map_err(|e| AppError::Export(format!("CSV open error: {e}")))?;
            for record in records {
                wtr.serialize(record)
                    .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
            }
            wtr.flush()?;
        }
        ExportFormat::Json => {
            let json = serde_json::to_string_pretty(records)
                .map_err(|e| AppError::Export(format!("JSON serialization error: {e}")))?;
            let mut file = File::create(path)?;
            file.write_all(json.as_bytes())?;
        }
    }

    success(format!(
        "{} export completed: {}",
        format.as_str().to_uppercase(),
        path.display()
    ));
    Ok(records.len())
}
