//! Health checks and per-animal history.

use crate::core::algorithms::search::find_all;
use crate::core::livestock::LivestockLogic;
use crate::errors::{AppError, AppResult};
use crate::models::health_record::{HEALTH_ID_PREFIX, HealthRecord, NewHealthCheck, ROUTINE_CHECKUP};
use crate::models::health_status::HealthStatus;
use crate::store::{RecordStore, next_id};
use crate::utils::date::format_date;

/// What a health check did to the animal's status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusChange {
    /// No symptoms: status left as it was.
    Unchanged,
    MarkedSick,
    /// Symptoms were recorded for an id that is not in the inventory.
    LivestockMissing,
}

#[derive(Debug, Clone)]
pub struct HealthCheckOutcome {
    pub record: HealthRecord,
    pub status_change: StatusChange,
}

pub struct HealthLogic;

impl HealthLogic {
    /// Append a health record; symptoms mark the animal Sick.
    ///
    /// Symptoms are trimmed first: whitespace-only input is a routine check,
    /// stored as [`ROUTINE_CHECKUP`], and leaves the status alone. The earlier
    /// farm program counted such input as symptoms, so its files may pair
    /// blank-looking symptoms with Sick animals.
    /// The record is kept even when the animal does not exist.
    pub fn record<S: RecordStore>(store: &S, check: NewHealthCheck) -> AppResult<HealthCheckOutcome> {
        let id = next_id::<HealthRecord, _>(store, HEALTH_ID_PREFIX)?;
        let has_symptoms = !check.symptoms.trim().is_empty();

        let record = HealthRecord {
            id,
            livestock_id: check.livestock_id,
            date: format_date(check.date),
            symptoms: if has_symptoms {
                check.symptoms
            } else {
                ROUTINE_CHECKUP.to_string()
            },
            action_taken: check.action_taken,
            recorded_by: check.recorded_by,
        };
        store.append_one(&record)?;

        let status_change = if !has_symptoms {
            StatusChange::Unchanged
        } else {
            match LivestockLogic::set_status(store, &record.livestock_id, HealthStatus::Sick) {
                Ok(_) => StatusChange::MarkedSick,
                Err(AppError::NotFound { .. }) => StatusChange::LivestockMissing,
                Err(e) => return Err(e),
            }
        };

        Ok(HealthCheckOutcome {
            record,
            status_change,
        })
    }

    pub fn history<S: RecordStore>(store: &S, livestock_id: &str) -> AppResult<Vec<HealthRecord>> {
        let records: Vec<HealthRecord> = store.load_all()?;
        Ok(find_all(&records, |r| r.livestock_id == livestock_id)
            .into_iter()
            .cloned()
            .collect())
    }
}
