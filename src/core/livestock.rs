//! Livestock inventory: add, edit, weigh, delete, list and report.

use crate::core::algorithms::search::find_first_mut;
use crate::core::algorithms::sort::{SortOrder, sort_by};
use crate::errors::{AppError, AppResult};
use crate::models::health_status::HealthStatus;
use crate::models::livestock::{
    LIVESTOCK_ID_PREFIX, LivestockField, LivestockRecord, LivestockUpdate, NewLivestock,
};
use crate::models::quantity::Kilograms;
use crate::store::{RecordStore, next_id};
use crate::utils::date::format_date;

pub struct LivestockLogic;

impl LivestockLogic {
    pub fn add<S: RecordStore>(store: &S, new: NewLivestock) -> AppResult<LivestockRecord> {
        let id = next_id::<LivestockRecord, _>(store, LIVESTOCK_ID_PREFIX)?;

        let record = LivestockRecord {
            id,
            species: new.species,
            birth_date: format_date(new.birth_date),
            current_weight: new.weight,
            health_status: HealthStatus::Healthy,
            pen_id: new.pen_id,
        };

        store.append_one(&record)?;
        Ok(record)
    }

    pub fn list<S: RecordStore>(store: &S) -> AppResult<Vec<LivestockRecord>> {
        store.load_all()
    }

    /// Read-modify-overwrite of one animal. Nothing is written when `id`
    /// does not exist.
    pub fn apply_updates<S: RecordStore>(
        store: &S,
        id: &str,
        updates: &[LivestockUpdate],
    ) -> AppResult<LivestockRecord> {
        let mut herd: Vec<LivestockRecord> = store.load_for_rewrite()?;

        let updated = {
            let record = find_first_mut(&mut herd, |r| r.id == id)
                .ok_or_else(|| AppError::livestock_not_found(id))?;
            for update in updates {
                update.apply_to(record);
            }
            record.clone()
        };

        store.replace_all(&herd)?;
        Ok(updated)
    }

    pub fn update_field<S: RecordStore>(
        store: &S,
        id: &str,
        update: LivestockUpdate,
    ) -> AppResult<LivestockRecord> {
        Self::apply_updates(store, id, &[update])
    }

    pub fn update_weight<S: RecordStore>(
        store: &S,
        id: &str,
        weight: Kilograms,
    ) -> AppResult<LivestockRecord> {
        Self::update_field(store, id, LivestockUpdate::Weight(weight))
    }

    pub fn set_status<S: RecordStore>(
        store: &S,
        id: &str,
        status: HealthStatus,
    ) -> AppResult<LivestockRecord> {
        Self::update_field(store, id, LivestockUpdate::Status(status))
    }

    /// Remove every animal with `id`. The collection is rewritten only if
    /// something was removed; returns how many rows went away.
    pub fn delete<S: RecordStore>(store: &S, id: &str) -> AppResult<usize> {
        let herd: Vec<LivestockRecord> = store.load_for_rewrite()?;
        let before = herd.len();

        let remaining: Vec<LivestockRecord> = herd.into_iter().filter(|r| r.id != id).collect();
        let removed = before - remaining.len();

        if removed == 0 {
            return Err(AppError::livestock_not_found(id));
        }

        store.replace_all(&remaining)?;
        Ok(removed)
    }

    pub fn report<S: RecordStore>(
        store: &S,
        field: LivestockField,
        order: SortOrder,
    ) -> AppResult<Vec<LivestockRecord>> {
        let herd: Vec<LivestockRecord> = store.load_all()?;
        Ok(sort_by(&herd, field, order))
    }
}
