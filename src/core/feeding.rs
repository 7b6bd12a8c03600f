use crate::core::algorithms::search::find_all;
use crate::core::algorithms::sort::{SortOrder, sort_by};
use crate::errors::AppResult;
use crate::models::feeding::{FEEDING_ID_PREFIX, FeedingField, FeedingLogEntry, NewFeeding};
use crate::store::{RecordStore, next_id};
use crate::utils::date::format_date;

pub struct FeedingLogic;

impl FeedingLogic {
    pub fn record<S: RecordStore>(store: &S, feeding: NewFeeding) -> AppResult<FeedingLogEntry> {
        let id = next_id::<FeedingLogEntry, _>(store, FEEDING_ID_PREFIX)?;

        let entry = FeedingLogEntry {
            id,
            pen_id: feeding.pen_id,
            date: format_date(feeding.date),
            feed_type: feeding.feed_type,
            amount_kg: feeding.amount,
            recorded_by: feeding.recorded_by,
        };

        store.append_one(&entry)?;
        Ok(entry)
    }

    /// Feeding log in stored order, optionally for one pen and sorted.
    pub fn list<S: RecordStore>(
        store: &S,
        pen: Option<&str>,
        sort: Option<(FeedingField, SortOrder)>,
    ) -> AppResult<Vec<FeedingLogEntry>> {
        let log: Vec<FeedingLogEntry> = store.load_all()?;

        let selected: Vec<FeedingLogEntry> = match pen {
            Some(pen) => find_all(&log, |e| e.pen_id == pen)
                .into_iter()
                .cloned()
                .collect(),
            None => log,
        };

        Ok(match sort {
            Some((field, order)) => sort_by(&selected, field, order),
            None => selected,
        })
    }
}
