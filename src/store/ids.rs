//! Sequential human-readable identifiers (`S001`, `H002`, `F010`, ...).
//!
//! The next id is derived from the *last* stored record, not from the
//! largest id in the collection. A reordered collection therefore yields
//! regressive ids; collections with generated ids are only ever appended to
//! or filtered in place.

use super::{RecordStore, StoredRecord};
use crate::errors::AppResult;

/// Minimum number of digits; longer sequences keep their natural width.
pub const SEQUENCE_WIDTH: usize = 3;

/// Next id after `last`, falling back to `count + 1` when `last` does not
/// carry `prefix` followed by a number.
pub fn next_in_sequence(prefix: &str, last: Option<&str>, count: usize) -> String {
    let Some(last) = last else {
        return format!("{prefix}{:0width$}", 1, width = SEQUENCE_WIDTH);
    };

    let next = last
        .strip_prefix(prefix)
        .and_then(|digits| digits.trim().parse::<u64>().ok())
        .and_then(|n| n.checked_add(1));

    match next {
        Some(n) => format!("{prefix}{n:0width$}", width = SEQUENCE_WIDTH),
        None => format!("{prefix}{:0width$}", count + 1, width = SEQUENCE_WIDTH),
    }
}

/// Load the collection of `R` and compute the id for a new record.
pub fn next_id<R: StoredRecord, S: RecordStore>(store: &S, prefix: &str) -> AppResult<String> {
    let records: Vec<R> = store.load_all()?;
    Ok(next_in_sequence(
        prefix,
        records.last().map(R::key),
        records.len(),
    ))
}
