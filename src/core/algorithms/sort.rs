//! Exchange sort used by the reports.
//!
//! Adjacent pairs are compared and swapped only on strict inequality, so
//! records with equal keys keep their relative order. A pass without swaps
//! ends the sort early.

use crate::ui::messages::warning;
use std::cmp::Ordering;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn from_descending(descending: bool) -> Self {
        if descending {
            SortOrder::Descending
        } else {
            SortOrder::Ascending
        }
    }
}

/// Value a record exposes for one sortable field.
#[derive(Debug, Clone, Copy)]
pub enum SortKey<'a> {
    /// Stored text that is parsed as a floating point number before comparing.
    Numeric(&'a str),
    /// Compared lexicographically (ISO dates sort correctly this way).
    Text(&'a str),
}

pub trait Sortable: Clone {
    type Field: Copy + fmt::Display;

    fn sort_key(&self, field: Self::Field) -> SortKey<'_>;
}

/// Ordering of two keys, `None` when a numeric operand does not parse.
fn compare(left: SortKey<'_>, right: SortKey<'_>) -> Option<Ordering> {
    match (left, right) {
        (SortKey::Numeric(a), SortKey::Numeric(b)) => {
            let a = a.trim().parse::<f64>().ok()?;
            let b = b.trim().parse::<f64>().ok()?;
            a.partial_cmp(&b)
        }
        (SortKey::Text(a), SortKey::Text(b)) => Some(a.cmp(b)),
        (SortKey::Numeric(a), SortKey::Text(b)) | (SortKey::Text(a), SortKey::Numeric(b)) => {
            Some(a.cmp(b))
        }
    }
}

/// Sorted copy of `records`; the input is left untouched.
///
/// A pair whose numeric key cannot be parsed is reported and left in place
/// for that pass.
pub fn sort_by<R: Sortable>(records: &[R], field: R::Field, order: SortOrder) -> Vec<R> {
    let mut sorted = records.to_vec();
    let n = sorted.len();

    for pass in 0..n.saturating_sub(1) {
        let mut swapped = false;

        for j in 0..n - pass - 1 {
            let ordering = compare(sorted[j].sort_key(field), sorted[j + 1].sort_key(field));

            let swap = match (ordering, order) {
                (Some(Ordering::Greater), SortOrder::Ascending) => true,
                (Some(Ordering::Less), SortOrder::Descending) => true,
                (Some(_), _) => false,
                (None, _) => {
                    warning(format!(
                        "Cannot compare records at positions {} and {} on '{}'; left unordered.",
                        j + 1,
                        j + 2,
                        field
                    ));
                    false
                }
            };

            if swap {
                sorted.swap(j, j + 1);
                swapped = true;
            }
        }

        if !swapped {
            break;
        }
    }

    sorted
}
