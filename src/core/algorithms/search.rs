//! Linear search over an in-memory collection, in stored order.

/// First record matching `predicate`.
pub fn find_first<R, P>(records: &[R], predicate: P) -> Option<&R>
where
    P: FnMut(&&R) -> bool,
{
    records.iter().find(predicate)
}

/// Mutable variant of [`find_first`], used by read-modify-overwrite updates.
pub fn find_first_mut<R, P>(records: &mut [R], predicate: P) -> Option<&mut R>
where
    P: FnMut(&&mut R) -> bool,
{
    records.iter_mut().find(predicate)
}

/// Every record matching `predicate`, preserving order.
pub fn find_all<R, P>(records: &[R], mut predicate: P) -> Vec<&R>
where
    P: FnMut(&R) -> bool,
{
    records.iter().filter(|r| predicate(r)).collect()
}
