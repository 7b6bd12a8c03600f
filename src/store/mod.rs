//! File-backed record store.
//!
//! Every collection is a flat delimited file with a header row. All access
//! goes through [`RecordStore`], which only knows three primitives: load the
//! whole collection, rewrite the whole collection, append one row. Updates are
//! read-modify-overwrite; there is no locking and the last writer wins.

mod codec;
pub mod csv_store;
pub mod ids;
pub mod memory;
pub mod schema;

pub use csv_store::CsvStore;
pub use ids::{next_id, next_in_sequence};
pub use memory::MemoryStore;
pub use schema::Collection;

use crate::errors::AppResult;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// A row type bound to one collection.
pub trait StoredRecord: Serialize + DeserializeOwned + Clone {
    const COLLECTION: Collection;

    /// Unique key within the collection (id or username).
    fn key(&self) -> &str;
}

pub trait RecordStore {
    /// All records in stored order. Missing or header-only storage yields
    /// an empty vector.
    fn load_all<R: StoredRecord>(&self) -> AppResult<Vec<R>>;

    /// Like [`RecordStore::load_all`], but fails with
    /// `AppError::UnreadableRows` instead of dropping rows. Used before every
    /// `replace_all` so a rewrite never erases what could not be decoded.
    fn load_for_rewrite<R: StoredRecord>(&self) -> AppResult<Vec<R>>;

    /// Truncate the collection and write `records` in order.
    fn replace_all<R: StoredRecord>(&self, records: &[R]) -> AppResult<()>;

    /// Append one row. The collection must already be initialized.
    fn append_one<R: StoredRecord>(&self, record: &R) -> AppResult<()>;

    /// Create header-only storage if it is absent. Returns `true` when
    /// storage was created.
    fn initialize(&self, collection: Collection) -> AppResult<bool>;
}
