//! In-memory backend holding the same CSV bytes a file would contain.

use super::{Collection, RecordStore, StoredRecord, codec};
use crate::errors::{AppError, AppResult};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;

#[derive(Debug, Default)]
pub struct MemoryStore {
    files: RefCell<HashMap<Collection, Vec<u8>>>,
    rewrites: Cell<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store with every collection initialized (header only).
    pub fn initialized() -> AppResult<Self> {
        let store = Self::new();
        for collection in Collection::ALL {
            store.initialize(collection)?;
        }
        Ok(store)
    }

    /// Number of `replace_all` calls so far.
    pub fn rewrites(&self) -> usize {
        self.rewrites.get()
    }

    /// Raw stored bytes, `None` when the collection was never initialized.
    pub fn raw(&self, collection: Collection) -> Option<Vec<u8>> {
        self.files.borrow().get(&collection).cloned()
    }

    /// Overwrite the raw bytes of a collection (used to simulate damaged files).
    pub fn set_raw(&self, collection: Collection, bytes: impl Into<Vec<u8>>) {
        self.files.borrow_mut().insert(collection, bytes.into());
    }
}

impl RecordStore for MemoryStore {
    fn load_all<R: StoredRecord>(&self) -> AppResult<Vec<R>> {
        match self.files.borrow().get(&R::COLLECTION) {
            Some(bytes) => codec::decode_all(bytes.as_slice()),
            None => Ok(Vec::new()),
        }
    }

    fn load_for_rewrite<R: StoredRecord>(&self) -> AppResult<Vec<R>> {
        match self.files.borrow().get(&R::COLLECTION) {
            Some(bytes) => codec::decode_complete(bytes.as_slice()),
            None => Ok(Vec::new()),
        }
    }

    fn replace_all<R: StoredRecord>(&self, records: &[R]) -> AppResult<()> {
        let bytes = codec::encode_all(records)?;
        self.files.borrow_mut().insert(R::COLLECTION, bytes);
        self.rewrites.set(self.rewrites.get() + 1);
        Ok(())
    }

    fn append_one<R: StoredRecord>(&self, record: &R) -> AppResult<()> {
        let row = codec::encode_row(record)?;
        let mut files = self.files.borrow_mut();
        let bytes = files
            .get_mut(&R::COLLECTION)
            .ok_or(AppError::NotInitialized(R::COLLECTION))?;
        bytes.extend_from_slice(&row);
        Ok(())
    }

    fn initialize(&self, collection: Collection) -> AppResult<bool> {
        if self.files.borrow().contains_key(&collection) {
            return Ok(false);
        }
        let header = codec::encode_header(collection.headers())?;
        self.files.borrow_mut().insert(collection, header);
        Ok(true)
    }
}
