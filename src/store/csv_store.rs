//! One CSV file per collection inside a data directory.

use super::{Collection, RecordStore, StoredRecord, codec};
use crate::errors::{AppError, AppResult};
use std::fs::{self, File, OpenOptions};
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct CsvStore {
    root: PathBuf,
}

impl CsvStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Full path of the file backing `collection`.
    pub fn path_of(&self, collection: Collection) -> PathBuf {
        self.root.join(collection.file_name())
    }

    /// Reader over the file of `R`, `None` when it does not exist.
    fn open<R: StoredRecord>(&self) -> AppResult<Option<BufReader<File>>> {
        match File::open(self.path_of(R::COLLECTION)) {
            Ok(f) => Ok(Some(BufReader::new(f))),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(self.storage_error(R::COLLECTION, e)),
        }
    }

    fn storage_error(&self, collection: Collection, source: io::Error) -> AppError {
        AppError::Storage {
            collection,
            path: self.path_of(collection),
            source,
        }
    }
}

impl RecordStore for CsvStore {
    fn load_all<R: StoredRecord>(&self) -> AppResult<Vec<R>> {
        match self.open::<R>()? {
            Some(reader) => codec::decode_all(reader),
            None => Ok(Vec::new()),
        }
    }

    fn load_for_rewrite<R: StoredRecord>(&self) -> AppResult<Vec<R>> {
        match self.open::<R>()? {
            Some(reader) => codec::decode_complete(reader),
            None => Ok(Vec::new()),
        }
    }

    fn replace_all<R: StoredRecord>(&self, records: &[R]) -> AppResult<()> {
        // encode first: a codec failure must not truncate the file
        let bytes = codec::encode_all(records)?;
        fs::write(self.path_of(R::COLLECTION), bytes)
            .map_err(|e| self.storage_error(R::COLLECTION, e))
    }

    fn append_one<R: StoredRecord>(&self, record: &R) -> AppResult<()> {
        let path = self.path_of(R::COLLECTION);
        if !path.exists() {
            return Err(AppError::NotInitialized(R::COLLECTION));
        }

        let bytes = codec::encode_row(record)?;
        let mut file = OpenOptions::new()
            .append(true)
            .open(&path)
            .map_err(|e| self.storage_error(R::COLLECTION, e))?;
        file.write_all(&bytes)
            .map_err(|e| self.storage_error(R::COLLECTION, e))
    }

    fn initialize(&self, collection: Collection) -> AppResult<bool> {
        let path = self.path_of(collection);
        if path.exists() {
            return Ok(false);
        }

        fs::create_dir_all(&self.root).map_err(|e| self.storage_error(collection, e))?;
        let header = codec::encode_header(collection.headers())?;
        fs::write(&path, header).map_err(|e| self.storage_error(collection, e))?;
        Ok(true)
    }
}
