//! CSV encoding shared by every store backend.

use super::StoredRecord;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::warning;
use std::io::Read;

fn codec_error<R: StoredRecord>(source: csv::Error) -> AppError {
    AppError::Codec {
        collection: R::COLLECTION,
        source,
    }
}

fn writer() -> csv::Writer<Vec<u8>> {
    csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new())
}

fn finish<R: StoredRecord>(wtr: csv::Writer<Vec<u8>>) -> AppResult<Vec<u8>> {
    wtr.into_inner()
        .map_err(|e| codec_error::<R>(csv::Error::from(e.into_error())))
}

/// Header line only, used to initialize an empty collection.
pub(crate) fn encode_header(headers: &[&str]) -> AppResult<Vec<u8>> {
    let mut wtr = writer();
    wtr.write_record(headers)
        .map_err(|e| AppError::Other(format!("cannot encode header: {e}")))?;
    wtr.into_inner()
        .map_err(|e| AppError::Other(format!("cannot encode header: {e}")))
}

/// Header followed by every record, in the given order.
pub(crate) fn encode_all<R: StoredRecord>(records: &[R]) -> AppResult<Vec<u8>> {
    let mut wtr = writer();
    wtr.write_record(R::COLLECTION.headers())
        .map_err(codec_error::<R>)?;
    for record in records {
        wtr.serialize(record).map_err(codec_error::<R>)?;
    }
    finish::<R>(wtr)
}

/// A single data row, without header.
pub(crate) fn encode_row<R: StoredRecord>(record: &R) -> AppResult<Vec<u8>> {
    let mut wtr = writer();
    wtr.serialize(record).map_err(codec_error::<R>)?;
    finish::<R>(wtr)
}

/// Rows of one collection, plus how many rows had to be dropped.
pub(crate) struct Decoded<R> {
    pub records: Vec<R>,
    pub skipped: usize,
}

/// Decode every data row. Rows that do not match the schema are reported
/// and skipped; I/O failures abort the load.
pub(crate) fn decode_rows<R: StoredRecord, Rd: Read>(reader: Rd) -> AppResult<Decoded<R>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut decoded = Decoded {
        records: Vec::new(),
        skipped: 0,
    };
    for row in rdr.deserialize::<R>() {
        match row {
            Ok(record) => decoded.records.push(record),
            Err(e) if e.is_io_error() => return Err(codec_error::<R>(e)),
            Err(e) => {
                let line = e
                    .position()
                    .map(|p| p.line().to_string())
                    .unwrap_or_else(|| "?".to_string());
                warning(format!(
                    "Skipping unreadable {} row at line {}: {}",
                    R::COLLECTION,
                    line,
                    e
                ));
                decoded.skipped += 1;
            }
        }
    }

    Ok(decoded)
}

/// Lenient load: whatever could be decoded.
pub(crate) fn decode_all<R: StoredRecord, Rd: Read>(reader: Rd) -> AppResult<Vec<R>> {
    Ok(decode_rows(reader)?.records)
}

/// Load for a read-modify-overwrite: refuses when any row was dropped,
/// since the rewrite would erase it.
pub(crate) fn decode_complete<R: StoredRecord, Rd: Read>(reader: Rd) -> AppResult<Vec<R>> {
    let decoded = decode_rows::<R, _>(reader)?;
    if decoded.skipped > 0 {
        return Err(AppError::UnreadableRows {
            collection: R::COLLECTION,
            count: decoded.skipped,
        });
    }
    Ok(decoded.records)
}
