//! Flat-text account snapshots.
//!
//! Each account is one record of three fields in fixed order, `id;phone;balance`,
//! terminated by `|`. Records are concatenated with nothing in between:
//!
//! ```text
//! 1;911;1000|2;555;42|
//! ```
//!
//! Fields that contain `;`, `|` or `"` are quoted with `"` (embedded quotes are
//! doubled), so any phone value survives a round trip.

use crate::account::Account;
use crate::error::{LedgerError, Result};
use csv::{ReaderBuilder, StringRecord, Terminator, WriterBuilder};
use log::debug;
use std::io::{Read, Write};

/// Separates fields within a record.
pub const FIELD_SEPARATOR: u8 = b';';

/// Terminates every record, including the last.
pub const RECORD_TERMINATOR: u8 = b'|';

/// Number of fields per record: id, phone, balance.
const FIELDS_PER_RECORD: usize = 3;

/// Writes one record per account, in iteration order.
///
/// Returns the number of records written.
pub fn write_snapshot<'a, W, I>(writer: W, accounts: I) -> Result<usize>
where
    W: Write,
    I: IntoIterator<Item = &'a Account>,
{
    let mut csv_writer = WriterBuilder::new()
        .has_headers(false)
        .delimiter(FIELD_SEPARATOR)
        .terminator(Terminator::Any(RECORD_TERMINATOR))
        .from_writer(writer);

    let mut count = 0;
    for account in accounts {
        csv_writer.serialize(account).map_err(write_error)?;
        count += 1;
    }

    csv_writer.flush()?;
    debug!("Wrote {} snapshot records", count);
    Ok(count)
}

/// Decodes every record of a snapshot stream.
///
/// The stream is decoded in full before anything is returned, so a malformed
/// record anywhere yields an error and no accounts. Records are numbered from 1
/// in error messages. Empty and blank records are malformed, except for a
/// whitespace-only tail after the last terminator, which is ignored.
pub fn read_snapshot<R: Read>(mut reader: R) -> Result<Vec<Account>> {
    let mut input = Vec::new();
    reader.read_to_end(&mut input)?;

    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(FIELD_SEPARATOR)
        .terminator(Terminator::Any(RECORD_TERMINATOR))
        .from_reader(input.as_slice());

    let mut accounts = Vec::new();
    let mut record = StringRecord::new();
    let mut index = 0;

    loop {
        // The csv reader skips empty records, so catch `||` before it does.
        let start = csv_reader.position().byte() as usize;
        if input.get(start) == Some(&RECORD_TERMINATOR) {
            return Err(LedgerError::InvalidRecord {
                record: index + 1,
                message: "empty record".to_string(),
            });
        }

        if !csv_reader
            .read_record(&mut record)
            .map_err(|e| record_error(e, index + 1))?
        {
            break;
        }
        index += 1;

        if is_blank(&record) {
            let end = csv_reader.position().byte() as usize;
            if end >= input.len() && input.last() != Some(&RECORD_TERMINATOR) {
                debug!("Record {}: blank tail, skipping", index);
                break;
            }
            return Err(LedgerError::InvalidRecord {
                record: index,
                message: "blank record".to_string(),
            });
        }

        if record.len() != FIELDS_PER_RECORD {
            return Err(LedgerError::InvalidRecord {
                record: index,
                message: format!(
                    "expected {} fields, found {}",
                    FIELDS_PER_RECORD,
                    record.len()
                ),
            });
        }

        let account: Account = record
            .deserialize(None)
            .map_err(|e| record_error(e, index))?;
        accounts.push(account);
    }

    debug!("Read {} snapshot records", accounts.len());
    Ok(accounts)
}

fn is_blank(record: &StringRecord) -> bool {
    record.iter().all(|field| field.trim().is_empty())
}

/// I/O failures surface as `Io`; everything else points at the record.
fn record_error(err: csv::Error, record: usize) -> LedgerError {
    let message = err.to_string();
    match err.into_kind() {
        csv::ErrorKind::Io(e) => LedgerError::Io(e),
        _ => LedgerError::InvalidRecord { record, message },
    }
}

/// I/O failures surface as `Io`, serialization failures as `Csv`.
fn write_error(err: csv::Error) -> LedgerError {
    if err.is_io_error() {
        LedgerError::Io(err.into())
    } else {
        LedgerError::Csv(err)
    }
}
