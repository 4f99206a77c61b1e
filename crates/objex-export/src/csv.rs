//! CSV writer
//!
//! One header line from the flattener, one line per record, with standard
//! quoting/escaping from the `csv` crate. Exporting zero records is a no-op
//! reported as [`WriteOutcome::NothingToWrite`]; no empty file is created.

use std::io::Write;
use std::path::Path;

use objex_core::{flatten, Flattened, TreeValue};

use crate::errors::Result;

/// What a tabular writer actually did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The target was written
    Written,
    /// The record sequence was empty; nothing was written
    NothingToWrite,
}

/// Write flattened records as CSV to any writer
pub fn write_csv<W: Write>(records: &[TreeValue], writer: W) -> Result<WriteOutcome> {
    let flattened = match flatten(records)? {
        Some(flattened) => flattened,
        None => return Ok(WriteOutcome::NothingToWrite),
    };
    write_flattened(&flattened, writer)?;
    Ok(WriteOutcome::Written)
}

/// Write flattened records as CSV to a file
///
/// The file is only created once there is something to write.
pub fn write_csv_file(records: &[TreeValue], path: &Path) -> Result<WriteOutcome> {
    let flattened = match flatten(records)? {
        Some(flattened) => flattened,
        None => {
            tracing::debug!(path = %path.display(), "no data to write to CSV");
            return Ok(WriteOutcome::NothingToWrite);
        }
    };
    tracing::debug!(path = %path.display(), rows = flattened.rows.len(), "writing CSV");
    let file = std::fs::File::create(path)?;
    write_flattened(&flattened, file)?;
    Ok(WriteOutcome::Written)
}

fn write_flattened<W: Write>(flattened: &Flattened, writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(&flattened.header)?;
    for row in &flattened.rows {
        csv_writer.write_record(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use objex_core::TreeMap;

    fn record(entries: &[(&str, TreeValue)]) -> TreeValue {
        let mut map = TreeMap::new();
        for (key, value) in entries {
            map.insert(*key, value.clone());
        }
        TreeValue::Map(map)
    }

    #[test]
    fn test_header_and_rows() {
        let records = vec![
            record(&[("name", "Alice".into()), ("age", 28i64.into())]),
            record(&[("name", "Bob".into()), ("age", 34i64.into())]),
        ];

        let mut buffer = Vec::new();
        let outcome = write_csv(&records, &mut buffer).unwrap();
        assert_eq!(outcome, WriteOutcome::Written);

        let text = String::from_utf8(buffer).unwrap();
        assert_eq!(text, "name,age\nAlice,28\nBob,34\n");
    }

    #[test]
    fn test_fields_are_quoted_when_needed() {
        let records = vec![record(&[("note", "hello, world".into())])];

        let mut buffer = Vec::new();
        write_csv(&records, &mut buffer).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert_eq!(text, "note\n\"hello, world\"\n");
    }

    #[test]
    fn test_empty_records_write_nothing() {
        let mut buffer = Vec::new();
        let outcome = write_csv(&[], &mut buffer).unwrap();
        assert_eq!(outcome, WriteOutcome::NothingToWrite);
        assert!(buffer.is_empty());
    }
}
