//! Spreadsheet sheet population
//!
//! Builds the single-sheet layout a spreadsheet writer consumes: row 0 is
//! the flattened header, subsequent rows are the flattened records, all as
//! text cells. Workbook file emission itself is left to the external
//! spreadsheet collaborator; this module stops at the populated grid.

use objex_core::{flatten, TreeValue};

use crate::csv::WriteOutcome;
use crate::errors::Result;

/// One populated sheet: a name and a rectangular grid of text cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sheet {
    /// Sheet name
    pub name: String,
    /// Row 0 is the header; every following row is one record
    pub rows: Vec<Vec<String>>,
}

impl Sheet {
    /// Number of rows, header included
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Cell text at (row, column), if present
    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.rows.get(row)?.get(column).map(String::as_str)
    }
}

/// Populate a sheet from a sequence of map records
///
/// Returns the sheet and [`WriteOutcome::Written`], or no sheet and
/// [`WriteOutcome::NothingToWrite`] for empty input: the caller skips
/// creating the workbook rather than creating an empty one.
///
/// # Errors
///
/// Propagates `ObjexError::NotARecord` from flattening.
pub fn build_sheet(name: &str, records: &[TreeValue]) -> Result<(Option<Sheet>, WriteOutcome)> {
    let flattened = match flatten(records)? {
        Some(flattened) => flattened,
        None => {
            tracing::debug!(sheet = name, "no data to populate sheet");
            return Ok((None, WriteOutcome::NothingToWrite));
        }
    };

    let mut rows = Vec::with_capacity(flattened.rows.len() + 1);
    rows.push(flattened.header);
    rows.extend(flattened.rows);

    Ok((
        Some(Sheet {
            name: name.to_string(),
            rows,
        }),
        WriteOutcome::Written,
    ))
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
    fn test_row_zero_is_header() {
        let records = vec![
            record(&[("name", "Alice".into()), ("age", 28i64.into())]),
            record(&[("name", "Bob".into()), ("age", 34i64.into())]),
        ];

        let (sheet, outcome) = build_sheet("Data", &records).unwrap();
        let sheet = sheet.unwrap();

        assert_eq!(outcome, WriteOutcome::Written);
        assert_eq!(sheet.name, "Data");
        assert_eq!(sheet.row_count(), 3);
        assert_eq!(sheet.rows[0], vec!["name", "age"]);
        assert_eq!(sheet.cell(1, 0), Some("Alice"));
        assert_eq!(sheet.cell(2, 1), Some("34"));
    }

    #[test]
    fn test_empty_records_build_no_sheet() {
        let (sheet, outcome) = build_sheet("Data", &[]).unwrap();
        assert!(sheet.is_none());
        assert_eq!(outcome, WriteOutcome::NothingToWrite);
    }
}
