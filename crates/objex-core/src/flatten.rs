//! Tabular flattening - record trees into header/rows layout
//!
//! The header derives from the FIRST record's key order, and each row is the
//! record's own values in the record's own order. That is the documented
//! contract, not an oversight to fix: records with divergent key sets will
//! come out with misaligned columns (a test below pins this behavior).

use crate::errors::{ObjexError, Result};
use crate::value::{format_number, TreeValue};

/// Rectangular layout for tabular exporters: one header, stringified rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flattened {
    /// Column names, taken from the first record's key order
    pub header: Vec<String>,
    /// One row of cell text per record
    pub rows: Vec<Vec<String>>,
}

/// Flatten a sequence of map records into a header/rows layout
///
/// Returns `Ok(None)` for empty input: nothing to write, and the caller is
/// expected to skip the target file rather than create an empty one.
///
/// # Errors
///
/// Returns `ObjexError::NotARecord` if any element is not a `Map`.
pub fn flatten(records: &[TreeValue]) -> Result<Option<Flattened>> {
    if records.is_empty() {
        return Ok(None);
    }

    let first = as_record(&records[0], 0)?;
    let header: Vec<String> = first.keys().cloned().collect();

    let mut rows = Vec::with_capacity(records.len());
    for (index, record) in records.iter().enumerate() {
        let map = as_record(record, index)?;
        rows.push(map.values().map(cell_text).collect());
    }

    Ok(Some(Flattened { header, rows }))
}

fn as_record(value: &TreeValue, index: usize) -> Result<&crate::value::TreeMap> {
    value.as_map().ok_or(ObjexError::NotARecord { index })
}

/// Stringify one tree value for a flat cell
///
/// Scalars take their textual form; nested lists and maps fall back to the
/// generic compact dump, since a flat cell cannot hold a tree.
pub fn cell_text(value: &TreeValue) -> String {
    match value {
        TreeValue::Null => "null".to_string(),
        TreeValue::Bool(b) => b.to_string(),
        TreeValue::Number(n) => format_number(*n),
        TreeValue::String(s) => s.clone(),
        TreeValue::List(_) | TreeValue::Map(_) => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::TreeMap;

    fn record(entries: &[(&str, TreeValue)]) -> TreeValue {
        let mut map = TreeMap::new();
        for (key, value) in entries {
            map.insert(*key, value.clone());
        }
        TreeValue::Map(map)
    }

    #[test]
    fn test_empty_input_is_noop() {
        let flattened = flatten(&[]).unwrap();
        assert!(flattened.is_none());
    }

    #[test]
    fn test_header_from_first_record() {
        let records = vec![record(&[
            ("name", "Alice".into()),
            ("age", 28i64.into()),
            ("profession", "Engineer".into()),
        ])];

        let flattened = flatten(&records).unwrap().unwrap();
        assert_eq!(flattened.header, vec!["name", "age", "profession"]);
        assert_eq!(flattened.rows, vec![vec!["Alice", "28", "Engineer"]]);
    }

    #[test]
    fn test_cells_stringify_scalars() {
        let records = vec![record(&[
            ("flag", TreeValue::Bool(true)),
            ("missing", TreeValue::Null),
            ("ratio", TreeValue::Number(2.5)),
        ])];

        let flattened = flatten(&records).unwrap().unwrap();
        assert_eq!(flattened.rows[0], vec!["true", "null", "2.5"]);
    }

    #[test]
    fn test_nested_values_dump_compactly() {
        let records = vec![record(&[(
            "skills",
            TreeValue::List(vec!["Java".into(), "Python".into()]),
        )])];

        let flattened = flatten(&records).unwrap().unwrap();
        assert_eq!(flattened.rows[0], vec![r#"["Java","Python"]"#]);
    }

    #[test]
    fn test_mismatched_records_misalign() {
        // Pins the first-record-header contract: the second record's values
        // come out in its own order, not matched against the header.
        let records = vec![
            record(&[("a", 1i64.into()), ("b", 2i64.into())]),
            record(&[("b", 3i64.into()), ("c", 4i64.into())]),
        ];

        let flattened = flatten(&records).unwrap().unwrap();
        assert_eq!(flattened.header, vec!["a", "b"]);
        assert_eq!(flattened.rows[0], vec!["1", "2"]);
        // "3" lands under column "a", "4" under "b".
        assert_eq!(flattened.rows[1], vec!["3", "4"]);
    }

    #[test]
    fn test_non_map_record_is_an_error() {
        let records = vec![
            record(&[("a", 1i64.into())]),
            TreeValue::String("not a record".to_string()),
        ];

        let err = flatten(&records).unwrap_err();
        assert_eq!(err, ObjexError::NotARecord { index: 1 });
    }
}
