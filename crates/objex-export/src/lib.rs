//! Objex Export - file-format writers over the core's output contract
//!
//! Thin wrappers around `objex-core`'s tree value and flattened header/rows
//! pair:
//! - JSON: pretty-printed, mirrors the tree exactly
//! - CSV: header + one line per record, standard quoting
//! - Sheet: populated single-sheet grid for spreadsheet writers
//!
//! This is the only place in the workspace that touches files.

pub mod csv;
pub mod errors;
pub mod json;
pub mod sheet;

// Re-export commonly used types
pub use self::csv::{write_csv, write_csv_file, WriteOutcome};
pub use self::errors::{ExportError, Result};
pub use self::json::{to_json_string, write_json, write_json_file};
pub use self::sheet::{build_sheet, Sheet};
