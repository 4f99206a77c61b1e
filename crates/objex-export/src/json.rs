//! JSON writer
//!
//! Serializes tree values directly: maps as JSON objects, lists as arrays,
//! scalars as typed JSON scalars. Output is pretty-printed.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use objex_core::TreeValue;

use crate::errors::Result;

/// Render a tree value as a pretty-printed JSON string
pub fn to_json_string(value: &TreeValue) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Write a tree value as pretty-printed JSON to any writer
pub fn write_json<W: Write>(value: &TreeValue, writer: W) -> Result<()> {
    serde_json::to_writer_pretty(writer, value)?;
    Ok(())
}

/// Write a tree value as pretty-printed JSON to a file
pub fn write_json_file(value: &TreeValue, path: &Path) -> Result<()> {
    tracing::debug!(path = %path.display(), "writing JSON");
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use objex_core::TreeMap;

    #[test]
    fn test_pretty_json_mirrors_tree() {
        let mut map = TreeMap::new();
        map.insert("name", TreeValue::from("Alice"));
        map.insert("age", TreeValue::from(28i64));
        map.insert(
            "skills",
            TreeValue::List(vec!["Java".into(), "Python".into()]),
        );
        let value = TreeValue::List(vec![TreeValue::Map(map)]);

        let json = to_json_string(&value).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed[0]["name"], "Alice");
        assert_eq!(parsed[0]["age"], 28);
        assert_eq!(parsed[0]["skills"][1], "Python");
    }

    #[test]
    fn test_write_json_to_buffer() {
        let value = TreeValue::List(vec![TreeValue::from("x")]);
        let mut buffer = Vec::new();
        write_json(&value, &mut buffer).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "[\n  \"x\"\n]");
    }
}
