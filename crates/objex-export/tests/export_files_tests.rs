// Test suite for end-to-end file export
// Tests keyed conversion through the JSON and CSV writers against real paths

use std::rc::Rc;

use objex_core::{convert_keyed, AttrResult, ConvertOptions, Describe, RawValue, TreeValue};
use objex_export::{write_csv_file, write_json_file, WriteOutcome};
use tempfile::TempDir;

struct Person {
    name: &'static str,
    age: i64,
    profession: &'static str,
}

impl Describe for Person {
    fn type_name(&self) -> &str {
        "Person"
    }

    fn fields(&self) -> Vec<(String, AttrResult)> {
        vec![
            ("name".to_string(), Ok(RawValue::from(self.name))),
            ("age".to_string(), Ok(RawValue::from(self.age))),
            ("profession".to_string(), Ok(RawValue::from(self.profession))),
        ]
    }
}

fn sample_entries() -> Vec<(String, Rc<dyn Describe>)> {
    vec![
        (
            "person_1".to_string(),
            Rc::new(Person {
                name: "Alice",
                age: 28,
                profession: "Engineer",
            }) as Rc<dyn Describe>,
        ),
        (
            "person_2".to_string(),
            Rc::new(Person {
                name: "Bob",
                age: 34,
                profession: "Doctor",
            }) as Rc<dyn Describe>,
        ),
    ]
}

fn records(value: &TreeValue) -> &[TreeValue] {
    value.as_list().expect("keyed conversion yields a list")
}

#[test]
fn test_json_file_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("people.json");

    let conversion = convert_keyed(&sample_entries(), &ConvertOptions::default());
    write_json_file(&conversion.value, &path).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();

    assert_eq!(parsed[0]["key"], "person_1");
    assert_eq!(parsed[0]["object_type"], "Person");
    assert_eq!(parsed[0]["age"], 28);
    assert_eq!(parsed[1]["name"], "Bob");
}

#[test]
fn test_csv_file_header_and_rows() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("people.csv");

    let conversion = convert_keyed(&sample_entries(), &ConvertOptions::default());
    let outcome = write_csv_file(records(&conversion.value), &path).unwrap();
    assert_eq!(outcome, WriteOutcome::Written);

    let text = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "key,object_type,name,age,profession");
    assert_eq!(lines[1], "person_1,Person,Alice,28,Engineer");
    assert_eq!(lines[2], "person_2,Person,Bob,34,Doctor");
}

#[test]
fn test_empty_export_creates_no_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("empty.csv");

    let outcome = write_csv_file(&[], &path).unwrap();
    assert_eq!(outcome, WriteOutcome::NothingToWrite);
    assert!(!path.exists());
}
