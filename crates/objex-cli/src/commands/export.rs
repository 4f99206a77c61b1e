//! Export command
//!
//! Usage: objex export [--out <DIR>] [--format <FORMAT>]

use std::path::PathBuf;
use std::rc::Rc;

use clap::{Args, ValueEnum};
use objex_core::{convert_keyed, ConvertOptions, Describe};
use objex_export::{write_csv_file, write_json_file, WriteOutcome};

use crate::person::Person;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Json,
    Csv,
    All,
}

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Output directory
    #[arg(short, long, default_value = ".")]
    pub out: PathBuf,

    /// Which files to write
    #[arg(short, long, value_enum, default_value_t = Format::All)]
    pub format: Format,
}

/// Execute export command
pub fn execute(args: ExportArgs) -> Result<(), Box<dyn std::error::Error>> {
    let entries = sample_people();
    let conversion = convert_keyed(&entries, &ConvertOptions::default());

    for diagnostic in conversion.diagnostics.events() {
        eprintln!("warning: {:?}", diagnostic);
    }

    let records = conversion
        .value
        .as_list()
        .ok_or("keyed conversion did not yield a record list")?;

    let mut written = Vec::new();

    if matches!(args.format, Format::Json | Format::All) {
        let path = args.out.join("people.json");
        write_json_file(&conversion.value, &path)?;
        written.push(path.display().to_string());
    }

    if matches!(args.format, Format::Csv | Format::All) {
        let path = args.out.join("people.csv");
        match write_csv_file(records, &path)? {
            WriteOutcome::Written => written.push(path.display().to_string()),
            WriteOutcome::NothingToWrite => println!("No data to write to CSV."),
        }
    }

    println!("Export completed: {}", written.join(", "));
    Ok(())
}

/// Built-in sample keyed collection
fn sample_people() -> Vec<(String, Rc<dyn Describe>)> {
    let people = [
        ("person_1", Person::new("Alice", 28, "Engineer")),
        ("person_2", Person::new("Bob", 34, "Doctor")),
        ("person_3", Person::new("Charlie", 25, "Artist")),
    ];

    people
        .into_iter()
        .map(|(key, person)| (key.to_string(), Rc::new(person) as Rc<dyn Describe>))
        .collect()
}
