//! Demo command
//!
//! Usage: objex demo
//!
//! Converts one sample object (with a list field, a map field, and an
//! accessor) and prints the pretty JSON, object_type tags included.

use std::rc::Rc;

use clap::Args;
use objex_core::{convert_with, ConvertOptions, Describe};
use objex_export::to_json_string;

use crate::person::Person;

#[derive(Debug, Args)]
pub struct DemoArgs {
    /// Recursion depth limit
    #[arg(long, default_value_t = 128)]
    pub max_depth: usize,
}

/// Execute demo command
pub fn execute(args: DemoArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut person = Person::new("Alice", 28, "Engineer");
    person.add_skill("Java");
    person.add_skill("Python");
    person.add_attribute("Experience", "5 years");
    person.add_attribute("Certifications", "AWS Certified");

    let object: Rc<dyn Describe> = Rc::new(person);
    let options = ConvertOptions {
        max_depth: args.max_depth,
        tag_object_types: true,
    };
    let conversion = convert_with(&object, &options);

    for diagnostic in conversion.diagnostics.events() {
        eprintln!("warning: {:?}", diagnostic);
    }

    println!("{}", to_json_string(&conversion.value)?);
    Ok(())
}
