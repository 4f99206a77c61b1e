//! Objex CLI
//!
//! Command-line interface for the object-graph export engine

use clap::{Parser, Subcommand};

mod commands;
mod person;

#[derive(Debug, Parser)]
#[command(name = "objex")]
#[command(about = "Objex - generic object to JSON/CSV export", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Export the sample keyed collection to files
    Export(commands::export::ExportArgs),
    /// Convert one sample object and print its pretty JSON
    Demo(commands::demo::DemoArgs),
}

fn main() {
    objex_core::logging_facility::init(objex_core::logging_facility::Profile::Development);

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Export(args) => commands::export::execute(args),
        Commands::Demo(args) => commands::demo::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
