//! Geotable CLI
//!
//! Regenerates the world map coordinate table from a gnuplotting-style text
//! file. Usage: `geotable <path to your map data.txt>`
//!
//! Map data is available from
//! <http://www.gnuplotting.org/plotting-the-world-revisited>.

mod error;

use std::path::PathBuf;
use std::process;

use clap::Parser;
use geotable::{logging, ConversionReport, Converter};

use crate::error::CliError;

/// Convert a coordinate file into the embedded world map table.
#[derive(Debug, Parser)]
#[command(name = "geotable", version, about)]
struct Cli {
    /// Path to the map data file (one "longitude latitude" pair per line)
    input: PathBuf,
}

fn main() {
    let cli = Cli::parse();
    logging::init(logging::DEFAULT_DIRECTIVE);

    match run(&cli) {
        Ok(report) => print_summary(&report),
        Err(e) => {
            tracing::debug!(error = ?e, "Conversion failed");
            eprintln!("Error: {}", e);
            process::exit(e.exit_code());
        }
    }
}

fn run(cli: &Cli) -> Result<ConversionReport, CliError> {
    let converter = Converter::default();
    Ok(converter.run(&cli.input)?)
}

fn print_summary(report: &ConversionReport) {
    println!(
        "Wrote {} coordinate pairs to {} (skipped: {})",
        report.records,
        report.destination.display(),
        report.skipped
    );
}
