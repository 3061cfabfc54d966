// src/output/mod.rs
// =============================================================================
// This module shows the rows a mode produced.
//
// Formats (picked with --output):
// - none given: every row on its own line, fields separated by spaces
// - pretty: a bordered, left-aligned text table
// - file: a CSV file under results/, named after the mode and current time
// - json: the rows as a JSON array of arrays
//
// The render_* functions return Strings so they can be tested without
// capturing stdout; control_output does the printing.
// =============================================================================

mod csv_file;
mod pretty;

pub use csv_file::write_csv;
pub use pretty::render_pretty;

use chrono::Local;
use tracing::info;

use crate::cli::{Cli, OutputFormat};
use crate::error::Result;
use crate::table::Table;

/// Sends the table wherever --output asked for
pub fn control_output(table: &Table, cli: &Cli) -> Result<()> {
    match cli.output {
        None => print!("{}", render_plain(table)),
        Some(OutputFormat::Pretty) => print!("{}", render_pretty(table)),
        Some(OutputFormat::Json) => println!("{}", serde_json::to_string_pretty(table)?),
        Some(OutputFormat::File) => {
            let path = write_csv(table, &cli.results_dir(), cli.mode, Local::now())?;
            info!(path = %path.display(), "results file saved");
        }
    }
    Ok(())
}

/// One line per row, fields separated by a single space
pub fn render_plain(table: &Table) -> String {
    let mut out = String::new();
    for row in table.rows() {
        out.push_str(&row.join(" "));
        out.push('\n');
    }
    out
}
