// src/output/csv_file.rs
// =============================================================================
// Writes a table to results/<mode>_<YYYY-mm-dd_HH-MM-SS>.csv
//
// Dialect: comma separated, every field quoted, "\n" line endings.
// =============================================================================

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::cli::Mode;
use crate::constants::DATETIME_FORMAT;
use crate::error::Result;
use crate::table::Table;

/// Creates `results_dir` if needed and writes the table into a new file.
/// Returns the path of that file.
pub fn write_csv(
    table: &Table,
    results_dir: &Path,
    mode: Mode,
    now: DateTime<Local>,
) -> Result<PathBuf> {
    fs::create_dir_all(results_dir)?;

    let file_name = format!("{}_{}.csv", mode.as_str(), now.format(DATETIME_FORMAT));
    let path = results_dir.join(file_name);

    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .flexible(true)
        .from_path(&path)?;

    for row in table.rows() {
        writer.write_record(row)?;
    }
    writer.flush()?;

    Ok(path)
}
