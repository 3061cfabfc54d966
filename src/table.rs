// src/table.rs
// =============================================================================
// The rows a mode produces.
//
// A Table always starts with its header row, so rows()[0] is the header for
// every mode. Rows are plain strings; counts are formatted before they are
// pushed.
// =============================================================================

use serde::Serialize;

pub type Row = Vec<String>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Table {
    rows: Vec<Row>,
}

impl Table {
    pub fn with_header(header: &[&str]) -> Self {
        Table {
            rows: vec![header.iter().map(|h| h.to_string()).collect()],
        }
    }

    pub fn push(&mut self, row: Row) {
        self.rows.push(row);
    }

    /// All rows, header first
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn header(&self) -> &Row {
        &self.rows[0]
    }

    /// Rows after the header
    pub fn body(&self) -> &[Row] {
        &self.rows[1..]
    }
}
