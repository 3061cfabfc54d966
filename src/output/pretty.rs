// src/output/pretty.rs
//
// +-----------+-------+
// | Status    | Count |
// +-----------+-------+
// | Final     | 3     |
// | Withdrawn | 12    |
// +-----------+-------+

use prettytable::{format, Cell, Row, Table as PrettyTable};

use crate::table::Table;

/// Renders the header row as the table title and every other row below it.
/// Cells are left-aligned.
pub fn render_pretty(table: &Table) -> String {
    let mut pretty = PrettyTable::new();
    pretty.set_format(*format::consts::FORMAT_NO_LINESEP_WITH_TITLE);
    pretty.set_titles(to_row(table.header()));
    for row in table.body() {
        pretty.add_row(to_row(row));
    }
    pretty.to_string()
}

fn to_row(cells: &[String]) -> Row {
    Row::new(cells.iter().map(|cell| Cell::new(cell)).collect())
}
