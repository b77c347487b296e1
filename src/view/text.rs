//! Plain-text table rendering for one-shot mode.
//!
//! Prints the same assembled tables the TUI shows, as aligned columns.
//! Structured cells render verbatim; in a terminal everything is already
//! fixed-width, so no extra styling applies here.

use crate::view::assemble::DashboardTables;
use crate::view::table::TableData;

/// Renders one table as aligned text. Columns are padded to the widest
/// cell (or header); the last column is left unpadded.
pub fn render_table(table: &TableData) -> String {
    let columns = table.headers.len();
    let mut widths: Vec<usize> = table.headers.iter().map(|h| h.chars().count()).collect();
    for row in &table.rows {
        for (i, cell) in row.iter().enumerate().take(columns) {
            let len = cell.text.chars().count();
            if len > widths[i] {
                widths[i] = len;
            }
        }
    }

    let mut out = String::new();
    out.push_str(table.title);
    out.push('\n');

    let header: Vec<String> = table
        .headers
        .iter()
        .enumerate()
        .map(|(i, h)| pad(h, widths[i], i + 1 == columns))
        .collect();
    out.push_str(header.join("  ").trim_end());
    out.push('\n');
    out.push_str(&"-".repeat(widths.iter().sum::<usize>() + 2 * (columns.saturating_sub(1))));
    out.push('\n');

    for row in &table.rows {
        let cells: Vec<String> = row
            .iter()
            .enumerate()
            .take(columns)
            .map(|(i, c)| pad(&c.text, widths[i], i + 1 == columns))
            .collect();
        out.push_str(cells.join("  ").trim_end());
        out.push('\n');
    }

    out
}

/// Renders all three tables, blank-line separated.
pub fn render_dashboard(tables: &DashboardTables) -> String {
    [
        render_table(&tables.current),
        render_table(&tables.history),
        render_table(&tables.transmissions),
    ]
    .join("\n")
}

fn pad(s: &str, width: usize, last: bool) -> String {
    if last {
        return s.to_string();
    }
    let len = s.chars().count();
    let mut padded = String::with_capacity(width);
    padded.push_str(s);
    for _ in len..width {
        padded.push(' ');
    }
    padded
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::table::{Cell, TableData};

    fn sample() -> TableData {
        let mut table = TableData::new("Current Status", vec!["Team", "Status Code"]);
        table.rows.push(vec![Cell::new("alpha"), Cell::new("4 - ok")]);
        table.rows.push(vec![Cell::new("b"), Cell::empty()]);
        table
    }

    #[test]
    fn test_columns_align_to_widest_cell() {
        let text = render_table(&sample());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Current Status");
        assert_eq!(lines[1], "Team   Status Code");
        assert_eq!(lines[3], "alpha  4 - ok");
        // Trailing padding of empty cells is trimmed.
        assert_eq!(lines[4], "b");
    }

    #[test]
    fn test_structured_cell_renders_verbatim() {
        let mut table = TableData::new("Transmissions", vec!["Message"]);
        table.rows.push(vec![Cell::new("{\"grid\": \"AB 12\"}")]);
        let text = render_table(&table);
        assert!(text.contains("{\"grid\": \"AB 12\"}"));
    }

    #[test]
    fn test_render_is_stable_for_identical_input() {
        assert_eq!(render_table(&sample()), render_table(&sample()));
    }
}
