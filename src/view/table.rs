//! UI-agnostic table model consumed by the TUI and the text renderer.

use serde_json::Value;

use crate::model::text;

/// Display class for a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellKind {
    #[default]
    Plain,
    /// Brace-wrapped text, shown verbatim in a fixed-width-hint style.
    /// A display heuristic for embedded structured values, not a schema:
    /// the contents are never validated.
    Structured,
}

/// One rendered cell. Null input renders as an empty plain cell.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Cell {
    pub text: String,
    pub kind: CellKind,
}

impl Cell {
    pub fn new(s: impl Into<String>) -> Self {
        let text = s.into();
        let kind = if text.starts_with('{') && text.ends_with('}') && text.len() >= 2 {
            CellKind::Structured
        } else {
            CellKind::Plain
        };
        Self { text, kind }
    }

    pub fn from_value(value: &Value) -> Self {
        Self::new(text(value))
    }

    pub fn empty() -> Self {
        Self::default()
    }
}

/// One fully built table: ordered headers, ordered rows of cells.
/// Rebuilt from scratch on every refresh; never diffed against the
/// previous contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableData {
    pub title: &'static str,
    pub headers: Vec<&'static str>,
    pub rows: Vec<Vec<Cell>>,
}

impl TableData {
    pub fn new(title: &'static str, headers: Vec<&'static str>) -> Self {
        Self {
            title,
            headers,
            rows: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_cell_kind_heuristic() {
        assert_eq!(Cell::new("plain").kind, CellKind::Plain);
        assert_eq!(Cell::new("{\"a\": 1}").kind, CellKind::Structured);
        // Lenient: wrapped but not valid JSON still counts.
        assert_eq!(Cell::new("{not json}").kind, CellKind::Structured);
        assert_eq!(Cell::new("{}").kind, CellKind::Structured);
        // One lone brace does not.
        assert_eq!(Cell::new("{").kind, CellKind::Plain);
        assert_eq!(Cell::new("a{b}").kind, CellKind::Plain);
    }

    #[test]
    fn test_cell_from_value() {
        assert_eq!(Cell::from_value(&Value::Null), Cell::empty());
        assert_eq!(Cell::from_value(&json!("bus")).text, "bus");
        // A raw JSON object renders as structured text.
        let cell = Cell::from_value(&json!({"grid": "AB"}));
        assert_eq!(cell.kind, CellKind::Structured);
        assert_eq!(cell.text, "{\"grid\":\"AB\"}");
    }
}
