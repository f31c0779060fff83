//! Tabular preview data parsed from the read endpoint.

use serde_json::{Map, Value};

/// Parsed content of a CSV/Excel file: ordered columns plus one flat
/// record per row.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TablePreview {
    /// Column names, in the key order of the first row.
    pub columns: Vec<String>,
    pub rows: Vec<Map<String, Value>>,
}

impl TablePreview {
    /// Build a preview from the raw records returned by the read endpoint.
    ///
    /// The column set and order come from the first row (empty when there
    /// are no rows). Later rows may miss or add keys: missing cells render
    /// empty, extra keys are ignored.
    pub fn from_rows(rows: Vec<Map<String, Value>>) -> Self {
        let columns = rows
            .first()
            .map(|row| row.keys().cloned().collect())
            .unwrap_or_default();
        Self { columns, rows }
    }

    /// Cell text for one row and column.
    pub fn cell(&self, row: &Map<String, Value>, column: &str) -> String {
        row.get(column).map(display_value).unwrap_or_default()
    }
}

/// Render a JSON value the way a spreadsheet cell would show it.
fn display_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(json: &str) -> Vec<Map<String, Value>> {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn columns_follow_the_first_rows_key_order() {
        let preview = TablePreview::from_rows(rows(
            r#"[{"account": "A-1", "name": "first", "balance": 10}]"#,
        ));
        assert_eq!(preview.columns, ["account", "name", "balance"]);
    }

    #[test]
    fn no_rows_means_no_columns() {
        let preview = TablePreview::from_rows(Vec::new());
        assert!(preview.columns.is_empty());
        assert!(preview.rows.is_empty());
    }

    #[test]
    fn rows_with_differing_keys_are_tolerated() {
        let preview = TablePreview::from_rows(rows(
            r#"[{"a": 1, "b": 2}, {"a": 3, "extra": true}]"#,
        ));
        assert_eq!(preview.columns, ["a", "b"]);
        // Missing key renders empty, the extra key is simply never asked for.
        assert_eq!(preview.cell(&preview.rows[1], "b"), "");
        assert_eq!(preview.cell(&preview.rows[1], "a"), "3");
    }

    #[test]
    fn cells_render_like_spreadsheet_values() {
        let preview = TablePreview::from_rows(rows(
            r#"[{"s": "text", "n": 2048, "f": 1.5, "b": true, "z": null}]"#,
        ));
        let row = &preview.rows[0];
        assert_eq!(preview.cell(row, "s"), "text");
        assert_eq!(preview.cell(row, "n"), "2048");
        assert_eq!(preview.cell(row, "f"), "1.5");
        assert_eq!(preview.cell(row, "b"), "true");
        assert_eq!(preview.cell(row, "z"), "");
    }
}
