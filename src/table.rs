//! Tabular snapshots of the event logs.
//!
//! A [`Table`] is an ordered sequence of fixed-shape rows with named columns:
//! the in-memory equivalent of a data frame, suitable for handing to
//! downstream analysis tooling. Tables are deep copies of logger state —
//! mutating a table never affects the logger it came from.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single cell in a [`Table`] row.
///
/// The variant set is closed: event logs only ever carry opaque strings,
/// timestamps, and metric values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Cell {
    /// UTF-8 string (user ids, variant names, metric names)
    Str(String),
    /// Wall-clock timestamp
    Timestamp(DateTime<Utc>),
    /// Metric value
    Float(f64),
}

impl Cell {
    /// Returns the type name as a string (for error messages)
    pub fn type_name(&self) -> &'static str {
        match self {
            Cell::Str(_) => "Str",
            Cell::Timestamp(_) => "Timestamp",
            Cell::Float(_) => "Float",
        }
    }

    /// Try to get as string slice
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Cell::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get as timestamp
    pub fn as_timestamp(&self) -> Option<DateTime<Utc>> {
        match self {
            Cell::Timestamp(t) => Some(*t),
            _ => None,
        }
    }

    /// Try to get as f64
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Cell::Float(f) => Some(*f),
            _ => None,
        }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cell::Str(s) => write!(f, "{}", s),
            Cell::Timestamp(t) => write!(f, "{}", t.format("%Y-%m-%d %H:%M:%S%.6f")),
            Cell::Float(v) => write!(f, "{}", v),
        }
    }
}

/// An ordered table with named columns.
///
/// Rows preserve the insertion order of the log they were copied from.
/// Every row has exactly `columns().len()` cells.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    /// Build a table from column names and rows.
    ///
    /// Callers must supply rows whose width matches `columns`; the logger
    /// accessors are the only constructors in practice and always do.
    pub(crate) fn new(columns: Vec<String>, rows: Vec<Vec<Cell>>) -> Self {
        debug_assert!(rows.iter().all(|r| r.len() == columns.len()));
        Self { columns, rows }
    }

    /// Column names, in declaration order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Rows, in insertion order.
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// Mutable access to the rows.
    ///
    /// The table is an owned copy, so mutation here never reaches the logger.
    pub fn rows_mut(&mut self) -> &mut Vec<Vec<Cell>> {
        &mut self.rows
    }

    /// Convert to a JSON array of objects keyed by column name.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let json = logger.visit_log().to_json();
    /// // [{"user_id": "u1", "visit_timestamp": "2026-08-30T12:00:00Z"}, ...]
    /// ```
    pub fn to_json(&self) -> serde_json::Value {
        let objects: Vec<serde_json::Value> = self
            .rows
            .iter()
            .map(|row| {
                let map: serde_json::Map<String, serde_json::Value> = self
                    .columns
                    .iter()
                    .cloned()
                    .zip(row.iter().map(cell_json))
                    .collect();
                serde_json::Value::Object(map)
            })
            .collect();
        serde_json::Value::Array(objects)
    }
}

// Flatten cells for JSON output: strings and floats as themselves,
// timestamps as RFC 3339 strings.
fn cell_json(cell: &Cell) -> serde_json::Value {
    match cell {
        Cell::Str(s) => serde_json::Value::String(s.clone()),
        Cell::Timestamp(t) => serde_json::Value::String(t.to_rfc3339()),
        Cell::Float(v) => serde_json::json!(v),
    }
}

impl std::fmt::Display for Table {
    /// Render as an aligned text table (header row, then data rows).
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut widths: Vec<usize> = self.columns.iter().map(|c| c.len()).collect();
        let rendered: Vec<Vec<String>> = self
            .rows
            .iter()
            .map(|row| row.iter().map(|c| c.to_string()).collect())
            .collect();
        for row in &rendered {
            for (i, cell) in row.iter().enumerate() {
                widths[i] = widths[i].max(cell.len());
            }
        }
        for (i, col) in self.columns.iter().enumerate() {
            if i > 0 {
                write!(f, "  ")?;
            }
            write!(f, "{:<width$}", col, width = widths[i])?;
        }
        writeln!(f)?;
        for row in &rendered {
            for (i, cell) in row.iter().enumerate() {
                if i > 0 {
                    write!(f, "  ")?;
                }
                write!(f, "{:<width$}", cell, width = widths[i])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Table {
        Table::new(
            vec!["user_id".into(), "variant_name".into()],
            vec![
                vec![Cell::Str("u1".into()), Cell::Str("A".into())],
                vec![Cell::Str("u2".into()), Cell::Str("B".into())],
            ],
        )
    }

    #[test]
    fn accessors_report_shape() {
        let t = sample();
        assert_eq!(t.len(), 2);
        assert_eq!(t.width(), 2);
        assert!(!t.is_empty());
        assert_eq!(t.columns(), &["user_id".to_string(), "variant_name".to_string()]);
    }

    #[test]
    fn cell_accessors_are_type_checked() {
        let c = Cell::Str("u1".into());
        assert_eq!(c.as_str(), Some("u1"));
        assert_eq!(c.as_float(), None);
        assert_eq!(c.type_name(), "Str");

        let f = Cell::Float(1.5);
        assert_eq!(f.as_float(), Some(1.5));
        assert_eq!(f.as_str(), None);
    }

    #[test]
    fn to_json_keys_rows_by_column_name() {
        let json = sample().to_json();
        assert_eq!(
            json,
            serde_json::json!([
                {"user_id": "u1", "variant_name": "A"},
                {"user_id": "u2", "variant_name": "B"},
            ])
        );
    }

    #[test]
    fn display_renders_header_and_rows() {
        let out = sample().to_string();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("user_id"));
        assert!(lines[1].starts_with("u1"));
    }
}
