//! Tabular datasets and row-text projection
//!
//! A [`Dataset`] is an immutable, columnar snapshot: ordered column names and
//! ordered rows of JSON cells. The labeling pipeline never works on cells
//! directly; it projects each row to a single string (a "row text") through
//! a [`ColumnSelection`].

use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Sentinel column name that selects every column of a row
pub const ALL_COLUMNS: &str = "All Columns";

/// Immutable tabular dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "DatasetParts")]
pub struct Dataset {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

/// Unvalidated shape used for deserialization
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct DatasetParts {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl TryFrom<DatasetParts> for Dataset {
    type Error = CoreError;

    fn try_from(parts: DatasetParts) -> Result<Self> {
        Dataset::new(parts.columns, parts.rows)
    }
}

/// "split" layout: `{"columns": [...], "index": [...], "data": [[...], ...]}`
#[derive(Deserialize)]
struct SplitPayload {
    columns: Vec<Value>,
    #[serde(default)]
    #[allow(dead_code)]
    index: Option<Value>,
    data: Vec<Vec<Value>>,
}

impl Dataset {
    /// Create a dataset, checking every row has one cell per column
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Value>>) -> Result<Self> {
        if let Some((row, cells)) = rows
            .iter()
            .enumerate()
            .find(|(_, cells)| cells.len() != columns.len())
        {
            return Err(CoreError::RaggedRow {
                row,
                expected: columns.len(),
                found: cells.len(),
            });
        }

        Ok(Self { columns, rows })
    }

    /// Decode a dataset serialized in the "split" JSON layout
    ///
    /// The `index` member is accepted and ignored; row identity is the
    /// position in `data`.
    pub fn from_split_json(payload: &str) -> Result<Self> {
        let split: SplitPayload = serde_json::from_str(payload)
            .map_err(|e| CoreError::InvalidDataset(e.to_string()))?;

        let columns = split.columns.iter().map(cell_text).collect();
        Self::new(columns, split.data)
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of a named column
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Project every row to its row text
    ///
    /// The result has exactly [`Dataset::len`] entries, in row order.
    pub fn row_texts(&self, selection: &ColumnSelection) -> Result<Vec<String>> {
        match selection {
            ColumnSelection::Column(name) => {
                let idx = self
                    .column_index(name)
                    .ok_or_else(|| CoreError::UnknownColumn(name.clone()))?;
                Ok(self.rows.iter().map(|row| cell_text(&row[idx])).collect())
            }
            ColumnSelection::AllColumns => Ok(self
                .rows
                .iter()
                .map(|row| row.iter().map(cell_text).collect::<Vec<_>>().join(" "))
                .collect()),
        }
    }

    /// Render the header and the first `limit` rows as CSV
    pub fn head_csv(&self, limit: usize) -> String {
        let mut out = String::new();
        push_csv_record(&mut out, self.columns.iter().map(String::as_str));
        for row in self.rows.iter().take(limit) {
            let cells: Vec<String> = row.iter().map(cell_text).collect();
            push_csv_record(&mut out, cells.iter().map(String::as_str));
        }
        out
    }
}

/// String form of a single cell; null renders as an empty string
pub fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}

fn push_csv_record<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>) {
    let fields: Vec<String> = cells
        .map(|cell| {
            if cell.contains([',', '"', '\n', '\r']) {
                format!("\"{}\"", cell.replace('"', "\"\""))
            } else {
                cell.to_string()
            }
        })
        .collect();
    out.push_str(&fields.join(","));
    out.push('\n');
}

/// Which part of a row is labeled
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ColumnSelection {
    /// A single named column
    Column(String),
    /// Every column, space-joined in column order
    AllColumns,
}

impl ColumnSelection {
    pub fn column(name: impl Into<String>) -> Self {
        ColumnSelection::Column(name.into())
    }
}

impl From<&str> for ColumnSelection {
    fn from(name: &str) -> Self {
        if name == ALL_COLUMNS {
            ColumnSelection::AllColumns
        } else {
            ColumnSelection::Column(name.to_string())
        }
    }
}

impl From<String> for ColumnSelection {
    fn from(name: String) -> Self {
        if name == ALL_COLUMNS {
            ColumnSelection::AllColumns
        } else {
            ColumnSelection::Column(name)
        }
    }
}

impl From<ColumnSelection> for String {
    fn from(selection: ColumnSelection) -> Self {
        match selection {
            ColumnSelection::Column(name) => name,
            ColumnSelection::AllColumns => ALL_COLUMNS.to_string(),
        }
    }
}

impl fmt::Display for ColumnSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnSelection::Column(name) => write!(f, "{}", name),
            ColumnSelection::AllColumns => write!(f, "{}", ALL_COLUMNS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn vehicles() -> Dataset {
        Dataset::new(
            vec!["name".to_string(), "wheels".to_string()],
            vec![
                vec![json!("red car"), json!(4)],
                vec![json!("blue bike"), json!(2)],
                vec![Value::Null, json!(18)],
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_single_column_projection() {
        let texts = vehicles()
            .row_texts(&ColumnSelection::column("name"))
            .unwrap();
        assert_eq!(texts, vec!["red car", "blue bike", ""]);
    }

    #[test]
    fn test_all_columns_projection() {
        let texts = vehicles().row_texts(&ColumnSelection::AllColumns).unwrap();
        assert_eq!(texts, vec!["red car 4", "blue bike 2", " 18"]);
    }

    #[test]
    fn test_unknown_column() {
        let err = vehicles()
            .row_texts(&ColumnSelection::column("colour"))
            .unwrap_err();
        assert!(matches!(err, CoreError::UnknownColumn(ref c) if c == "colour"));
    }

    #[test]
    fn test_ragged_row_rejected() {
        let err = Dataset::new(
            vec!["a".to_string(), "b".to_string()],
            vec![vec![json!(1), json!(2)], vec![json!(3)]],
        )
        .unwrap_err();
        assert!(matches!(
            err,
            CoreError::RaggedRow {
                row: 1,
                expected: 2,
                found: 1
            }
        ));
    }

    #[test]
    fn test_from_split_json() {
        let payload = r#"{"columns":["text","score"],"index":[0,1],"data":[["hello",1.5],["world",null]]}"#;
        let dataset = Dataset::from_split_json(payload).unwrap();

        assert_eq!(dataset.columns(), &["text".to_string(), "score".to_string()]);
        assert_eq!(dataset.len(), 2);
        assert_eq!(
            dataset.row_texts(&ColumnSelection::column("score")).unwrap(),
            vec!["1.5", ""]
        );
    }

    #[test]
    fn test_from_split_json_malformed() {
        let err = Dataset::from_split_json("{not json").unwrap_err();
        assert!(matches!(err, CoreError::InvalidDataset(_)));
    }

    #[test]
    fn test_serde_reencodes() {
        let dataset = vehicles();
        let encoded = serde_json::to_string(&dataset).unwrap();
        let decoded: Dataset = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, dataset);
    }

    #[test]
    fn test_deserialize_requires_rows() {
        let result: std::result::Result<Dataset, _> =
            serde_json::from_str(r#"{"columns":["a"]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_rejects_split_layout() {
        let result: std::result::Result<Dataset, _> =
            serde_json::from_str(r#"{"columns":["a"],"rows":[],"data":[[1]]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_validates_rows() {
        let result: std::result::Result<Dataset, _> =
            serde_json::from_str(r#"{"columns":["a"],"rows":[[1,2]]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_head_csv_quotes_and_limits() {
        let dataset = Dataset::new(
            vec!["note".to_string(), "n".to_string()],
            vec![
                vec![json!("plain"), json!(1)],
                vec![json!("has, comma"), json!(2)],
                vec![json!("say \"hi\""), json!(3)],
            ],
        )
        .unwrap();

        assert_eq!(
            dataset.head_csv(2),
            "note,n\nplain,1\n\"has, comma\",2\n"
        );
        assert!(dataset.head_csv(10).ends_with("\"say \"\"hi\"\"\",3\n"));
    }

    #[test]
    fn test_column_selection_sentinel() {
        assert_eq!(ColumnSelection::from("All Columns"), ColumnSelection::AllColumns);
        assert_eq!(
            ColumnSelection::from("body"),
            ColumnSelection::Column("body".to_string())
        );
        assert_eq!(ColumnSelection::AllColumns.to_string(), ALL_COLUMNS);

        let json = serde_json::to_string(&ColumnSelection::AllColumns).unwrap();
        assert_eq!(json, "\"All Columns\"");
    }
}
