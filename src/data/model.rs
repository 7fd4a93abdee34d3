use std::fmt;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Value – a single table cell
// ---------------------------------------------------------------------------

/// A dynamically-typed cell value mirroring what CSV/JSON/Parquet columns
/// commonly hold.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Float(f64),
    Integer(i64),
    Bool(bool),
    Text(String),
    Null,
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Float(v) => write!(f, "{v}"),
            Value::Integer(i) => write!(f, "{i}"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Text(s) => write!(f, "{s}"),
            Value::Null => write!(f, ""),
        }
    }
}

impl Value {
    /// Try to interpret the value as an `f64` for analysis.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(v) => Some(*v),
            Value::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Parse a raw text token (CSV cell) into the most specific variant.
    pub fn parse(token: &str) -> Value {
        let token = token.trim();
        if token.is_empty() {
            return Value::Null;
        }
        if let Ok(i) = token.parse::<i64>() {
            return Value::Integer(i);
        }
        if let Ok(f) = token.parse::<f64>() {
            return Value::Float(f);
        }
        if token == "true" || token == "false" {
            return Value::Bool(token == "true");
        }
        Value::Text(token.to_string())
    }
}

// ---------------------------------------------------------------------------
// Column extraction errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, PartialEq)]
pub enum ColumnError {
    #[error("column '{0}' not found in the loaded table")]
    NotFound(String),
    #[error("column '{name}', row {row}: '{value}' is not numeric")]
    NotNumeric {
        name: String,
        row: usize,
        value: String,
    },
}

// ---------------------------------------------------------------------------
// Table – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed dataset: one header row plus row-major cells.
/// Row order is the sample order; no sorting is applied on load.
#[derive(Debug, Clone)]
pub struct Table {
    /// Ordered column names from the source file.
    pub headers: Vec<String>,
    /// Rows of cells, each aligned 1:1 with `headers`.
    pub rows: Vec<Vec<Value>>,
}

impl Table {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<Value>>) -> Self {
        Table { headers, rows }
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of a column by name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Extract a named column as `f64` values, in row order.
    ///
    /// Every cell of the column must be numeric; the first offending cell
    /// is reported with its row number.
    pub fn numeric_column(&self, name: &str) -> Result<Vec<f64>, ColumnError> {
        let idx = self
            .column_index(name)
            .ok_or_else(|| ColumnError::NotFound(name.to_string()))?;

        self.rows
            .iter()
            .enumerate()
            .map(|(row, cells)| {
                let cell = cells.get(idx).unwrap_or(&Value::Null);
                cell.as_f64().ok_or_else(|| ColumnError::NotNumeric {
                    name: name.to_string(),
                    row,
                    value: cell.to_string(),
                })
            })
            .collect()
    }
}
