// Tabular datasets — typed cells under named columns.
//
// Both CSV and spreadsheet inputs end up here. Cells keep enough typing to
// answer "is this label 1?" the same way regardless of the source format.

pub mod reader;

use crate::error::{Result, ScanError};

/// Text used when a missing cell has to be rendered as part of a corpus.
pub const MISSING_TEXT: &str = "nan";

/// Raw CSV values that are read as missing rather than as text.
const NA_VALUES: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// A single typed cell value.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Int(i64),
    Float(f64),
    Bool(bool),
    Text(String),
}

impl Cell {
    /// Infer a cell type from a raw delimited-text field.
    ///
    /// Numbers and booleans are recognized after trimming; anything else is
    /// kept verbatim as text.
    pub fn parse(raw: &str) -> Self {
        if NA_VALUES.contains(&raw) {
            return Cell::Empty;
        }

        let trimmed = raw.trim();
        if let Ok(i) = trimmed.parse::<i64>() {
            return Cell::Int(i);
        }
        // f64 parsing accepts words like "inf" and "infinity", which are text here
        if trimmed.bytes().any(|b| b.is_ascii_digit()) {
            if let Ok(f) = trimmed.parse::<f64>() {
                return Cell::Float(f);
            }
        }
        match trimmed {
            "True" | "TRUE" | "true" => Cell::Bool(true),
            "False" | "FALSE" | "false" => Cell::Bool(false),
            _ => Cell::Text(raw.to_string()),
        }
    }

    /// Numeric view of the cell, if it has one.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Cell::Int(i) => Some(*i as f64),
            Cell::Float(f) => Some(*f),
            Cell::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            Cell::Empty | Cell::Text(_) => None,
        }
    }

    /// Numeric equality against an integer. Text never matches, even if it
    /// looks like a number to a human.
    pub fn equals_int(&self, value: i64) -> bool {
        self.as_f64().is_some_and(|v| v == value as f64)
    }

    /// Render the cell as text for corpus building.
    pub fn to_text(&self) -> String {
        match self {
            Cell::Empty => MISSING_TEXT.to_string(),
            Cell::Int(i) => i.to_string(),
            Cell::Float(f) if f.is_nan() => MISSING_TEXT.to_string(),
            // Whole floats keep a trailing ".0" so 1.0 does not read back as an integer
            Cell::Float(f) if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e16 => {
                format!("{f:.1}")
            }
            Cell::Float(f) => f.to_string(),
            Cell::Bool(true) => "True".to_string(),
            Cell::Bool(false) => "False".to_string(),
            Cell::Text(s) => s.clone(),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }
}

/// An in-memory table: a header row plus rows of equal width.
#[derive(Debug, Clone)]
pub struct Dataset {
    columns: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl Dataset {
    /// Build a dataset, padding short rows with empty cells.
    ///
    /// Rows wider than the header are rejected.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Cell>>) -> Result<Self> {
        let width = columns.len();
        let mut padded = Vec::with_capacity(rows.len());
        for (i, mut row) in rows.into_iter().enumerate() {
            if row.len() > width {
                return Err(ScanError::MalformedInput(format!(
                    "row {} has {} fields but the header has {}",
                    i + 1,
                    row.len(),
                    width
                )));
            }
            row.resize(width, Cell::Empty);
            padded.push(row);
        }
        Ok(Self {
            columns,
            rows: padded,
        })
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of the first column with exactly this name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Like `column_index`, but a missing column is an error.
    pub fn require_column(&self, name: &str) -> Result<usize> {
        self.column_index(name)
            .ok_or_else(|| ScanError::MissingColumn(format!("'{name}'")))
    }

    /// First column present from a priority list, with its index.
    pub fn first_column_of<'a>(&self, names: &[&'a str]) -> Option<(&'a str, usize)> {
        names
            .iter()
            .find_map(|name| self.column_index(name).map(|idx| (*name, idx)))
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.rows.iter().map(|r| r.as_slice())
    }
}
