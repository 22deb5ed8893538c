// Dataset readers — delimited text via `csv`, spreadsheets via `calamine`.
//
// The format is picked from the file extension. Anything that is not a known
// spreadsheet or TSV extension is read as comma-separated text.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use calamine::{open_workbook_auto, Data, Range, Reader};
use tracing::debug;

use super::{Cell, Dataset};
use crate::error::{Result, ScanError};

/// Input formats understood by `load`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFormat {
    Csv,
    Tsv,
    Spreadsheet,
}

impl TableFormat {
    /// Guess the format from a path's extension (case-insensitive).
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match ext.as_deref() {
            Some("xlsx" | "xlsm" | "xlsb" | "xls" | "ods") => TableFormat::Spreadsheet,
            Some("tsv" | "tab") => TableFormat::Tsv,
            _ => TableFormat::Csv,
        }
    }
}

/// Load a dataset from disk.
///
/// Fails with `InputNotFound` before touching the file if the path does not
/// exist, and with `MalformedInput` if the contents cannot be parsed.
pub fn load(path: &Path) -> Result<Dataset> {
    if !path.is_file() {
        return Err(ScanError::InputNotFound(path.to_path_buf()));
    }

    let format = TableFormat::from_path(path);
    debug!(path = %path.display(), ?format, "Reading dataset");

    match format {
        TableFormat::Csv => read_delimited(open(path)?, b','),
        TableFormat::Tsv => read_delimited(open(path)?, b'\t'),
        TableFormat::Spreadsheet => read_spreadsheet(path),
    }
}

fn open(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| ScanError::MalformedInput(format!("{}: {e}", path.display())))
}

/// Read delimited text with a header row.
///
/// Invalid UTF-8 is replaced rather than rejected; mail corpora are rarely
/// clean.
pub fn read_delimited<R: Read>(reader: R, delimiter: u8) -> Result<Dataset> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .from_reader(reader);

    let columns: Vec<String> = reader
        .byte_headers()?
        .iter()
        .map(|h| String::from_utf8_lossy(h).into_owned())
        .collect();

    if columns.is_empty() {
        return Err(ScanError::MalformedInput("table has no header row".to_string()));
    }

    let mut rows = Vec::new();
    for record in reader.byte_records() {
        let record = record?;
        rows.push(
            record
                .iter()
                .map(|field| Cell::parse(&String::from_utf8_lossy(field)))
                .collect(),
        );
    }

    Dataset::new(columns, rows)
}

/// Read the first worksheet of a spreadsheet. Its first row is the header.
pub fn read_spreadsheet(path: &Path) -> Result<Dataset> {
    let mut workbook = open_workbook_auto(path)?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| ScanError::MalformedInput("workbook has no worksheets".to_string()))??;

    dataset_from_range(&range)
}

/// Turn a worksheet range into a dataset, taking the first row as the header.
fn dataset_from_range(range: &Range<Data>) -> Result<Dataset> {
    let mut sheet_rows = range.rows();
    let columns: Vec<String> = match sheet_rows.next() {
        Some(header) => header.iter().map(|c| c.to_string()).collect(),
        None => return Err(ScanError::MalformedInput("worksheet is empty".to_string())),
    };

    let rows = sheet_rows
        .map(|row| row.iter().map(cell_from_sheet).collect())
        .collect();

    Dataset::new(columns, rows)
}

fn cell_from_sheet(data: &Data) -> Cell {
    match data {
        Data::Empty | Data::Error(_) => Cell::Empty,
        Data::Int(i) => Cell::Int(*i),
        Data::Float(f) => Cell::Float(*f),
        Data::Bool(b) => Cell::Bool(*b),
        Data::String(s) if s.is_empty() => Cell::Empty,
        Data::String(s) => Cell::Text(s.clone()),
        other => Cell::Text(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calamine::CellErrorType;

    #[test]
    fn test_read_delimited_typed_cells() {
        let data = "label,subject\n1,Win money\n0,Lunch\n,\n";
        let ds = read_delimited(data.as_bytes(), b',').unwrap();
        assert_eq!(ds.columns(), &["label".to_string(), "subject".to_string()]);
        assert_eq!(ds.len(), 3);
        let rows: Vec<&[Cell]> = ds.rows().collect();
        assert_eq!(rows[0][0], Cell::Int(1));
        assert_eq!(rows[0][1], Cell::Text("Win money".to_string()));
        assert!(rows[2][1].is_empty());
    }

    #[test]
    fn test_read_tab_delimited() {
        let data = "label\tbody\n1\tverify now\n";
        let ds = read_delimited(data.as_bytes(), b'\t').unwrap();
        assert_eq!(ds.column_index("body"), Some(1));
    }

    #[test]
    fn test_too_many_fields_is_malformed() {
        let data = "label,body\n1,a,b\n";
        let result = read_delimited(data.as_bytes(), b',');
        assert!(matches!(result, Err(ScanError::MalformedInput(_))));
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(TableFormat::from_path(Path::new("a.XLSX")), TableFormat::Spreadsheet);
        assert_eq!(TableFormat::from_path(Path::new("a.tsv")), TableFormat::Tsv);
        assert_eq!(TableFormat::from_path(Path::new("a.csv")), TableFormat::Csv);
        assert_eq!(TableFormat::from_path(Path::new("noext")), TableFormat::Csv);
    }

    #[test]
    fn test_sheet_cell_label_typing() {
        let cases = [
            (Data::Int(1), true, "1"),
            (Data::Float(1.0), true, "1.0"),
            (Data::Float(1.5), false, "1.5"),
            (Data::Bool(true), true, "True"),
            (Data::Bool(false), false, "False"),
            (Data::String("1".to_string()), false, "1"),
            (Data::String("Win money".to_string()), false, "Win money"),
            (Data::String(String::new()), false, "nan"),
            (Data::Empty, false, "nan"),
            (Data::Error(CellErrorType::NA), false, "nan"),
            (Data::DateTimeIso("2024-01-31".to_string()), false, "2024-01-31"),
        ];
        for (data, is_one, text) in cases {
            let cell = cell_from_sheet(&data);
            assert_eq!(cell.equals_int(1), is_one, "{data:?}");
            assert_eq!(cell.to_text(), text, "{data:?}");
        }
    }

    #[test]
    fn test_dataset_from_range() {
        let mut range = Range::new((0, 0), (3, 1));
        range.set_value((0, 0), Data::String("label".to_string()));
        range.set_value((0, 1), Data::String("subject".to_string()));
        range.set_value((1, 0), Data::Float(1.0));
        range.set_value((1, 1), Data::String("Verify account".to_string()));
        range.set_value((2, 0), Data::String("1".to_string()));
        range.set_value((2, 1), Data::String("stored as text".to_string()));
        range.set_value((3, 0), Data::Int(1));

        let ds = dataset_from_range(&range).unwrap();
        assert_eq!(ds.columns(), &["label".to_string(), "subject".to_string()]);
        assert_eq!(ds.len(), 3);
        let rows: Vec<&[Cell]> = ds.rows().collect();
        assert!(rows[0][0].equals_int(1));
        assert!(!rows[1][0].equals_int(1));
        assert!(rows[2][0].equals_int(1));
        assert!(rows[2][1].is_empty());
    }

    #[test]
    fn test_empty_range_is_malformed() {
        let range: Range<Data> = Range::empty();
        let result = dataset_from_range(&range);
        assert!(matches!(result, Err(ScanError::MalformedInput(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let result = load(Path::new("/definitely/not/here.csv"));
        assert!(matches!(result, Err(ScanError::InputNotFound(_))));
    }
}
