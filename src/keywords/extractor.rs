// Suspicious keyword extraction.
//
// Picks the rows labeled suspicious, joins their text into one corpus and
// ranks every token by how often it appears. Column validation happens up
// front so a bad dataset fails before any output exists.

use tracing::info;

use super::count::{FrequencyCounter, KeywordCount};
use super::tokenize::tokenize;
use crate::dataset::Dataset;
use crate::error::{Result, ScanError};

/// Column holding the ground-truth label.
pub const LABEL_COLUMN: &str = "label";

/// Accepted text columns, in priority order.
pub const TEXT_COLUMNS: [&str; 4] = ["subject", "text", "body", "content"];

/// Label value marking a suspicious record.
pub const SUSPICIOUS_LABEL: i64 = 1;

/// The ranked keywords of one extraction run.
#[derive(Debug, Clone, PartialEq)]
pub struct KeywordTable {
    /// Ranked entries, most frequent first.
    pub entries: Vec<KeywordCount>,
    /// The text column the corpus was built from.
    pub text_column: String,
    /// Rows in the dataset.
    pub rows_scanned: usize,
    /// Rows that passed the label filter.
    pub suspicious_rows: usize,
}

impl KeywordTable {
    /// Sum of all counts — the number of qualifying tokens in the corpus.
    pub fn total_tokens(&self) -> u64 {
        self.entries.iter().map(|e| e.count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Extracts ranked keywords from the suspicious rows of a dataset.
pub struct KeywordExtractor {
    pub label_column: String,
    pub text_columns: Vec<String>,
    pub suspicious_label: i64,
}

impl Default for KeywordExtractor {
    fn default() -> Self {
        Self {
            label_column: LABEL_COLUMN.to_string(),
            text_columns: TEXT_COLUMNS.iter().map(|c| c.to_string()).collect(),
            suspicious_label: SUSPICIOUS_LABEL,
        }
    }
}

impl KeywordExtractor {
    /// Resolve the label column and the highest-priority text column.
    pub fn resolve_columns(&self, dataset: &Dataset) -> Result<(usize, String, usize)> {
        let label_idx = dataset.require_column(&self.label_column)?;

        let names: Vec<&str> = self.text_columns.iter().map(String::as_str).collect();
        let (text_name, text_idx) = dataset.first_column_of(&names).ok_or_else(|| {
            ScanError::MissingColumn(format!("one of {}", names.join(", ")))
        })?;

        Ok((label_idx, text_name.to_string(), text_idx))
    }

    /// Join the text of every suspicious row with single spaces.
    pub fn suspicious_corpus(&self, dataset: &Dataset) -> Result<(String, usize)> {
        let (label_idx, _, text_idx) = self.resolve_columns(dataset)?;
        Ok(self.corpus_from(dataset, label_idx, text_idx))
    }

    /// Build the corpus from already resolved column indices.
    fn corpus_from(
        &self,
        dataset: &Dataset,
        label_idx: usize,
        text_idx: usize,
    ) -> (String, usize) {
        let texts: Vec<String> = dataset
            .rows()
            .filter(|row| row[label_idx].equals_int(self.suspicious_label))
            .map(|row| row[text_idx].to_text())
            .collect();

        let selected = texts.len();
        (texts.join(" "), selected)
    }

    /// Count and rank the tokens of the suspicious corpus.
    pub fn extract(&self, dataset: &Dataset) -> Result<KeywordTable> {
        let (label_idx, text_column, text_idx) = self.resolve_columns(dataset)?;
        let (corpus, suspicious_rows) = self.corpus_from(dataset, label_idx, text_idx);

        let mut counter = FrequencyCounter::new();
        counter.extend(tokenize(&corpus));

        info!(
            rows = dataset.len(),
            suspicious_rows,
            column = %text_column,
            tokens = counter.total(),
            distinct = counter.distinct(),
            "Counted suspicious keywords"
        );

        Ok(KeywordTable {
            entries: counter.ranked(),
            text_column,
            rows_scanned: dataset.len(),
            suspicious_rows,
        })
    }
}
