// Keyword report pipeline: load → extract → write.

use std::path::Path;

use crate::error::Result;
use crate::keywords::extractor::{KeywordExtractor, KeywordTable};
use crate::output::report::write_keyword_csv;

/// Extract suspicious keywords from `input` and write the report to `output`.
///
/// Nothing is written unless the dataset loads and has the required columns.
pub fn run(input: &Path, output: &Path) -> Result<KeywordTable> {
    let dataset = super::load_dataset(input)?;
    let table = KeywordExtractor::default().extract(&dataset)?;
    write_keyword_csv(&table, output)?;
    Ok(table)
}
