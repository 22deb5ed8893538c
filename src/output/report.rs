// Keyword report writer.
//
// The table is rendered completely in memory and then written with a single
// call, so a failed run never leaves a half-written report behind.

use std::path::Path;

use tracing::info;

use crate::error::{Result, ScanError};
use crate::keywords::extractor::KeywordTable;

/// Header row of the keyword report.
pub const REPORT_HEADER: [&str; 2] = ["word", "count"];

/// Render the keyword table as CSV bytes (`word,count`, no index column).
pub fn render_keyword_csv(table: &KeywordTable) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    // Written explicitly so an empty table still gets a header
    writer.write_record(REPORT_HEADER)?;
    for entry in &table.entries {
        let count = entry.count.to_string();
        writer.write_record([entry.word.as_str(), count.as_str()])?;
    }
    writer
        .into_inner()
        .map_err(|e| ScanError::MalformedInput(format!("failed to flush CSV buffer: {e}")))
}

/// Write the keyword report to `path`, replacing any existing file.
pub fn write_keyword_csv(table: &KeywordTable, path: &Path) -> Result<()> {
    let bytes = render_keyword_csv(table)?;
    std::fs::write(path, &bytes).map_err(|source| ScanError::Output {
        path: path.to_path_buf(),
        source,
    })?;
    info!(
        path = %path.display(),
        rows = table.entries.len(),
        bytes = bytes.len(),
        "Wrote keyword report"
    );
    Ok(())
}
