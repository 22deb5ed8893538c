// Error taxonomy for the library side of phishscan.
//
// Every error is fatal to the invocation that raised it. The CLI wraps these
// in anyhow with extra context; library callers can match on the variant.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScanError {
    /// The input path does not resolve to an existing file.
    #[error("input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    /// A required column is absent from the dataset.
    #[error("missing required column: {0}")]
    MissingColumn(String),

    /// The table could not be read or has an unusable shape.
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// Writing the report failed.
    #[error("failed to write {}: {source}", .path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ScanError>;

impl From<csv::Error> for ScanError {
    fn from(err: csv::Error) -> Self {
        ScanError::MalformedInput(err.to_string())
    }
}

impl From<calamine::Error> for ScanError {
    fn from(err: calamine::Error) -> Self {
        ScanError::MalformedInput(err.to_string())
    }
}
