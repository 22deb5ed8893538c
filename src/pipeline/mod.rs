// Pipelines — the load, transform and emit glue behind each CLI command.

pub mod check;
pub mod keywords;

use std::path::Path;

use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use crate::dataset::{reader, Dataset};
use crate::error::Result;

/// Load a dataset with a spinner on the terminal.
pub fn load_dataset(path: &Path) -> Result<Dataset> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("  {spinner} {msg}")
            .expect("valid template"),
    );
    pb.set_message(format!("Reading {}", path.display()));

    let result = reader::load(path);
    pb.finish_and_clear();

    let dataset = result?;
    info!(
        path = %path.display(),
        rows = dataset.len(),
        columns = dataset.columns().len(),
        "Loaded dataset"
    );
    Ok(dataset)
}
