// Message check pipeline: build the three signals and combine them.
//
// The link lists and the suspicious sender tokens both come from optional
// datasets. Either one failing to load is not fatal here; the scorer falls
// back to built-in lists and says so in the logs.

use std::path::Path;

use tracing::{info, warn};

use crate::config::Config;
use crate::error::{Result, ScanError};
use crate::scoring::domain::{mine_suspicious_tokens, DomainScorer, MINED_TOKEN_COUNT};
use crate::scoring::links::{LinkLists, LinkScorer};
use crate::scoring::text::TextScorer;
use crate::scoring::traits::EmailMessage;
use crate::scoring::verdict::Verdict;

/// The full set of signals used to judge a message.
pub struct Signals {
    pub domain: DomainScorer,
    pub text: TextScorer,
    pub link: LinkScorer,
}

impl Signals {
    /// Build the signals from configuration, falling back to built-in data
    /// when an optional dataset is missing or unusable.
    pub fn from_config(config: &Config) -> Self {
        let link_lists = match &config.link_dataset {
            Some(path) => load_link_lists(path, config.link_rows).unwrap_or_else(|e| {
                warn!(
                    path = %path.display(),
                    error = %e,
                    "Could not mine link lists, using defaults"
                );
                LinkLists::default()
            }),
            None => LinkLists::default(),
        };

        let suspicious_tokens = sender_tokens_or_empty(config.sender_list.as_deref());

        Self {
            domain: DomainScorer::new(config.trusted_domains.clone(), suspicious_tokens),
            text: TextScorer::new(config.lexicon.clone()),
            link: LinkScorer::new(link_lists),
        }
    }

    pub fn evaluate(&self, email: &EmailMessage) -> Verdict {
        let verdict = Verdict::evaluate(email, &[&self.domain, &self.text, &self.link]);
        info!(score = verdict.score, level = %verdict.level, "Evaluated message");
        verdict
    }
}

/// Mine trusted/untrusted/fake link lists from a labeled dataset on disk.
pub fn load_link_lists(path: &Path, row_limit: usize) -> Result<LinkLists> {
    let dataset = super::load_dataset(path)?;
    LinkLists::mine(&dataset, row_limit)
}

/// Mine sender tokens from an optional list, or return none when the list is
/// unset or cannot be read.
pub fn sender_tokens_or_empty(path: Option<&Path>) -> Vec<String> {
    let Some(path) = path else {
        return Vec::new();
    };
    mine_sender_tokens(path, None, MINED_TOKEN_COUNT).unwrap_or_else(|e| {
        warn!(path = %path.display(), error = %e, "Could not mine sender tokens");
        Vec::new()
    })
}

/// Mine the most common domain tokens from a table of sender addresses.
///
/// Uses the named column, or the first column when none is given. Empty
/// cells are skipped.
pub fn mine_sender_tokens(path: &Path, column: Option<&str>, top_n: usize) -> Result<Vec<String>> {
    let dataset = super::load_dataset(path)?;
    let idx = match column {
        Some(name) => dataset.require_column(name)?,
        None if dataset.columns().is_empty() => {
            return Err(ScanError::MissingColumn("sender address column".to_string()))
        }
        None => 0,
    };

    let addresses: Vec<String> = dataset
        .rows()
        .filter(|row| !row[idx].is_empty())
        .map(|row| row[idx].to_text())
        .collect();

    Ok(mine_suspicious_tokens(
        addresses.iter().map(String::as_str),
        top_n,
    ))
}
