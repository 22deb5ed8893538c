use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::scoring::domain::DEFAULT_TRUSTED_DOMAINS;
use crate::scoring::lexicon::Lexicon;
use crate::scoring::links::DEFAULT_ROW_LIMIT;

/// Default keyword report path.
pub const DEFAULT_OUTPUT: &str = "suspicious_keywords.csv";

/// Rows shown in the terminal preview of the keyword report.
pub const DEFAULT_PREVIEW_ROWS: usize = 50;

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy. Every value
/// has a default, so an empty environment is a valid configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Where `keywords` writes its report when no output path is given.
    pub output_path: PathBuf,
    /// How many keyword rows to echo to the terminal.
    pub preview_rows: usize,
    /// Words the text scorer looks for.
    pub lexicon: Lexicon,
    /// Sender domains that are never flagged.
    pub trusted_domains: Vec<String>,
    /// Labeled dataset with `label`, `urls` and `body` columns for mining
    /// link lists. Built-in lists are used when unset.
    pub link_dataset: Option<PathBuf>,
    /// Rows of the link dataset to consider.
    pub link_rows: usize,
    /// Table of known-bad sender addresses for mining domain tokens.
    pub sender_list: Option<PathBuf>,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        let preview_rows = parse_usize("PHISHSCAN_PREVIEW_ROWS", DEFAULT_PREVIEW_ROWS)?;
        let link_rows = parse_usize("PHISHSCAN_LINK_ROWS", DEFAULT_ROW_LIMIT)?;

        let lexicon = match env::var("PHISHSCAN_LEXICON") {
            Ok(list) => {
                let lexicon = Lexicon::from_csv_list(&list);
                if lexicon.is_empty() {
                    anyhow::bail!("PHISHSCAN_LEXICON is set but contains no words");
                }
                lexicon
            }
            Err(_) => Lexicon::default(),
        };

        let trusted_domains = match env::var("PHISHSCAN_TRUSTED_DOMAINS") {
            Ok(list) => list
                .split(',')
                .map(|d| d.trim().to_lowercase())
                .filter(|d| !d.is_empty())
                .collect(),
            Err(_) => DEFAULT_TRUSTED_DOMAINS
                .iter()
                .map(|d| d.to_string())
                .collect(),
        };

        Ok(Self {
            output_path: env::var("PHISHSCAN_OUTPUT")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_OUTPUT)),
            preview_rows,
            lexicon,
            trusted_domains,
            link_dataset: env::var("PHISHSCAN_LINK_DATASET").ok().map(PathBuf::from),
            link_rows,
            sender_list: env::var("PHISHSCAN_SENDER_LIST").ok().map(PathBuf::from),
        })
    }
}

fn parse_usize(var: &str, default: usize) -> Result<usize> {
    match env::var(var) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{var} must be a non-negative integer, got {raw:?}")),
        Err(_) => Ok(default),
    }
}
