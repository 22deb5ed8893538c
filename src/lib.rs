// phishscan: suspicious keyword mining and heuristic phishing risk scoring.
//
// This is the library root. Each module corresponds to one stage or signal
// of the tool; the binary in main.rs is a thin CLI over it.

pub mod config;
pub mod dataset;
pub mod error;
pub mod keywords;
pub mod output;
pub mod pipeline;
pub mod scoring;

pub use error::{Result, ScanError};
pub use keywords::extractor::{KeywordExtractor, KeywordTable};
pub use scoring::text::{score, TextScorer};
