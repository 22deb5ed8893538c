// Risk signal trait — the seam between individual heuristics and the verdict.
//
// Each signal looks at one aspect of a message and reports a 0-5 rating with
// the reasons behind it. The verdict only ever sees this trait, so signals
// can be added or dropped without touching the combination logic.

use serde::Serialize;

/// Highest rating a single signal can report.
pub const MAX_RATING: u32 = 5;

/// The parts of an email the signals look at.
#[derive(Debug, Clone, Default)]
pub struct EmailMessage {
    pub sender: String,
    pub subject: String,
    pub body: String,
}

/// One signal's judgement of a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Assessment {
    /// Rating from 0 (benign) to `MAX_RATING`.
    pub rating: u32,
    /// Human-readable explanations, in the order they were found.
    pub reasons: Vec<String>,
}

impl Assessment {
    /// Build an assessment, capping the raw score at `MAX_RATING`.
    pub fn capped(raw: u32, reasons: Vec<String>) -> Self {
        Self {
            rating: raw.min(MAX_RATING),
            reasons,
        }
    }

    /// Reasons joined for single-line display.
    pub fn summary(&self) -> String {
        self.reasons.join("; ")
    }
}

/// A heuristic that rates one aspect of an email.
pub trait RiskSignal {
    /// Short name used in reports ("domain", "text", "link").
    fn name(&self) -> &'static str;

    fn assess(&self, email: &EmailMessage) -> Assessment;
}
