// Combined verdict — average of the individual signal ratings.

use serde::Serialize;

use super::traits::{Assessment, EmailMessage, RiskSignal};

/// Coarse risk band shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Band for the averaged verdict score (0-5).
    pub fn from_combined(score: f64) -> Self {
        match score {
            s if s >= 4.0 => RiskLevel::High,
            s if s >= 2.0 => RiskLevel::Medium,
            _ => RiskLevel::Low,
        }
    }

    /// Band for a standalone keyword rating (0-5).
    pub fn from_keyword_rating(rating: u32) -> Self {
        match rating {
            r if r >= 5 => RiskLevel::High,
            r if r >= 3 => RiskLevel::Medium,
            _ => RiskLevel::Low,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "LOW",
            RiskLevel::Medium => "MEDIUM",
            RiskLevel::High => "HIGH",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One signal's contribution to a verdict.
#[derive(Debug, Clone, Serialize)]
pub struct SignalResult {
    pub signal: &'static str,
    #[serde(flatten)]
    pub assessment: Assessment,
}

/// The outcome of running every signal over one message.
#[derive(Debug, Clone, Serialize)]
pub struct Verdict {
    pub signals: Vec<SignalResult>,
    /// Mean of the signal ratings.
    pub score: f64,
    pub level: RiskLevel,
}

impl Verdict {
    /// Run each signal and average the ratings. No signals means no risk.
    pub fn evaluate(email: &EmailMessage, signals: &[&dyn RiskSignal]) -> Self {
        let results: Vec<SignalResult> = signals
            .iter()
            .map(|s| SignalResult {
                signal: s.name(),
                assessment: s.assess(email),
            })
            .collect();

        let score = if results.is_empty() {
            0.0
        } else {
            let sum: u32 = results.iter().map(|r| r.assessment.rating).sum();
            sum as f64 / results.len() as f64
        };

        Self {
            signals: results,
            score,
            level: RiskLevel::from_combined(score),
        }
    }

    /// Rating reported by a named signal, if it ran.
    pub fn rating(&self, signal: &str) -> Option<u32> {
        self.signals
            .iter()
            .find(|r| r.signal == signal)
            .map(|r| r.assessment.rating)
    }
}
