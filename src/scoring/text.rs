// Keyword text risk score.
//
// Subject matches are worth 3 and are checked once per lexicon word. Body
// matches are positional: every occurrence counts, 2 points among the first
// 20 tokens and 1 point after that.
//
// Both sides split on whitespace only. Punctuation is not stripped, so
// "money." does not match "money".

use std::collections::HashSet;

use super::lexicon::Lexicon;
use super::traits::{Assessment, EmailMessage, RiskSignal};

pub const SUBJECT_WEIGHT: u32 = 3;
pub const EARLY_BODY_WEIGHT: u32 = 2;
pub const LATE_BODY_WEIGHT: u32 = 1;
/// Body positions below this index count as early.
pub const EARLY_BODY_TOKENS: usize = 20;

/// Scores subject/body pairs against a lexicon.
#[derive(Debug, Clone, Default)]
pub struct TextScorer {
    pub lexicon: Lexicon,
}

impl TextScorer {
    pub fn new(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    /// Raw, unbounded suspicion score.
    pub fn score(&self, subject: &str, body: &str) -> u32 {
        let subject = subject.to_lowercase();
        let subject_words: HashSet<&str> = subject.split_whitespace().collect();

        let mut score: u32 = self
            .lexicon
            .words()
            .filter(|w| subject_words.contains(w))
            .map(|_| SUBJECT_WEIGHT)
            .sum();

        let body = body.to_lowercase();
        for (i, token) in body.split_whitespace().enumerate() {
            if self.lexicon.contains(token) {
                score += if i < EARLY_BODY_TOKENS {
                    EARLY_BODY_WEIGHT
                } else {
                    LATE_BODY_WEIGHT
                };
            }
        }

        score
    }

    /// Lexicon words found in the subject and in the body, in lexicon order.
    pub fn matches(&self, subject: &str, body: &str) -> (Vec<String>, Vec<String>) {
        let subject = subject.to_lowercase();
        let subject_words: HashSet<&str> = subject.split_whitespace().collect();
        let body = body.to_lowercase();
        let body_words: HashSet<&str> = body.split_whitespace().collect();

        let in_subject = self
            .lexicon
            .words()
            .filter(|w| subject_words.contains(w))
            .map(str::to_string)
            .collect();
        let in_body = self
            .lexicon
            .words()
            .filter(|w| body_words.contains(w))
            .map(str::to_string)
            .collect();
        (in_subject, in_body)
    }
}

impl RiskSignal for TextScorer {
    fn name(&self) -> &'static str {
        "text"
    }

    fn assess(&self, email: &EmailMessage) -> Assessment {
        let raw = self.score(&email.subject, &email.body);
        let (in_subject, in_body) = self.matches(&email.subject, &email.body);

        let mut reasons = Vec::new();
        if !in_subject.is_empty() {
            reasons.push(format!("Suspicious words in subject: {}", in_subject.join(", ")));
        }
        if !in_body.is_empty() {
            reasons.push(format!("Suspicious words in body: {}", in_body.join(", ")));
        }
        Assessment::capped(raw, reasons)
    }
}

/// Score with the default lexicon.
pub fn score(subject: &str, body: &str) -> u32 {
    TextScorer::default().score(subject, body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subject_counts_once_per_word() {
        assert_eq!(score("urgent urgent URGENT", ""), 3);
        assert_eq!(score("urgent bank", ""), 6);
    }

    #[test]
    fn test_body_counts_every_occurrence() {
        assert_eq!(score("", "bank bank bank"), 6);
    }

    #[test]
    fn test_punctuation_blocks_match() {
        assert_eq!(score("money!", "send money."), 0);
    }

    #[test]
    fn test_substring_does_not_match() {
        assert_eq!(score("banking", "accountant"), 0);
    }

    #[test]
    fn test_assess_caps_and_explains() {
        let scorer = TextScorer::default();
        let email = EmailMessage {
            sender: String::new(),
            subject: "Verify your account".to_string(),
            body: "your bank password".to_string(),
        };
        let a = scorer.assess(&email);
        assert_eq!(scorer.score(&email.subject, &email.body), 10);
        assert_eq!(a.rating, 5);
        assert_eq!(
            a.reasons,
            vec![
                "Suspicious words in subject: verify, account".to_string(),
                "Suspicious words in body: password, bank".to_string(),
            ]
        );
    }

    #[test]
    fn test_assess_clean_message() {
        let a = TextScorer::default().assess(&EmailMessage::default());
        assert_eq!(a.rating, 0);
        assert!(a.reasons.is_empty());
    }
}
