// Unit tests for the risk scorers.
//
// Tests isolated pure functions: the positional keyword score, injectable
// lexicons, sender domain rating, link rating and the verdict bands.

use phishscan::scoring::domain::DomainScorer;
use phishscan::scoring::lexicon::Lexicon;
use phishscan::scoring::links::{extract_urls, LinkScorer};
use phishscan::scoring::text::{score, TextScorer};
use phishscan::scoring::traits::{EmailMessage, RiskSignal, MAX_RATING};
use phishscan::scoring::verdict::{RiskLevel, Verdict};

/// A body of `n` filler tokens with `word` at position `at`.
fn body_with_word_at(word: &str, at: usize, n: usize) -> String {
    (0..n)
        .map(|i| if i == at { word.to_string() } else { format!("filler{i}") })
        .collect::<Vec<_>>()
        .join(" ")
}

// ============================================================
// score — documented examples
// ============================================================

#[test]
fn score_empty_is_zero() {
    assert_eq!(score("", ""), 0);
}

#[test]
fn score_subject_case_insensitive() {
    assert_eq!(score("URGENT payment", ""), 3);
}

#[test]
fn score_body_repeats_each_count() {
    // verify@1, verify@2, account@3 — all early
    assert_eq!(score("", "verify your verify account now"), 6);
}

#[test]
fn score_late_body_match_is_one() {
    assert_eq!(score("", &body_with_word_at("bank", 25, 30)), 1);
}

#[test]
fn score_early_body_match_is_two() {
    assert_eq!(score("", &body_with_word_at("bank", 5, 30)), 2);
}

#[test]
fn score_position_boundary() {
    assert_eq!(score("", &body_with_word_at("love", 19, 30)), 2);
    assert_eq!(score("", &body_with_word_at("love", 20, 30)), 1);
}

#[test]
fn score_subject_and_body_add_up() {
    // subject: rolex + replica = 6; body: money@0 = 2
    assert_eq!(score("Replica Rolex watches", "money back guaranteed"), 8);
}

#[test]
fn score_whitespace_only_splitting() {
    // Tabs and newlines separate tokens; punctuation does not
    assert_eq!(score("", "bank\tmoney\nlove"), 6);
    assert_eq!(score("", "bank, money; love!"), 0);
}

#[test]
fn score_is_unbounded() {
    let body = vec!["bank"; 100].join(" ");
    // 20 early * 2 + 80 late * 1
    assert_eq!(score("", &body), 120);
}

// ============================================================
// Injectable lexicon
// ============================================================

#[test]
fn custom_lexicon_replaces_default() {
    let scorer = TextScorer::new(Lexicon::new(["casino", "debt"]));
    assert_eq!(scorer.score("Casino night", "no debt"), 5);
    assert_eq!(scorer.score("urgent", "bank"), 0);
}

#[test]
fn empty_lexicon_scores_nothing() {
    let scorer = TextScorer::new(Lexicon::new(Vec::<String>::new()));
    assert_eq!(scorer.score("urgent", "bank"), 0);
}

#[test]
fn duplicate_lexicon_words_do_not_double_count() {
    let scorer = TextScorer::new(Lexicon::new(["bank", "BANK"]));
    assert_eq!(scorer.score("bank", ""), 3);
}

// ============================================================
// Domain signal
// ============================================================

#[test]
fn domain_trusted_is_zero() {
    assert_eq!(DomainScorer::default().assess_sender("me@edu.sg").rating, 0);
}

#[test]
fn domain_lookalike_gets_bump() {
    let a = DomainScorer::default().assess_sender("billing@hotmai1.com");
    assert_eq!(a.rating, 3);
}

#[test]
fn domain_rating_never_exceeds_max() {
    let tokens: Vec<String> = ["a", "b", "c", "d", "e"].iter().map(|t| t.to_string()).collect();
    let scorer = DomainScorer::new(vec![], tokens);
    assert_eq!(scorer.assess_sender("x@a-b-c-d.e").rating, MAX_RATING);
}

// ============================================================
// Link signal
// ============================================================

#[test]
fn links_strip_trailing_punctuation() {
    assert_eq!(extract_urls("(see http://x.org/a)."), vec!["http://x.org/a", "x.org"]);
}

#[test]
fn links_untrusted_alone_rates_max() {
    let a = LinkScorer::default().assess_body("claim at milddear.com");
    assert_eq!(a.rating, MAX_RATING);
}

#[test]
fn links_several_unknown_add_up() {
    let a = LinkScorer::default().assess_body("one.org two.org three.org");
    assert_eq!(a.rating, 3);
    assert_eq!(a.reasons.len(), 3);
}

// ============================================================
// Verdict
// ============================================================

#[test]
fn verdict_phishing_message_is_high() {
    let email = EmailMessage {
        sender: "support@gmai1.com".to_string(),
        subject: "URGENT verify your account".to_string(),
        body: "Your bank password expired, log in at flapprice.com".to_string(),
    };
    let (domain, text, link) = (
        DomainScorer::default(),
        TextScorer::default(),
        LinkScorer::default(),
    );
    let verdict = Verdict::evaluate(&email, &[&domain, &text, &link]);
    // domain 3, text 5 (capped), link 5
    assert_eq!(verdict.rating("domain"), Some(3));
    assert_eq!(verdict.rating("text"), Some(5));
    assert_eq!(verdict.rating("link"), Some(5));
    assert!((verdict.score - 13.0 / 3.0).abs() < 1e-9);
    assert_eq!(verdict.level, RiskLevel::High);
}

#[test]
fn verdict_clean_message_is_low() {
    let email = EmailMessage {
        sender: "friend@gmail.com".to_string(),
        subject: "Lunch on Friday?".to_string(),
        body: "Let me know if noon works.".to_string(),
    };
    let text = TextScorer::default();
    let link = LinkScorer::default();
    let domain = DomainScorer::default();
    let verdict = Verdict::evaluate(&email, &[&domain, &text, &link]);
    assert_eq!(verdict.score, 0.0);
    assert_eq!(verdict.level, RiskLevel::Low);
}

#[test]
fn signal_names() {
    assert_eq!(DomainScorer::default().name(), "domain");
    assert_eq!(TextScorer::default().name(), "text");
    assert_eq!(LinkScorer::default().name(), "link");
}

#[test]
fn level_display() {
    assert_eq!(RiskLevel::High.to_string(), "HIGH");
    assert_eq!(RiskLevel::Medium.to_string(), "MEDIUM");
    assert_eq!(RiskLevel::Low.to_string(), "LOW");
}
