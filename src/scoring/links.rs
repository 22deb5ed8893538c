// Link risk — URLs and bare domains found in an email body.
//
// Domain lists are mined from a labeled dataset: the most common link domains
// in legitimate mail become "trusted", the most common in phishing mail
// become "untrusted", and phishing domains that closely resemble a trusted
// one become "fake". When no dataset is available a small built-in set is
// used instead.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex_lite::Regex;
use serde::Serialize;
use tracing::info;

use super::similarity::closest_match;
use super::traits::{Assessment, EmailMessage, RiskSignal};
use crate::dataset::Dataset;
use crate::error::Result;
use crate::keywords::count::FrequencyCounter;
use crate::keywords::tokenize::has_word_boundaries;

/// URLs with a scheme or a leading `www.`.
static URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(https?://[^\s)]+|www\.[^\s)]+)").expect("URL pattern is valid")
});

/// Bare domains such as `example.com` or `abc.co.uk`.
static BARE_DOMAIN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:[A-Za-z0-9-]+\.)+[A-Za-z]{2,}\b").expect("domain pattern is valid")
});

const TRAILING_PUNCT: &[char] = &['.', ',', ';', ':', '!', ')'];

/// Similarity at which a link domain counts as a look-alike of a trusted one.
pub const LOOKALIKE_CUTOFF: f64 = 0.75;

/// Entries kept per mined list.
pub const LIST_SIZE: usize = 20;

/// Rows considered when mining lists from a dataset.
pub const DEFAULT_ROW_LIMIT: usize = 4000;

pub const UNTRUSTED_WEIGHT: u32 = 5;
pub const FAKE_WEIGHT: u32 = 3;
pub const UNKNOWN_WEIGHT: u32 = 1;

/// Extract URLs and bare domains from text.
///
/// Scheme/`www.` URLs come first, then bare domains. Domains that are part of
/// an email address or glued to non-ASCII letters are skipped. Trailing punctuation is removed and each
/// result appears once, at its first position.
pub fn extract_urls(text: &str) -> Vec<String> {
    let mut found: Vec<&str> = URL_RE.find_iter(text).map(|m| m.as_str()).collect();

    let mut start = 0;
    while let Some(m) = BARE_DOMAIN_RE.find_at(text, start) {
        let after_at = text[..m.start()].ends_with('@');
        if after_at || !has_word_boundaries(text, m.start(), m.end()) {
            // Retry one character further on, like a failed lookbehind would
            let step = text[m.start()..].chars().next().map_or(1, char::len_utf8);
            start = m.start() + step;
            continue;
        }
        found.push(m.as_str());
        start = m.end();
    }

    let mut seen = HashSet::new();
    let mut results = Vec::new();
    for m in found {
        let cleaned = m.trim_end_matches(TRAILING_PUNCT);
        if seen.insert(cleaned) {
            results.push(cleaned.to_string());
        }
    }
    results
}

/// Normalize a URL down to its host: no scheme, no `www.`, no path.
pub fn link_domain(url: &str) -> String {
    let url = url.trim_end_matches(TRAILING_PUNCT);
    let url = strip_prefix_ignore_case(url, "https://")
        .or_else(|| strip_prefix_ignore_case(url, "http://"))
        .unwrap_or(url);
    let url = strip_prefix_ignore_case(url, "www.").unwrap_or(url);
    url.split('/').next().unwrap_or_default().to_lowercase()
}

fn strip_prefix_ignore_case<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    let head = s.get(..prefix.len())?;
    if head.eq_ignore_ascii_case(prefix) {
        Some(&s[prefix.len()..])
    } else {
        None
    }
}

fn link_domains(text: &str) -> Vec<String> {
    extract_urls(text)
        .iter()
        .map(|u| link_domain(u))
        .filter(|d| !d.is_empty())
        .collect()
}

/// Known link domains, grouped by how much they are trusted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkLists {
    pub trusted: Vec<String>,
    pub untrusted: Vec<String>,
    pub fake: Vec<String>,
}

fn owned(list: &[&str]) -> Vec<String> {
    list.iter().map(|d| d.to_string()).collect()
}

impl Default for LinkLists {
    fn default() -> Self {
        Self {
            trusted: owned(&[
                "google.com",
                "youtube.com",
                "microsoft.com",
                "linkedin.com",
                "paypal.com",
            ]),
            untrusted: owned(&["flapprice.com", "milddear.com", "fetessteersit.com"]),
            fake: owned(&[
                "goggle.com",
                "micros0ft.com",
                "secure-paypal-login.com",
                "paypa1.com",
            ]),
        }
    }
}

impl LinkLists {
    /// Mine the lists from the first `row_limit` rows of a labeled dataset.
    ///
    /// Needs `label`, `urls` and `body` columns. Only rows flagged as
    /// containing links (`urls == 1`) contribute.
    pub fn mine(dataset: &Dataset, row_limit: usize) -> Result<Self> {
        let label_idx = dataset.require_column("label")?;
        let urls_idx = dataset.require_column("urls")?;
        let body_idx = dataset.require_column("body")?;

        let mut trusted_counter = FrequencyCounter::new();
        let mut untrusted_domains = Vec::new();

        for row in dataset.rows().take(row_limit) {
            if !row[urls_idx].equals_int(1) || row[body_idx].is_empty() {
                continue;
            }
            let body = row[body_idx].to_text();
            if row[label_idx].equals_int(0) {
                trusted_counter.extend(link_domains(&body));
            } else if row[label_idx].equals_int(1) {
                untrusted_domains.extend(link_domains(&body));
            }
        }

        let trusted = trusted_counter.most_common(LIST_SIZE);

        let mut untrusted_counter = FrequencyCounter::new();
        let mut fake_counter = FrequencyCounter::new();
        for domain in &untrusted_domains {
            untrusted_counter.add(domain);
            let candidates = trusted.iter().map(String::as_str);
            if closest_match(domain, candidates, LOOKALIKE_CUTOFF).is_some() {
                fake_counter.add(domain);
            }
        }

        let lists = Self {
            trusted,
            untrusted: untrusted_counter.most_common(LIST_SIZE),
            fake: fake_counter.most_common(LIST_SIZE),
        };

        info!(
            trusted = lists.trusted.len(),
            untrusted = lists.untrusted.len(),
            fake = lists.fake.len(),
            "Mined link domain lists"
        );

        Ok(lists)
    }
}

/// Rates the links in a message body.
#[derive(Debug, Clone, Default)]
pub struct LinkScorer {
    pub lists: LinkLists,
}

impl LinkScorer {
    pub fn new(lists: LinkLists) -> Self {
        Self { lists }
    }

    pub fn assess_body(&self, body: &str) -> Assessment {
        let mut score = 0;
        let mut reasons = Vec::new();

        for domain in link_domains(body) {
            if self.lists.trusted.contains(&domain) {
                reasons.push(format!("Trusted link: {domain}"));
            } else if self.lists.untrusted.contains(&domain) {
                reasons.push(format!("Untrustable link: {domain}"));
                score += UNTRUSTED_WEIGHT;
            } else if self.lists.fake.contains(&domain) {
                reasons.push(format!("Fake/similar link: {domain}"));
                score += FAKE_WEIGHT;
            } else if let Some(similar) = closest_match(
                &domain,
                self.lists.trusted.iter().map(String::as_str),
                LOOKALIKE_CUTOFF,
            ) {
                reasons.push(format!("Typosquatting: {domain} is similar to {similar}"));
                score += FAKE_WEIGHT;
            } else {
                reasons.push(format!("Unknown link: {domain}"));
                score += UNKNOWN_WEIGHT;
            }
        }

        Assessment::capped(score, reasons)
    }
}

impl RiskSignal for LinkScorer {
    fn name(&self) -> &'static str {
        "link"
    }

    fn assess(&self, email: &EmailMessage) -> Assessment {
        self.assess_body(&email.body)
    }
}
