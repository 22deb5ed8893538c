// Sender domain risk.
//
// A sender on the trusted list rates 0. Anyone else starts at 1, gains 2 for
// a domain that looks like a trusted one, and 1 per domain token that shows
// up in the mined list of suspicious tokens.

use tracing::debug;

use super::similarity::closest_match;
use super::traits::{Assessment, EmailMessage, RiskSignal};
use crate::keywords::count::FrequencyCounter;

/// Mail providers and institutions treated as trustworthy senders.
pub const DEFAULT_TRUSTED_DOMAINS: [&str; 8] = [
    "gmail.com",
    "outlook.com",
    "yahoo.com",
    "hotmail.com",
    "mail.com",
    "edu.com",
    "gov.sg",
    "edu.sg",
];

/// Similarity at which an untrusted domain counts as a look-alike.
pub const TYPOSQUAT_CUTOFF: f64 = 0.7;

pub const UNTRUSTED_BASE: u32 = 1;
pub const TYPOSQUAT_WEIGHT: u32 = 2;

/// How many mined tokens to keep.
pub const MINED_TOKEN_COUNT: usize = 20;

/// Domain part of an address: everything after the last `@`, lowercased.
/// A string without `@` is taken to be a bare domain.
pub fn sender_domain(address: &str) -> String {
    address
        .rsplit('@')
        .next()
        .unwrap_or_default()
        .trim()
        .to_lowercase()
}

/// Split a domain on dots and hyphens.
pub fn domain_tokens(domain: &str) -> Vec<String> {
    domain
        .split(['.', '-'])
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// The most common domain tokens across a list of known-bad sender addresses.
pub fn mine_suspicious_tokens<'a, I>(addresses: I, top_n: usize) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut counter = FrequencyCounter::new();
    for address in addresses {
        counter.extend(domain_tokens(&sender_domain(address)));
    }
    debug!(
        tokens = counter.total(),
        distinct = counter.distinct(),
        "Mined sender domain tokens"
    );
    counter.most_common(top_n)
}

/// Rates the sender address of a message.
#[derive(Debug, Clone)]
pub struct DomainScorer {
    pub trusted: Vec<String>,
    pub suspicious_tokens: Vec<String>,
}

impl Default for DomainScorer {
    fn default() -> Self {
        Self {
            trusted: DEFAULT_TRUSTED_DOMAINS.iter().map(|d| d.to_string()).collect(),
            suspicious_tokens: Vec::new(),
        }
    }
}

impl DomainScorer {
    pub fn new(trusted: Vec<String>, suspicious_tokens: Vec<String>) -> Self {
        Self {
            trusted,
            suspicious_tokens,
        }
    }

    pub fn is_trusted(&self, domain: &str) -> bool {
        self.trusted.iter().any(|t| t == domain)
    }

    pub fn assess_sender(&self, sender: &str) -> Assessment {
        let domain = sender_domain(sender);
        if self.is_trusted(&domain) {
            return Assessment::capped(0, vec!["Trusted domain".to_string()]);
        }

        let mut score = UNTRUSTED_BASE;
        let mut reasons = vec!["Not a trusted domain".to_string()];

        let trusted = self.trusted.iter().map(String::as_str);
        if let Some(closest) = closest_match(&domain, trusted, TYPOSQUAT_CUTOFF) {
            score += TYPOSQUAT_WEIGHT;
            reasons.push(format!("Typosquatting: similar to {closest}"));
        }

        let hits: Vec<String> = domain_tokens(&domain)
            .into_iter()
            .filter(|t| self.suspicious_tokens.contains(t))
            .collect();
        if !hits.is_empty() {
            score += hits.len() as u32;
            reasons.push(format!("Suspicious tokens: {}", hits.join(", ")));
        }

        Assessment::capped(score, reasons)
    }
}

impl RiskSignal for DomainScorer {
    fn name(&self) -> &'static str {
        "domain"
    }

    fn assess(&self, email: &EmailMessage) -> Assessment {
        self.assess_sender(&email.sender)
    }
}
