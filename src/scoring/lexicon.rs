// Suspicion lexicon — the word list the text scorer matches against.

/// Words that tend to show up in phishing and spam.
pub const DEFAULT_WORDS: [&str; 10] = [
    "urgent", "verify", "password", "account", "rolex", "money", "love", "cnn", "replica", "bank",
];

/// An ordered set of lowercase words.
///
/// Order is kept so reasons list matches predictably; duplicates are dropped
/// on construction so a repeated word can never be scored twice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexicon {
    words: Vec<String>,
}

impl Lexicon {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut unique: Vec<String> = Vec::new();
        for word in words {
            let word = word.as_ref().trim().to_lowercase();
            if !word.is_empty() && !unique.contains(&word) {
                unique.push(word);
            }
        }
        Self { words: unique }
    }

    /// Parse a comma-separated list, e.g. from an environment variable.
    pub fn from_csv_list(list: &str) -> Self {
        Self::new(list.split(','))
    }

    pub fn contains(&self, token: &str) -> bool {
        self.words.iter().any(|w| w == token)
    }

    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::new(DEFAULT_WORDS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_ten_words() {
        let lexicon = Lexicon::default();
        assert_eq!(lexicon.len(), 10);
        assert!(lexicon.contains("cnn"));
        assert!(!lexicon.contains("debt"));
    }

    #[test]
    fn test_normalizes_and_dedups() {
        let lexicon = Lexicon::from_csv_list(" Money,money, BANK ,,");
        assert_eq!(lexicon.words().collect::<Vec<_>>(), vec!["money", "bank"]);
    }
}
