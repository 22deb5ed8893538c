// Frequency counting with a deterministic ranking.
//
// Ranking is by descending count, then ascending word, so two runs over the
// same data always produce the same order.

use std::collections::HashMap;

use serde::Serialize;

/// One row of a ranked frequency table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeywordCount {
    pub word: String,
    pub count: u64,
}

/// Accumulates token counts.
#[derive(Debug, Default)]
pub struct FrequencyCounter {
    counts: HashMap<String, u64>,
    total: u64,
}

impl FrequencyCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, token: &str) {
        *self.counts.entry(token.to_string()).or_insert(0) += 1;
        self.total += 1;
    }

    pub fn extend<I, S>(&mut self, tokens: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for token in tokens {
            self.add(token.as_ref());
        }
    }

    /// Number of tokens added, counting repeats.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Number of distinct tokens.
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// All entries, most frequent first.
    pub fn ranked(self) -> Vec<KeywordCount> {
        let mut entries: Vec<KeywordCount> = self
            .counts
            .into_iter()
            .map(|(word, count)| KeywordCount { word, count })
            .collect();
        entries.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word)));
        entries
    }

    /// The `n` most frequent words.
    pub fn most_common(self, n: usize) -> Vec<String> {
        self.ranked().into_iter().take(n).map(|e| e.word).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranking_with_ties() {
        let mut counter = FrequencyCounter::new();
        counter.extend(["pear", "apple", "pear", "fig", "apple", "kiwi", "pear"]);
        assert_eq!(counter.total(), 7);
        assert_eq!(counter.distinct(), 4);

        let ranked = counter.ranked();
        let words: Vec<&str> = ranked.iter().map(|e| e.word.as_str()).collect();
        assert_eq!(words, vec!["pear", "apple", "fig", "kiwi"]);
        assert_eq!(ranked[0].count, 3);
    }

    #[test]
    fn test_most_common_truncates() {
        let mut counter = FrequencyCounter::new();
        counter.extend(["a", "b", "b", "c", "c", "c"]);
        assert_eq!(counter.most_common(2), vec!["c", "b"]);
    }
}
