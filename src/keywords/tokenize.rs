// Corpus tokenizer for keyword mining.
//
// A token is a run of at least three lowercase ASCII letters with a word
// boundary on both sides. Words glued to digits or underscores ("abc123",
// "foo_bar") have no boundary inside them and produce nothing. Accented
// letters count as word characters too, so "café" yields nothing rather
// than "caf".
//
// This is intentionally different from the whitespace splitting used by the
// text risk scorer.

use std::sync::LazyLock;

use regex_lite::Regex;

static TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[a-z]{3,}\b").expect("token pattern is valid"));

/// Word characters in the Unicode sense: letters, digits and `_`.
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Whether `text[start..end]` has a Unicode word boundary on both sides.
///
/// regex-lite only knows ASCII word characters, so its `\b` fires between
/// `é` and `a`. Matches found with `\b` are checked again with this.
pub(crate) fn has_word_boundaries(text: &str, start: usize, end: usize) -> bool {
    let before = text[..start].chars().next_back();
    let after = text[end..].chars().next();
    !before.is_some_and(is_word_char) && !after.is_some_and(is_word_char)
}

/// Lowercase `text` and return every qualifying token in order of appearance.
pub fn tokenize(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    TOKEN_RE
        .find_iter(&lower)
        .filter(|m| has_word_boundaries(&lower, m.start(), m.end()))
        .map(|m| m.as_str().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_tokens() {
        assert_eq!(
            tokenize("Verify your ACCOUNT now!"),
            vec!["verify", "your", "account", "now"]
        );
    }

    #[test]
    fn test_short_words_dropped() {
        assert_eq!(tokenize("a an the of to"), vec!["the"]);
    }

    #[test]
    fn test_digits_and_underscores_block_tokens() {
        assert!(tokenize("abc123 foo_bar 42").is_empty());
    }

    #[test]
    fn test_punctuation_splits() {
        assert_eq!(tokenize("money.bank,love"), vec!["money", "bank", "love"]);
        assert_eq!(tokenize("don't"), vec!["don"]);
    }

    #[test]
    fn test_accented_words_yield_nothing() {
        assert!(tokenize("ünïcode naïve café résumé über straße").is_empty());
        assert_eq!(tokenize("Café latte, über cheap"), vec!["latte", "cheap"]);
    }

    #[test]
    fn test_non_latin_neighbours_block_tokens() {
        assert!(tokenize("приветabc abcпривет").is_empty());
        assert_eq!(tokenize("привет abc"), vec!["abc"]);
    }

    #[test]
    fn test_boundaries_at_string_edges() {
        assert!(has_word_boundaries("abc", 0, 3));
        assert!(!has_word_boundaries("éabc", 2, 5));
        assert!(has_word_boundaries("(abc)", 1, 4));
    }

    #[test]
    fn test_empty() {
        assert!(tokenize("").is_empty());
    }
}
