//! Word extraction and normalization for quote text.
//!
//! Normalization keeps only alphabetic characters, lowercases them, and
//! discards anything shorter than [`MIN_WORD_CHARS`] characters. The index
//! core enforces the same contract at its `submit` boundary; every word
//! produced here passes it.

use quotelex_index::MIN_WORD_CHARS;

/// Characters that separate words inside a quote.
const DELIMITERS: &str = " .,!?;:()[]{}-_\t\n\r";

/// Normalizes a single raw token: strips non-alphabetic characters,
/// lowercases the rest, and rejects results with fewer than
/// [`MIN_WORD_CHARS`] characters.
///
/// ```
/// use quotelex_text::normalize_word;
///
/// assert_eq!(normalize_word("Lions,"), Some("lions".to_string()));
/// assert_eq!(normalize_word("don't"), Some("dont".to_string()));
/// assert_eq!(normalize_word("cat"), None);
/// ```
pub fn normalize_word(raw: &str) -> Option<String> {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_alphabetic())
        .flat_map(char::to_lowercase)
        .collect();
    if cleaned.chars().count() < MIN_WORD_CHARS {
        return None;
    }
    Some(cleaned)
}

/// Splits quote text into normalized words.
///
/// Splitting happens on the delimiter set first; each resulting token is
/// then normalized independently, so punctuation that is not a delimiter
/// (an apostrophe, say) is stripped from within the token rather than
/// splitting it.
#[derive(Debug, Default)]
pub struct WordTokenizer;

impl WordTokenizer {
    pub fn new() -> WordTokenizer {
        WordTokenizer
    }

    /// Extracts normalized words from the input as an iterator. Tokens
    /// that normalize to fewer than the minimum characters are excluded
    /// entirely.
    pub fn tokenize<'a>(&self, input: &'a str) -> impl Iterator<Item = String> + 'a {
        input
            .split(|c: char| DELIMITERS.contains(c))
            .filter_map(normalize_word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_word_extraction() {
        let tokenizer = WordTokenizer::new();
        let words: Vec<String> = tokenizer
            .tokenize("May the Force be with you, always!")
            .collect();
        assert_eq!(words, vec!["force", "with", "always"]);
    }

    #[test]
    fn minimum_length_boundary() {
        // Exactly 3 characters is rejected, 4 is accepted.
        assert_eq!(normalize_word("cat"), None);
        assert_eq!(normalize_word("cats"), Some("cats".to_string()));
        // Length is checked after cleaning: "cat!" still has 3 letters.
        assert_eq!(normalize_word("cat!"), None);
    }

    #[test]
    fn strips_digits_and_punctuation() {
        assert_eq!(normalize_word("h3llo"), Some("hllo".to_string()));
        assert_eq!(normalize_word("don't"), Some("dont".to_string()));
        assert_eq!(normalize_word("1234"), None);
        assert_eq!(normalize_word(""), None);
    }

    #[test]
    fn lowercases_everything() {
        assert_eq!(normalize_word("FORCE"), Some("force".to_string()));
        assert_eq!(normalize_word("McFly"), Some("mcfly".to_string()));
    }

    #[test]
    fn empty_and_delimiter_only_input() {
        let tokenizer = WordTokenizer::new();
        assert_eq!(tokenizer.tokenize("").count(), 0);
        assert_eq!(tokenizer.tokenize(" .,!? -- ()").count(), 0);
    }

    #[test]
    fn hyphens_split_words() {
        let tokenizer = WordTokenizer::new();
        let words: Vec<String> = tokenizer.tokenize("merry-go-round").collect();
        // Each hyphen-separated piece normalizes on its own.
        assert_eq!(words, vec!["merry", "round"]);
    }
}
