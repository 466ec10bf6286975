//! Bulk loading of a quote corpus into a [`WordStore`].

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use quotelex_common::{Result, error::Error};
use quotelex_index::WordStore;

use crate::normalize::WordTokenizer;
use crate::parser;

/// Counters reported after a bulk load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadStats {
    /// Well-formed corpus lines processed.
    pub lines: usize,
    /// Word occurrences submitted (after normalization and filtering).
    pub tokens: usize,
    /// Distinct words in the store after the load.
    pub unique_words: usize,
}

/// Reads corpus lines from `reader` and submits every surviving word to
/// the store. Malformed lines are skipped; the word-keyed indexes are kept
/// in sync per token, exactly as during interactive submission.
///
/// The frequency index is not built here: callers decide when bulk
/// loading is complete and invoke
/// [`WordStore::rebuild_frequency_index`] themselves.
pub fn load_corpus<R: BufRead>(reader: R, store: &mut WordStore) -> Result<LoadStats> {
    let tokenizer = WordTokenizer::new();
    let mut stats = LoadStats::default();

    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| Error::io("corpus line", e))?;
        let Some(parsed) = parser::parse_line(&line, index + 1) else {
            continue;
        };
        stats.lines += 1;

        for word in tokenizer.tokenize(&parsed.quote) {
            store.submit(&word, &parsed.quote, &parsed.source, parsed.year)?;
            stats.tokens += 1;
        }
    }

    stats.unique_words = store.word_count();
    Ok(stats)
}

/// Opens a corpus file and loads it via [`load_corpus`].
pub fn load_corpus_path(path: impl AsRef<Path>, store: &mut WordStore) -> Result<LoadStats> {
    let path = path.as_ref();
    let file = File::open(path)
        .map_err(|e| Error::io(path.display().to_string(), e))?;
    load_corpus(BufReader::new(file), store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};

    use quotelex_index::IndexKind;

    const CORPUS: &str = r#""May the Force be with you.", "Star Wars", "1977"
garbage line without fields
"Force yourself to stay calm.", "Calm Waters", "1984"
"#;

    #[test]
    fn loads_corpus_and_merges_repeats() {
        let mut store = WordStore::new();
        let stats = load_corpus(Cursor::new(CORPUS), &mut store).unwrap();

        assert_eq!(stats.lines, 2);
        // Line 1: "force", "with". Line 2: "force", "yourself", "stay", "calm".
        assert_eq!(stats.tokens, 6);
        assert_eq!(stats.unique_words, 5);

        let force = store.lookup_by_word("force", IndexKind::Sorted).unwrap();
        assert_eq!(force.frequency, 2);
        assert_eq!(force.citations.len(), 2);
        // Most recent citation first.
        assert_eq!(force.citations[0].source, "Calm Waters");
        assert_eq!(force.citations[0].year, 1984);
        assert_eq!(force.citations[1].source, "Star Wars");
    }

    #[test]
    fn short_words_never_reach_the_store() {
        let mut store = WordStore::new();
        let corpus = r#""Be the sea now or run far", "Short Words", "2000""#;
        let stats = load_corpus(Cursor::new(corpus), &mut store).unwrap();

        assert_eq!(stats.tokens, 0);
        assert!(store.is_empty());
    }

    #[test]
    fn loads_from_file_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(CORPUS.as_bytes()).unwrap();

        let mut store = WordStore::new();
        let stats = load_corpus_path(file.path(), &mut store).unwrap();
        assert_eq!(stats.unique_words, 5);
    }

    #[test]
    fn empty_corpus_is_fine() {
        let mut store = WordStore::new();
        let stats = load_corpus(Cursor::new(""), &mut store).unwrap();
        assert_eq!(stats, LoadStats::default());
        assert!(store.is_empty());
    }
}
