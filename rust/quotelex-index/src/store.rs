//! The store facade tying the four index structures together.

use quotelex_common::{Result, error::Error, verify_arg};

use crate::avl::AvlIndex;
use crate::bst::BstIndex;
use crate::freq::FreqIndex;
use crate::records::{Citation, RecordArena, RecordId, WordRecord};
use crate::sorted::SortedIndex;

/// Minimum number of characters a submitted word must have. Matches the
/// normalizer contract: three-character words are rejected, four-character
/// words are accepted.
pub const MIN_WORD_CHARS: usize = 4;

/// Selects which word-keyed index answers a lookup. The three are
/// redundant views over the same records, so results are identical; only
/// the lookup cost differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexKind {
    Sorted,
    Bst,
    Avl,
}

/// Read-only view of one record as returned by lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordSnapshot {
    pub word: String,
    pub frequency: u32,
    /// Most-recent-first.
    pub citations: Vec<Citation>,
}

/// The multi-index word store.
///
/// A single-threaded batch-load-then-query structure: submissions and
/// queries never overlap and no locking is involved. The sorted index owns
/// every record; the trees hold ids only, so there is no teardown-order
/// hazard between the structures.
#[derive(Debug, Default)]
pub struct WordStore {
    sorted: SortedIndex,
    bst: BstIndex,
    avl: AvlIndex,
    freq: Option<FreqIndex>,
    freq_stale: bool,
}

impl WordStore {
    pub fn new() -> WordStore {
        WordStore::default()
    }

    /// Records one occurrence of a normalized word, returning the
    /// canonical record id.
    ///
    /// The word must already be normalized by the ingestion collaborator:
    /// lowercase alphabetic, more than three characters. A rejected word
    /// leaves all four structures untouched.
    pub fn submit(&mut self, word: &str, quote: &str, source: &str, year: i32) -> Result<RecordId> {
        verify_arg!(word, word.chars().count() >= MIN_WORD_CHARS);
        verify_arg!(word, word.chars().all(char::is_alphabetic));
        verify_arg!(word, !word.chars().any(char::is_uppercase));

        let id = self.sorted.insert_or_update(word, quote, source, year);
        self.bst.insert(self.sorted.arena(), id);
        self.avl.insert(self.sorted.arena(), id);

        // The frequency index keys on a snapshot; any later submission can
        // invalidate it.
        if self.freq.is_some() {
            self.freq_stale = true;
        }
        Ok(id)
    }

    /// Looks up a word through the selected index and snapshots the result.
    pub fn lookup_by_word(&self, word: &str, kind: IndexKind) -> Option<WordSnapshot> {
        let id = match kind {
            IndexKind::Sorted => self.sorted.search(word),
            IndexKind::Bst => self.bst.search(self.sorted.arena(), word),
            IndexKind::Avl => self.avl.search(self.sorted.arena(), word),
        }?;
        let record = self.sorted.get(id);
        Some(WordSnapshot {
            word: record.word().to_string(),
            frequency: record.frequency(),
            citations: record.citations().cloned().collect(),
        })
    }

    /// Builds (or rebuilds) the frequency index from the current contents
    /// of the sorted index and clears the staleness flag.
    ///
    /// Must be called after bulk loading and before any frequency-range
    /// query; the index is not refreshed automatically on later
    /// submissions.
    pub fn rebuild_frequency_index(&mut self) {
        self.freq = Some(FreqIndex::build(self.sorted.arena(), self.sorted.ids()));
        self.freq_stale = false;
    }

    /// Returns `(word, frequency)` pairs with `min <= frequency <= max`,
    /// in ascending-frequency order.
    ///
    /// Fails with `NotInitialized` if the frequency index was never built
    /// and with `InvalidArgument` if `max < min`. Answers from the built
    /// snapshot even when stale; callers can check
    /// [`is_frequency_index_stale`] first.
    ///
    /// [`is_frequency_index_stale`]: WordStore::is_frequency_index_stale
    pub fn lookup_by_frequency_range(&self, min: u32, max: u32) -> Result<Vec<(String, u32)>> {
        verify_arg!(range, max >= min);
        let freq = self
            .freq
            .as_ref()
            .ok_or_else(|| Error::not_initialized("frequency index"))?;

        let arena = self.sorted.arena();
        Ok(freq
            .range_query(arena, min, max)
            .into_iter()
            .map(|id| {
                let record = arena.get(id);
                (record.word().to_string(), record.frequency())
            })
            .collect())
    }

    /// True once a word has been submitted after the last frequency-index
    /// build.
    pub fn is_frequency_index_stale(&self) -> bool {
        self.freq_stale
    }

    pub fn has_frequency_index(&self) -> bool {
        self.freq.is_some()
    }

    /// Number of distinct words.
    pub fn word_count(&self) -> usize {
        self.sorted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sorted.is_empty()
    }

    pub fn record(&self, id: RecordId) -> &WordRecord {
        self.sorted.get(id)
    }

    pub fn arena(&self) -> &RecordArena {
        self.sorted.arena()
    }
}
