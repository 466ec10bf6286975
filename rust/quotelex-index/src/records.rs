//! Canonical word records and the arena that owns them.

/// Stable handle of a [`WordRecord`] within a [`RecordArena`].
///
/// Ids are dense, assigned in creation order, and never invalidated:
/// records are not removed or relocated once created. Secondary index
/// structures store `RecordId`s instead of references, which keeps them
/// trivially safe to drop in any order relative to each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RecordId(u32);

impl RecordId {
    pub(crate) fn from_index(index: usize) -> RecordId {
        // Ids are u32-wide; the arena caps out at 2^32 - 1 records.
        debug_assert!(index <= u32::MAX as usize, "record id overflow");
        RecordId(index as u32)
    }

    /// Position of the record in the arena.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// One recorded occurrence of a word: the quote it appeared in, the title
/// of the work the quote is from, and the year of that work.
///
/// Citations are immutable once created and owned by their record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Citation {
    pub quote: String,
    pub source: String,
    pub year: i32,
}

/// The canonical entry for one unique normalized word.
///
/// Created exactly once per distinct word and mutated in place on repeat
/// occurrences (frequency increment, citation prepend). Every index
/// structure resolves to the same `WordRecord`, so they always agree on
/// frequency and citations.
#[derive(Debug)]
pub struct WordRecord {
    word: String,
    frequency: u32,
    citations: Vec<Citation>,
}

impl WordRecord {
    fn new(word: String) -> WordRecord {
        WordRecord {
            word,
            frequency: 0,
            citations: Vec::new(),
        }
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    /// Number of occurrences recorded for this word. At least 1 once the
    /// record is reachable through any index.
    pub fn frequency(&self) -> u32 {
        self.frequency
    }

    /// Citations in most-recent-first order.
    ///
    /// The ledger is stored in arrival order and iterated newest-first,
    /// matching the prepend discipline of the citation list.
    pub fn citations(&self) -> impl Iterator<Item = &Citation> {
        self.citations.iter().rev()
    }

    pub fn citation_count(&self) -> usize {
        self.citations.len()
    }
}

/// Append-only owner of every [`WordRecord`].
///
/// The arena is the single point of truth for record lifetime: records are
/// created here (only the sorted index does so), never removed, and freed
/// all at once when the arena is dropped. Handles remain valid for the
/// arena's entire lifetime.
#[derive(Debug, Default)]
pub struct RecordArena {
    records: Vec<WordRecord>,
}

impl RecordArena {
    pub fn new() -> RecordArena {
        RecordArena::default()
    }

    /// Creates a record with frequency 0 and no citations. The caller must
    /// bump the frequency and attach a citation before exposing the id to
    /// any secondary index.
    pub(crate) fn create(&mut self, word: &str) -> RecordId {
        let id = RecordId::from_index(self.records.len());
        self.records.push(WordRecord::new(word.to_string()));
        id
    }

    pub(crate) fn bump_frequency(&mut self, id: RecordId) {
        self.records[id.index()].frequency += 1;
    }

    /// Attaches a new most-recent citation to the record.
    pub(crate) fn add_citation(&mut self, id: RecordId, quote: &str, source: &str, year: i32) {
        self.records[id.index()].citations.push(Citation {
            quote: quote.to_string(),
            source: source.to_string(),
            year,
        });
    }

    /// Resolves a handle. Ids are only minted by this arena and never
    /// invalidated, so resolution cannot fail for a well-typed caller.
    pub fn get(&self, id: RecordId) -> &WordRecord {
        &self.records[id.index()]
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
