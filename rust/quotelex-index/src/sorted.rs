//! The sorted word-keyed index: an ordered vector of record handles
//! searched by binary search.
//!
//! This is the authoritative store. It owns the [`RecordArena`] and is the
//! only component that creates records; the tree indexes receive the ids it
//! returns and never allocate or mutate record contents.

use crate::records::{RecordArena, RecordId, WordRecord};

/// Word-keyed index over an ordered vector, plus ownership of the record
/// arena itself.
///
/// The order vector holds record ids in strictly ascending lexical (byte)
/// order of the referenced words, with no duplicate keys. Insertion keeps
/// the order by shifting entries at or above the computed rank one slot
/// right; lookups are plain binary searches.
#[derive(Debug, Default)]
pub struct SortedIndex {
    arena: RecordArena,
    order: Vec<RecordId>,
}

impl SortedIndex {
    pub fn new() -> SortedIndex {
        SortedIndex::default()
    }

    /// Inserts a new word or updates the existing record for it, returning
    /// the canonical record id either way.
    ///
    /// On a hit the record's frequency is incremented and the citation
    /// prepended; the order vector is untouched. On a miss a record is
    /// created with frequency 1 and one citation, and its id is spliced in
    /// at the rank where the search ended (rank 0 for a new minimum, `len`
    /// for a new maximum).
    pub fn insert_or_update(&mut self, word: &str, quote: &str, source: &str, year: i32) -> RecordId {
        let arena = &self.arena;
        match self
            .order
            .binary_search_by(|id| arena.get(*id).word().cmp(word))
        {
            Ok(pos) => {
                let id = self.order[pos];
                self.arena.bump_frequency(id);
                self.arena.add_citation(id, quote, source, year);
                id
            }
            Err(pos) => {
                let id = self.arena.create(word);
                self.arena.bump_frequency(id);
                self.arena.add_citation(id, quote, source, year);
                self.order.insert(pos, id);
                id
            }
        }
    }

    /// Binary search for an exact word. Read-only.
    pub fn search(&self, word: &str) -> Option<RecordId> {
        let arena = &self.arena;
        self.order
            .binary_search_by(|id| arena.get(*id).word().cmp(word))
            .ok()
            .map(|pos| self.order[pos])
    }

    /// Record ids in ascending word order. This is the snapshot the
    /// frequency index is built from.
    pub fn ids(&self) -> &[RecordId] {
        &self.order
    }

    pub fn arena(&self) -> &RecordArena {
        &self.arena
    }

    pub fn get(&self, id: RecordId) -> &WordRecord {
        self.arena.get(id)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
