//! Multi-index word record store.
//!
//! This crate maintains the canonical records of a quoted-text word corpus
//! and keeps them reachable through several independent index structures:
//!
//! - A sorted vector searched by binary search ([`SortedIndex`]), which is
//!   the authoritative word-keyed store and the only component that creates
//!   records.
//! - An unbalanced binary search tree ([`BstIndex`]) and an AVL-balanced
//!   tree ([`AvlIndex`]), both word-keyed, maintained as redundant views
//!   over the same records so lookup/insert costs can be compared directly.
//! - A frequency-keyed AVL tree ([`FreqIndex`]) built in one pass after
//!   bulk loading, answering range queries over occurrence counts.
//!
//! Records live in an append-only arena and are addressed by stable
//! [`RecordId`] handles; the trees store handles rather than references,
//! so dropping any secondary index never touches record data.
//!
//! [`WordStore`] ties the four structures together behind the operations a
//! caller actually uses: `submit`, `lookup_by_word`,
//! `rebuild_frequency_index` and `lookup_by_frequency_range`.

pub mod avl;
pub mod bst;
pub mod freq;
pub mod records;
pub mod sorted;
pub mod store;

pub use records::{Citation, RecordArena, RecordId, WordRecord};
pub use store::{IndexKind, MIN_WORD_CHARS, WordSnapshot, WordStore};
