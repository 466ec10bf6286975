//! Ingestion collaborators for the quotelex word store.
//!
//! This crate turns raw corpus text into the stream of
//! `(normalized_word, quote, source, year)` tuples the index core
//! consumes:
//!
//! - [`normalize`] extracts and normalizes words from quote text
//!   (alphabetic-only, lowercased, minimum-length filtered).
//! - [`parser`] parses corpus lines of the form
//!   `"quote text", "origin title", "1994"`.
//! - [`ingest`] drives a whole corpus through a [`WordStore`].
//!
//! [`WordStore`]: quotelex_index::WordStore

pub mod ingest;
pub mod normalize;
pub mod parser;

pub use ingest::{LoadStats, load_corpus, load_corpus_path};
pub use normalize::{WordTokenizer, normalize_word};
pub use parser::QuoteLine;
