//! Command implementations for quotelex-cmd

use std::time::Instant;

use anyhow::{Context, Result};
use quotelex_index::WordStore;
use quotelex_text::{LoadStats, load_corpus_path};

pub mod lookup;
pub mod range;
pub mod stats;

/// Loads a corpus file into a fresh store, reporting the elapsed time.
pub fn load_store(file: &str) -> Result<(WordStore, LoadStats, f64)> {
    let mut store = WordStore::new();
    let start = Instant::now();
    let stats = load_corpus_path(file, &mut store)
        .with_context(|| format!("Failed to load corpus '{file}'"))?;
    let elapsed_ms = elapsed_ms(start);
    Ok((store, stats, elapsed_ms))
}

pub fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}
