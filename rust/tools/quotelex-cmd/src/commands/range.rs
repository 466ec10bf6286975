//! Frequency-range command implementation

use std::time::Instant;

use anyhow::{Result, bail};

use crate::commands::{elapsed_ms, load_store};

pub fn run(file: &str, min: u32, max: u32) -> Result<()> {
    if max < min {
        bail!("invalid range: max ({max}) must be at least min ({min})");
    }

    let (mut store, stats, load_ms) = load_store(file)?;
    println!(
        "Loaded {} unique words from {} lines in {load_ms:.4} ms",
        stats.unique_words, stats.lines
    );

    let start = Instant::now();
    store.rebuild_frequency_index();
    println!("Frequency index built in {:.4} ms", elapsed_ms(start));

    println!("Words with frequency between {min} and {max}:");
    let start = Instant::now();
    let results = store.lookup_by_frequency_range(min, max)?;
    let query_ms = elapsed_ms(start);

    for (word, frequency) in &results {
        println!("  - '{word}', frequency {frequency}");
    }
    println!("----------------------------------------");
    println!("{} result(s) in {query_ms:.6} ms", results.len());
    Ok(())
}
