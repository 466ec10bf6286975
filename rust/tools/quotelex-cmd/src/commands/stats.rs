//! Stats command implementation

use std::time::Instant;

use anyhow::Result;

use crate::commands::{elapsed_ms, load_store};

pub fn run(file: &str) -> Result<()> {
    let (mut store, stats, load_ms) = load_store(file)?;

    println!("Corpus '{file}'");
    println!("  lines processed : {}", stats.lines);
    println!("  tokens submitted: {}", stats.tokens);
    println!("  unique words    : {}", stats.unique_words);
    println!("  load time       : {load_ms:.4} ms");

    let start = Instant::now();
    store.rebuild_frequency_index();
    println!("  freq index build: {:.4} ms", elapsed_ms(start));
    Ok(())
}
