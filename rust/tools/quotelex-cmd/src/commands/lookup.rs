//! Lookup command implementation

use std::time::Instant;

use anyhow::{Result, bail};
use quotelex_index::{IndexKind, WordSnapshot};
use quotelex_text::normalize_word;

use crate::commands::{elapsed_ms, load_store};

pub fn run(file: &str, word: &str) -> Result<()> {
    let Some(normalized) = normalize_word(word) else {
        bail!("invalid word '{word}': must have more than 3 alphabetic characters");
    };

    let (store, stats, load_ms) = load_store(file)?;
    println!(
        "Loaded {} unique words from {} lines in {load_ms:.4} ms",
        stats.unique_words, stats.lines
    );
    println!("Searching for '{normalized}'");
    println!("----------------------------------------");

    for (label, kind) in [
        ("Sorted vector (binary search)", IndexKind::Sorted),
        ("Binary search tree", IndexKind::Bst),
        ("AVL tree", IndexKind::Avl),
    ] {
        let start = Instant::now();
        let snapshot = store.lookup_by_word(&normalized, kind);
        let search_ms = elapsed_ms(start);

        println!("{label}:");
        match snapshot {
            Some(snapshot) => {
                println!(
                    "  found, frequency {} (search took {search_ms:.6} ms)",
                    snapshot.frequency
                );
                print_citations(&snapshot);
            }
            None => println!("  not found (search took {search_ms:.6} ms)"),
        }
        println!("----------------------------------------");
    }
    Ok(())
}

fn print_citations(snapshot: &WordSnapshot) {
    for citation in &snapshot.citations {
        println!("  - \"{}\"", citation.quote);
        println!("    {} ({})", citation.source, citation.year);
    }
}
