use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "quotelex-cmd")]
#[command(about = "Command-line word analyzer for quoted-text corpora")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up a word in all three word-keyed indexes
    Lookup {
        /// Corpus file to load
        #[arg(short, long)]
        file: String,

        /// Word to search for (normalized before searching)
        word: String,
    },

    /// List words whose frequency falls within a range
    Range {
        /// Corpus file to load
        #[arg(short, long)]
        file: String,

        /// Minimum frequency (inclusive)
        min: u32,

        /// Maximum frequency (inclusive)
        max: u32,
    },

    /// Load a corpus and display load statistics
    Stats {
        /// Corpus file to load
        #[arg(short, long)]
        file: String,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Lookup { file, word } => commands::lookup::run(&file, &word),
        Commands::Range { file, min, max } => commands::range::run(&file, min, max),
        Commands::Stats { file } => commands::stats::run(&file),
    }
}
