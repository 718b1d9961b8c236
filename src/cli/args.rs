//! Command line argument parsing for the typeahead CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Typeahead - frequency-weighted completion and typo correction
#[derive(Parser, Debug, Clone)]
#[command(name = "typeahead")]
#[command(about = "Frequency-weighted prefix completion and typo correction")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct TypeaheadArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl TypeaheadArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Output format for command results
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text
    Human,
    /// JSON
    Json,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Complete a prefix against the lexicon
    Complete(CompleteArgs),

    /// Suggest typo corrections for a word
    Correct(CorrectArgs),

    /// Look up the frequency of one or more words
    Lookup(LookupArgs),

    /// Show lexicon statistics
    Stats(StatsArgs),
}

/// Arguments for prefix completion
#[derive(Parser, Debug, Clone)]
pub struct CompleteArgs {
    /// Path to the word,count lexicon file
    #[arg(value_name = "LEXICON_FILE")]
    pub lexicon: PathBuf,

    /// Prefix to complete
    #[arg(value_name = "PREFIX")]
    pub prefix: String,

    /// Maximum number of completions
    #[arg(short = 'k', long, default_value = "10")]
    pub top_k: usize,

    /// Maximum subtree depth past the prefix
    #[arg(short = 'd', long, default_value = "10")]
    pub max_depth: usize,
}

/// Arguments for typo correction
#[derive(Parser, Debug, Clone)]
pub struct CorrectArgs {
    /// Path to the word,count lexicon file
    #[arg(value_name = "LEXICON_FILE")]
    pub lexicon: PathBuf,

    /// Word to correct
    #[arg(value_name = "WORD")]
    pub word: String,

    /// Maximum cumulative edit cost
    #[arg(short = 'c', long, default_value = "2")]
    pub max_cost: u32,

    /// Maximum number of candidates
    #[arg(short = 'k', long, default_value = "5")]
    pub top_k: usize,

    /// Weight of the edit cost in the ranking blend
    #[arg(long, default_value = "1.0")]
    pub weight_cost: f64,

    /// Weight of the log-scaled frequency in the ranking blend
    #[arg(long, default_value = "0.1")]
    pub weight_freq: f64,

    /// Minimum frequency a candidate must carry
    #[arg(long, default_value = "0.0")]
    pub min_freq: f64,
}

/// Arguments for frequency lookup
#[derive(Parser, Debug, Clone)]
pub struct LookupArgs {
    /// Path to the word,count lexicon file
    #[arg(value_name = "LEXICON_FILE")]
    pub lexicon: PathBuf,

    /// Words to look up
    #[arg(value_name = "WORDS", required = true)]
    pub words: Vec<String>,
}

/// Arguments for lexicon statistics
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    /// Path to the word,count lexicon file
    #[arg(value_name = "LEXICON_FILE")]
    pub lexicon: PathBuf,
}
