//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, TypeaheadArgs};
use crate::complete::Completion;
use crate::correct::Candidate;
use crate::error::Result;

/// Result structure for prefix completion.
#[derive(Debug, Serialize, Deserialize)]
pub struct CompletionResults {
    pub prefix: String,
    pub completions: Vec<Completion>,
    pub duration_ms: u64,
}

/// Result structure for typo correction.
#[derive(Debug, Serialize, Deserialize)]
pub struct CorrectionResults {
    pub word: String,
    pub candidates: Vec<Candidate>,
    pub duration_ms: u64,
}

/// One row of a frequency lookup.
#[derive(Debug, Serialize, Deserialize)]
pub struct LookupEntry {
    pub word: String,
    pub frequency: Option<f64>,
}

/// Result structure for frequency lookup.
#[derive(Debug, Serialize, Deserialize)]
pub struct LookupResults {
    pub entries: Vec<LookupEntry>,
}

/// Lexicon statistics.
#[derive(Debug, Serialize, Deserialize)]
pub struct LexiconStats {
    pub words: usize,
    pub nodes: u32,
    pub load_ms: u64,
}

/// Print a serializable result in the requested format.
pub fn print_result<T: Serialize>(result: &T, args: &TypeaheadArgs, human: impl Fn(&T)) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => {
            let json = if args.pretty {
                serde_json::to_string_pretty(result)?
            } else {
                serde_json::to_string(result)?
            };
            println!("{json}");
        }
        OutputFormat::Human => human(result),
    }
    Ok(())
}

/// Human-readable completion listing.
pub fn format_completions(results: &CompletionResults) {
    if results.completions.is_empty() {
        println!("No completions for '{}'", results.prefix);
        return;
    }
    println!(
        "{} completion(s) for '{}' in {} ms:",
        results.completions.len(),
        results.prefix,
        results.duration_ms
    );
    for completion in &results.completions {
        println!("  {:<24} {}", completion.word, completion.frequency);
    }
}

/// Human-readable candidate listing.
pub fn format_candidates(results: &CorrectionResults) {
    if results.candidates.is_empty() {
        println!("No corrections for '{}'", results.word);
        return;
    }
    println!(
        "{} candidate(s) for '{}' in {} ms:",
        results.candidates.len(),
        results.word,
        results.duration_ms
    );
    for candidate in &results.candidates {
        println!(
            "  {:<24} cost={} freq={} priority={:.4}",
            candidate.word, candidate.cost, candidate.frequency, candidate.priority
        );
    }
}

/// Human-readable lookup listing.
pub fn format_lookups(results: &LookupResults) {
    for entry in &results.entries {
        match entry.frequency {
            Some(frequency) => println!("  {:<24} {}", entry.word, frequency),
            None => println!("  {:<24} (absent)", entry.word),
        }
    }
}

/// Human-readable lexicon statistics.
pub fn format_stats(stats: &LexiconStats) {
    println!("Words: {}", stats.words);
    println!("Nodes: {}", stats.nodes);
    println!("Loaded in {} ms", stats.load_ms);
}
