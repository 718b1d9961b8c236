//! CLI command implementations.

use std::path::Path;
use std::time::Instant;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::complete::{CompletionConfig, CompletionEngine};
use crate::correct::{CorrectionConfig, CorrectionEngine};
use crate::error::Result;
use crate::lexicon::loader;
use crate::lexicon::trie::LexiconIndex;

/// Execute the given CLI command.
pub fn execute_command(args: TypeaheadArgs) -> Result<()> {
    match &args.command {
        Command::Complete(complete_args) => run_complete(complete_args.clone(), &args),
        Command::Correct(correct_args) => run_correct(correct_args.clone(), &args),
        Command::Lookup(lookup_args) => run_lookup(lookup_args.clone(), &args),
        Command::Stats(stats_args) => run_stats(stats_args.clone(), &args),
    }
}

fn load_lexicon(path: &Path, cli_args: &TypeaheadArgs) -> Result<LexiconIndex> {
    if cli_args.verbosity() > 1 {
        println!("Loading lexicon from: {}", path.display());
    }
    let index = loader::load_from_csv_file(path)?;
    if cli_args.verbosity() > 1 {
        println!("Loaded {} words", index.word_count());
    }
    Ok(index)
}

/// Complete a prefix against the lexicon.
fn run_complete(args: CompleteArgs, cli_args: &TypeaheadArgs) -> Result<()> {
    let index = load_lexicon(&args.lexicon, cli_args)?;
    let engine = CompletionEngine::with_config(CompletionConfig {
        top_k: args.top_k,
        max_depth: args.max_depth,
    });

    let start = Instant::now();
    let completions = engine.complete(&index, &args.prefix);
    let duration_ms = start.elapsed().as_millis() as u64;

    let results = CompletionResults {
        prefix: args.prefix,
        completions,
        duration_ms,
    };
    print_result(&results, cli_args, format_completions)
}

/// Suggest typo corrections for a word.
fn run_correct(args: CorrectArgs, cli_args: &TypeaheadArgs) -> Result<()> {
    let index = load_lexicon(&args.lexicon, cli_args)?;
    let engine = CorrectionEngine::with_config(CorrectionConfig {
        max_cost: args.max_cost,
        top_k: args.top_k,
        weight_cost: args.weight_cost,
        weight_freq: args.weight_freq,
        min_freq: args.min_freq,
    });

    let start = Instant::now();
    let mut candidates = engine.correct(&index, &args.word)?;
    let duration_ms = start.elapsed().as_millis() as u64;

    // The engine emits candidates in acceptance order; presentation order is
    // ascending priority with the same tie-breaks as the search frontier.
    candidates.sort_by(|a, b| {
        a.priority
            .total_cmp(&b.priority)
            .then_with(|| a.cost.cmp(&b.cost))
            .then_with(|| a.word.cmp(&b.word))
    });

    let results = CorrectionResults {
        word: args.word,
        candidates,
        duration_ms,
    };
    print_result(&results, cli_args, format_candidates)
}

/// Look up stored frequencies for a batch of words.
fn run_lookup(args: LookupArgs, cli_args: &TypeaheadArgs) -> Result<()> {
    let index = load_lexicon(&args.lexicon, cli_args)?;

    let entries = args
        .words
        .iter()
        .map(|word| LookupEntry {
            frequency: index.lookup_frequency(word),
            word: word.clone(),
        })
        .collect();

    print_result(&LookupResults { entries }, cli_args, format_lookups)
}

/// Show lexicon statistics.
fn run_stats(args: StatsArgs, cli_args: &TypeaheadArgs) -> Result<()> {
    let start = Instant::now();
    let index = load_lexicon(&args.lexicon, cli_args)?;
    let load_ms = start.elapsed().as_millis() as u64;

    let stats = LexiconStats {
        words: index.word_count(),
        nodes: index.node_count(),
        load_ms,
    };
    print_result(&stats, cli_args, format_stats)
}
