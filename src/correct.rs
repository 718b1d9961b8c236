//! Typo-tolerant matching over the lexicon trie.
//!
//! The engine runs a best-first search over `(cursor, node)` states, where
//! `cursor` is a position in the input word and `node` is a trie node. Four
//! edit operations generate successors: match (cost 0), substitute, delete,
//! and insert (cost 1 each). The frontier is ordered by the blended priority
//! from [`crate::scoring`], so high-frequency words are reached earlier than
//! a pure edit-distance search would reach them.
//!
//! This is a heuristic best-first search, not a shortest-edit-distance
//! search: states are deduplicated by `(cursor, node)` alone, and of several
//! arrivals at the same state the first one popped wins even when a
//! cheaper-cost arrival exists. That trade is deliberate; the ranking
//! philosophy favors popular words over provably minimal edit scripts.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use ahash::AHashSet;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TypeaheadError};
use crate::lexicon::trie::{LexiconIndex, TrieNode};
use crate::scoring::priority;

/// A correction candidate produced by the fuzzy match engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    /// The suggested word.
    pub word: String,
    /// Cumulative edit cost from the input word.
    pub cost: u32,
    /// Frequency of the suggested word in the lexicon.
    pub frequency: f64,
    /// Blended ranking key; lower is better. Candidates are emitted in
    /// acceptance order, so callers sort ascending by this field for
    /// presentation.
    pub priority: f64,
}

/// Configuration for typo correction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorrectionConfig {
    /// Maximum cumulative edit cost a candidate may carry.
    pub max_cost: u32,
    /// Maximum number of candidates to accept.
    pub top_k: usize,
    /// Weight of the edit cost in the ranking blend.
    pub weight_cost: f64,
    /// Weight of the log-scaled frequency in the ranking blend.
    pub weight_freq: f64,
    /// Popularity floor; words below it are never accepted.
    pub min_freq: f64,
}

impl Default for CorrectionConfig {
    fn default() -> Self {
        CorrectionConfig {
            max_cost: 2,
            top_k: 5,
            weight_cost: 1.0,
            weight_freq: 0.1,
            min_freq: 0.0,
        }
    }
}

impl CorrectionConfig {
    /// Check the configuration for misuse.
    ///
    /// Counts are unsigned so negative budgets are unrepresentable; the
    /// float parameters must be finite, and `min_freq` non-negative.
    pub fn validate(&self) -> Result<()> {
        if !self.weight_cost.is_finite() {
            return Err(TypeaheadError::invalid_argument(format!(
                "weight_cost must be finite, got {}",
                self.weight_cost
            )));
        }
        if !self.weight_freq.is_finite() {
            return Err(TypeaheadError::invalid_argument(format!(
                "weight_freq must be finite, got {}",
                self.weight_freq
            )));
        }
        if !self.min_freq.is_finite() || self.min_freq < 0.0 {
            return Err(TypeaheadError::invalid_argument(format!(
                "min_freq must be finite and non-negative, got {}",
                self.min_freq
            )));
        }
        Ok(())
    }
}

/// One frontier entry: the search state plus everything needed to order and
/// reconstruct it. Ordering is fully deterministic: ascending priority, then
/// cost, then a monotonically increasing insertion sequence number.
struct State<'a> {
    priority: f64,
    cost: u32,
    seq: u64,
    cursor: usize,
    node: &'a TrieNode,
    path: String,
}

impl PartialEq for State<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for State<'_> {}

impl Ord for State<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .total_cmp(&other.priority)
            .then_with(|| self.cost.cmp(&other.cost))
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

impl PartialOrd for State<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Push a successor state unless its cost already exceeds the edit budget.
fn push_state<'a>(
    frontier: &mut BinaryHeap<Reverse<State<'a>>>,
    seq: &mut u64,
    config: &CorrectionConfig,
    cursor: usize,
    node: &'a TrieNode,
    cost: u32,
    path: String,
) {
    if cost > config.max_cost {
        return;
    }
    let priority = priority(cost, node.frequency(), config.weight_cost, config.weight_freq);
    frontier.push(Reverse(State {
        priority,
        cost,
        seq: *seq,
        cursor,
        node,
        path,
    }));
    *seq += 1;
}

/// Typo correction engine.
///
/// Holds only configuration; the lexicon index is injected per call. Every
/// invocation owns its frontier and visited set exclusively, so concurrent
/// calls over a shared index need no synchronization.
#[derive(Debug, Clone, Default)]
pub struct CorrectionEngine {
    config: CorrectionConfig,
}

impl CorrectionEngine {
    /// Create a new engine with the default configuration.
    pub fn new() -> Self {
        CorrectionEngine {
            config: CorrectionConfig::default(),
        }
    }

    /// Create a new engine with a custom configuration.
    pub fn with_config(config: CorrectionConfig) -> Self {
        CorrectionEngine { config }
    }

    /// Get the current configuration.
    pub fn config(&self) -> &CorrectionConfig {
        &self.config
    }

    /// Find up to `top_k` indexed words within `max_cost` edits of `word`,
    /// each with frequency at least `min_freq`.
    ///
    /// Candidates are returned in acceptance order, not sorted; callers sort
    /// ascending by [`Candidate::priority`] for presentation. An empty input
    /// word yields an empty result. Configuration misuse is reported as an
    /// error.
    pub fn correct(&self, index: &LexiconIndex, word: &str) -> Result<Vec<Candidate>> {
        let config = &self.config;
        config.validate()?;
        if word.is_empty() || config.top_k == 0 {
            return Ok(Vec::new());
        }

        let input: Vec<char> = word.chars().collect();
        let mut frontier: BinaryHeap<Reverse<State>> = BinaryHeap::new();
        let mut visited: AHashSet<(usize, u32)> = AHashSet::new();
        let mut accepted: AHashSet<String> = AHashSet::new();
        let mut candidates: Vec<Candidate> = Vec::new();
        let mut seq: u64 = 0;

        push_state(
            &mut frontier,
            &mut seq,
            config,
            0,
            index.root(),
            0,
            String::new(),
        );

        while let Some(Reverse(state)) = frontier.pop() {
            // First popped arrival wins for a given (cursor, node); later
            // arrivals are discarded even when they carry a lower cost.
            if !visited.insert((state.cursor, state.node.id())) {
                continue;
            }

            if state.cursor == input.len()
                && state.node.is_word()
                && !accepted.contains(&state.path)
            {
                accepted.insert(state.path.clone());
                if state.cost <= config.max_cost && state.node.frequency() >= config.min_freq {
                    candidates.push(Candidate {
                        word: state.path,
                        cost: state.cost,
                        frequency: state.node.frequency(),
                        priority: state.priority,
                    });
                    if candidates.len() >= config.top_k {
                        break;
                    }
                }
                // A popped word-end at end of input is never expanded further
                continue;
            }

            if state.cursor < input.len() {
                let next = input[state.cursor];

                // Match: consume one input character along a matching edge
                if let Some(child) = state.node.child(next) {
                    let mut path = state.path.clone();
                    path.push(next);
                    push_state(
                        &mut frontier,
                        &mut seq,
                        config,
                        state.cursor + 1,
                        child,
                        state.cost,
                        path,
                    );
                }

                // Substitute: consume one input character along any other edge
                for (ch, child) in state.node.children() {
                    if ch != next {
                        let mut path = state.path.clone();
                        path.push(ch);
                        push_state(
                            &mut frontier,
                            &mut seq,
                            config,
                            state.cursor + 1,
                            child,
                            state.cost + 1,
                            path,
                        );
                    }
                }

                // Delete: skip one input character without consuming the trie
                push_state(
                    &mut frontier,
                    &mut seq,
                    config,
                    state.cursor + 1,
                    state.node,
                    state.cost + 1,
                    state.path.clone(),
                );
            }

            // Insert: consume a trie character without advancing the input
            for (ch, child) in state.node.children() {
                let mut path = state.path.clone();
                path.push(ch);
                push_state(
                    &mut frontier,
                    &mut seq,
                    config,
                    state.cursor,
                    child,
                    state.cost + 1,
                    path,
                );
            }
        }

        Ok(candidates)
    }
}
