//! Rank-ordered prefix completion.
//!
//! The engine walks the lexicon to the prefix node and performs a
//! depth-bounded traversal of the subtree below it, retaining the `top_k`
//! highest-frequency completions in a fixed-capacity min-heap. The depth cap
//! is a deliberate cost bound: completions that sit deeper than `max_depth`
//! characters past the prefix are never surfaced.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use serde::{Deserialize, Serialize};

use crate::lexicon::trie::{LexiconIndex, TrieNode};

/// A completion of a prefix together with its popularity weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Completion {
    /// The completed word, including the prefix.
    pub word: String,
    /// Frequency of the word in the lexicon.
    pub frequency: f64,
}

/// Configuration for prefix completion.
#[derive(Debug, Clone)]
pub struct CompletionConfig {
    /// Maximum number of completions to return.
    pub top_k: usize,
    /// Maximum subtree depth to explore, counted from the prefix node.
    pub max_depth: usize,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        CompletionConfig {
            top_k: 10,
            max_depth: 10,
        }
    }
}

/// Heap entry ordered so that "greater" means "better": higher frequency
/// first, lexicographically smaller word on ties. Using one total order for
/// both heap retention and the final sort keeps the kept set deterministic.
#[derive(Debug)]
struct HeapEntry {
    frequency: f64,
    word: String,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry {}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.frequency
            .total_cmp(&other.frequency)
            .then_with(|| other.word.cmp(&self.word))
    }
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Prefix completion engine.
///
/// Holds only configuration; the lexicon index is injected per call so the
/// engine can be exercised in isolation with synthetic lexicons.
#[derive(Debug, Clone, Default)]
pub struct CompletionEngine {
    config: CompletionConfig,
}

impl CompletionEngine {
    /// Create a new engine with the default configuration.
    pub fn new() -> Self {
        CompletionEngine {
            config: CompletionConfig::default(),
        }
    }

    /// Create a new engine with a custom configuration.
    pub fn with_config(config: CompletionConfig) -> Self {
        CompletionEngine { config }
    }

    /// Get the current configuration.
    pub fn config(&self) -> &CompletionConfig {
        &self.config
    }

    /// Return up to `top_k` completions of `prefix`, sorted by descending
    /// frequency and ascending word on ties.
    ///
    /// An empty or absent prefix yields an empty result, not an error.
    pub fn complete(&self, index: &LexiconIndex, prefix: &str) -> Vec<Completion> {
        let top_k = self.config.top_k;
        if prefix.is_empty() || top_k == 0 {
            return Vec::new();
        }
        let Some(start) = index.node_at(prefix) else {
            return Vec::new();
        };

        // Iterative DFS with an explicit stack; the suffix buffer is pushed
        // on enter and popped on leave so words are built without per-node
        // string concatenation.
        enum Frame<'a> {
            Enter(char, &'a TrieNode, usize),
            Leave,
        }

        let mut heap: BinaryHeap<Reverse<HeapEntry>> = BinaryHeap::new();
        let mut suffix: Vec<char> = Vec::new();
        let mut stack: Vec<Frame> = Vec::new();

        // The prefix node itself sits at depth 0
        if start.is_word() {
            offer(&mut heap, top_k, prefix, &suffix, start.frequency());
        }
        if self.config.max_depth > 0 {
            for (ch, child) in start.children().rev() {
                stack.push(Frame::Enter(ch, child, 1));
            }
        }

        while let Some(frame) = stack.pop() {
            match frame {
                Frame::Enter(ch, node, depth) => {
                    suffix.push(ch);
                    if node.is_word() {
                        offer(&mut heap, top_k, prefix, &suffix, node.frequency());
                    }
                    stack.push(Frame::Leave);
                    if depth < self.config.max_depth {
                        for (ch, child) in node.children().rev() {
                            stack.push(Frame::Enter(ch, child, depth + 1));
                        }
                    }
                }
                Frame::Leave => {
                    suffix.pop();
                }
            }
        }

        let mut results: Vec<Completion> = heap
            .into_iter()
            .map(|Reverse(entry)| Completion {
                word: entry.word,
                frequency: entry.frequency,
            })
            .collect();
        results.sort_by(|a, b| {
            b.frequency
                .total_cmp(&a.frequency)
                .then_with(|| a.word.cmp(&b.word))
        });
        results
    }
}

/// Offer a word-end to the fixed-capacity min-heap: insert while below
/// capacity, otherwise replace the current minimum when the candidate beats
/// it under the heap's total order.
fn offer(
    heap: &mut BinaryHeap<Reverse<HeapEntry>>,
    top_k: usize,
    prefix: &str,
    suffix: &[char],
    frequency: f64,
) {
    let mut word = String::with_capacity(prefix.len() + suffix.len());
    word.push_str(prefix);
    word.extend(suffix.iter());
    let entry = HeapEntry { frequency, word };

    if heap.len() < top_k {
        heap.push(Reverse(entry));
        return;
    }
    let beats_minimum = match heap.peek() {
        Some(Reverse(min)) => entry > *min,
        None => false,
    };
    if beats_minimum {
        heap.pop();
        heap.push(Reverse(entry));
    }
}
