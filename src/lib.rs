//! # Typeahead
//!
//! A frequency-weighted typeahead library for Rust.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - Trie-backed lexicon over Unicode code points with popularity weights
//! - Top-K prefix completion with a bounded-depth traversal
//! - Typo-tolerant matching via best-first search over edit operations
//! - Popularity-biased ranking blending edit cost and log-scaled frequency
//!
//! The lexicon is built once from a word/frequency source and is immutable
//! afterwards; both engines are read-only over the shared index and may run
//! concurrently without locks.

pub mod cli;
pub mod complete;
pub mod correct;
pub mod error;
pub mod lexicon;
pub mod scoring;

pub mod prelude {
    pub use crate::complete::{Completion, CompletionConfig, CompletionEngine};
    pub use crate::correct::{Candidate, CorrectionConfig, CorrectionEngine};
    pub use crate::error::{Result, TypeaheadError};
    pub use crate::lexicon::{LexiconIndex, TrieNode};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
