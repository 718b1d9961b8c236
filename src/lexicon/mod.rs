//! Lexicon index for typeahead queries.
//!
//! This module provides the frequency-weighted trie shared by the completion
//! and correction engines, and the loader that builds it from a word/frequency
//! source.

pub mod loader;
pub mod trie;

// Re-export commonly used types
pub use loader::*;
pub use trie::*;
