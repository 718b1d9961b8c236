//! Building a [`LexiconIndex`] from a word/frequency source.
//!
//! A lexicon source is any sequence of `(word, raw_frequency)` string pairs,
//! typically the rows of a delimited file with `word` and `count` columns.
//! The loader applies the producer-side normalization contract (trim,
//! lower-case) and silently drops rows whose frequency fails to parse; a bad
//! row is a data-quality issue, not a fatal error.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::Result;
use crate::lexicon::trie::LexiconIndex;

/// Build an index from `(word, raw_frequency)` pairs.
///
/// Each word is trimmed and lower-cased before insertion. A pair is skipped
/// when the word is empty after trimming, or when the raw frequency does not
/// parse as a non-negative finite number. Duplicate words overwrite (last
/// write wins).
pub fn from_pairs<I, W, F>(pairs: I) -> LexiconIndex
where
    I: IntoIterator<Item = (W, F)>,
    W: AsRef<str>,
    F: AsRef<str>,
{
    let mut index = LexiconIndex::new();

    for (word, raw) in pairs {
        let word = word.as_ref().trim().to_lowercase();
        if word.is_empty() {
            continue;
        }
        match raw.as_ref().trim().parse::<f64>() {
            Ok(frequency) if frequency.is_finite() && frequency >= 0.0 => {
                index.insert(&word, frequency);
            }
            // Non-numeric, negative, or non-finite counts are dropped
            _ => continue,
        }
    }

    index
}

/// Load an index from a comma-delimited `word,count` file.
///
/// The header row of files like `unigram_freq.csv` is skipped by the same
/// numeric-parse filter that drops malformed rows, as are rows without a
/// comma. I/O failures are reported as errors.
pub fn load_from_csv_file<P: AsRef<Path>>(path: P) -> Result<LexiconIndex> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut rows = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if let Some((word, raw)) = line.split_once(',') {
            rows.push((word.to_string(), raw.to_string()));
        }
    }

    Ok(from_pairs(rows))
}
