//! Integration tests for prefix completion over a file-backed lexicon.

use std::io::Write;

use tempfile::NamedTempFile;
use typeahead::lexicon::loader;
use typeahead::prelude::*;

fn write_lexicon(rows: &[(&str, &str)]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "word,count").unwrap();
    for (word, count) in rows {
        writeln!(file, "{word},{count}").unwrap();
    }
    file.flush().unwrap();
    file
}

#[test]
fn test_completion_over_csv_lexicon() -> Result<()> {
    let file = write_lexicon(&[("happy", "500"), ("happen", "300"), ("happier", "50")]);
    let index = loader::load_from_csv_file(file.path())?;

    let engine = CompletionEngine::with_config(CompletionConfig {
        top_k: 2,
        max_depth: 10,
    });
    let results = engine.complete(&index, "happ");

    assert_eq!(results.len(), 2);
    assert_eq!(
        (results[0].word.as_str(), results[0].frequency),
        ("happy", 500.0)
    );
    assert_eq!(
        (results[1].word.as_str(), results[1].frequency),
        ("happen", 300.0)
    );
    Ok(())
}

#[test]
fn test_completion_respects_prefix_and_ordering() -> Result<()> {
    let file = write_lexicon(&[
        ("the", "23135851162"),
        ("them", "336727740"),
        ("theme", "57716800"),
        ("then", "384332039"),
        ("theory", "63141736"),
        ("toad", "3941926"),
    ]);
    let index = loader::load_from_csv_file(file.path())?;

    let engine = CompletionEngine::new();
    let results = engine.complete(&index, "the");

    assert_eq!(results.len(), 5);
    for completion in &results {
        assert!(completion.word.starts_with("the"));
    }
    for pair in results.windows(2) {
        assert!(pair[0].frequency >= pair[1].frequency);
    }
    // The prefix itself is a word and the most frequent one
    assert_eq!(results[0].word, "the");
    Ok(())
}

#[test]
fn test_completion_on_empty_lexicon() -> Result<()> {
    let file = write_lexicon(&[]);
    let index = loader::load_from_csv_file(file.path())?;

    let engine = CompletionEngine::new();
    assert!(engine.complete(&index, "anything").is_empty());
    Ok(())
}

#[test]
fn test_completion_absent_prefix() -> Result<()> {
    let file = write_lexicon(&[("happy", "500")]);
    let index = loader::load_from_csv_file(file.path())?;

    let engine = CompletionEngine::new();
    assert!(engine.complete(&index, "zzz").is_empty());
    Ok(())
}

#[test]
fn test_lookup_frequency_batch() -> Result<()> {
    let file = write_lexicon(&[("happy", "500"), ("happen", "300")]);
    let index = loader::load_from_csv_file(file.path())?;

    assert_eq!(index.lookup_frequency("happy"), Some(500.0));
    assert_eq!(index.lookup_frequency("happen"), Some(300.0));
    assert_eq!(index.lookup_frequency("happ"), None);
    assert_eq!(index.lookup_frequency("absent"), None);
    Ok(())
}
