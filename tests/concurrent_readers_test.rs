//! The lexicon is built once and immutable afterwards; both engines are
//! read-only over the shared index, so concurrent queries need no locks.

use std::thread;

use typeahead::lexicon::loader::from_pairs;
use typeahead::prelude::*;

#[test]
fn test_concurrent_complete_and_correct() {
    let index = from_pairs(vec![
        ("happy", "500"),
        ("happen", "300"),
        ("happier", "50"),
        ("love", "2000000"),
        ("lover", "40000"),
        ("glove", "9000"),
    ]);

    thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                let engine = CompletionEngine::new();
                for _ in 0..50 {
                    let results = engine.complete(&index, "happ");
                    assert_eq!(results.len(), 3);
                    assert_eq!(results[0].word, "happy");
                }
            });
            scope.spawn(|| {
                let engine = CorrectionEngine::new();
                for _ in 0..50 {
                    let candidates = engine.correct(&index, "loe").unwrap();
                    assert!(candidates.iter().any(|c| c.word == "love"));
                }
            });
        }
    });
}
