use proptest::{collection::vec, prelude::*, test_runner::TestRunner};

use crate::WordSet;

#[test]
fn deduplicates() {
    let words: WordSet = ["the", "quick", "the", "fox", "quick"].into_iter().collect();
    assert_eq!(words.len(), 3);
    assert!(words.contains("fox"));
    assert!(!words.contains("dog"));
}

#[test]
fn insert_reports_novelty() {
    let mut words = WordSet::new();
    assert!(words.is_empty());
    assert!(words.insert("a"));
    assert!(!words.insert(String::from("a")));
    assert_eq!(words.len(), 1);
}

#[test]
fn display() {
    let words: WordSet = ["b", "a"].into_iter().collect();
    assert_eq!(words.to_string(), "{a, b}");
    assert_eq!(WordSet::new().to_string(), "{}");
}

#[test]
fn len_is_distinct_count() {
    let mut runner = TestRunner::default();
    runner
        .run(&vec("[a-c]{0,3}", 0..50), |raw| {
            let words: WordSet = raw.iter().cloned().collect();
            let mut distinct = raw.clone();
            distinct.sort();
            distinct.dedup();
            prop_assert_eq!(words.len(), distinct.len());
            prop_assert!(words.iter().eq(distinct.iter().map(String::as_str)));
            Ok(())
        })
        .unwrap();
}
