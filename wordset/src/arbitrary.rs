use arbitrary::{Arbitrary, Unstructured};

use crate::WordSet;

const MAX_WORDS: usize = 1_000;
const MAX_MULTIPLIERS: usize = 16;

pub fn arb_word_set<'a>(u: &mut Unstructured<'a>) -> arbitrary::Result<WordSet> {
    let mut words = WordSet::new();
    for _ in 0..u.int_in_range(0..=MAX_WORDS)? {
        words.insert(String::arbitrary(u)?);
    }
    Ok(words)
}

pub fn arb_nonempty_word_set<'a>(u: &mut Unstructured<'a>) -> arbitrary::Result<WordSet> {
    let mut words = arb_word_set(u)?;
    if words.is_empty() {
        words.insert(String::arbitrary(u)?);
    }
    Ok(words)
}

pub fn arb_multipliers<'a>(u: &mut Unstructured<'a>) -> arbitrary::Result<Vec<i32>> {
    (0..u.int_in_range(0..=MAX_MULTIPLIERS)?)
        .map(|_| u.arbitrary())
        .collect()
}

impl<'a> Arbitrary<'a> for WordSet {
    fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        arb_word_set(u)
    }
}
