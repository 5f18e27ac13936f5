use proptest::{collection::btree_set, prelude::*};

use crate::{CollidingPair, WordSet};

const MAX_WORDS: usize = 64;
const MAX_MULTIPLIERS: usize = 12;
// keeps generated code units clear of the surrogate range
const MAX_CODE: u32 = 0x7ff;

pub fn arb_word() -> impl Strategy<Value = String> {
    "[a-zA-Z'-]{0,12}|\\PC{0,6}"
}

pub fn arb_word_set() -> impl Strategy<Value = WordSet> {
    btree_set(arb_word(), 0..MAX_WORDS).prop_map(WordSet::from)
}

pub fn arb_nonempty_word_set() -> impl Strategy<Value = WordSet> {
    btree_set(arb_word(), 1..MAX_WORDS).prop_map(WordSet::from)
}

pub fn arb_multiplier() -> impl Strategy<Value = i32> {
    prop_oneof![
        prop::sample::select(vec![2, 3, 5, 7, 17, 31, 32, 33, 39, 41, 199]),
        any::<i32>(),
    ]
}

pub fn arb_multipliers() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(arb_multiplier(), 0..MAX_MULTIPLIERS)
}

// (c1 + 1) * m + (c2 - m) == c1 * m + c2, so a common prefix and suffix
// around these two-character cores gives a pair of distinct words that
// collide under multiplier m
pub fn arb_colliding_pair() -> impl Strategy<Value = (i32, CollidingPair)> {
    (1..=64u32)
        .prop_flat_map(|m| {
            (
                Just(m),
                0x61..MAX_CODE,
                m..MAX_CODE,
                "[a-z]{0,4}",
                "[a-z]{0,4}",
            )
        })
        .prop_filter_map(
            "code units must be chars",
            |(m, c1, c2, prefix, suffix)| {
                let a = [char::from_u32(c1)?, char::from_u32(c2)?];
                let b = [char::from_u32(c1 + 1)?, char::from_u32(c2 - m)?];
                let word = |core: [char; 2]| {
                    let mut w = prefix.clone();
                    w.extend(core);
                    w.push_str(&suffix);
                    w
                };
                Some((m as i32, CollidingPair(word(a), word(b))))
            },
        )
}
