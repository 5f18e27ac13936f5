#![deny(clippy::disallowed_methods)]

//! Collision and dispersion statistics for the multiplicative string hash.

use itertools::Itertools;
use rayon::prelude::*;
use thiserror::Error;
use tracing::debug;
use wordset::WordSet;

mod bucket;

pub use bucket::{bucket_index, bucketize, bucketize_words, BucketStatistics};

// the multipliers the comparison is customarily run with
pub const DEFAULT_MULTIPLIERS: [i32; 11] = [2, 3, 5, 7, 17, 31, 32, 33, 39, 41, 199];
// 2^26, so that 64 buckets cover all of i32
pub const BUCKET_WIDTH: i64 = 1 << 26;
pub const BUCKET_COUNT: usize = 64;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsError {
    #[error("no words or hash values to analyze")]
    EmptyInput,
}

/// Collision statistics of one multiplier over one word set.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RateInfo {
    max_hash: i32,
    min_hash: i32,
    multiplier: i32,
    total: usize,
    collision_count: usize,
    collision_rate: f64,
}

impl RateInfo {
    pub fn max_hash(&self) -> i32 {
        self.max_hash
    }

    pub fn min_hash(&self) -> i32 {
        self.min_hash
    }

    pub fn multiplier(&self) -> i32 {
        self.multiplier
    }

    // number of hashed words
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of words whose hash was already taken by another word, i.e.
    /// `total - distinct hashes`.
    pub fn collision_count(&self) -> usize {
        self.collision_count
    }

    pub fn collision_rate(&self) -> f64 {
        self.collision_rate
    }

    pub fn collision_percent(&self) -> f64 {
        self.collision_rate * 100.0
    }

    pub fn invariants(&self) -> bool {
        self.total > 0
            && self.min_hash <= self.max_hash
            && self.collision_count < self.total
            && (0.0..1.0).contains(&self.collision_rate)
            && (self.collision_count == 0) == (self.collision_rate == 0.0)
    }
}

pub fn hash_all(words: &WordSet, multiplier: i32) -> Vec<i32> {
    words
        .as_set()
        .par_iter()
        .map(|word| multhash::hash(word, multiplier))
        .collect()
}

/// Aggregates the hashes one multiplier produced over a word set.
pub fn collision_rate(multiplier: i32, hashes: &[i32]) -> Result<RateInfo, StatsError> {
    let mut sorted = hashes.to_vec();
    sorted.par_sort_unstable();
    let (min_hash, max_hash) = match (sorted.first(), sorted.last()) {
        (Some(&min), Some(&max)) => (min, max),
        _ => return Err(StatsError::EmptyInput),
    };
    let total = sorted.len();
    let distinct = sorted.iter().dedup().count();
    let collision_count = total - distinct;
    Ok(RateInfo {
        max_hash,
        min_hash,
        multiplier,
        total,
        collision_count,
        collision_rate: collision_count as f64 / total as f64,
    })
}

/// Computes a [`RateInfo`] for every multiplier, in the order given.
///
/// Multipliers are independent of each other, so the only failure is an
/// empty word set, reported before any multiplier is processed. No
/// multipliers means no work and an empty list, whatever `words` holds.
pub fn collision_rate_list(
    words: &WordSet,
    multipliers: &[i32],
) -> Result<Vec<RateInfo>, StatsError> {
    if multipliers.is_empty() {
        return Ok(vec![]);
    }
    if words.is_empty() {
        return Err(StatsError::EmptyInput);
    }
    multipliers
        .iter()
        .map(|&multiplier| {
            let rate = collision_rate(multiplier, &hash_all(words, multiplier))?;
            debug!(
                multiplier,
                total = rate.total,
                min_hash = rate.min_hash,
                max_hash = rate.max_hash,
                collisions = rate.collision_count,
                "computed collision rate"
            );
            Ok(rate)
        })
        .collect()
}

#[macro_export]
macro_rules! gen_bench_corpus {
    ($f:ident) => {
        fn bench_corpus(dir: cap_std::fs::Dir) -> anyhow::Result<()> {
            use criterion::Criterion;
            use std::io::Read;

            let mut criterion = Criterion::default().configure_from_args();
            for entry in dir.entries()? {
                let entry = entry?;
                let mut input = String::new();
                entry.open()?.read_to_string(&mut input)?;
                let words = wordlist::parse_word_list(&input)?;
                criterion.bench_function(
                    &format!("bench {} {:?}", stringify!($f), entry.file_name()),
                    |b| {
                        b.iter(|| $f(&words));
                    },
                );
            }
            criterion.final_summary();
            Ok(())
        }
    };
}

#[macro_export]
macro_rules! gen_corpus_main {
    ($f:ident) => {
        fn corpus_main(dir: cap_std::fs::Dir) -> anyhow::Result<()> {
            use std::io::Read;

            for entry in dir.entries()? {
                let entry = entry?;
                dbg!(entry.file_name());
                let mut input = String::new();
                entry.open()?.read_to_string(&mut input)?;
                $f(&wordlist::parse_word_list(&input)?);
            }
            Ok(())
        }
    };
}
