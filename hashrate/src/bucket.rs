use std::ops::Range;

use rayon::prelude::*;
use tracing::debug;
use wordset::WordSet;

use crate::{hash_all, StatsError, BUCKET_COUNT, BUCKET_WIDTH};

const BUCKET_SHIFT: u32 = BUCKET_WIDTH.trailing_zeros();

/// Histogram of hash values over 64 equal windows covering all of `i32`.
///
/// Bucket `i` counts the values in
/// `[i32::MIN + i * 2^26, i32::MIN + (i + 1) * 2^26)`. The last window ends
/// at `2^31`, one past `i32::MAX`, so every `i32` lands in exactly one bucket.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BucketStatistics {
    counts: [usize; BUCKET_COUNT],
}

#[inline]
pub fn bucket_index(value: i32) -> usize {
    // offset into [0, 2^32) first, then the quotient by the width is < 64
    ((i64::from(value) - i64::from(i32::MIN)) >> BUCKET_SHIFT) as usize
}

impl BucketStatistics {
    pub fn bucket_range(index: usize) -> Option<Range<i64>> {
        (index < BUCKET_COUNT).then(|| {
            let start = i64::from(i32::MIN) + index as i64 * BUCKET_WIDTH;
            start..start + BUCKET_WIDTH
        })
    }

    // (bucket index, count), lowest bucket first
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.counts.iter().copied().enumerate()
    }

    pub fn get(&self, index: usize) -> Option<usize> {
        self.counts.get(index).copied()
    }

    pub fn counts(&self) -> &[usize; BUCKET_COUNT] {
        &self.counts
    }

    pub fn len(&self) -> usize {
        BUCKET_COUNT
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    pub fn empty_buckets(&self) -> usize {
        self.counts.iter().filter(|&&c| c == 0).count()
    }
}

pub fn bucketize(hashes: &[i32]) -> Result<BucketStatistics, StatsError> {
    if hashes.is_empty() {
        return Err(StatsError::EmptyInput);
    }
    let counts = hashes
        .par_iter()
        .fold(
            || [0usize; BUCKET_COUNT],
            |mut counts, &h| {
                counts[bucket_index(h)] += 1;
                counts
            },
        )
        .reduce(
            || [0usize; BUCKET_COUNT],
            |mut acc, counts| {
                acc.iter_mut().zip(counts).for_each(|(a, c)| *a += c);
                acc
            },
        );
    let stats = BucketStatistics { counts };
    debug!(
        values = hashes.len(),
        empty_buckets = stats.empty_buckets(),
        "bucketized hash values"
    );
    Ok(stats)
}

pub fn bucketize_words(words: &WordSet, multiplier: i32) -> Result<BucketStatistics, StatsError> {
    if words.is_empty() {
        return Err(StatsError::EmptyInput);
    }
    debug!(multiplier, words = words.len(), "bucketizing word hashes");
    bucketize(&hash_all(words, multiplier))
}
