//! Plain-text rendering of the statistics.

use std::io::{self, Write};

use hashrate::{BucketStatistics, RateInfo};
use itertools::Itertools;

pub fn write_word_count<W: Write>(w: &mut W, words: usize) -> io::Result<()> {
    writeln!(w, "words: {}", words)
}

pub fn write_rate<W: Write>(w: &mut W, rate: &RateInfo) -> io::Result<()> {
    writeln!(
        w,
        "multiplier = {:4}, min hash = {:11}, max hash = {:10}, collisions = {:6}, collision rate = {:.4}%",
        rate.multiplier(),
        rate.min_hash(),
        rate.max_hash(),
        rate.collision_count(),
        rate.collision_percent()
    )
}

pub fn write_buckets<W: Write>(
    w: &mut W,
    multiplier: i32,
    stats: &BucketStatistics,
) -> io::Result<()> {
    writeln!(w, "multiplier = {}", multiplier)?;
    writeln!(w, "[{}]", stats.counts().iter().join(", "))?;
    writeln!(w, "empty buckets = {}/{}", stats.empty_buckets(), stats.len())
}

pub fn write_hash<W: Write>(w: &mut W, word: &str, hash: i32) -> io::Result<()> {
    writeln!(w, "{}\t{}", word, hash)
}
