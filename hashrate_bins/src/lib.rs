#![deny(clippy::disallowed_methods)]

use std::{io::Write, path::Path};

use anyhow::Context;
use hashrate::{bucketize_words, collision_rate_list, DEFAULT_MULTIPLIERS};
use tracing::info;
use wordlist::read_word_list;
use wordset::WordSet;

use crate::cli::{Command, CorpusArgs, HashArgs};

pub mod cli;
pub mod report;
#[cfg(test)]
mod tests;

// the spread of these is what the bucket comparison is usually shown with
pub const DEFAULT_BUCKET_MULTIPLIERS: [i32; 5] = [2, 7, 31, 32, 199];

pub fn run<W: Write>(command: Command, out: &mut W) -> anyhow::Result<()> {
    match command {
        Command::Collisions(CorpusArgs {
            corpus,
            multipliers,
        }) => {
            let words = load(&corpus)?;
            let multipliers = or_default(multipliers, &DEFAULT_MULTIPLIERS);
            let rates = collision_rate_list(&words, &multipliers)?;
            report::write_word_count(out, words.len())?;
            for rate in &rates {
                report::write_rate(out, rate)?;
            }
        }
        Command::Buckets(CorpusArgs {
            corpus,
            multipliers,
        }) => {
            let words = load(&corpus)?;
            for multiplier in or_default(multipliers, &DEFAULT_BUCKET_MULTIPLIERS) {
                let stats = bucketize_words(&words, multiplier)?;
                report::write_buckets(out, multiplier, &stats)?;
            }
        }
        Command::Hash(HashArgs { words, multiplier }) => {
            for word in &words {
                report::write_hash(out, word, multhash::hash(word, multiplier))?;
            }
        }
    }
    Ok(())
}

fn load(path: &Path) -> anyhow::Result<WordSet> {
    let words = read_word_list(path)
        .with_context(|| format!("loading word list {}", path.display()))?;
    info!(words = words.len(), "corpus ready");
    Ok(words)
}

fn or_default(multipliers: Vec<i32>, default: &[i32]) -> Vec<i32> {
    if multipliers.is_empty() {
        default.to_vec()
    } else {
        multipliers
    }
}
