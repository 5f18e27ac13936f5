use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};
use multhash::DEFAULT_MULTIPLIER;

#[derive(Parser, Debug)]
#[command(
    name = "hashrate",
    version,
    about = "Compare string hash multipliers by collisions and dispersion over a word corpus"
)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv); RUST_LOG takes precedence
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbosity: u8,

    /// Only log errors
    #[arg(short = 'q', long = "quiet", action = ArgAction::SetTrue, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbosity {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Minimum and maximum hash, collision count and rate per multiplier
    Collisions(CorpusArgs),
    /// Counts of hash values in 64 equal buckets spanning i32, per multiplier
    Buckets(CorpusArgs),
    /// Print the hash of each word
    Hash(HashArgs),
}

#[derive(Args, Debug, PartialEq, Eq)]
pub struct CorpusArgs {
    /// Word list with one word per line
    #[arg(short = 'c', long = "corpus")]
    pub corpus: PathBuf,

    /// Multiplier to evaluate; repeat for several (defaults depend on the command)
    #[arg(short = 'm', long = "multiplier", allow_negative_numbers = true)]
    pub multipliers: Vec<i32>,
}

#[derive(Args, Debug, PartialEq, Eq)]
pub struct HashArgs {
    /// Words to hash
    #[arg(required = true)]
    pub words: Vec<String>,

    #[arg(
        short = 'm',
        long = "multiplier",
        default_value_t = DEFAULT_MULTIPLIER,
        allow_negative_numbers = true
    )]
    pub multiplier: i32,
}
