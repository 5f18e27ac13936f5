use std::{io::Write, path::PathBuf};

use clap::Parser;
use hashrate::{bucketize, collision_rate};

use crate::{
    cli::{Cli, Command, CorpusArgs, HashArgs},
    report, run,
};

fn run_to_string(command: Command) -> String {
    let mut out = vec![];
    run(command, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

fn corpus(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

mod cli {
    use super::*;

    #[test]
    fn collisions_with_multipliers() {
        let cli = Cli::try_parse_from([
            "hashrate", "-vv", "collisions", "--corpus", "words.txt", "-m", "31", "-m", "-7",
        ])
        .unwrap();
        assert_eq!(cli.log_level(), "debug");
        assert_eq!(
            cli.command,
            Command::Collisions(CorpusArgs {
                corpus: PathBuf::from("words.txt"),
                multipliers: vec![31, -7],
            })
        );
    }

    #[test]
    fn hash_defaults_to_31() {
        let cli = Cli::try_parse_from(["hashrate", "hash", "abc", "def"]).unwrap();
        assert_eq!(cli.log_level(), "warn");
        assert_eq!(
            cli.command,
            Command::Hash(HashArgs {
                words: vec!["abc".to_string(), "def".to_string()],
                multiplier: 31,
            })
        );
    }

    #[test]
    fn quiet_wins() {
        let cli = Cli::try_parse_from(["hashrate", "-q", "-vvv", "hash", "a"]).unwrap();
        assert_eq!(cli.log_level(), "error");
    }

    #[test]
    fn corpus_is_required() {
        assert!(Cli::try_parse_from(["hashrate", "buckets", "-m", "31"]).is_err());
        assert!(Cli::try_parse_from(["hashrate", "hash"]).is_err());
    }
}

mod render {
    use super::*;

    #[test]
    fn rate_line() {
        let rate = collision_rate(31, &[97, 98, 96354]).unwrap();
        let mut out = vec![];
        report::write_rate(&mut out, &rate).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "multiplier =   31, min hash =          97, max hash =      96354, collisions =      0, collision rate = 0.0000%\n"
        );
    }

    #[test]
    fn rate_line_with_collisions() {
        let rate = collision_rate(1, &[195, 195, i32::MIN, 7]).unwrap();
        let mut out = vec![];
        report::write_rate(&mut out, &rate).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "multiplier =    1, min hash = -2147483648, max hash =        195, collisions =      1, collision rate = 25.0000%\n"
        );
    }

    #[test]
    fn bucket_lines() {
        let stats = bucketize(&[0, 1, i32::MIN]).unwrap();
        let mut out = vec![];
        report::write_buckets(&mut out, 7, &stats).unwrap();
        let out = String::from_utf8(out).unwrap();
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "multiplier = 7");
        let counts: Vec<usize> = lines[1]
            .trim_start_matches('[')
            .trim_end_matches(']')
            .split(", ")
            .map(|c| c.parse().unwrap())
            .collect();
        assert_eq!(counts.len(), 64);
        assert_eq!(counts[0], 1);
        assert_eq!(counts[32], 2);
        assert_eq!(lines[2], "empty buckets = 62/64");
    }
}

mod commands {
    use super::*;

    #[test]
    fn hash() {
        let out = run_to_string(Command::Hash(HashArgs {
            words: vec!["abc".to_string(), "".to_string()],
            multiplier: 31,
        }));
        assert_eq!(out, "abc\t96354\n\t0\n");
    }

    #[test]
    fn collisions() {
        let file = corpus("a\nb\nab\nba\n");
        let out = run_to_string(Command::Collisions(CorpusArgs {
            corpus: file.path().to_path_buf(),
            multipliers: vec![1, 31],
        }));
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "words: 4");
        assert!(lines[1].starts_with("multiplier =    1,"));
        assert!(lines[1].contains("collisions =      1"));
        assert!(lines[2].starts_with("multiplier =   31,"));
        assert!(lines[2].contains("collisions =      0"));
    }

    #[test]
    fn collisions_default_multipliers() {
        let file = corpus("alpha\nbeta\n");
        let out = run_to_string(Command::Collisions(CorpusArgs {
            corpus: file.path().to_path_buf(),
            multipliers: vec![],
        }));
        assert_eq!(out.lines().count(), 1 + hashrate::DEFAULT_MULTIPLIERS.len());
    }

    #[test]
    fn buckets_default_multipliers() {
        let file = corpus("alpha\nbeta\n");
        let out = run_to_string(Command::Buckets(CorpusArgs {
            corpus: file.path().to_path_buf(),
            multipliers: vec![],
        }));
        assert_eq!(
            out.lines().count(),
            3 * crate::DEFAULT_BUCKET_MULTIPLIERS.len()
        );
    }

    #[test]
    fn empty_corpus_is_an_error() {
        let file = corpus("# nothing here\n");
        let mut out = vec![];
        let err = run(
            Command::Collisions(CorpusArgs {
                corpus: file.path().to_path_buf(),
                multipliers: vec![31],
            }),
            &mut out,
        )
        .unwrap_err();
        assert!(err.to_string().starts_with("loading word list"));
        assert!(out.is_empty());
    }
}
