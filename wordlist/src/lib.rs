#![deny(clippy::disallowed_methods)]

//! Loading word corpora.
//!
//! A word list is UTF-8 text with one entry per line. The first
//! whitespace-delimited token of a line is the word; the rest of the line is
//! ignored, so annotated dictionaries load as-is. Blank lines and lines
//! starting with `#` are skipped.

use std::{
    fs,
    path::{Path, PathBuf},
};

use nom::{Finish, IResult};
use thiserror::Error;
use tracing::info;
use wordset::WordSet;


#[derive(Error, Debug)]
pub enum WordListError {
    #[error("reading word list")]
    Io(#[from] std::io::Error),
    #[error("parsing error")]
    Nom(#[from] nom::error::Error<String>),
    #[error("word list {0:?} contains no words")]
    Empty(PathBuf),
}

pub fn parse_word_list(input: &str) -> Result<WordSet, WordListError> {
    fn inner(input: &str) -> IResult<&str, WordSet> {
        use nom::{
            branch::alt,
            bytes::complete::tag,
            character::complete::{line_ending, not_line_ending},
            combinator::{eof, opt, verify},
            multi::fold_many0,
            sequence::terminated,
        };

        fn body(input: &str) -> IResult<&str, &str> {
            verify(not_line_ending, |s: &str| !s.contains('\0'))(input)
        }
        fn line(input: &str) -> IResult<&str, &str> {
            alt((
                terminated(body, line_ending),
                // last line without a line ending
                verify(body, |s: &str| !s.is_empty()),
            ))(input)
        }
        fn entry(line: &str) -> Option<&str> {
            let line = line.trim_start();
            if line.starts_with('#') {
                None
            } else {
                line.split_whitespace().next()
            }
        }

        let (input, _) = opt(tag("\u{feff}"))(input)?;
        let (input, words) = fold_many0(line, WordSet::new, |mut words, line| {
            if let Some(word) = entry(line) {
                words.insert(word);
            }
            words
        })(input)?;
        let (input, _) = eof(input)?;
        Ok((input, words))
    }

    let (_, words) =
        inner(input)
            .finish()
            .map_err(|nom::error::Error { input, code }| nom::error::Error {
                input: input.to_string(),
                code,
            })?;
    Ok(words)
}

pub fn read_word_list<P: AsRef<Path>>(path: P) -> Result<WordSet, WordListError> {
    let path = path.as_ref();
    let words = parse_word_list(&fs::read_to_string(path)?)?;
    if words.is_empty() {
        return Err(WordListError::Empty(path.to_path_buf()));
    }
    info!(path = %path.display(), words = words.len(), "loaded word list");
    Ok(words)
}

// words containing whitespace or starting with '#' don't survive a round trip
pub fn write_word_list<W: std::fmt::Write>(words: &WordSet, w: &mut W) -> std::fmt::Result {
    for word in words {
        writeln!(w, "{}", word)?;
    }
    Ok(())
}
