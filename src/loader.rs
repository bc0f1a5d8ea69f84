//! `loader` — parses the puzzle text format into a [`Grid`] and a word list.
//!
//! The input is a stream of whitespace-separated tokens:
//!
//! ```text
//! <width> <height> <word_count>
//! <word_1> ... <word_word_count>
//! <grid_token_1> <grid_token_2> ...
//! ```
//!
//! Grid tokens are concatenated in reading order until exactly `width*height`
//! characters have been read, so rows may be split or joined freely. Words and
//! grid characters must be ASCII letters or digits and are upper-cased here;
//! everything downstream assumes normalized input.
//!
//! Tokens are pulled from a [`BufRead`] one at a time, so a bad header or an
//! exceeded limit is reported as soon as it is read, without waiting for the
//! rest of the stream. Tokenizing works on raw bytes, so non-UTF-8 input is
//! reported as an invalid character rather than as an I/O failure.

use crate::bounds::Extent;
use crate::errors::LoadError;
use crate::grid::Grid;
use log::debug;
use nom::bytes::complete::{take_till, take_while};
use nom::character::complete::u64 as decimal;
use nom::combinator::all_consuming;
use nom::{IResult, Parser};
use std::io::BufRead;
use std::path::Path;

/// Largest accepted grid width or height.
pub const MAP_DIM_LIMIT: usize = 1023;
/// Largest accepted word count.
pub const WORD_LIST_LIMIT: usize = MAP_DIM_LIMIT * MAP_DIM_LIMIT;

/// Header tokens longer than this are rejected without being buffered further.
const NUMBER_TOKEN_LIMIT: usize = 64;

type TokResult<'a, O> = IResult<&'a [u8], O>;

/// Whitespace as understood by C's `isspace` (Rust's ASCII set lacks `\v`).
fn is_space(b: u8) -> bool {
    b.is_ascii_whitespace() || b == 0x0b
}

/// Leading whitespace of a buffered chunk.
fn spaces(chunk: &[u8]) -> TokResult<'_, &[u8]> {
    take_while(is_space).parse(chunk)
}

/// Leading non-whitespace of a buffered chunk.
fn token_chars(chunk: &[u8]) -> TokResult<'_, &[u8]> {
    take_till(is_space).parse(chunk)
}

/// A whole token that must be a non-negative decimal integer.
fn decimal_token(token: &[u8]) -> TokResult<'_, u64> {
    all_consuming(decimal).parse(token)
}

/// Upper-case `raw` in place, returning the first non-alphanumeric byte on failure.
fn normalize(raw: &mut [u8]) -> Result<(), (usize, u8)> {
    for (i, b) in raw.iter_mut().enumerate() {
        if !b.is_ascii_alphanumeric() {
            return Err((i, *b));
        }
        b.make_ascii_uppercase();
    }
    Ok(())
}

/// Whitespace-delimited tokens pulled lazily from a buffered reader.
struct Tokens<'o, R> {
    reader: R,
    origin: &'o str,
    token: Vec<u8>,
}

impl<'o, R: BufRead> Tokens<'o, R> {
    fn new(reader: R, origin: &'o str) -> Self {
        Self { reader, origin, token: Vec::new() }
    }

    /// The next token, or `None` at end of input.
    ///
    /// Stops buffering once the token is longer than `limit`, so the returned
    /// token is at most `limit + 1` bytes; callers treat that length as an error.
    fn next_token(&mut self, limit: usize) -> Result<Option<&[u8]>, LoadError> {
        loop {
            let chunk = self.reader.fill_buf().map_err(|source| LoadError::Io {
                origin: self.origin.to_string(),
                source,
            })?;
            if chunk.is_empty() {
                return Ok(None);
            }
            let skipped = spaces(chunk).map_or(0, |(_, s)| s.len());
            let reached_token = skipped < chunk.len();
            self.reader.consume(skipped);
            if reached_token {
                break;
            }
        }

        self.token.clear();
        loop {
            let chunk = self.reader.fill_buf().map_err(|source| LoadError::Io {
                origin: self.origin.to_string(),
                source,
            })?;
            if chunk.is_empty() {
                break;
            }
            let room = limit.saturating_add(1) - self.token.len();
            let take = token_chars(chunk).map_or(0, |(_, t)| t.len()).min(room);
            self.token
                .try_reserve(take)
                .map_err(|source| LoadError::Alloc { what: "input token", source })?;
            self.token.extend_from_slice(&chunk[..take]);
            let token_ended = take < chunk.len();
            self.reader.consume(take);
            if token_ended || self.token.len() > limit {
                break;
            }
        }
        Ok(Some(&self.token))
    }

    /// The next token as a header number; `field` names it in the error.
    fn number(&mut self, field: &str) -> Result<u64, LoadError> {
        match self.next_token(NUMBER_TOKEN_LIMIT)? {
            Some(token) if token.len() <= NUMBER_TOKEN_LIMIT => decimal_token(token)
                .map(|(_, n)| n)
                .map_err(|_| header_error(field)),
            _ => Err(header_error(field)),
        }
    }
}

/// A loaded puzzle: the grid and the words to find in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    pub grid: Grid,
    /// Upper-cased words, in input order. Duplicates are kept and tracked separately.
    pub words: Vec<String>,
}

impl Puzzle {
    /// Parse a complete puzzle from in-memory bytes.
    ///
    /// # Errors
    ///
    /// Returns a format-class [`LoadError`] for malformed content or exceeded limits,
    /// or [`LoadError::Alloc`] if the buffers cannot be reserved.
    pub fn parse_from_bytes(input: &[u8]) -> Result<Puzzle, LoadError> {
        Self::load_from_reader(input, "input")
    }

    /// Convenience wrapper over [`Puzzle::parse_from_bytes`] for in-memory text.
    ///
    /// # Errors
    ///
    /// Same as [`Puzzle::parse_from_bytes`].
    pub fn parse_from_str(input: &str) -> Result<Puzzle, LoadError> {
        Self::parse_from_bytes(input.as_bytes())
    }

    /// Load a puzzle from `reader`. `origin` names the source in error messages.
    ///
    /// The reader is consumed once, sequentially, and dropped as soon as the grid
    /// is complete. Loading stops at the first error, before the rest of the
    /// stream is read.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Io`] if reading fails, [`LoadError::Alloc`] if a buffer
    /// cannot be reserved, and a format-class [`LoadError`] for malformed content or
    /// exceeded limits.
    pub fn load_from_reader<R: BufRead>(reader: R, origin: &str) -> Result<Puzzle, LoadError> {
        let mut tokens = Tokens::new(reader, origin);

        // Step 1: header
        let width = tokens.number("map size")?;
        let height = tokens.number("map size")?;
        let word_count = tokens.number("word count")?;

        if width > MAP_DIM_LIMIT as u64 || height > MAP_DIM_LIMIT as u64 {
            return Err(LoadError::MapTooLarge { width, height, limit: MAP_DIM_LIMIT });
        }
        // both fit in usize after the limit check
        let extent = Extent::new(width as usize, height as usize);
        if extent.area() == 0 {
            return Err(LoadError::EmptyMap { width: extent.width, height: extent.height });
        }
        if word_count > WORD_LIST_LIMIT as u64 {
            return Err(LoadError::TooManyWords { count: word_count, limit: WORD_LIST_LIMIT });
        }
        let word_count = word_count as usize;
        debug!("header: {}x{} grid, {word_count} words", extent.width, extent.height);

        // Step 2: words
        let mut words: Vec<String> = Vec::new();
        words
            .try_reserve_exact(word_count)
            .map_err(|source| LoadError::Alloc { what: "words", source })?;

        for found in 0..word_count {
            let raw = tokens
                .next_token(usize::MAX)?
                .ok_or(LoadError::MissingWords { expected: word_count, found })?;

            if let Some(&invalid_byte) = raw.iter().find(|b| !b.is_ascii_alphanumeric()) {
                return Err(LoadError::InvalidWordChar {
                    word: String::from_utf8_lossy(raw).into_owned(),
                    invalid_byte,
                });
            }

            let mut word = String::new();
            word.try_reserve_exact(raw.len())
                .map_err(|source| LoadError::Alloc { what: "words", source })?;
            word.extend(raw.iter().map(|b| char::from(b.to_ascii_uppercase())));
            words.push(word);
        }

        // Step 3: grid
        let expected = extent.area();
        let mut cells: Vec<u8> = Vec::new();
        cells
            .try_reserve_exact(expected)
            .map_err(|source| LoadError::Alloc { what: "map", source })?;

        loop {
            let room = expected - cells.len();
            let Some(raw) = tokens.next_token(room)? else {
                break;
            };
            if raw.len() > room {
                return Err(LoadError::MapTooLong { expected });
            }

            let start = cells.len();
            cells.extend_from_slice(raw);
            normalize(&mut cells[start..]).map_err(|(i, invalid_byte)| LoadError::InvalidMapChar {
                invalid_byte,
                offset: start + i,
            })?;
        }
        drop(tokens);

        if cells.len() != expected {
            return Err(LoadError::MapTooShort { expected, found: cells.len() });
        }

        debug!("loaded {} grid cells and {} words from {origin}", cells.len(), words.len());
        Ok(Puzzle { grid: Grid::from_cells(extent, cells), words })
    }

    /// Open `path` and load a puzzle from it.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Io`] if the file cannot be opened or read, otherwise as
    /// [`Puzzle::load_from_reader`].
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Puzzle, LoadError> {
        let path_ref = path.as_ref();
        let origin = format!("map file '{}'", path_ref.display());

        let file = std::fs::File::open(path_ref).map_err(|source| LoadError::Io {
            origin: origin.clone(),
            source,
        })?;

        Self::load_from_reader(std::io::BufReader::new(file), &origin)
    }
}

fn header_error(field: &str) -> LoadError {
    LoadError::Header { field: field.to_string() }
}
