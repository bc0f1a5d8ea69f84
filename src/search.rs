//! The exhaustive search: every cell, every direction, every word.
//!
//! # Examples
//!
//! ```
//! use wordsearch::loader::Puzzle;
//! use wordsearch::search;
//!
//! let puzzle = Puzzle::parse_from_str("4 1 1 cat CATX")?;
//! let mut found = Vec::new();
//! let tally = search::search(&puzzle, |m| {
//!     found.push((m.word.to_string(), m.origin, m.direction));
//!     Ok::<(), std::convert::Infallible>(())
//! })
//! .unwrap();
//!
//! assert_eq!(found.len(), 1);
//! assert_eq!(tally.count(0), 1);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use crate::direction::{Coord, Direction};
use crate::loader::Puzzle;
use crate::matcher::matches_at;
use log::{debug, info};
use std::time::Instant;

/// One occurrence of a word. Handed to the caller as soon as it is found and not kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match<'a> {
    /// The (upper-cased) word text.
    pub word: &'a str,
    /// Position of the word in the word list.
    pub word_index: usize,
    /// Cell holding the word's first character.
    pub origin: Coord,
    pub direction: Direction,
}

/// Per-word occurrence counts, in word-list order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tally<'a> {
    words: &'a [String],
    counts: Vec<usize>,
}

impl<'a> Tally<'a> {
    fn new(words: &'a [String]) -> Self {
        Self { words, counts: vec![0; words.len()] }
    }

    /// Occurrences of the word at `word_index`.
    ///
    /// # Panics
    /// Panics if `word_index` is not a valid word-list index.
    #[must_use]
    pub fn count(&self, word_index: usize) -> usize {
        self.counts[word_index]
    }

    /// Sum over all words.
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// `(word, count)` pairs in word-list order.
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, usize)> + '_ {
        self.words.iter().map(String::as_str).zip(self.counts.iter().copied())
    }
}

/// Run the full sweep over `puzzle`, calling `on_match` for each occurrence.
///
/// Cells are visited column by column (x outer, y inner), directions in
/// [`Direction::ALL`] order and words in list order; this fixes the order of the
/// callbacks but has no effect on the counts. Palindromes are reported once per
/// direction they read in.
///
/// # Errors
///
/// Stops at and returns the first error produced by `on_match`.
pub fn search<'p, E, F>(puzzle: &'p Puzzle, mut on_match: F) -> Result<Tally<'p>, E>
where
    F: FnMut(&Match<'p>) -> Result<(), E>,
{
    let started = Instant::now();
    let grid = &puzzle.grid;
    let mut tally = Tally::new(&puzzle.words);

    // grid dimensions are bounded by MAP_DIM_LIMIT, so the casts cannot truncate
    for x in 0..grid.width() as isize {
        for y in 0..grid.height() as isize {
            let origin = Coord::new(x, y);
            for direction in Direction::ALL {
                for (word_index, word) in puzzle.words.iter().enumerate() {
                    if matches_at(grid, origin, direction, word) {
                        tally.counts[word_index] += 1;
                        on_match(&Match { word, word_index, origin, direction })?;
                    }
                }
            }
        }
    }

    for (word, count) in tally.iter() {
        debug!("{word}: {count}");
    }
    info!(
        "searched {}x{} grid for {} words in {:.3}s ({} matches)",
        grid.width(),
        grid.height(),
        tally.len(),
        started.elapsed().as_secs_f64(),
        tally.total()
    );

    Ok(tally)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::Infallible;

    fn collect(input: &str) -> (Vec<(String, Coord, Direction)>, Vec<usize>) {
        let puzzle = Puzzle::parse_from_str(input).unwrap();
        let mut found = Vec::new();
        let tally = search(&puzzle, |m| {
            found.push((m.word.to_string(), m.origin, m.direction));
            Ok::<(), Infallible>(())
        })
        .unwrap();
        let counts = tally.iter().map(|(_, c)| c).collect();
        (found, counts)
    }

    #[test]
    fn test_single_horizontal_match() {
        let (found, counts) = collect("4 1 1 CAT CATX");
        assert_eq!(found, vec![("CAT".to_string(), Coord::new(0, 0), Direction::East)]);
        assert_eq!(counts, vec![1]);
    }

    #[test]
    fn test_sos_grid_counts_columns_and_diagonals() {
        let (found, counts) = collect("3 3 1 SOS SSS OOO SSS");
        let expected = vec![
            (Coord::new(0, 0), Direction::SouthEast),
            (Coord::new(0, 0), Direction::South),
            (Coord::new(0, 2), Direction::North),
            (Coord::new(0, 2), Direction::NorthEast),
            (Coord::new(1, 0), Direction::South),
            (Coord::new(1, 2), Direction::North),
            (Coord::new(2, 0), Direction::South),
            (Coord::new(2, 0), Direction::SouthWest),
            (Coord::new(2, 2), Direction::North),
            (Coord::new(2, 2), Direction::NorthWest),
        ];
        let got: Vec<(Coord, Direction)> = found.into_iter().map(|(_, c, d)| (c, d)).collect();
        assert_eq!(got, expected);
        assert_eq!(counts, vec![10]);
    }

    #[test]
    fn test_empty_word_list() {
        let (found, counts) = collect("2 2 0 ABCD");
        assert!(found.is_empty());
        assert!(counts.is_empty());
    }

    #[test]
    fn test_single_letter_reported_in_all_eight_directions() {
        let (found, counts) = collect("2 2 1 a ABAB");
        // two 'A' cells, eight directions each
        assert_eq!(counts, vec![16]);
        let at_origin: Vec<Direction> = found
            .iter()
            .filter(|(_, c, _)| *c == Coord::new(0, 0))
            .map(|(_, _, d)| *d)
            .collect();
        assert_eq!(at_origin, Direction::ALL.to_vec());
    }

    #[test]
    fn test_duplicate_words_counted_independently() {
        let (found, counts) = collect("4 1 2 CAT cat CATX");
        assert_eq!(counts, vec![1, 1]);
        assert_eq!(found.len(), 2);
    }

    #[test]
    fn test_palindrome_reported_both_ways() {
        let (found, counts) = collect("3 1 1 ABA ABA");
        assert_eq!(counts, vec![2]);
        assert_eq!(found[0].1, Coord::new(0, 0));
        assert_eq!(found[0].2, Direction::East);
        assert_eq!(found[1].1, Coord::new(2, 0));
        assert_eq!(found[1].2, Direction::West);
    }

    #[test]
    fn test_word_too_long_never_matches() {
        let (found, counts) = collect("3 3 1 AAAA AAA AAA AAA");
        assert!(found.is_empty());
        assert_eq!(counts, vec![0]);
    }

    #[test]
    fn test_callback_error_stops_search() {
        let puzzle = Puzzle::parse_from_str("2 2 1 A AAAA").unwrap();
        let mut seen = 0;
        let result = search(&puzzle, |_| {
            seen += 1;
            if seen == 3 { Err("stop") } else { Ok(()) }
        });
        assert_eq!(result.unwrap_err(), "stop");
        assert_eq!(seen, 3);
    }

    #[test]
    fn test_tally_accessors() {
        let puzzle = Puzzle::parse_from_str("4 1 2 CAT DOG CATX").unwrap();
        let tally = search(&puzzle, |_| Ok::<(), Infallible>(())).unwrap();
        assert_eq!(tally.len(), 2);
        assert!(!tally.is_empty());
        assert_eq!(tally.count(0), 1);
        assert_eq!(tally.count(1), 0);
        assert_eq!(tally.total(), 1);
        assert_eq!(tally.iter().collect::<Vec<_>>(), vec![("CAT", 1), ("DOG", 0)]);
    }
}
