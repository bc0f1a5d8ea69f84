//! Straight-line word matching at a single placement.

use crate::direction::{Coord, Direction};
use crate::grid::Grid;
use crate::loader::MAP_DIM_LIMIT;

/// Does `word` read from `origin` in `direction`?
///
/// The placement is validated before any cell is read; an invalid placement is
/// simply a non-match. Comparison is byte-exact, since the loader has already
/// upper-cased both the grid and the word list. Words longer than
/// [`MAP_DIM_LIMIT`] can never fit and are reported as non-matches.
#[must_use]
pub fn matches_at(grid: &Grid, origin: Coord, direction: Direction, word: &str) -> bool {
    let word = word.as_bytes();
    debug_assert!(!word.is_empty(), "words are non-empty by construction");

    if word.is_empty() || word.len() > MAP_DIM_LIMIT {
        return false;
    }
    if !grid.extent().placement_fits(origin, word.len() - 1, direction) {
        return false;
    }

    word.iter()
        .enumerate()
        .all(|(i, &expected)| grid.cell(origin.step(direction, i)) == expected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::Puzzle;

    fn grid(input: &str) -> Grid {
        Puzzle::parse_from_str(input).unwrap().grid
    }

    #[test]
    fn test_matches_east() {
        let g = grid("4 1 0 CATX");
        assert!(matches_at(&g, Coord::new(0, 0), Direction::East, "CAT"));
        assert!(!matches_at(&g, Coord::new(1, 0), Direction::East, "CAT"));
    }

    #[test]
    fn test_matches_reverse() {
        let g = grid("4 1 0 CATX");
        assert!(matches_at(&g, Coord::new(2, 0), Direction::West, "TAC"));
    }

    #[test]
    fn test_matches_diagonals() {
        let g = grid("3 3 0 ABC DEF GHI");
        assert!(matches_at(&g, Coord::new(0, 0), Direction::SouthEast, "AEI"));
        assert!(matches_at(&g, Coord::new(2, 2), Direction::NorthWest, "IEA"));
        assert!(matches_at(&g, Coord::new(2, 0), Direction::SouthWest, "CEG"));
        assert!(matches_at(&g, Coord::new(0, 2), Direction::NorthEast, "GEC"));
    }

    #[test]
    fn test_out_of_bounds_placement_is_non_match() {
        let g = grid("3 3 0 ABC DEF GHI");
        // would need to read (3,0), (4,0)
        assert!(!matches_at(&g, Coord::new(1, 0), Direction::East, "BCX"));
        assert!(!matches_at(&g, Coord::new(0, 0), Direction::North, "AD"));
        assert!(!matches_at(&g, Coord::new(-1, 0), Direction::East, "A"));
        // a single letter needs no steps, so only the origin has to be inside
        assert!(matches_at(&g, Coord::new(0, 0), Direction::North, "A"));
    }

    #[test]
    fn test_single_letter_matches_every_direction() {
        let g = grid("2 1 0 AB");
        for dir in Direction::ALL {
            assert!(matches_at(&g, Coord::new(0, 0), dir, "A"));
            assert!(!matches_at(&g, Coord::new(1, 0), dir, "A"));
        }
    }

    #[test]
    fn test_word_longer_than_any_span_never_matches() {
        let g = grid("3 3 0 AAA AAA AAA");
        for x in 0..3 {
            for y in 0..3 {
                for dir in Direction::ALL {
                    assert!(!matches_at(&g, Coord::new(x, y), dir, "AAAA"));
                }
            }
        }
    }

    #[test]
    fn test_word_beyond_dimension_limit_is_unmatchable() {
        let g = grid("2 1 0 AA");
        let long = "A".repeat(MAP_DIM_LIMIT + 1);
        assert!(!matches_at(&g, Coord::new(0, 0), Direction::East, &long));
    }
}
