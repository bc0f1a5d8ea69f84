//! Compass directions and the coordinate transform used to walk the grid.
//!
//! Rows grow downward and columns grow rightward, so "north" is `y - 1` and
//! "east" is `x + 1`.

use std::fmt;

/// One of the eight straight-line headings a word can be read in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    /// All directions, in the order the search visits them (clockwise from north).
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// Unit step `(dx, dy)` for this direction.
    #[must_use]
    pub fn offset(self) -> (isize, isize) {
        match self {
            Direction::North => (0, -1),
            Direction::NorthEast => (1, -1),
            Direction::East => (1, 0),
            Direction::SouthEast => (1, 1),
            Direction::South => (0, 1),
            Direction::SouthWest => (-1, 1),
            Direction::West => (-1, 0),
            Direction::NorthWest => (-1, -1),
        }
    }

    /// Lowercase name used in reports (`"northeast"`, ...).
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::NorthEast => "northeast",
            Direction::East => "east",
            Direction::SouthEast => "southeast",
            Direction::South => "south",
            Direction::SouthWest => "southwest",
            Direction::West => "west",
            Direction::NorthWest => "northwest",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A grid position. Signed so that steps off the top/left edge stay representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Coord {
    pub x: isize,
    pub y: isize,
}

impl Coord {
    #[must_use]
    pub fn new(x: isize, y: isize) -> Self {
        Self { x, y }
    }

    /// The coordinate reached by moving `delta` cells in `direction`.
    ///
    /// Saturates instead of overflowing; any saturated result is far outside
    /// every valid grid, so the bounds check still rejects it.
    #[must_use]
    pub fn step(self, direction: Direction, delta: usize) -> Coord {
        let delta = isize::try_from(delta).unwrap_or(isize::MAX);
        let (dx, dy) = direction.offset();
        Coord {
            x: self.x.saturating_add(dx.saturating_mul(delta)),
            y: self.y.saturating_add(dy.saturating_mul(delta)),
        }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
