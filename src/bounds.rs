//! Grid extents and placement validation.
//!
//! This is the only guard against reading outside the grid: the matcher must
//! call [`Extent::placement_fits`] before touching any cell.

use crate::direction::{Coord, Direction};

/// Width and height of a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Extent {
    pub width: usize,
    pub height: usize,
}

impl Extent {
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Number of cells (`width * height`).
    #[must_use]
    pub fn area(&self) -> usize {
        self.width * self.height
    }

    /// True iff `0 <= x < width` and `0 <= y < height`.
    #[must_use]
    pub fn contains(&self, at: Coord) -> bool {
        usize::try_from(at.x).is_ok_and(|x| x < self.width)
            && usize::try_from(at.y).is_ok_and(|y| y < self.height)
    }

    /// True iff both `origin` and the cell `steps` away in `direction` are inside.
    ///
    /// Coordinates change monotonically along a direction, so every cell in
    /// between is inside as well.
    #[must_use]
    pub fn placement_fits(&self, origin: Coord, steps: usize, direction: Direction) -> bool {
        self.contains(origin) && self.contains(origin.step(direction, steps))
    }
}
