use crate::bounds::Extent;
use crate::direction::Coord;

/// The letter grid, stored as one dense row-major buffer with no row separators.
///
/// Every cell holds an uppercase ASCII letter or digit; the loader guarantees this
/// and nothing mutates the grid afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    extent: Extent,
    cells: Vec<u8>,
}

impl Grid {
    /// Wrap an already-normalized buffer. `cells.len()` must equal `extent.area()`.
    pub(crate) fn from_cells(extent: Extent, cells: Vec<u8>) -> Self {
        debug_assert_eq!(cells.len(), extent.area(), "grid buffer does not match its extent");
        debug_assert!(
            cells.iter().all(|b| b.is_ascii_uppercase() || b.is_ascii_digit()),
            "grid cells must be normalized to uppercase alphanumerics"
        );
        Self { extent, cells }
    }

    #[must_use]
    pub fn extent(&self) -> Extent {
        self.extent
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.extent.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.extent.height
    }

    /// Character at `at`, i.e. `cells[y * width + x]`.
    ///
    /// # Panics
    /// Panics if `at` is outside the grid. Callers validate placements first, so
    /// hitting this is a bug in the caller.
    #[must_use]
    pub fn cell(&self, at: Coord) -> u8 {
        assert!(
            self.extent.contains(at),
            "cell lookup at {at} outside {}x{} grid",
            self.extent.width,
            self.extent.height
        );
        // both casts are in range after the assert
        self.cells[at.y as usize * self.extent.width + at.x as usize]
    }
}
