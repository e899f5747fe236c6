//! Board addressing: 1-indexed coordinates and rectangular extents.

use core::fmt;

/// A 1-indexed (row, col) position on a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    /// Create a coordinate. Both components are expected to be `>= 1`.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Anything exposing row/column extents that ships can be checked against.
pub trait Bounds {
    fn num_rows(&self) -> usize;
    fn num_cols(&self) -> usize;

    /// True if `coord` lies within `[1, rows] x [1, cols]`.
    fn contains(&self, coord: Coord) -> bool {
        (1..=self.num_rows()).contains(&coord.row) && (1..=self.num_cols()).contains(&coord.col)
    }
}

/// Plain rectangular extents, for checking placements before a grid exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub rows: usize,
    pub cols: usize,
}

impl Dimensions {
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }
}

impl Bounds for Dimensions {
    fn num_rows(&self) -> usize {
        self.rows
    }

    fn num_cols(&self) -> usize {
        self.cols
    }
}
