//! Common types for the grid: errors and shot results.

/// Result of shooting a coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotResult {
    /// Shot landed on open water.
    Miss,
    /// Shot hit a ship that is still afloat.
    Hit,
    /// Shot hit the last intact cell of a ship.
    Sink,
    /// Target was already a hit ship cell; nothing changed.
    AlreadyHit,
    /// Target was already shot open water; nothing observable changed.
    AlreadyMissed,
}

impl ShotResult {
    /// True for `Hit` and `Sink`.
    pub fn is_hit(&self) -> bool {
        matches!(self, ShotResult::Hit | ShotResult::Sink)
    }

    /// True if the shot targeted a coordinate that was already resolved.
    pub fn is_repeat(&self) -> bool {
        matches!(self, ShotResult::AlreadyHit | ShotResult::AlreadyMissed)
    }
}

/// Errors returned by Grid operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Ship footprint leaves the grid.
    ShipOutOfBounds,
    /// Ship footprint shares a cell with an already placed ship.
    ShipOverlaps,
    /// Saved shot flags do not cover `rows * cols` cells.
    CellCountMismatch { expected: usize, found: usize },
}

impl core::fmt::Display for GridError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GridError::ShipOutOfBounds => write!(f, "Ship placement is out of bounds"),
            GridError::ShipOverlaps => write!(f, "Ship placement overlaps with another ship"),
            GridError::CellCountMismatch { expected, found } => {
                write!(f, "Expected {} cells, found {}", expected, found)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GridError {}
