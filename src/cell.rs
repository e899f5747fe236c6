//! Per-position shot state and the status derived from it.

/// What a viewer can observe at a coordinate.
///
/// Never stored: it is derived from a cell's shot flag and whether a ship
/// occupies the coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum CellStatus {
    /// No ship, not shot.
    Unknown,
    /// No ship, shot.
    Empty,
    /// Ship present, not shot.
    ShipUnrevealed,
    /// Ship present, shot.
    ShipHit,
}

impl CellStatus {
    /// Combine a shot flag with ship occupancy.
    pub const fn derive(shot: bool, occupied: bool) -> Self {
        match (occupied, shot) {
            (true, true) => CellStatus::ShipHit,
            (true, false) => CellStatus::ShipUnrevealed,
            (false, true) => CellStatus::Empty,
            (false, false) => CellStatus::Unknown,
        }
    }
}

/// A single grid cell. Once shot, stays shot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cell {
    shot: bool,
}

impl Cell {
    pub const fn new() -> Self {
        Self { shot: false }
    }

    pub fn has_been_shot(&self) -> bool {
        self.shot
    }

    /// Idempotent.
    pub fn mark_shot(&mut self) {
        self.shot = true;
    }
}

impl From<bool> for Cell {
    fn from(shot: bool) -> Self {
        Self { shot }
    }
}
