//! Serializable grid snapshot for saving and restoring games.

use alloc::vec::Vec;

use crate::common::GridError;
use crate::coord::Coord;
use crate::grid::Grid;
use crate::ship::Ship;

/// Everything needed to rebuild a grid with identical statuses.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GridState {
    pub rows: usize,
    pub cols: usize,
    /// Shot flags, row-major.
    pub shots: Vec<bool>,
    /// Ship footprints in placement order.
    pub ships: Vec<Vec<Coord>>,
}

impl From<&Grid> for GridState {
    fn from(grid: &Grid) -> Self {
        GridState {
            rows: grid.num_rows(),
            cols: grid.num_cols(),
            shots: grid.shots().collect(),
            ships: grid
                .ships()
                .iter()
                .map(|ship| ship.footprint().to_vec())
                .collect(),
        }
    }
}

impl TryFrom<GridState> for Grid {
    type Error = GridError;

    /// Ships are revalidated, so a tampered state cannot break placement invariants.
    fn try_from(state: GridState) -> Result<Self, Self::Error> {
        Grid::from_parts(
            state.rows,
            state.cols,
            state.shots,
            state.ships.into_iter().map(Ship::from),
        )
    }
}

#[cfg(feature = "std")]
impl GridState {
    /// Encode with bincode.
    pub fn encode(&self) -> anyhow::Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode a bincode-encoded state.
    pub fn decode(bytes: &[u8]) -> anyhow::Result<Self> {
        Ok(bincode::deserialize(bytes)?)
    }
}
