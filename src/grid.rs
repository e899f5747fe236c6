//! The board aggregate: dimensions, cell matrix and placed ships.

use alloc::vec::Vec;
use core::fmt;

use log::{debug, warn};

use crate::cell::{Cell, CellStatus};
use crate::common::{GridError, ShotResult};
use crate::coord::{Bounds, Coord};
use crate::ship::Ship;
use crate::ship_list::ShipList;

/// A single player's board.
///
/// Statuses are always derived from the cell shot flags and ship membership;
/// nothing else is cached. There is no internal locking: share a `Grid`
/// between threads only behind external synchronisation.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
    ships: ShipList,
}

impl Grid {
    /// Create a grid of unshot cells with no ships.
    ///
    /// # Panics
    ///
    /// Panics if `rows * cols` overflows `usize`.
    pub fn new(rows: usize, cols: usize) -> Self {
        let size = match rows.checked_mul(cols) {
            Some(size) => size,
            None => panic!("grid of {}x{} cells is too large", rows, cols),
        };
        Grid {
            rows,
            cols,
            cells: (0..size).map(|_| Cell::new()).collect(),
            ships: ShipList::new(),
        }
    }

    /// Create a grid and place `ships` in order, failing on the first rejection.
    pub fn with_ships<I>(rows: usize, cols: usize, ships: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = Ship>,
    {
        let mut grid = Grid::new(rows, cols);
        for ship in ships {
            grid.add_ship(ship)?;
        }
        Ok(grid)
    }

    /// Rebuild a grid from saved shot flags (row-major) and ships.
    pub(crate) fn from_parts<I>(
        rows: usize,
        cols: usize,
        shots: Vec<bool>,
        ships: I,
    ) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = Ship>,
    {
        if rows.checked_mul(cols) != Some(shots.len()) {
            return Err(GridError::CellCountMismatch {
                expected: rows.saturating_mul(cols),
                found: shots.len(),
            });
        }
        let mut grid = Grid::with_ships(rows, cols, ships)?;
        grid.cells = shots.into_iter().map(Cell::from).collect();
        Ok(grid)
    }

    pub fn num_rows(&self) -> usize {
        self.rows
    }

    pub fn num_cols(&self) -> usize {
        self.cols
    }

    /// True if `coord` addresses a cell of this grid.
    pub fn contains(&self, coord: Coord) -> bool {
        Bounds::contains(self, coord)
    }

    /// All coordinates in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        (1..=self.rows).flat_map(move |row| (1..=self.cols).map(move |col| Coord::new(row, col)))
    }

    /// Shot flags in row-major order.
    pub(crate) fn shots(&self) -> impl Iterator<Item = bool> + '_ {
        self.cells.iter().map(Cell::has_been_shot)
    }

    // Panics on coordinates outside the grid; callers check with `contains`.
    fn index(&self, coord: Coord) -> usize {
        if !self.contains(coord) {
            panic!(
                "coordinate {} out of bounds for {}x{} grid",
                coord, self.rows, self.cols
            );
        }
        (coord.row - 1) * self.cols + (coord.col - 1)
    }

    fn cell(&self, coord: Coord) -> &Cell {
        &self.cells[self.index(coord)]
    }

    fn cell_mut(&mut self, coord: Coord) -> &mut Cell {
        let idx = self.index(coord);
        &mut self.cells[idx]
    }

    /// Observable status of `coord`.
    pub fn status(&self, coord: Coord) -> CellStatus {
        let shot = self.cell(coord).has_been_shot();
        let occupied = self.ships.iter().any(|ship| ship.contains_coord(coord));
        CellStatus::derive(shot, occupied)
    }

    /// Place a ship if it lies inside the grid and overlaps no placed ship.
    pub fn add_ship(&mut self, ship: Ship) -> Result<(), GridError> {
        if !ship.is_within_bounds(&*self) {
            warn!("rejected ship {:?}: out of bounds", ship);
            return Err(GridError::ShipOutOfBounds);
        }
        debug!("placing ship {:?}", ship);
        if !self.ships.add_ship(ship) {
            warn!("rejected ship: overlaps a placed ship");
            return Err(GridError::ShipOverlaps);
        }
        Ok(())
    }

    /// Placed ships, in placement order.
    pub fn ships(&self) -> &[Ship] {
        self.ships.ships()
    }

    /// True when every cell of every ship has been hit. Vacuously true with no ships.
    pub fn all_ships_are_sunk(&self) -> bool {
        self.ships.iter().all(|ship| self.is_ship_sunk(ship))
    }

    /// True when every cell of `ship` has been hit.
    pub fn is_ship_sunk(&self, ship: &Ship) -> bool {
        ship.footprint()
            .iter()
            .all(|&c| self.status(c) == CellStatus::ShipHit)
    }

    /// The first ship occupying `coord`.
    ///
    /// A sunk ship is always returned. An afloat ship is returned only when
    /// `only_sunk` is false.
    pub fn ship_at(&self, coord: Coord, only_sunk: bool) -> Option<&Ship> {
        let ship = self.ships.iter().find(|ship| ship.contains_coord(coord))?;
        if only_sunk && !self.is_ship_sunk(ship) {
            None
        } else {
            Some(ship)
        }
    }

    /// Number of ships not yet sunk.
    pub fn remaining_ships(&self) -> usize {
        self.ships.iter().filter(|ship| !self.is_ship_sunk(ship)).count()
    }

    /// Fire at `coord`. Shooting an already hit ship cell changes nothing.
    pub fn shoot(&mut self, coord: Coord) -> ShotResult {
        let result = match self.status(coord) {
            CellStatus::ShipHit => ShotResult::AlreadyHit,
            CellStatus::Empty => {
                self.cell_mut(coord).mark_shot();
                ShotResult::AlreadyMissed
            }
            CellStatus::Unknown => {
                self.cell_mut(coord).mark_shot();
                ShotResult::Miss
            }
            CellStatus::ShipUnrevealed => {
                self.cell_mut(coord).mark_shot();
                if self.ship_at(coord, true).is_some() {
                    ShotResult::Sink
                } else {
                    ShotResult::Hit
                }
            }
        };
        debug!("shot at {}: {:?}", coord, result);
        result
    }
}

impl Bounds for Grid {
    fn num_rows(&self) -> usize {
        self.rows
    }

    fn num_cols(&self) -> usize {
        self.cols
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Grid {{\n  rows: {},\n  cols: {},\n  ships: {:?},\n  cells:\n{}}}",
            self.rows,
            self.cols,
            self.ships.ships(),
            crate::render::OwnerView(self)
        )
    }
}
