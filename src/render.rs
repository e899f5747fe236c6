//! Text views of a grid for owners and opponents.

use core::fmt;

use crate::cell::CellStatus;
use crate::coord::Coord;
use crate::grid::Grid;

/// Everything visible, including unrevealed ships.
pub struct OwnerView<'a>(pub &'a Grid);

/// Only what an opponent has learned by shooting.
pub struct OpponentView<'a>(pub &'a Grid);

fn symbol(status: CellStatus, reveal: bool) -> char {
    match status {
        CellStatus::Unknown => '.',
        CellStatus::Empty => 'o',
        CellStatus::ShipUnrevealed if reveal => 'S',
        CellStatus::ShipUnrevealed => '.',
        CellStatus::ShipHit => 'X',
    }
}

fn write_grid(f: &mut fmt::Formatter<'_>, grid: &Grid, reveal: bool) -> fmt::Result {
    write!(f, "   ")?;
    for col in 1..=grid.num_cols() {
        write!(f, " {:>2}", col)?;
    }
    writeln!(f)?;
    for row in 1..=grid.num_rows() {
        write!(f, "{:>2} ", row)?;
        for col in 1..=grid.num_cols() {
            let status = grid.status(Coord::new(row, col));
            write!(f, "  {}", symbol(status, reveal))?;
        }
        writeln!(f)?;
    }
    Ok(())
}

impl fmt::Display for OwnerView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_grid(f, self.0, true)
    }
}

impl fmt::Display for OpponentView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_grid(f, self.0, false)
    }
}
