use alloc::vec::Vec;

use crate::coord::Coord;
use crate::ship::{Orientation, Ship, ShipType};

pub const DEFAULT_ROWS: usize = 10;
pub const DEFAULT_COLS: usize = 10;
/// Largest row or column count the CLI accepts.
pub const MAX_DIMENSION: usize = 1000;
pub const NUM_SHIPS: usize = 5;
pub const SHIPS: [ShipType; NUM_SHIPS] = [
    ShipType::new("Carrier", 5),
    ShipType::new("Battleship", 4),
    ShipType::new("Cruiser", 3),
    ShipType::new("Submarine", 3),
    ShipType::new("Destroyer", 2),
];

/// Total number of ship cells in the standard fleet.
pub const TOTAL_SHIP_CELLS: usize = total_ship_cells();

const fn total_ship_cells() -> usize {
    let mut total = 0;
    let mut i = 0;
    while i < NUM_SHIPS {
        total += SHIPS[i].length();
        i += 1;
    }
    total
}

/// The standard fleet laid out horizontally on every other row, starting at (1, 1).
/// Fits any grid of at least 9 rows and 5 columns.
pub fn standard_fleet() -> Vec<Ship> {
    SHIPS
        .iter()
        .enumerate()
        .map(|(i, def)| Ship::line(Coord::new(2 * i + 1, 1), Orientation::Horizontal, def.length()))
        .collect()
}
