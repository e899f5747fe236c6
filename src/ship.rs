//! Ship footprints and the geometry predicates used for placement.

use alloc::vec::Vec;
use core::fmt;

use crate::coord::{Bounds, Coord};

/// Orientation of a straight ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Type of ship: name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipType {
    name: &'static str,
    length: usize,
}

impl ShipType {
    /// Create a new ship type.
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    /// Ship's name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Ship's length.
    pub const fn length(&self) -> usize {
        self.length
    }
}

/// An immutable, ordered footprint of coordinates.
///
/// A ship does not own any cells; the grid cross-references its footprint
/// against its own cell matrix.
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(transparent))]
pub struct Ship {
    coords: Vec<Coord>,
}

impl Ship {
    /// Build a ship from an arbitrary footprint, kept in the given order.
    pub fn new<I>(coords: I) -> Self
    where
        I: IntoIterator<Item = Coord>,
    {
        Self {
            coords: coords.into_iter().collect(),
        }
    }

    /// A straight ship of `length` cells starting at `origin`, extending right
    /// (horizontal) or down (vertical).
    pub fn line(origin: Coord, orientation: Orientation, length: usize) -> Self {
        Self::new((0..length).map(|i| match orientation {
            Orientation::Horizontal => Coord::new(origin.row, origin.col + i),
            Orientation::Vertical => Coord::new(origin.row + i, origin.col),
        }))
    }

    /// Occupied coordinates in construction order.
    pub fn footprint(&self) -> &[Coord] {
        &self.coords
    }

    /// Number of cells in the footprint.
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    pub fn contains_coord(&self, coord: Coord) -> bool {
        self.coords.contains(&coord)
    }

    /// True if every footprint coordinate lies within `bounds`.
    pub fn is_within_bounds<B: Bounds + ?Sized>(&self, bounds: &B) -> bool {
        self.coords.iter().all(|&c| bounds.contains(c))
    }

    /// True if the two footprints share at least one coordinate.
    pub fn is_overlapping(&self, other: &Ship) -> bool {
        self.coords.iter().any(|&c| other.contains_coord(c))
    }
}

impl From<Vec<Coord>> for Ship {
    fn from(coords: Vec<Coord>) -> Self {
        Self { coords }
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Ship [")?;
        for (i, c) in self.coords.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", c)?;
        }
        f.write_str("]")
    }
}
