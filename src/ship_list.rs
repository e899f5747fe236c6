//! Append-only collection of mutually non-overlapping ships.

use alloc::vec::Vec;

use crate::ship::Ship;

/// Ships placed on one grid. No two members share a coordinate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShipList {
    ships: Vec<Ship>,
}

impl ShipList {
    pub fn new() -> Self {
        Self { ships: Vec::new() }
    }

    /// Append `ship` unless it overlaps an existing member.
    /// Returns `true` if it was added. Bounds are not checked here.
    pub fn add_ship(&mut self, ship: Ship) -> bool {
        if self.is_overlapping(&ship) {
            return false;
        }
        self.ships.push(ship);
        true
    }

    /// True if `ship` shares a coordinate with any current member.
    pub fn is_overlapping(&self, ship: &Ship) -> bool {
        self.ships.iter().any(|existing| existing.is_overlapping(ship))
    }

    /// Read-only view of the ships, in insertion order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn len(&self) -> usize {
        self.ships.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ships.is_empty()
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Ship> {
        self.ships.iter()
    }
}
