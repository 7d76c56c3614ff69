//! Ship catalog entries, placed ships and the per-side fleet.

use alloc::vec::Vec;
use core::fmt;

use super::common::{BoardError, Coord, Orientation};
use super::config::SHIPS;

/// Type of ship: name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipDef {
    name: &'static str,
    length: usize,
}

impl ShipDef {
    /// Create a new ship type.
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    /// Ship's name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Ship's length.
    pub fn length(&self) -> usize {
        self.length
    }
}

/// Handle to a ship: its index in the fleet catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShipId(pub u8);

impl ShipId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for ShipId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match SHIPS.get(self.index()) {
            Some(def) => f.write_str(def.name()),
            None => write!(f, "ship #{}", self.0),
        }
    }
}

/// A ship of one fleet. Its cells are assigned once, at placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ship {
    id: ShipId,
    def: ShipDef,
    orientation: Option<Orientation>,
    cells: Vec<Coord>,
}

impl Ship {
    pub fn new(id: ShipId, def: ShipDef) -> Self {
        Self {
            id,
            def,
            orientation: None,
            cells: Vec::new(),
        }
    }

    pub fn id(&self) -> ShipId {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.def.name()
    }

    pub fn length(&self) -> usize {
        self.def.length()
    }

    pub fn is_placed(&self) -> bool {
        !self.cells.is_empty()
    }

    /// Occupied cells, from the origin outward. Empty until placed.
    pub fn cells(&self) -> &[Coord] {
        &self.cells
    }

    pub fn orientation(&self) -> Option<Orientation> {
        self.orientation
    }

    /// First cell of the ship, if placed.
    pub fn origin(&self) -> Option<Coord> {
        self.cells.first().copied()
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.cells.contains(&coord)
    }

    /// Record the ship's cells. Only the placement path calls this, after
    /// the board accepted the same cells.
    pub(crate) fn assign(&mut self, orientation: Orientation, cells: Vec<Coord>) {
        debug_assert_eq!(cells.len(), self.length());
        self.orientation = Some(orientation);
        self.cells = cells;
    }
}

/// The ships owned by one side, indexed by `ShipId`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fleet {
    ships: Vec<Ship>,
}

impl Fleet {
    /// A fresh fleet of the standard five ships.
    pub fn standard() -> Self {
        let ships = (0u8..)
            .zip(SHIPS.iter())
            .map(|(i, def)| Ship::new(ShipId(i), *def))
            .collect();
        Self { ships }
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn len(&self) -> usize {
        self.ships.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ships.is_empty()
    }

    pub fn get(&self, id: ShipId) -> Result<&Ship, BoardError> {
        self.ships.get(id.index()).ok_or(BoardError::UnknownShip(id))
    }

    pub(crate) fn get_mut(&mut self, id: ShipId) -> Result<&mut Ship, BoardError> {
        self.ships
            .get_mut(id.index())
            .ok_or(BoardError::UnknownShip(id))
    }

    /// Ship occupying `coord`, if any.
    pub fn ship_at(&self, coord: Coord) -> Option<&Ship> {
        self.ships.iter().find(|s| s.contains(coord))
    }

    /// Returns `true` once every ship has been given its cells.
    pub fn is_fully_placed(&self) -> bool {
        self.ships.iter().all(Ship::is_placed)
    }

    /// Ships still waiting for a position, in catalog order.
    pub fn unplaced(&self) -> impl Iterator<Item = &Ship> {
        self.ships.iter().filter(|s| !s.is_placed())
    }
}

impl Default for Fleet {
    fn default() -> Self {
        Self::standard()
    }
}
