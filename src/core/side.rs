//! One participant's board together with the fleet on it.

use super::board::{Board, Cell};
use super::common::{BoardError, Coord, Orientation, Shot};
use super::placement;
use super::ship::{Fleet, Ship, ShipId};

/// A board and the fleet placed on it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerSide {
    board: Board,
    fleet: Fleet,
}

impl PlayerSide {
    /// Empty board with an unplaced standard fleet.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    /// Place ship `id`; see [`placement::place_ship`].
    pub fn place_ship(
        &mut self,
        id: ShipId,
        origin: Coord,
        orientation: Orientation,
    ) -> Result<(), BoardError> {
        let ship = self.fleet.get_mut(id)?;
        placement::place_ship(&mut self.board, ship, origin, orientation)
    }

    /// Resolve an incoming attack. A hit that completes a ship is reported
    /// as [`Shot::Sunk`].
    pub fn receive_attack(&mut self, coord: Coord) -> Result<Shot, BoardError> {
        match self.board.resolve_attack(coord)? {
            Shot::Hit(id) if self.is_sunk(id) => Ok(Shot::Sunk(id)),
            shot => Ok(shot),
        }
    }

    /// `true` iff ship `id` is placed and every one of its cells is hit.
    pub fn is_sunk(&self, id: ShipId) -> bool {
        self.fleet
            .get(id)
            .map(|ship| self.ship_sunk(ship))
            .unwrap_or(false)
    }

    fn ship_sunk(&self, ship: &Ship) -> bool {
        ship.is_placed()
            && ship
                .cells()
                .iter()
                .all(|&c| matches!(self.board.cell(c), Ok(Cell::Hit)))
    }

    /// Returns `true` when every ship of the fleet is sunk.
    pub fn all_sunk(&self) -> bool {
        self.fleet.ships().iter().all(|s| self.ship_sunk(s))
    }

    /// Ships already sunk, in catalog order.
    pub fn sunk_ships(&self) -> impl Iterator<Item = &Ship> + '_ {
        self.fleet.ships().iter().filter(move |s| self.ship_sunk(s))
    }

    /// Ship sunk at `coord`, if the cell belongs to one.
    pub fn sunk_ship_at(&self, coord: Coord) -> Option<ShipId> {
        self.fleet
            .ship_at(coord)
            .filter(|s| self.ship_sunk(s))
            .map(Ship::id)
    }
}
