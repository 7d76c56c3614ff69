//! Read-only snapshots of a board for consumers outside the engine.
//!
//! A *revealed* view is what a side sees of its own board. A *hidden* view is
//! what the other side may see: attacked cells only, with the identity of a
//! ship disclosed once it is sunk.

use alloc::vec::Vec;

use super::board::Cell;
use super::common::Coord;
use super::config::BOARD_SIZE;
use super::ship::ShipId;
use super::side::PlayerSide;

/// What a consumer may know about one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum CellView {
    /// Not attacked; contents withheld.
    Unknown,
    /// Not attacked, known to be open water.
    Water,
    /// Not attacked, known to hold this ship.
    Ship(ShipId),
    /// Attacked and struck a ship that is still afloat.
    Hit,
    /// Attacked and struck this ship, which is now sunk.
    Sunk(ShipId),
    /// Attacked and found only water.
    Miss,
}

impl CellView {
    /// `true` once the cell has been attacked.
    pub fn is_attacked(&self) -> bool {
        matches!(self, CellView::Hit | CellView::Sunk(_) | CellView::Miss)
    }
}

/// Snapshot of one board.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardView {
    cells: [[CellView; BOARD_SIZE]; BOARD_SIZE],
    sunk: Vec<ShipId>,
}

impl BoardView {
    /// Owner's view: ship positions visible.
    pub fn revealed(side: &PlayerSide) -> Self {
        Self::build(side, true)
    }

    /// Adversary's view: only hit/miss markers and sunk ships.
    pub fn hidden(side: &PlayerSide) -> Self {
        Self::build(side, false)
    }

    fn build(side: &PlayerSide, reveal: bool) -> Self {
        let mut cells = [[CellView::Unknown; BOARD_SIZE]; BOARD_SIZE];
        for (coord, cell) in side.board().iter() {
            cells[coord.row][coord.col] = match cell {
                Cell::Empty if reveal => CellView::Water,
                Cell::Occupied(id) if reveal => CellView::Ship(id),
                Cell::Empty | Cell::Occupied(_) => CellView::Unknown,
                Cell::Miss => CellView::Miss,
                Cell::Hit => match side.sunk_ship_at(coord) {
                    Some(id) => CellView::Sunk(id),
                    None => CellView::Hit,
                },
            };
        }
        let sunk = side.sunk_ships().map(|s| s.id()).collect();
        Self { cells, sunk }
    }

    /// Cell at `coord`, or `None` off the board.
    pub fn get(&self, coord: Coord) -> Option<CellView> {
        self.cells.get(coord.row)?.get(coord.col).copied()
    }

    /// `true` if `coord` is on the board and not yet attacked.
    pub fn is_untried(&self, coord: Coord) -> bool {
        self.get(coord).is_some_and(|c| !c.is_attacked())
    }

    /// Coordinates not yet attacked, row-major.
    pub fn untried(&self) -> impl Iterator<Item = Coord> + '_ {
        self.rows().enumerate().flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .filter(|(_, cell)| !cell.is_attacked())
                .map(move |(c, _)| Coord::new(r, c))
        })
    }

    /// Rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[CellView; BOARD_SIZE]> + '_ {
        self.cells.iter()
    }

    /// Ships known to be sunk.
    pub fn sunk(&self) -> &[ShipId] {
        &self.sunk
    }

    /// Returns `true` if the cell at `coord` belongs to a sunk ship.
    pub fn is_sunk_cell(&self, coord: Coord) -> bool {
        matches!(self.get(coord), Some(CellView::Sunk(_)))
    }
}
