//! Game board state: a fixed square grid of tagged cells.

use core::fmt;

use super::common::{BoardError, Coord, Shot};
use super::config::BOARD_SIZE;
use super::ship::ShipId;

/// Contents of one board cell.
///
/// A cell only ever moves `Empty -> Occupied` while ships are placed, and
/// `Empty | Occupied -> Hit | Miss` exactly once during combat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    #[default]
    Empty,
    Occupied(ShipId),
    Hit,
    Miss,
}

impl Cell {
    /// `true` once the cell has been attacked.
    pub fn is_attacked(&self) -> bool {
        matches!(self, Cell::Hit | Cell::Miss)
    }
}

/// A `BOARD_SIZE` x `BOARD_SIZE` grid owned by one side.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Create an empty board.
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Cell at `coord`.
    pub fn cell(&self, coord: Coord) -> Result<Cell, BoardError> {
        if !coord.in_bounds() {
            return Err(BoardError::OutOfBounds(coord));
        }
        Ok(self.cells[coord.row][coord.col])
    }

    /// Returns `true` if `coord` is on the board and has been attacked.
    pub fn is_attacked(&self, coord: Coord) -> bool {
        self.cell(coord).map(|c| c.is_attacked()).unwrap_or(false)
    }

    /// All cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        self.cells.iter().enumerate().flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .map(move |(c, cell)| (Coord::new(r, c), *cell))
        })
    }

    /// Coordinates not yet attacked.
    pub fn untried(&self) -> impl Iterator<Item = Coord> + '_ {
        self.iter()
            .filter(|(_, cell)| !cell.is_attacked())
            .map(|(coord, _)| coord)
    }

    /// Number of attacked cells.
    pub fn attacked_count(&self) -> usize {
        self.iter().filter(|(_, cell)| cell.is_attacked()).count()
    }

    /// Mark `cells` as occupied by `id`. Caller has already checked bounds
    /// and collisions for every cell.
    pub(crate) fn occupy(&mut self, id: ShipId, cells: &[Coord]) {
        for coord in cells {
            debug_assert_eq!(self.cells[coord.row][coord.col], Cell::Empty);
            self.cells[coord.row][coord.col] = Cell::Occupied(id);
        }
    }

    /// Process an attack at `coord`, marking a hit or a miss.
    ///
    /// Repeated attacks on the same cell are rejected with
    /// [`BoardError::AlreadyAttacked`] and leave the board untouched.
    pub fn resolve_attack(&mut self, coord: Coord) -> Result<Shot, BoardError> {
        let slot = self
            .cells
            .get_mut(coord.row)
            .and_then(|row| row.get_mut(coord.col))
            .ok_or(BoardError::OutOfBounds(coord))?;
        match *slot {
            Cell::Hit | Cell::Miss => Err(BoardError::AlreadyAttacked(coord)),
            Cell::Empty => {
                *slot = Cell::Miss;
                Ok(Shot::Miss)
            }
            Cell::Occupied(id) => {
                *slot = Cell::Hit;
                Ok(Shot::Hit(id))
            }
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {{")?;
        for row in self.cells.iter() {
            write!(f, "  ")?;
            for cell in row.iter() {
                let ch = match cell {
                    Cell::Empty => '.',
                    Cell::Occupied(id) => (b'0' + id.0) as char,
                    Cell::Hit => 'X',
                    Cell::Miss => 'o',
                };
                write!(f, "{} ", ch)?;
            }
            writeln!(f)?;
        }
        write!(f, "}}")
    }
}
