//! Common types for the engine: coordinates, outcomes, sides, phases and errors.

use core::fmt;

use thiserror::Error;

use super::config::BOARD_SIZE;
use super::ship::ShipId;

/// A board position, zero-indexed from the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns `true` if the coordinate lies on a `BOARD_SIZE` board.
    pub fn in_bounds(&self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }

    /// Orthogonal neighbours in the order up, down, left, right. Positions
    /// that would leave the board are skipped.
    pub fn neighbors(&self) -> impl Iterator<Item = Coord> {
        let Coord { row, col } = *self;
        [
            row.checked_sub(1).map(|r| Coord::new(r, col)),
            row.checked_add(1).map(|r| Coord::new(r, col)),
            col.checked_sub(1).map(|c| Coord::new(row, c)),
            col.checked_add(1).map(|c| Coord::new(row, c)),
        ]
        .into_iter()
        .flatten()
        .filter(Coord::in_bounds)
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Coord::new(row, col)
    }
}

impl fmt::Display for Coord {
    /// Battleship notation: column letter then 1-based row, e.g. `A1`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match u8::try_from(self.col) {
            Ok(c) if c < 26 => write!(f, "{}{}", (b'A' + c) as char, self.row + 1),
            _ => write!(f, "({}, {})", self.row, self.col),
        }
    }
}

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Outcome of a resolved attack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Shot {
    /// The shot landed in open water.
    Miss,
    /// The shot struck the given ship.
    Hit(ShipId),
    /// The shot struck the given ship and completed its sinking.
    Sunk(ShipId),
}

impl Shot {
    /// `true` for both `Hit` and `Sunk`.
    pub fn is_hit(&self) -> bool {
        !matches!(self, Shot::Miss)
    }

    /// Ship struck by the shot, if any.
    pub fn ship(&self) -> Option<ShipId> {
        match *self {
            Shot::Miss => None,
            Shot::Hit(id) | Shot::Sunk(id) => Some(id),
        }
    }
}

/// One of the two participants in a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    Human,
    Opponent,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::Human => Side::Opponent,
            Side::Opponent => Side::Human,
        }
    }
}

/// Top-level mode of a game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    Placing,
    Combat,
    GameOver,
}

/// Errors returned by board and placement operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BoardError {
    /// A coordinate lies outside the board.
    #[error("{0} is outside the board")]
    OutOfBounds(Coord),
    /// Ship placement overlaps another ship.
    #[error("ship placement collides with another ship at {0}")]
    Collision(Coord),
    /// The cell has already been attacked.
    #[error("{0} has already been attacked")]
    AlreadyAttacked(Coord),
    /// No ship with this id exists in the fleet.
    #[error("unknown ship id {0:?}")]
    UnknownShip(ShipId),
    /// The ship already has a position on the board.
    #[error("{0:?} is already placed")]
    ShipAlreadyPlaced(ShipId),
}

/// Errors returned by the game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    #[error(transparent)]
    Board(#[from] BoardError),
    /// The requested action belongs to the other side's turn.
    #[error("it is not the human player's turn")]
    NotYourTurn,
    /// The requested action is not allowed in the current phase.
    #[error("action requires phase {expected:?} but the game is in {actual:?}")]
    WrongPhase { expected: Phase, actual: Phase },
    /// Random placement gave up; the board cannot hold the fleet.
    #[error("could not place {ship:?} after {attempts} attempts")]
    PlacementExhausted { ship: ShipId, attempts: u32 },
}
