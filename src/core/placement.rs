//! Ship placement: validation of a chosen position and random fleet layout.

use alloc::vec::Vec;

use log::{debug, trace};
use rand::Rng;

use super::board::{Board, Cell};
use super::common::{BoardError, Coord, GameError, Orientation};
use super::config::BOARD_SIZE;
use super::ship::Ship;
use super::side::PlayerSide;

/// Cells a ship of `length` covers from `origin` along `orientation`.
///
/// Fails with `OutOfBounds` on the first cell that leaves the board.
pub fn ship_cells(
    origin: Coord,
    orientation: Orientation,
    length: usize,
) -> Result<Vec<Coord>, BoardError> {
    (0..length)
        .map(|i| {
            let (row, col) = match orientation {
                Orientation::Horizontal => (Some(origin.row), origin.col.checked_add(i)),
                Orientation::Vertical => (origin.row.checked_add(i), Some(origin.col)),
            };
            match (row, col) {
                (Some(row), Some(col)) if Coord::new(row, col).in_bounds() => {
                    Ok(Coord::new(row, col))
                }
                (Some(row), Some(col)) => Err(BoardError::OutOfBounds(Coord::new(row, col))),
                _ => Err(BoardError::OutOfBounds(origin)),
            }
        })
        .collect()
}

/// Place `ship` on `board` at `origin` with `orientation`.
///
/// All-or-nothing: on any error neither the board nor the ship change.
pub fn place_ship(
    board: &mut Board,
    ship: &mut Ship,
    origin: Coord,
    orientation: Orientation,
) -> Result<(), BoardError> {
    if ship.is_placed() {
        return Err(BoardError::ShipAlreadyPlaced(ship.id()));
    }
    let cells = ship_cells(origin, orientation, ship.length())?;
    for &coord in &cells {
        if board.cell(coord)? != Cell::Empty {
            return Err(BoardError::Collision(coord));
        }
    }
    board.occupy(ship.id(), &cells);
    ship.assign(orientation, cells);
    Ok(())
}

/// Uniform sample from `[0, N) x [0, N) x {Horizontal, Vertical}`.
///
/// The sample is not guaranteed to be legal; callers retry on rejection.
pub fn random_placement<R: Rng + ?Sized>(rng: &mut R) -> (Coord, Orientation) {
    let orientation = if rng.random() {
        Orientation::Horizontal
    } else {
        Orientation::Vertical
    };
    let origin = Coord::new(
        rng.random_range(0..BOARD_SIZE),
        rng.random_range(0..BOARD_SIZE),
    );
    (origin, orientation)
}

/// Randomly place every ship of `side` that has no position yet.
///
/// Each ship gets at most `max_attempts` samples; running out is reported as
/// [`GameError::PlacementExhausted`]. Ships placed before the failure stay
/// placed.
pub fn auto_place_fleet<R: Rng + ?Sized>(
    rng: &mut R,
    side: &mut PlayerSide,
    max_attempts: u32,
) -> Result<(), GameError> {
    let pending: Vec<_> = side.fleet().unplaced().map(Ship::id).collect();
    for id in pending {
        let mut attempts = 0;
        loop {
            if attempts >= max_attempts {
                return Err(GameError::PlacementExhausted {
                    ship: id,
                    attempts,
                });
            }
            attempts += 1;
            let (origin, orientation) = random_placement(rng);
            match side.place_ship(id, origin, orientation) {
                Ok(()) => {
                    debug!("placed {} at {} {:?} after {} attempts", id, origin, orientation, attempts);
                    break;
                }
                Err(err) => trace!("rejected {} at {}: {}", id, origin, err),
            }
        }
    }
    Ok(())
}
