//! Core battleship game engine (no_std compatible)
//!
//! Pure game logic: boards, fleets, placement, attack resolution, the
//! opponent's targeting and the session state machine. Needs only `alloc`;
//! serde derives are added with the `std` feature.

pub mod ai;
pub mod board;
pub mod common;
pub mod config;
pub mod events;
pub mod game;
pub mod placement;
pub mod ship;
pub mod side;
pub mod view;

// Re-export commonly used types
pub use ai::{hunt, Mode, Targeting};
pub use board::{Board, Cell};
pub use common::{BoardError, Coord, GameError, Orientation, Phase, Shot, Side};
pub use config::*;
pub use events::GameEvent;
pub use game::{GameSession, GameStatus, ShotRecord, TurnReport};
pub use placement::{auto_place_fleet, place_ship, random_placement, ship_cells};
pub use ship::{Fleet, Ship, ShipDef, ShipId};
pub use side::PlayerSide;
pub use view::{BoardView, CellView};
