//! Commonly used types and utilities for ease of import.

pub use crate::core::{
    BoardView, CellView, Coord, EngineConfig, GameError, GameEvent, GameSession, GameStatus,
    Orientation, Phase, ShipId, Shot, Side,
};
pub use crate::player::{AiPlayer, Player};

#[cfg(feature = "std")]
pub use crate::player::{cli::render_board, CliPlayer, PlayerNode};
#[cfg(feature = "std")]
pub use crate::sim::{simulate, SimReport};
