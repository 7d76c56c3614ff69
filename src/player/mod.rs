//! Player trait and implementations
//!
//! A `Player` controls the human side of a [`GameSession`](crate::core::GameSession):
//! - AiPlayer: autopilot using the same hunt/target search as the opponent
//! - CliPlayer: interactive terminal player
//! - PlayerNode: drives a Player against a session until the game ends
//!
//! Players only ever see [`BoardView`]s, so the opponent's ships stay hidden.

use rand::rngs::SmallRng;

use crate::core::{BoardView, Coord, GameError, GameEvent, Orientation, Shot, Ship};

/// Interface implemented by different player types.
pub trait Player {
    /// Choose a position for `ship`. `None` asks the engine to place all
    /// remaining ships at random.
    fn select_placement(
        &mut self,
        rng: &mut SmallRng,
        ship: &Ship,
        own: &BoardView,
    ) -> Option<(Coord, Orientation)>;

    /// Choose the next cell to attack on the opponent board. `None` gives up
    /// the game.
    fn select_target(
        &mut self,
        rng: &mut SmallRng,
        target: &BoardView,
        own: &BoardView,
    ) -> Option<Coord>;

    /// Inform the player of the result of its last guess.
    fn handle_guess_result(&mut self, _coord: Coord, _shot: Shot) {}

    /// Inform the player of an opponent guess against its board.
    fn handle_opponent_guess(&mut self, _coord: Coord, _shot: Shot) {}

    /// Inform the player that its last placement or target was refused.
    fn handle_rejection(&mut self, _err: &GameError) {}

    /// Any other session event (placement, combat start, game over).
    fn handle_event(&mut self, _event: &GameEvent) {}
}

pub mod ai;
pub use ai::AiPlayer;

#[cfg(feature = "std")]
pub mod cli;
#[cfg(feature = "std")]
pub use cli::CliPlayer;

#[cfg(feature = "std")]
pub mod node;
#[cfg(feature = "std")]
pub use node::PlayerNode;
