//! Domain events emitted by a game session.
//!
//! Each state change of a [`GameSession`](super::game::GameSession) queues one
//! event. Front ends drain the queue to re-render; an external stats service
//! can watch for [`GameEvent::GameOver`] to record a win or a loss.

use super::common::{Coord, Orientation, Shot, Side};
use super::ship::ShipId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameEvent {
    /// A ship was given its position.
    ShipPlaced {
        side: Side,
        ship: ShipId,
        origin: Coord,
        orientation: Orientation,
    },
    /// The human fleet is complete and the first shot may be fired.
    CombatStarted,
    /// An attack was resolved against the board of `attacker.other()`.
    AttackResolved {
        attacker: Side,
        coord: Coord,
        shot: Shot,
    },
    /// Every ship of the loser is sunk.
    GameOver { winner: Side },
}
