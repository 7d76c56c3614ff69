use rand::rngs::SmallRng;

use crate::core::{random_placement, BoardView, Coord, Orientation, Ship, Shot, Targeting};

use super::Player;

/// Autopilot that plays like the automated opponent: random placement and
/// hunt/target search.
#[derive(Debug, Clone)]
pub struct AiPlayer {
    targeting: Targeting,
}

impl AiPlayer {
    pub fn new() -> Self {
        Self::with_pruning(true)
    }

    /// See [`EngineConfig::prune_sunk_hits`](crate::core::EngineConfig::prune_sunk_hits).
    pub fn with_pruning(prune_sunk_hits: bool) -> Self {
        Self {
            targeting: Targeting::new(prune_sunk_hits),
        }
    }

    pub fn targeting(&self) -> &Targeting {
        &self.targeting
    }
}

impl Default for AiPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for AiPlayer {
    fn select_placement(
        &mut self,
        rng: &mut SmallRng,
        _ship: &Ship,
        _own: &BoardView,
    ) -> Option<(Coord, Orientation)> {
        Some(random_placement(rng))
    }

    fn select_target(
        &mut self,
        rng: &mut SmallRng,
        target: &BoardView,
        _own: &BoardView,
    ) -> Option<Coord> {
        self.targeting.choose(rng, target).map(|(coord, _)| coord)
    }

    fn handle_guess_result(&mut self, coord: Coord, shot: Shot) {
        self.targeting.record(coord, shot);
    }
}
