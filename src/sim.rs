//! Fully automated games: the human side is played by an [`AiPlayer`].

use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde::Serialize;

use crate::core::{EngineConfig, GameSession, Side};
use crate::player::{AiPlayer, PlayerNode};

/// Outcome of one simulated game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SimReport {
    pub seed: Option<u64>,
    pub winner: Side,
    pub human_shots: usize,
    pub opponent_shots: usize,
}

/// Play a whole game with the autopilot on the human side.
///
/// With `config.seed` set, the session uses that seed and the autopilot the
/// next one, so the game is reproducible.
pub fn simulate(config: EngineConfig) -> anyhow::Result<SimReport> {
    let mut rng = match config.seed {
        Some(s) => SmallRng::seed_from_u64(s.wrapping_add(1)),
        None => SmallRng::from_rng(&mut rand::rng()),
    };
    let session = GameSession::new(config)?;
    let autopilot = AiPlayer::with_pruning(config.prune_sunk_hits);
    let mut node = PlayerNode::new(Box::new(autopilot), session);
    let winner = node.run(&mut rng)?;
    Ok(SimReport {
        seed: config.seed,
        winner,
        human_shots: node.session().shots_fired(Side::Human),
        opponent_shots: node.session().shots_fired(Side::Opponent),
    })
}
