use anyhow::{anyhow, bail};
use log::debug;
use rand::rngs::SmallRng;

use crate::core::{GameError, GameEvent, GameSession, GameStatus, Phase, Side};
use crate::player::Player;

/// Consecutive refused moves tolerated before the node gives up on a player.
const MAX_REJECTIONS: usize = 1_000;

/// Drives a [`Player`] as the human side of a [`GameSession`].
pub struct PlayerNode {
    player: Box<dyn Player>,
    session: GameSession,
}

impl PlayerNode {
    pub fn new(player: Box<dyn Player>, session: GameSession) -> Self {
        Self { player, session }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn status(&self) -> GameStatus {
        self.session.status()
    }

    /// Shots the human side has fired so far.
    pub fn guess_count(&self) -> usize {
        self.session.shots_fired(Side::Human)
    }

    /// Play placement and combat to the end. Returns the winner.
    pub fn run(&mut self, rng: &mut SmallRng) -> anyhow::Result<Side> {
        self.place_fleet(rng)?;
        self.play(rng)?;
        self.session
            .winner()
            .ok_or_else(|| anyhow!("game stopped in phase {:?}", self.session.phase()))
    }

    fn place_fleet(&mut self, rng: &mut SmallRng) -> anyhow::Result<()> {
        let mut rejections = 0;
        while self.session.phase() == Phase::Placing {
            let own = self.session.own_view(Side::Human);
            let Some(ship) = self.session.side(Side::Human).fleet().unplaced().next().cloned()
            else {
                bail!("placing phase with a fully placed fleet");
            };
            let result = match self.player.select_placement(rng, &ship, &own) {
                Some((origin, orientation)) => {
                    self.session.place_ship(ship.id(), origin, orientation)
                }
                None => self.session.auto_place_human(),
            };
            self.dispatch_events();
            match result {
                Ok(()) => rejections = 0,
                Err(err) => self.reject(err, &mut rejections)?,
            }
        }
        Ok(())
    }

    fn play(&mut self, rng: &mut SmallRng) -> anyhow::Result<()> {
        let mut rejections = 0;
        while self.session.phase() == Phase::Combat {
            let target = self.session.hidden_view(Side::Opponent);
            let own = self.session.own_view(Side::Human);
            let Some(coord) = self.player.select_target(rng, &target, &own) else {
                bail!("player gave up after {} shots", self.guess_count());
            };
            let result = self.session.attack(coord);
            self.dispatch_events();
            match result {
                Ok(report) => {
                    debug!("turn: {:?}", report);
                    rejections = 0;
                }
                Err(err) => self.reject(err, &mut rejections)?,
            }
        }
        Ok(())
    }

    /// Board errors are the player's to fix; anything else ends the run.
    fn reject(&mut self, err: GameError, rejections: &mut usize) -> anyhow::Result<()> {
        if !matches!(err, GameError::Board(_)) {
            return Err(err.into());
        }
        *rejections += 1;
        if *rejections >= MAX_REJECTIONS {
            bail!("player made {} invalid moves in a row: {}", rejections, err);
        }
        debug!("move rejected: {}", err);
        self.player.handle_rejection(&err);
        Ok(())
    }

    fn dispatch_events(&mut self) {
        for event in self.session.drain_events() {
            match event {
                GameEvent::AttackResolved {
                    attacker: Side::Human,
                    coord,
                    shot,
                } => self.player.handle_guess_result(coord, shot),
                GameEvent::AttackResolved {
                    attacker: Side::Opponent,
                    coord,
                    shot,
                } => self.player.handle_opponent_guess(coord, shot),
                other => self.player.handle_event(&other),
            }
        }
    }
}
