use alloc::vec::Vec;
use core::mem;

use log::{debug, info, warn};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::core::{
    ai::Targeting,
    common::{Coord, GameError, Orientation, Phase, Shot, Side},
    config::EngineConfig,
    events::GameEvent,
    placement,
    ship::ShipId,
    side::PlayerSide,
    view::BoardView,
};

/// Snapshot of where a session stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameStatus {
    pub phase: Phase,
    /// Whose move it is; only set during `Combat`.
    pub turn: Option<Side>,
    /// Only set during `GameOver`.
    pub winner: Option<Side>,
}

/// A single resolved shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShotRecord {
    pub coord: Coord,
    pub shot: Shot,
}

/// Everything that happened during one human attack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnReport {
    pub human: ShotRecord,
    /// The opponent's reply, absent when the human shot ended the game.
    pub opponent: Option<ShotRecord>,
}

/// One game between the human and the automated opponent.
///
/// The opponent fleet is placed when the session is created. The human
/// places ships with [`place_ship`](Self::place_ship); once the last one is
/// down the session enters combat. Each [`attack`](Self::attack) resolves the
/// human shot and, unless that ended the game, the opponent's reply.
#[derive(Debug, Clone)]
pub struct GameSession {
    config: EngineConfig,
    human: PlayerSide,
    opponent: PlayerSide,
    targeting: Targeting,
    phase: Phase,
    turn: Side,
    winner: Option<Side>,
    shots: [usize; 2],
    events: Vec<GameEvent>,
    rng: SmallRng,
}

impl GameSession {
    /// Start a session, seeding the RNG from `config.seed` when given.
    pub fn new(config: EngineConfig) -> Result<Self, GameError> {
        let rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => entropy_rng(),
        };
        Self::with_rng(config, rng)
    }

    /// Start a session driven by the given RNG. `config.seed` is ignored.
    pub fn with_rng(config: EngineConfig, mut rng: SmallRng) -> Result<Self, GameError> {
        let mut opponent = PlayerSide::new();
        placement::auto_place_fleet(&mut rng, &mut opponent, config.max_placement_attempts)?;
        info!("new session: opponent fleet placed, waiting for human placement");
        Ok(Self {
            config,
            human: PlayerSide::new(),
            opponent,
            targeting: Targeting::new(config.prune_sunk_hits),
            phase: Phase::Placing,
            turn: Side::Human,
            winner: None,
            shots: [0; 2],
            events: Vec::new(),
            rng,
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    /// Evaluate the current game status.
    pub fn status(&self) -> GameStatus {
        GameStatus {
            phase: self.phase,
            turn: (self.phase == Phase::Combat).then_some(self.turn),
            winner: self.winner,
        }
    }

    /// Board and fleet of `side`. Front ends must render the opponent side
    /// through [`hidden_view`](Self::hidden_view) only.
    pub fn side(&self, side: Side) -> &PlayerSide {
        match side {
            Side::Human => &self.human,
            Side::Opponent => &self.opponent,
        }
    }

    /// `side`'s own board, ships visible.
    pub fn own_view(&self, side: Side) -> BoardView {
        BoardView::revealed(self.side(side))
    }

    /// `side`'s board as its adversary sees it.
    pub fn hidden_view(&self, side: Side) -> BoardView {
        BoardView::hidden(self.side(side))
    }

    /// The opponent's targeting memory.
    pub fn targeting(&self) -> &Targeting {
        &self.targeting
    }

    /// Number of attacks `side` has resolved.
    pub fn shots_fired(&self, side: Side) -> usize {
        self.shots[side_index(side)]
    }

    /// Queued events, oldest first, without consuming them.
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Take all queued events.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        mem::take(&mut self.events)
    }

    /// Place one human ship. Allowed only while placing.
    pub fn place_ship(
        &mut self,
        ship: ShipId,
        origin: Coord,
        orientation: Orientation,
    ) -> Result<(), GameError> {
        self.require(Phase::Placing)?;
        self.human.place_ship(ship, origin, orientation)?;
        self.emit(GameEvent::ShipPlaced {
            side: Side::Human,
            ship,
            origin,
            orientation,
        });
        self.start_combat_if_ready();
        Ok(())
    }

    /// Randomly place every human ship not yet placed.
    pub fn auto_place_human(&mut self) -> Result<(), GameError> {
        self.require(Phase::Placing)?;
        let pending: Vec<ShipId> = self.human.fleet().unplaced().map(|s| s.id()).collect();
        let result = placement::auto_place_fleet(
            &mut self.rng,
            &mut self.human,
            self.config.max_placement_attempts,
        );
        for id in pending {
            let placed = self
                .human
                .fleet()
                .get(id)
                .ok()
                .and_then(|s| Some((s.origin()?, s.orientation()?)));
            if let Some((origin, orientation)) = placed {
                self.emit(GameEvent::ShipPlaced {
                    side: Side::Human,
                    ship: id,
                    origin,
                    orientation,
                });
            }
        }
        self.start_combat_if_ready();
        result
    }

    /// Fire at the opponent board. The opponent answers within the same call
    /// unless this shot sank its last ship.
    pub fn attack(&mut self, coord: Coord) -> Result<TurnReport, GameError> {
        self.require(Phase::Combat)?;
        // the reply runs inside this call, so the human always holds the turn here
        if self.turn != Side::Human {
            return Err(GameError::NotYourTurn);
        }
        let shot = self.opponent.receive_attack(coord)?;
        self.record(Side::Human, coord, shot);
        let human = ShotRecord { coord, shot };
        if self.finish_if_defeated(Side::Human) {
            return Ok(TurnReport {
                human,
                opponent: None,
            });
        }

        self.turn = Side::Opponent;
        let opponent = self.opponent_turn();
        if self.phase == Phase::Combat {
            self.turn = Side::Human;
        }
        Ok(TurnReport { human, opponent })
    }

    fn opponent_turn(&mut self) -> Option<ShotRecord> {
        let view = BoardView::hidden(&self.human);
        let Some((coord, mode)) = self.targeting.choose(&mut self.rng, &view) else {
            warn!("opponent found no untried cell on the human board");
            return None;
        };
        let shot = match self.human.receive_attack(coord) {
            Ok(shot) => shot,
            Err(err) => {
                warn!("opponent shot at {} rejected: {}", coord, err);
                return None;
            }
        };
        debug!("opponent {:?} shot at {}: {:?}", mode, coord, shot);
        self.targeting.record(coord, shot);
        self.record(Side::Opponent, coord, shot);
        self.finish_if_defeated(Side::Opponent);
        Some(ShotRecord { coord, shot })
    }

    fn record(&mut self, attacker: Side, coord: Coord, shot: Shot) {
        self.shots[side_index(attacker)] += 1;
        self.emit(GameEvent::AttackResolved {
            attacker,
            coord,
            shot,
        });
    }

    /// Ends the game if `attacker` just sank the last ship of the other side.
    fn finish_if_defeated(&mut self, attacker: Side) -> bool {
        if !self.side(attacker.other()).all_sunk() {
            return false;
        }
        self.phase = Phase::GameOver;
        self.winner = Some(attacker);
        info!(
            "game over: {:?} wins after {} shots",
            attacker,
            self.shots_fired(attacker)
        );
        self.emit(GameEvent::GameOver { winner: attacker });
        true
    }

    fn start_combat_if_ready(&mut self) {
        if self.phase == Phase::Placing && self.human.fleet().is_fully_placed() {
            self.phase = Phase::Combat;
            self.turn = Side::Human;
            info!("human fleet placed, combat begins");
            self.emit(GameEvent::CombatStarted);
        }
    }

    fn require(&self, expected: Phase) -> Result<(), GameError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(GameError::WrongPhase {
                expected,
                actual: self.phase,
            })
        }
    }

    fn emit(&mut self, event: GameEvent) {
        debug!("event: {:?}", event);
        self.events.push(event);
    }
}

fn side_index(side: Side) -> usize {
    match side {
        Side::Human => 0,
        Side::Opponent => 1,
    }
}

#[cfg(feature = "std")]
fn entropy_rng() -> SmallRng {
    SmallRng::from_rng(&mut rand::rng())
}

#[cfg(not(feature = "std"))]
fn entropy_rng() -> SmallRng {
    warn!("no entropy source without std; falling back to seed 0");
    SmallRng::seed_from_u64(0)
}
