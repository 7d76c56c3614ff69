// Hunt/target guessing logic for the automated opponent.
// Works purely from the hidden view of the board under attack.

use alloc::vec::Vec;

use log::debug;
use rand::Rng;

use super::common::{Coord, Shot};
use super::config::BOARD_SIZE;
use super::view::BoardView;

/// Which strategy produced a guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Random search over untried cells.
    Hunt,
    /// Neighbour search around the last remembered hit.
    Target,
}

/// Targeting memory and strategy of the automated opponent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Targeting {
    memory: Vec<Coord>,
    prune_sunk: bool,
}

impl Targeting {
    /// `prune_sunk` drops remembered hits once their ship is confirmed sunk.
    pub fn new(prune_sunk: bool) -> Self {
        Self {
            memory: Vec::new(),
            prune_sunk,
        }
    }

    /// Remembered hits, oldest first.
    pub fn memory(&self) -> &[Coord] {
        &self.memory
    }

    /// Drop remembered hits that belong to ships the view reports as sunk.
    pub fn forget_sunk(&mut self, view: &BoardView) {
        let before = self.memory.len();
        self.memory.retain(|&c| !view.is_sunk_cell(c));
        if self.memory.len() != before {
            debug!(
                "forgot {} hits of sunk ships, {} remain",
                before - self.memory.len(),
                self.memory.len()
            );
        }
    }

    /// Untried orthogonal neighbours of the most recent remembered hit.
    pub fn target_candidates(&self, view: &BoardView) -> Vec<Coord> {
        match self.memory.last() {
            Some(last) => last.neighbors().filter(|&c| view.is_untried(c)).collect(),
            None => Vec::new(),
        }
    }

    /// Pick the next coordinate to attack. `None` only when the view has no
    /// untried cell left.
    pub fn choose<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        view: &BoardView,
    ) -> Option<(Coord, Mode)> {
        if self.prune_sunk {
            self.forget_sunk(view);
        }
        let candidates = self.target_candidates(view);
        if !candidates.is_empty() {
            let pick = candidates[rng.random_range(0..candidates.len())];
            debug!("target mode: {} from {} candidates", pick, candidates.len());
            return Some((pick, Mode::Target));
        }
        let pick = hunt(rng, view)?;
        debug!("hunt mode: {}", pick);
        Some((pick, Mode::Hunt))
    }

    /// Feed back the outcome of a shot at `coord`. Off-board coordinates are
    /// ignored.
    pub fn record(&mut self, coord: Coord, shot: Shot) {
        if shot.is_hit() && coord.in_bounds() {
            self.memory.push(coord);
        }
    }
}

/// Uniformly random untried coordinate.
///
/// Rejection-samples up to `BOARD_SIZE²` times, then picks uniformly from the
/// explicit list of untried cells.
pub fn hunt<R: Rng + ?Sized>(rng: &mut R, view: &BoardView) -> Option<Coord> {
    for _ in 0..BOARD_SIZE * BOARD_SIZE {
        let coord = Coord::new(
            rng.random_range(0..BOARD_SIZE),
            rng.random_range(0..BOARD_SIZE),
        );
        if view.is_untried(coord) {
            return Some(coord);
        }
    }
    let remaining: Vec<Coord> = view.untried().collect();
    if remaining.is_empty() {
        return None;
    }
    Some(remaining[rng.random_range(0..remaining.len())])
}
