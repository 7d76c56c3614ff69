use super::ship::ShipDef;

pub const BOARD_SIZE: usize = 10;
pub const NUM_SHIPS: usize = 5;
pub const SHIPS: [ShipDef; NUM_SHIPS] = [
    ShipDef::new("Carrier", 5),
    ShipDef::new("Battleship", 4),
    ShipDef::new("Cruiser", 3),
    ShipDef::new("Submarine", 3),
    ShipDef::new("Destroyer", 2),
];

/// Total number of ship segments used in the standard configuration.
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 3 + 3 + 2;

/// Default cap on random placement attempts per ship.
pub const DEFAULT_MAX_PLACEMENT_ATTEMPTS: u32 = 10_000;

/// Runtime knobs for a game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineConfig {
    /// Fixed RNG seed for reproducible games. `None` draws a fresh seed.
    pub seed: Option<u64>,
    /// Random placement attempts allowed per ship before session creation fails.
    pub max_placement_attempts: u32,
    /// Forget remembered hits once the ship they belong to is sunk.
    pub prune_sunk_hits: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: None,
            max_placement_attempts: DEFAULT_MAX_PLACEMENT_ATTEMPTS,
            prune_sunk_hits: true,
        }
    }
}

impl EngineConfig {
    /// Default configuration with a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }
}
