//! Game state and orchestration-level types
//!
//! Everything the round loop owns lives here: the player, the active barrel
//! set, the spawn timer and the seeded RNG. The whole struct serializes, so
//! a run can be snapshotted and resumed deterministically.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::barrel::Barrel;
use super::level::{Level, LevelError};
use super::player::Player;
use crate::tuning::Tuning;

/// Complete simulation state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Seeded RNG; the only source of randomness in the simulation
    pub rng: Pcg32,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Ticks since the last barrel spawn (or reset)
    pub spawn_timer: u32,
    pub player: Player,
    /// Active barrels, insertion order. Owned and mutated only by the round
    /// loop; barrels never interact with each other.
    pub barrels: Vec<Barrel>,
    /// Read-only after construction
    pub level: Level,
    pub tuning: Tuning,
    next_id: u32,
}

impl GameState {
    /// Create a fresh state with the given seed and tuning. Fails only if
    /// the level geometry does not validate.
    pub fn new(seed: u64, tuning: Tuning) -> Result<Self, LevelError> {
        let level = Level::build()?;
        let player = Player::spawn(&tuning);
        Ok(Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            time_ticks: 0,
            spawn_timer: 0,
            player,
            barrels: Vec::new(),
            level,
            tuning,
            next_id: 1,
        })
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Spawn one barrel at the emitter with a random roll direction
    pub fn spawn_barrel(&mut self) {
        let id = self.next_entity_id();
        let barrel = Barrel::spawn(
            id,
            self.level.emitter,
            &self.tuning,
            self.time_ticks,
            &mut self.rng,
        );
        log::debug!(
            "spawned barrel {id} at ({:.0}, {:.0}) rolling {}",
            barrel.body.pos.x,
            barrel.body.pos.y,
            if barrel.body.vel.x > 0.0 { "right" } else { "left" },
        );
        self.barrels.push(barrel);
    }

    /// Soft reset after a barrel hit or an external reset signal: player back
    /// to spawn defaults, all barrels cleared, spawn timer restarted. One
    /// synchronous mutation; no partially-reset state is ever observable.
    pub fn soft_reset(&mut self) {
        self.player.reset(&self.tuning);
        self.barrels.clear();
        self.spawn_timer = 0;
        log::info!("round reset at tick {}", self.time_ticks);
    }
}
