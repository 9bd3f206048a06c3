//! Fixed timestep round loop
//!
//! Advances the whole simulation by exactly one tick. There is no dt
//! parameter anywhere: one call is one tick, and the external driver is
//! responsible for calling at a steady rate.

use serde::{Deserialize, Serialize};

use super::state::GameState;
use crate::consts::PLAYFIELD_H;

/// Boolean input snapshot for a single tick. Sampled once by the driver and
/// passed in whole, so the controllers stay pure functions of
/// (state, input, level).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub jump: bool,
    /// External reset signal: reinitialize the player, clear all barrels
    pub reset: bool,
}

/// Advance the game state by one fixed tick
pub fn tick(state: &mut GameState, input: &TickInput) {
    if input.reset {
        state.soft_reset();
    }

    // Emitter: one barrel per interval, held while the active set is full
    state.spawn_timer += 1;
    if state.spawn_timer >= state.tuning.spawn_interval_ticks
        && state.barrels.len() < state.tuning.max_barrels
    {
        state.spawn_barrel();
        state.spawn_timer = 0;
    }

    state
        .player
        .update(input, &state.level, &state.tuning);

    // Insertion order; barrels do not interact with each other
    let GameState {
        barrels,
        level,
        tuning,
        rng,
        ..
    } = state;
    for barrel in barrels.iter_mut() {
        barrel.update(level, tuning, rng);
    }

    // Barrels that fell below the playfield are gone for good
    let despawn_y = PLAYFIELD_H + state.tuning.despawn_margin;
    state.barrels.retain(|b| {
        let keep = b.body.pos.y <= despawn_y;
        if !keep {
            log::debug!("despawned barrel {} below the playfield", b.id);
        }
        keep
    });

    // Player vs barrel: any hit resets the round. Checking more than the
    // first hit would have the same net effect.
    let player_rect = state.player.body.rect();
    if state
        .barrels
        .iter()
        .any(|b| player_rect.intersects(&b.body.rect()))
    {
        state.soft_reset();
    }

    state.time_ticks += 1;
}
