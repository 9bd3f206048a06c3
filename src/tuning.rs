//! Data-driven game balance
//!
//! One unified parameter set for the whole simulation. Every speed, impulse
//! and interval the controllers use comes from here, so a balance tweak is a
//! JSON edit rather than a constant hunt.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{PLAYFIELD_H, TICK_RATE};

/// Gameplay parameters, all in pixels, pixels/tick and ticks
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Downward acceleration per tick
    pub gravity: f32,
    /// Terminal fall speed for the player
    pub player_terminal_vy: f32,
    /// Barrels fall a little slower than the player
    pub barrel_gravity_scale: f32,
    /// Terminal fall speed for barrels
    pub barrel_terminal_vy: f32,
    /// Horizontal player speed while a direction key is held
    pub move_speed: f32,
    /// Vertical speed while climbing a ladder
    pub climb_speed: f32,
    /// Upward velocity applied on jump
    pub jump_impulse: f32,
    /// Horizontal barrel speed
    pub barrel_roll_speed: f32,
    /// Ticks between barrel spawns (132 = 2.2 s at 60 ticks/sec)
    pub spawn_interval_ticks: u32,
    /// Active barrel cap; the emitter holds fire at this count
    pub max_barrels: usize,
    /// Barrels below playfield bottom + margin are despawned
    pub despawn_margin: f32,
    /// Chance per landing tick that a barrel resting over a ladder drops down
    pub ladder_drop_chance: f64,
    /// Initial downward velocity of a ladder drop
    pub ladder_drop_vy: f32,
    /// Player bounding box
    pub player_size: Vec2,
    /// Barrel bounding box
    pub barrel_size: Vec2,
    /// Player spawn/reset position
    pub player_spawn: Vec2,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: 0.6,
            player_terminal_vy: 10.0,
            barrel_gravity_scale: 0.8,
            barrel_terminal_vy: 8.0,
            move_speed: 2.6,
            climb_speed: 2.6,
            jump_impulse: 10.5,
            barrel_roll_speed: 1.8,
            spawn_interval_ticks: (TICK_RATE as f32 * 2.2) as u32,
            max_barrels: 12,
            despawn_margin: 40.0,
            ladder_drop_chance: 0.18,
            ladder_drop_vy: 2.0,
            player_size: Vec2::new(10.0, 16.0),
            barrel_size: Vec2::new(12.0, 12.0),
            player_spawn: Vec2::new(80.0, PLAYFIELD_H - 120.0),
        }
    }
}

impl Tuning {
    /// Effective gravity for barrels
    #[inline]
    pub fn barrel_gravity(&self) -> f32 {
        self.gravity * self.barrel_gravity_scale
    }

    /// Parse a tuning override from JSON. Missing fields fall back to the
    /// defaults, so an override file only needs the values it changes.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_interval_is_132_ticks() {
        // 2.2 seconds at 60 ticks/sec
        assert_eq!(Tuning::default().spawn_interval_ticks, 132);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{"gravity": 0.9, "max_barrels": 4}"#).unwrap();
        assert_eq!(tuning.gravity, 0.9);
        assert_eq!(tuning.max_barrels, 4);
        assert_eq!(tuning.move_speed, Tuning::default().move_speed);
    }
}
