//! Player controller
//!
//! Consumes the per-tick input snapshot and the level description, mutates
//! its own kinematic state. Per tick the player is in exactly one of three
//! situations: climbing a ladder (gravity suspended), airborne, or grounded
//! on a girder.

use serde::{Deserialize, Serialize};

use super::body::{EdgePolicy, KinematicBody};
use super::level::Level;
use super::tick::TickInput;
use crate::consts::{PLAYFIELD_H, PLAYFIELD_W};
use crate::tuning::Tuning;

/// Animation pose, selected from physical state. Purely cosmetic; the
/// renderer maps poses to sprite frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pose {
    Idle,
    Walk1,
    Walk2,
    Jump,
}

/// The player entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub body: KinematicBody,
    /// Facing direction, +1 right / -1 left
    pub facing: i8,
    pub on_ground: bool,
    pub on_ladder: bool,
    /// Walk animation phase, advances while moving
    pub anim: f32,
    /// Latch for edge-triggered jumps: holding the key does not re-jump
    #[serde(default)]
    jump_held: bool,
}

impl Player {
    /// Create the player at its spawn point
    pub fn spawn(tuning: &Tuning) -> Self {
        Self {
            body: KinematicBody::new(tuning.player_spawn, tuning.player_size),
            facing: 1,
            on_ground: false,
            on_ladder: false,
            anim: 0.0,
            jump_held: false,
        }
    }

    /// Reinitialize to spawn defaults (barrel hit or external reset)
    pub fn reset(&mut self, tuning: &Tuning) {
        *self = Self::spawn(tuning);
    }

    /// Advance one tick given the current input snapshot
    pub fn update(&mut self, input: &TickInput, level: &Level, tuning: &Tuning) {
        // Horizontal velocity comes straight from input; no acceleration model
        if input.left {
            self.body.vel.x = -tuning.move_speed;
            self.facing = -1;
            self.anim += 0.2;
        } else if input.right {
            self.body.vel.x = tuning.move_speed;
            self.facing = 1;
            self.anim += 0.2;
        } else {
            self.body.vel.x = 0.0;
            self.anim = 0.0;
        }

        // Climbing suspends gravity for the tick
        let rect = self.body.rect();
        self.on_ladder = level.ladders.iter().any(|l| rect.intersects(&l.rect));
        if self.on_ladder && (input.up || input.down) {
            if input.up {
                self.body.pos.y -= tuning.climb_speed;
            }
            if input.down {
                self.body.pos.y += tuning.climb_speed;
            }
            self.body.vel.y = 0.0;
            self.on_ground = false;
        } else {
            self.body.fall(tuning.gravity, tuning.player_terminal_vy);
        }

        // Edge-triggered jump: one jump per press, grounded only
        if input.jump && !self.jump_held && self.on_ground {
            self.body.vel.y = -tuning.jump_impulse;
            self.on_ground = false;
        }
        self.jump_held = input.jump;

        self.body.pos.x += self.body.vel.x;

        self.on_ground = self.body.land_on(&level.platforms).is_some();

        // The player can never leave the canvas, on either axis
        self.body.confine_x(PLAYFIELD_W, EdgePolicy::Clamp);
        self.body.pos.y = self.body.pos.y.clamp(0.0, PLAYFIELD_H - self.body.size.y);
    }

    /// Current animation pose
    pub fn pose(&self) -> Pose {
        if !self.on_ground {
            Pose::Jump
        } else if self.body.vel.x.abs() < 0.1 {
            Pose::Idle
        } else if (self.anim.floor() as i64) % 2 == 0 {
            Pose::Walk1
        } else {
            Pose::Walk2
        }
    }
}
