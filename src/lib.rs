//! Barrel Run - a Donkey-Kong-style platformer core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (kinematics, collisions, game state)
//! - `tuning`: Data-driven game balance
//!
//! Rendering, input wiring and the tick scheduler are external collaborators:
//! the simulation only consumes a per-tick input snapshot and exposes its
//! state for whatever front end drives it.

pub mod sim;
pub mod tuning;

pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation tick rate. One `tick()` call advances 1/60 s; the
    /// integrator carries no dt and is not frame-rate independent.
    pub const TICK_RATE: u32 = 60;

    /// Playfield dimensions in pixels
    pub const PLAYFIELD_W: f32 = 900.0;
    pub const PLAYFIELD_H: f32 = 640.0;

    /// Girder layout for the default level
    pub const GIRDER_COUNT: usize = 6;
    pub const GIRDER_SPACING: f32 = 90.0;
    pub const GIRDER_W: f32 = 420.0;
    pub const GIRDER_H: f32 = 16.0;
    /// Horizontal inset of girders from the playfield edge
    pub const GIRDER_INSET: f32 = 60.0;
}
