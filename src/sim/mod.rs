//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (no dt parameter anywhere)
//! - Seeded RNG only
//! - Stable iteration order (insertion order for barrels)
//! - No rendering or platform dependencies

pub mod barrel;
pub mod body;
pub mod level;
pub mod player;
pub mod rect;
pub mod state;
pub mod tick;

pub use barrel::Barrel;
pub use body::{EdgePolicy, KinematicBody, LANDING_BAND};
pub use level::{Ladder, Level, LevelError, Platform, Slant};
pub use player::{Player, Pose};
pub use rect::Rect;
pub use state::GameState;
pub use tick::{TickInput, tick};
