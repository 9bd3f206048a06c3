//! Static level description
//!
//! Built once at startup/reset and never mutated afterwards. The layout is
//! the classic construction-site tower: staggered girders alternating from
//! the left and right edge, ladders connecting some of them, and a barrel
//! emitter sitting on the top girder.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::rect::Rect;
use crate::consts::*;

/// Visual slant intent of a girder. Collision treats every girder as a flat
/// AABB; the renderer uses this to draw the plank rising one way or the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Slant {
    #[default]
    Flat,
    /// Rises left to right
    UpRight,
    /// Rises right to left
    UpLeft,
}

/// A ground segment an entity can stand on when falling onto its top edge
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Platform {
    pub rect: Rect,
    pub slant: Slant,
}

/// A vertical zone where the player may suspend gravity and climb
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Ladder {
    pub rect: Rect,
}

/// Ladder width in pixels
pub const LADDER_W: f32 = 30.0;
/// How far a ladder pokes above the girder it leads up to, so a barrel
/// resting on that girder can overlap the ladder and drop down it
const LADDER_REACH: f32 = 8.0;
/// Ladder x positions, one per girder gap. Alternating girders only share
/// the center column, so every ladder lives there.
const LADDER_XS: [f32; GIRDER_COUNT - 1] = [430.0, 446.0, 428.0, 442.0, 434.0];

/// Barrel spawn point offset from the top girder's top-left corner
const EMITTER_OFFSET: Vec2 = Vec2::new(28.0, -22.0);

/// Level construction failures
#[derive(Debug, Clone, PartialEq)]
pub enum LevelError {
    /// Two platforms overlap, which makes the landing snap ambiguous
    OverlappingPlatforms { first: usize, second: usize },
    /// A platform or ladder rectangle has zero or negative extent
    DegenerateRect { what: &'static str, index: usize },
}

impl fmt::Display for LevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LevelError::OverlappingPlatforms { first, second } => {
                write!(f, "platforms {first} and {second} overlap")
            }
            LevelError::DegenerateRect { what, index } => {
                write!(f, "{what} {index} has non-positive extent")
            }
        }
    }
}

impl std::error::Error for LevelError {}

/// Immutable level geometry plus the barrel emitter point
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Level {
    pub platforms: Vec<Platform>,
    pub ladders: Vec<Ladder>,
    /// Fixed barrel spawn point, near the top girder
    pub emitter: Vec2,
}

impl Level {
    /// Build the default girder tower: `GIRDER_COUNT` girders stacked upward
    /// from the bottom of the playfield, alternating between a left-anchored
    /// and a right-anchored position, with a ladder bridging each gap.
    pub fn build() -> Result<Self, LevelError> {
        let base_y = PLAYFIELD_H - 80.0;
        let mut platforms = Vec::with_capacity(GIRDER_COUNT);
        for i in 0..GIRDER_COUNT {
            let y = base_y - i as f32 * GIRDER_SPACING;
            let (x, slant) = if i % 2 == 0 {
                (GIRDER_INSET, Slant::UpRight)
            } else {
                (PLAYFIELD_W - GIRDER_INSET - GIRDER_W, Slant::UpLeft)
            };
            platforms.push(Platform {
                rect: Rect::new(x, y, GIRDER_W, GIRDER_H),
                slant,
            });
        }

        // Each ladder spans one girder gap: from just above the upper girder's
        // top down to the lower girder's top.
        let ladders = LADDER_XS
            .iter()
            .enumerate()
            .map(|(i, &x)| {
                let upper_top = platforms[i + 1].rect.top();
                Ladder {
                    rect: Rect::new(
                        x,
                        upper_top - LADDER_REACH,
                        LADDER_W,
                        GIRDER_SPACING + LADDER_REACH,
                    ),
                }
            })
            .collect();

        let top = platforms[GIRDER_COUNT - 1].rect;
        let emitter = Vec2::new(top.x, top.y) + EMITTER_OFFSET;

        Self::validated(platforms, ladders, emitter)
    }

    /// Construct a level from explicit geometry, rejecting ill-formed layouts.
    /// Overlapping platforms would make "which platform wins the landing
    /// snap" depend on list order, so they are a construction-time error.
    pub fn validated(
        platforms: Vec<Platform>,
        ladders: Vec<Ladder>,
        emitter: Vec2,
    ) -> Result<Self, LevelError> {
        for (i, p) in platforms.iter().enumerate() {
            if p.rect.w <= 0.0 || p.rect.h <= 0.0 {
                return Err(LevelError::DegenerateRect {
                    what: "platform",
                    index: i,
                });
            }
        }
        for (i, l) in ladders.iter().enumerate() {
            if l.rect.w <= 0.0 || l.rect.h <= 0.0 {
                return Err(LevelError::DegenerateRect {
                    what: "ladder",
                    index: i,
                });
            }
        }
        for i in 0..platforms.len() {
            for j in (i + 1)..platforms.len() {
                if platforms[i].rect.intersects(&platforms[j].rect) {
                    return Err(LevelError::OverlappingPlatforms {
                        first: i,
                        second: j,
                    });
                }
            }
        }
        Ok(Self {
            platforms,
            ladders,
            emitter,
        })
    }
}
