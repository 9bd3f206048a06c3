//! Shared kinematic state and integration
//!
//! Player and barrels move the same way: per-tick explicit Euler with a
//! capped fall speed, plus a landing snap onto girder tops. The pieces live
//! here so the two controllers cannot drift apart; each one composes them
//! in its own order with its own parameters.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::level::Platform;
use super::rect::Rect;

/// Height of the band below a girder top that counts as a landing.
///
/// A falling body whose bottom edge is within [top, top + band] snaps onto
/// the girder. Wider than one tick of terminal fall speed, so bodies cannot
/// tunnel through a girder in a single step.
pub const LANDING_BAND: f32 = 18.0;

/// What happens when a body reaches the playfield's left or right edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EdgePolicy {
    /// Stop at the boundary (player)
    Clamp,
    /// Stop at the boundary and reverse horizontal velocity (barrels)
    Bounce,
}

/// Position/velocity/size state shared by every moving entity
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct KinematicBody {
    /// Top-left corner
    pub pos: Vec2,
    /// Fixed per entity after construction
    pub size: Vec2,
    pub vel: Vec2,
}

impl KinematicBody {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self {
            pos,
            size,
            vel: Vec2::ZERO,
        }
    }

    /// Bounding box at the current position
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.size.x, self.size.y)
    }

    /// One tick of gravity: accumulate vertical velocity up to the terminal
    /// speed, then move. Horizontal velocity is never integrated; controllers
    /// set it directly each tick.
    pub fn fall(&mut self, gravity: f32, terminal_vy: f32) {
        self.vel.y = (self.vel.y + gravity).min(terminal_vy);
        self.pos.y += self.vel.y;
    }

    /// Whether a platform's landing band holds the body: horizontal extents
    /// overlap, the body's bottom edge sits within [top, top + band] of the
    /// platform top, and the body is falling or resting (`vy >= 0`).
    pub fn caught_by(&self, platform: &Platform) -> bool {
        let top = platform.rect.top();
        let bottom = self.pos.y + self.size.y;
        self.pos.x + self.size.x > platform.rect.left()
            && self.pos.x < platform.rect.right()
            && bottom >= top
            && bottom <= top + LANDING_BAND
            && self.vel.y >= 0.0
    }

    /// Resolve landing against every platform in order. On a catch the body
    /// snaps so its bottom sits exactly on the platform top and vertical
    /// velocity zeroes.
    ///
    /// Returns the index of the platform landed on. Well-formed levels have
    /// non-overlapping platforms, so at most one can match.
    pub fn land_on(&mut self, platforms: &[Platform]) -> Option<usize> {
        let mut landed = None;
        for (i, platform) in platforms.iter().enumerate() {
            if self.caught_by(platform) {
                self.pos.y = platform.rect.top() - self.size.y;
                self.vel.y = 0.0;
                landed = Some(i);
            }
        }
        landed
    }

    /// Apply the world-edge policy on the X axis. Returns true if the body
    /// touched an edge this tick.
    pub fn confine_x(&mut self, width: f32, policy: EdgePolicy) -> bool {
        let mut touched = false;
        if self.pos.x < 0.0 {
            self.pos.x = 0.0;
            touched = true;
        } else if self.pos.x + self.size.x > width {
            self.pos.x = width - self.size.x;
            touched = true;
        }
        if touched && policy == EdgePolicy::Bounce {
            self.vel.x = -self.vel.x;
        }
        touched
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::level::Slant;
    use proptest::prelude::*;

    fn body_at(x: f32, y: f32) -> KinematicBody {
        KinematicBody::new(Vec2::new(x, y), Vec2::new(10.0, 16.0))
    }

    fn platform(x: f32, y: f32, w: f32) -> Platform {
        Platform {
            rect: Rect::new(x, y, w, 16.0),
            slant: Slant::Flat,
        }
    }

    #[test]
    fn test_fall_caps_at_terminal() {
        let mut body = body_at(0.0, 0.0);
        for _ in 0..100 {
            body.fall(0.6, 10.0);
        }
        assert_eq!(body.vel.y, 10.0);
    }

    #[test]
    fn test_landing_snaps_to_platform_top() {
        let platforms = [platform(0.0, 100.0, 200.0)];
        let mut body = body_at(50.0, 100.0 - 16.0 + 5.0); // bottom 5px into the band
        body.vel.y = 5.0;
        let landed = body.land_on(&platforms);
        assert_eq!(landed, Some(0));
        assert_eq!(body.pos.y, 100.0 - 16.0);
        assert_eq!(body.vel.y, 0.0);
    }

    #[test]
    fn test_landing_is_stable() {
        let platforms = [platform(0.0, 100.0, 200.0)];
        let mut body = body_at(50.0, 100.0 - 16.0 + 5.0);
        body.vel.y = 5.0;
        body.land_on(&platforms);
        let rest_y = body.pos.y;

        // Further ticks with gravity keep the body resting in place
        for _ in 0..10 {
            body.fall(0.6, 10.0);
            body.land_on(&platforms);
            assert_eq!(body.pos.y, rest_y);
            assert_eq!(body.vel.y, 0.0);
        }
    }

    #[test]
    fn test_rising_body_passes_through() {
        let platforms = [platform(0.0, 100.0, 200.0)];
        let mut body = body_at(50.0, 100.0 - 16.0 + 5.0);
        body.vel.y = -8.0; // jumping up through the girder
        assert_eq!(body.land_on(&platforms), None);
    }

    #[test]
    fn test_no_landing_outside_horizontal_extent() {
        let platforms = [platform(100.0, 100.0, 50.0)];
        let mut body = body_at(0.0, 100.0 - 16.0 + 5.0);
        body.vel.y = 5.0;
        assert_eq!(body.land_on(&platforms), None);
    }

    #[test]
    fn test_bounce_reverses_velocity_at_right_edge() {
        let mut body = body_at(895.0, 0.0);
        body.vel.x = 1.8;
        assert!(body.confine_x(900.0, EdgePolicy::Bounce));
        assert_eq!(body.pos.x, 900.0 - 10.0);
        assert_eq!(body.vel.x, -1.8);
    }

    #[test]
    fn test_bounce_reverses_velocity_at_left_edge() {
        let mut body = body_at(-3.0, 0.0);
        body.vel.x = -1.8;
        assert!(body.confine_x(900.0, EdgePolicy::Bounce));
        assert_eq!(body.pos.x, 0.0);
        assert_eq!(body.vel.x, 1.8);
    }

    #[test]
    fn test_clamp_does_not_touch_velocity() {
        let mut body = body_at(895.0, 0.0);
        body.vel.x = 2.6;
        assert!(body.confine_x(900.0, EdgePolicy::Clamp));
        assert_eq!(body.pos.x, 900.0 - 10.0);
        assert_eq!(body.vel.x, 2.6);
    }

    proptest! {
        #[test]
        fn prop_gravity_is_monotonic_below_terminal(
            initial_vy in -20.0f32..8.0,
            ticks in 1usize..200,
        ) {
            let mut body = body_at(0.0, 0.0);
            body.vel.y = initial_vy;
            let mut prev = body.vel.y;
            for _ in 0..ticks {
                body.fall(0.6, 10.0);
                prop_assert!(body.vel.y >= prev);
                prop_assert!(body.vel.y <= 10.0);
                prev = body.vel.y;
            }
        }
    }
}
