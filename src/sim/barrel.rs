//! Barrel controller
//!
//! Barrels roll horizontally at a constant speed, fall under (slightly
//! reduced) gravity, land on girders, and bounce off the playfield's left
//! and right edges. They never climb and never react to other barrels.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::body::{EdgePolicy, KinematicBody};
use super::level::Level;
use crate::consts::PLAYFIELD_W;
use crate::tuning::Tuning;

/// A rolling barrel
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Barrel {
    pub id: u32,
    pub body: KinematicBody,
    /// Tick the barrel was spawned on
    pub spawned_at: u64,
    /// Roll animation phase, advances every tick
    pub roll_anim: u32,
    /// Set while the barrel is dropping down a ladder; suppresses the landing
    /// snap until it falls clear of the girder it dropped through
    #[serde(default)]
    dropping: bool,
}

impl Barrel {
    /// Spawn at the emitter with an unbiased coin-flip roll direction
    pub fn spawn(id: u32, pos: Vec2, tuning: &Tuning, spawned_at: u64, rng: &mut Pcg32) -> Self {
        let dir: f32 = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
        let mut body = KinematicBody::new(pos, tuning.barrel_size);
        body.vel.x = dir * tuning.barrel_roll_speed;
        Self {
            id,
            body,
            spawned_at,
            roll_anim: 0,
            dropping: false,
        }
    }

    /// Advance one tick
    pub fn update(&mut self, level: &Level, tuning: &Tuning, rng: &mut Pcg32) {
        self.body.pos.x += self.body.vel.x;

        self.body
            .fall(tuning.barrel_gravity(), tuning.barrel_terminal_vy);

        if self.dropping {
            // Falling through a girder: wait until every landing band lets go
            if !level.platforms.iter().any(|p| self.body.caught_by(p)) {
                self.dropping = false;
            }
        } else if let Some(i) = self.body.land_on(&level.platforms) {
            let girder = &level.platforms[i].rect;
            // Stay within the girder's horizontal span while resting on it
            if self.body.pos.x < girder.left() {
                self.body.pos.x = girder.left();
            }
            if self.body.pos.x + self.body.size.x > girder.right() {
                self.body.pos.x = girder.right() - self.body.size.x;
            }

            // Classic behavior: a barrel resting over a ladder sometimes
            // drops down it instead of rolling past
            let rect = self.body.rect();
            if level.ladders.iter().any(|l| rect.intersects(&l.rect))
                && rng.random_bool(tuning.ladder_drop_chance)
            {
                self.body.vel.y = tuning.ladder_drop_vy;
                self.dropping = true;
            }
        }

        self.body.confine_x(PLAYFIELD_W, EdgePolicy::Bounce);

        self.roll_anim = self.roll_anim.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::PLAYFIELD_H;
    use crate::sim::level::{Platform, Slant};
    use crate::sim::rect::Rect;
    use rand::SeedableRng;

    fn test_level() -> Level {
        Level::build().unwrap()
    }

    fn rng() -> Pcg32 {
        Pcg32::seed_from_u64(42)
    }

    fn barrel_at(x: f32, y: f32, vx: f32) -> Barrel {
        let tuning = Tuning::default();
        let mut body = KinematicBody::new(Vec2::new(x, y), tuning.barrel_size);
        body.vel.x = vx;
        Barrel {
            id: 1,
            body,
            spawned_at: 0,
            roll_anim: 0,
            dropping: false,
        }
    }

    #[test]
    fn test_spawn_direction_is_full_roll_speed() {
        let tuning = Tuning::default();
        let mut rng = rng();
        for i in 0..20 {
            let b = Barrel::spawn(i, Vec2::new(100.0, 100.0), &tuning, 0, &mut rng);
            assert_eq!(b.body.vel.x.abs(), tuning.barrel_roll_speed);
            assert_eq!(b.body.vel.y, 0.0);
        }
    }

    #[test]
    fn test_bounce_at_right_edge() {
        let tuning = Tuning::default();
        let level = Level::validated(Vec::new(), Vec::new(), Vec2::ZERO).unwrap();
        let mut rng = rng();
        let mut b = barrel_at(PLAYFIELD_W - tuning.barrel_size.x - 1.0, 100.0, 1.8);
        b.update(&level, &tuning, &mut rng);
        assert_eq!(b.body.pos.x, PLAYFIELD_W - tuning.barrel_size.x);
        assert_eq!(b.body.vel.x, -1.8);
    }

    #[test]
    fn test_bounce_at_left_edge() {
        let tuning = Tuning::default();
        let level = Level::validated(Vec::new(), Vec::new(), Vec2::ZERO).unwrap();
        let mut rng = rng();
        let mut b = barrel_at(1.0, 100.0, -1.8);
        b.update(&level, &tuning, &mut rng);
        assert_eq!(b.body.pos.x, 0.0);
        assert_eq!(b.body.vel.x, 1.8);
    }

    #[test]
    fn test_lands_and_rolls_along_girder() {
        let tuning = Tuning::default();
        let level = test_level();
        let mut rng = rng();
        let girder = level.platforms[0].rect;
        let mut b = barrel_at(girder.x + 50.0, girder.y - 60.0, 1.8);
        for _ in 0..60 {
            b.update(&level, &tuning, &mut rng);
        }
        assert_eq!(b.body.pos.y, girder.top() - tuning.barrel_size.y);
        assert_eq!(b.body.vel.x.abs(), 1.8, "rolling continues after landing");
    }

    #[test]
    fn test_span_clamp_while_resting() {
        let tuning = Tuning::default();
        // One short girder, far from the world edges
        let level = Level::validated(
            vec![Platform {
                rect: Rect::new(300.0, 200.0, 60.0, 16.0),
                slant: Slant::Flat,
            }],
            Vec::new(),
            Vec2::ZERO,
        )
        .unwrap();
        let mut rng = rng();
        let mut b = barrel_at(310.0, 200.0 - tuning.barrel_size.y, 1.8);
        b.body.vel.y = 1.0;
        for _ in 0..200 {
            b.update(&level, &tuning, &mut rng);
            // While the landing band catches it, the barrel never leaves the span
            if b.body.pos.y == 200.0 - tuning.barrel_size.y {
                assert!(b.body.pos.x >= 300.0);
                assert!(b.body.pos.x + b.body.size.x <= 360.0);
            }
        }
    }

    #[test]
    fn test_ladder_drop_falls_through_girder() {
        let tuning = Tuning::default();
        let level = test_level();
        let mut rng = rng();
        // Rest the barrel on girder 1, right over the first ladder's top
        let girder = level.platforms[1].rect;
        let ladder = level.ladders[0].rect;
        let mut b = barrel_at(ladder.x, girder.y - tuning.barrel_size.y, 0.0);
        // With an 18% per-tick chance the drop fires well within this window
        let mut dropped = false;
        for _ in 0..600 {
            b.update(&level, &tuning, &mut rng);
            if b.body.pos.y > girder.bottom() {
                dropped = true;
                break;
            }
        }
        assert!(dropped, "resting over a ladder must eventually drop");
    }

    #[test]
    fn test_falls_past_playfield_bottom() {
        // No platforms: nothing stops the fall (despawn is the round loop's job)
        let tuning = Tuning::default();
        let level = Level::validated(Vec::new(), Vec::new(), Vec2::ZERO).unwrap();
        let mut rng = rng();
        let mut b = barrel_at(400.0, 100.0, 1.8);
        for _ in 0..200 {
            b.update(&level, &tuning, &mut rng);
        }
        assert!(b.body.pos.y > PLAYFIELD_H);
    }
}
