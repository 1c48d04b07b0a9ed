//! Enemy AI: patrol, chase, and edge avoidance
//!
//! Behavior is a two-state machine (`AiMode`) crossed with ground contact:
//!
//! | mode   | grounded            | airborne    |
//! |--------|---------------------|-------------|
//! | Patrol | walk range, turn at edges | fall only |
//! | Chase  | step toward player  | (unreachable) |

use serde::{Deserialize, Serialize};

use super::body::{GravityOrder, MovingBody};
use super::rect::Rect;
use super::state::Direction;
use crate::tuning::Tuning;

/// High-level AI state, recomputed every tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AiMode {
    #[default]
    Patrol,
    Chase,
}

/// A walking enemy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub body: MovingBody,
    pub speed: f32,
    /// Patrol extends this far right of `start_x`
    pub patrol_range: f32,
    pub start_x: f32,
    pub direction: Direction,
    pub alive: bool,
    pub mode: AiMode,
}

impl Enemy {
    /// Create an enemy standing with its feet at `ground_y`, left edge at `x`
    pub fn new(x: f32, ground_y: f32, tuning: &Tuning) -> Self {
        let rect = Rect::new(
            x,
            ground_y - tuning.enemy_height,
            tuning.enemy_width,
            tuning.enemy_height,
        );
        Self {
            body: MovingBody::new(rect),
            speed: tuning.enemy_speed,
            patrol_range: tuning.patrol_range,
            start_x: x,
            direction: Direction::Right,
            alive: true,
            mode: AiMode::Patrol,
        }
    }

    #[inline]
    pub fn rect(&self) -> &Rect {
        &self.body.rect
    }

    pub fn is_chasing(&self) -> bool {
        self.mode == AiMode::Chase
    }

    /// True when there is no platform under the foot position one step ahead
    /// in `direction`.
    pub fn is_about_to_fall(&self, direction: Direction, platforms: &[Rect]) -> bool {
        let rect = &self.body.rect;
        let mut probe = rect.mid_bottom();
        probe.x += direction.sign() * self.speed;
        probe.y += 1.0;

        !platforms.iter().any(|plat| plat.contains_point(probe))
    }

    /// Advance one tick of physics and AI against the player's rectangle
    pub fn update(&mut self, player: &Rect, platforms: &[Rect], tuning: &Tuning) {
        if !self.alive {
            return;
        }

        self.body.integrate(
            platforms,
            tuning.gravity,
            GravityOrder::AccelerateThenMove,
            tuning.landing_rule,
        );

        let dist_x = player.center().x - self.body.rect.center().x;

        self.mode = if dist_x.abs() < tuning.chase_range && self.body.on_ground {
            AiMode::Chase
        } else {
            AiMode::Patrol
        };

        match (self.mode, self.body.on_ground) {
            (AiMode::Chase, _) => self.chase(dist_x, platforms, tuning.chase_dead_zone),
            (AiMode::Patrol, true) => self.patrol(platforms),
            (AiMode::Patrol, false) => {}
        }
    }

    fn chase(&mut self, dist_x: f32, platforms: &[Rect], dead_zone: f32) {
        let toward = if dist_x > dead_zone {
            Direction::Right
        } else if dist_x < -dead_zone {
            Direction::Left
        } else {
            return;
        };

        if self.is_about_to_fall(toward, platforms) {
            // Hold at the ledge, facing away from it
            self.direction = toward.flipped();
        } else {
            // Never step past the player
            self.body.rect.x += match toward {
                Direction::Right => dist_x.min(self.speed),
                Direction::Left => dist_x.max(-self.speed),
            };
            self.direction = toward;
        }
    }

    fn patrol(&mut self, platforms: &[Rect]) {
        if self.is_about_to_fall(self.direction, platforms) {
            self.direction = self.direction.flipped();
            return;
        }

        self.body.rect.x += self.speed * self.direction.sign();
        // Takes effect on the next step
        if self.body.rect.x > self.start_x + self.patrol_range {
            self.direction = Direction::Left;
        }
        if self.body.rect.x < self.start_x {
            self.direction = Direction::Right;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ground() -> Rect {
        Rect::new(0.0, 580.0, 1200.0, 20.0)
    }

    fn far_player() -> Rect {
        Rect::new(5000.0, 530.0, 50.0, 50.0)
    }

    #[test]
    fn test_new_enemy_stands_on_ground_y() {
        let tuning = Tuning::default();
        let enemy = Enemy::new(580.0, 580.0, &tuning);
        assert_eq!(enemy.rect().y, 540.0);
        assert_eq!(enemy.start_x, 580.0);
        assert_eq!(enemy.direction, Direction::Right);
        assert!(enemy.alive);
    }

    #[test]
    fn test_no_chase_without_nearby_player() {
        let tuning = Tuning::default();
        let mut enemy = Enemy::new(580.0, 580.0, &tuning);
        for _ in 0..300 {
            enemy.update(&far_player(), &[ground()], &tuning);
            assert!(!enemy.is_chasing());
        }
    }

    #[test]
    fn test_patrol_reverses_at_range_limit() {
        let tuning = Tuning::default();
        let mut enemy = Enemy::new(400.0, 580.0, &tuning);
        enemy.body.rect.x = enemy.start_x + enemy.patrol_range;

        enemy.update(&far_player(), &[ground()], &tuning);

        assert!(enemy.body.on_ground);
        assert_eq!(enemy.direction, Direction::Left);
    }

    #[test]
    fn test_patrol_stays_within_range() {
        let tuning = Tuning::default();
        let mut enemy = Enemy::new(400.0, 580.0, &tuning);
        for _ in 0..500 {
            enemy.update(&far_player(), &[ground()], &tuning);
            let x = enemy.rect().x;
            assert!(
                x >= enemy.start_x - enemy.speed
                    && x <= enemy.start_x + enemy.patrol_range + enemy.speed
            );
        }
    }

    #[test]
    fn test_patrol_turns_at_platform_edge() {
        let tuning = Tuning::default();
        let ledge = Rect::new(100.0, 300.0, 100.0, 20.0);
        // Foot probe one step right lands at 180 + 2 + 20, past ledge.right()
        let mut enemy = Enemy::new(180.0, 300.0, &tuning);

        enemy.update(&far_player(), &[ledge], &tuning);

        assert_eq!(enemy.rect().x, 180.0);
        assert_eq!(enemy.direction, Direction::Left);
    }

    #[test]
    fn test_chase_steps_toward_player() {
        let tuning = Tuning::default();
        let mut enemy = Enemy::new(400.0, 580.0, &tuning);
        let player = Rect::new(200.0, 530.0, 50.0, 50.0);

        enemy.update(&player, &[ground()], &tuning);

        assert!(enemy.is_chasing());
        assert_eq!(enemy.rect().x, 398.0);
        assert_eq!(enemy.direction, Direction::Left);
    }

    #[test]
    fn test_chase_step_never_overshoots() {
        let tuning = Tuning {
            enemy_speed: 10.0,
            ..Tuning::default()
        };
        let mut enemy = Enemy::new(400.0, 580.0, &tuning);
        // Player center 7 units right of enemy center
        let player = Rect::new(402.0, 530.0, 50.0, 50.0);

        enemy.update(&player, &[ground()], &tuning);

        assert_eq!(enemy.rect().x, 407.0);
        assert_eq!(enemy.rect().center().x, player.center().x);
    }

    #[test]
    fn test_chase_with_negative_speed_does_not_panic() {
        // Built directly, bypassing `Tuning::validate`
        let tuning = Tuning {
            enemy_speed: -2.0,
            ..Tuning::default()
        };
        let mut enemy = Enemy::new(400.0, 580.0, &tuning);
        let player = Rect::new(200.0, 530.0, 50.0, 50.0);

        enemy.update(&player, &[ground()], &tuning);

        assert!(enemy.is_chasing());
        assert_eq!(enemy.rect().x, 402.0);
    }

    #[test]
    fn test_chase_dead_zone_holds_still() {
        let tuning = Tuning::default();
        let mut enemy = Enemy::new(400.0, 580.0, &tuning);
        let player = Rect::new(399.0, 530.0, 50.0, 50.0);

        enemy.update(&player, &[ground()], &tuning);

        assert!(enemy.is_chasing());
        assert_eq!(enemy.rect().x, 400.0);
    }

    #[test]
    fn test_chase_holds_at_ledge() {
        let tuning = Tuning::default();
        let ledge = Rect::new(100.0, 300.0, 100.0, 20.0);
        let mut enemy = Enemy::new(180.0, 300.0, &tuning);
        let player = Rect::new(400.0, 530.0, 50.0, 50.0);

        for _ in 0..10 {
            enemy.update(&player, &[ledge], &tuning);
            assert!(enemy.is_chasing());
            assert_eq!(enemy.rect().x, 180.0);
            assert_eq!(enemy.direction, Direction::Left);
        }
    }

    #[test]
    fn test_airborne_enemy_only_falls() {
        let tuning = Tuning::default();
        let mut enemy = Enemy::new(400.0, 100.0, &tuning);
        let player = Rect::new(420.0, 530.0, 50.0, 50.0);

        enemy.update(&player, &[ground()], &tuning);

        assert!(!enemy.body.on_ground);
        assert!(!enemy.is_chasing());
        assert_eq!(enemy.rect().x, 400.0);
        assert!(enemy.rect().y > 60.0);
    }

    #[test]
    fn test_dead_enemy_is_inert() {
        let tuning = Tuning::default();
        let mut enemy = Enemy::new(400.0, 100.0, &tuning);
        enemy.alive = false;
        let before = *enemy.rect();

        enemy.update(&far_player(), &[ground()], &tuning);

        assert_eq!(*enemy.rect(), before);
    }

    #[test]
    fn test_about_to_fall_at_ledge() {
        let tuning = Tuning::default();
        let ledge = Rect::new(100.0, 300.0, 100.0, 20.0);
        let enemy = Enemy::new(150.0, 300.0, &tuning);

        assert!(!enemy.is_about_to_fall(Direction::Right, &[ledge]));
        assert!(!enemy.is_about_to_fall(Direction::Left, &[ledge]));
        assert!(enemy.is_about_to_fall(Direction::Right, &[]));

        let edge = Enemy::new(179.0, 300.0, &tuning);
        // Probe x = 179 + 2 + 20 = 201, just past the ledge
        assert!(edge.is_about_to_fall(Direction::Right, &[ledge]));
        assert!(!edge.is_about_to_fall(Direction::Left, &[ledge]));
    }
}
