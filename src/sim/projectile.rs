//! Bullets: spawning, flight, range expiry, and enemy hits

use serde::{Deserialize, Serialize};

use super::enemy::Enemy;
use super::rect::Rect;
use super::state::Direction;
use crate::consts::BULLET_Y_OFFSET;
use crate::tuning::Tuning;

/// A straight-flying bullet with a fixed range
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bullet {
    pub rect: Rect,
    /// Horizontal speed per tick; the sign is the direction of travel
    pub speed: f32,
    pub distance_traveled: f32,
    pub max_distance: f32,
    pub active: bool,
}

impl Bullet {
    /// Spawn in front of `shooter`, vertically centered on it
    pub fn spawn(shooter: &Rect, facing: Direction, tuning: &Tuning) -> Self {
        let x = match facing {
            Direction::Right => shooter.right(),
            Direction::Left => shooter.x - tuning.bullet_width,
        };
        let y = shooter.y + shooter.height / 2.0 - BULLET_Y_OFFSET;

        Self {
            rect: Rect::new(x, y, tuning.bullet_width, tuning.bullet_height),
            speed: tuning.bullet_speed * facing.sign(),
            distance_traveled: 0.0,
            max_distance: tuning.bullet_max_distance,
            active: true,
        }
    }

    /// Move one tick; expires once the range is used up
    pub fn advance(&mut self) {
        if !self.active {
            return;
        }
        self.rect.x += self.speed;
        self.distance_traveled += self.speed.abs();
        if self.distance_traveled >= self.max_distance {
            self.active = false;
        }
    }
}

/// Advance every bullet and resolve hits, returning the number of kills.
///
/// Bullets that were already inactive are dropped first, so a bullet that
/// expires or hits this tick stays visible (inactive) until the next update.
/// Each bullet moves and then scans enemies in order; the first living enemy
/// it overlaps dies and the bullet is spent.
pub fn update_bullets(bullets: &mut Vec<Bullet>, enemies: &mut [Enemy]) -> usize {
    bullets.retain(|b| b.active);

    let mut kills = 0;
    for bullet in bullets.iter_mut() {
        bullet.advance();
        if !bullet.active {
            continue;
        }

        if let Some(enemy) = enemies
            .iter_mut()
            .find(|e| e.alive && bullet.rect.overlaps(e.rect()))
        {
            enemy.alive = false;
            bullet.active = false;
            kills += 1;
            log::debug!("Enemy hit at x={}", enemy.rect().x);
        }
    }
    kills
}
