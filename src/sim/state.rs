//! World state and core simulation types
//!
//! Everything a tick reads or writes lives in `World`, so a run can be cloned
//! or serialized and replayed deterministically.

use serde::{Deserialize, Serialize};

use super::body::MovingBody;
use super::enemy::Enemy;
use super::level::{Level, LevelError};
use super::projectile::Bullet;
use super::rect::Rect;
use crate::tuning::Tuning;

/// Horizontal facing or walking direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// -1.0 for left, 1.0 for right
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            Direction::Left => -1.0,
            Direction::Right => 1.0,
        }
    }

    #[inline]
    pub fn flipped(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// How the run stands. Terminal outcomes never change back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Outcome {
    #[default]
    Playing,
    /// Touched a living enemy
    Lost,
    /// Reached the finish zone
    Won,
}

impl Outcome {
    pub fn is_terminal(self) -> bool {
        self != Outcome::Playing
    }
}

/// The player character
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub body: MovingBody,
    pub facing: Direction,
}

impl Player {
    pub fn new(rect: Rect) -> Self {
        Self {
            body: MovingBody::new(rect),
            facing: Direction::Right,
        }
    }

    #[inline]
    pub fn rect(&self) -> &Rect {
        &self.body.rect
    }
}

/// Complete simulation state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct World {
    pub(crate) tuning: Tuning,
    /// Static terrain, never mutated after construction
    pub(crate) platforms: Vec<Rect>,
    pub(crate) finish: Rect,
    pub(crate) player: Player,
    /// One slot per spawned enemy; dead enemies keep their slot
    pub(crate) enemies: Vec<Enemy>,
    pub(crate) bullets: Vec<Bullet>,
    pub(crate) outcome: Outcome,
    /// Simulated ticks (frozen ticks are not counted)
    pub(crate) ticks: u64,
}

impl World {
    /// Build a world from level data, rejecting malformed geometry or tuning
    pub fn new(level: Level, tuning: Tuning) -> Result<Self, LevelError> {
        tuning.validate()?;
        level.validate()?;
        Ok(Self::build(level, tuning))
    }

    /// The built-in course with default tuning
    pub fn classic() -> Self {
        let tuning = Tuning::default();
        Self::build(Level::classic(&tuning), tuning)
    }

    fn build(level: Level, tuning: Tuning) -> Self {
        let enemies = level
            .enemies
            .iter()
            .map(|spawn| Enemy::new(spawn.x, spawn.ground_y, &tuning))
            .collect::<Vec<_>>();

        log::info!(
            "World created: {} platforms, {} enemies, finish at x={}",
            level.platforms.len(),
            enemies.len(),
            level.finish.x
        );

        Self {
            player: Player::new(level.player),
            platforms: level.platforms,
            finish: level.finish,
            enemies,
            bullets: Vec::new(),
            outcome: Outcome::Playing,
            ticks: 0,
            tuning,
        }
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn platforms(&self) -> &[Rect] {
        &self.platforms
    }

    pub fn finish(&self) -> &Rect {
        &self.finish
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    pub fn bullets(&self) -> &[Bullet] {
        &self.bullets
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn alive_enemies(&self) -> usize {
        self.enemies.iter().filter(|e| e.alive).count()
    }

    /// Fire a bullet from the player's leading edge.
    ///
    /// Returns false (and spawns nothing) once the run has ended.
    pub fn fire(&mut self) -> bool {
        if self.outcome.is_terminal() {
            return false;
        }
        let bullet = Bullet::spawn(self.player.rect(), self.player.facing, &self.tuning);
        log::debug!("Bullet fired at x={} speed={}", bullet.rect.x, bullet.speed);
        self.bullets.push(bullet);
        true
    }

    /// Mutable access for drivers and tests that place entities directly
    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    pub fn enemies_mut(&mut self) -> &mut [Enemy] {
        &mut self.enemies
    }
}
