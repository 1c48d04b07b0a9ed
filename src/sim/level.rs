//! Level construction data
//!
//! Levels are fixed data supplied by the embedding application. The built-in
//! course is `Level::classic`.

use thiserror::Error;

use super::rect::Rect;
use crate::consts::{PLAYER_HEIGHT, PLAYER_WIDTH};
use crate::tuning::{Tuning, TuningError};

/// Rejected level geometry or tuning
#[derive(Debug, Error, PartialEq)]
pub enum LevelError {
    #[error("level has no platforms")]
    NoPlatforms,
    #[error(transparent)]
    Tuning(#[from] TuningError),
    #[error("malformed {what} rectangle{}: {rect:?}", index_suffix(.index))]
    MalformedRect {
        what: &'static str,
        index: Option<usize>,
        rect: Rect,
    },
}

fn index_suffix(index: &Option<usize>) -> String {
    index.map(|i| format!(" #{i}")).unwrap_or_default()
}

/// Where an enemy is placed at load: left edge `x`, feet on `ground_y`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemySpawn {
    pub x: f32,
    pub ground_y: f32,
}

impl EnemySpawn {
    /// Centered on top of `platform`
    pub fn centered_on(platform: &Rect, enemy_width: f32) -> Self {
        Self {
            x: platform.x + platform.width / 2.0 - enemy_width / 2.0,
            ground_y: platform.y,
        }
    }
}

/// Everything needed to build a `World`
#[derive(Debug, Clone)]
pub struct Level {
    pub player: Rect,
    pub platforms: Vec<Rect>,
    pub finish: Rect,
    pub enemies: Vec<EnemySpawn>,
}

impl Level {
    /// A level with no enemies
    pub fn new(player: Rect, platforms: Vec<Rect>, finish: Rect) -> Self {
        Self {
            player,
            platforms,
            finish,
            enemies: Vec::new(),
        }
    }

    /// Add one enemy centered on each platform, in platform order
    pub fn with_platform_enemies(mut self, enemy_width: f32) -> Self {
        self.enemies = self
            .platforms
            .iter()
            .map(|plat| EnemySpawn::centered_on(plat, enemy_width))
            .collect();
        self
    }

    pub fn with_enemy(mut self, spawn: EnemySpawn) -> Self {
        self.enemies.push(spawn);
        self
    }

    /// The built-in course: ground, thirteen floating platforms, and a finish
    /// zone past the last platform.
    pub fn classic(tuning: &Tuning) -> Self {
        let platforms = vec![
            Rect::new(0.0, 580.0, 1200.0, 20.0),
            Rect::new(300.0, 450.0, 200.0, 20.0),
            Rect::new(150.0, 350.0, 150.0, 20.0),
            Rect::new(500.0, 350.0, 150.0, 20.0),
            Rect::new(750.0, 480.0, 120.0, 20.0),
            Rect::new(900.0, 450.0, 100.0, 20.0),
            Rect::new(1050.0, 400.0, 150.0, 20.0),
            Rect::new(1250.0, 460.0, 100.0, 20.0),
            Rect::new(1400.0, 430.0, 130.0, 20.0),
            Rect::new(1600.0, 390.0, 150.0, 20.0),
            Rect::new(1800.0, 460.0, 100.0, 20.0),
            Rect::new(1950.0, 420.0, 120.0, 20.0),
            Rect::new(2100.0, 380.0, 150.0, 20.0),
            Rect::new(2300.0, 460.0, 200.0, 20.0),
        ];

        Self::new(
            Rect::new(100.0, 500.0, PLAYER_WIDTH, PLAYER_HEIGHT),
            platforms,
            Rect::new(2500.0, 520.0, 100.0, 60.0),
        )
        .with_platform_enemies(tuning.enemy_width)
    }

    pub fn validate(&self) -> Result<(), LevelError> {
        if self.platforms.is_empty() {
            return Err(LevelError::NoPlatforms);
        }

        let malformed = |what, index, rect: &Rect| {
            (!rect.is_well_formed()).then_some(LevelError::MalformedRect {
                what,
                index,
                rect: *rect,
            })
        };

        if let Some(err) = malformed("player", None, &self.player) {
            return Err(err);
        }
        if let Some(err) = malformed("finish", None, &self.finish) {
            return Err(err);
        }
        for (i, plat) in self.platforms.iter().enumerate() {
            if let Some(err) = malformed("platform", Some(i), plat) {
                return Err(err);
            }
        }
        for (i, spawn) in self.enemies.iter().enumerate() {
            let probe = Rect::new(spawn.x, spawn.ground_y, 0.0, 0.0);
            if let Some(err) = malformed("enemy spawn", Some(i), &probe) {
                return Err(err);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_spawn_rule() {
        let tuning = Tuning::default();
        let level = Level::classic(&tuning);
        assert_eq!(level.enemies.len(), level.platforms.len());

        // Ground platform: 0 + 1200/2 - 20
        assert_eq!(level.enemies[0], EnemySpawn { x: 580.0, ground_y: 580.0 });
        // Second platform: 300 + 200/2 - 20
        assert_eq!(level.enemies[1], EnemySpawn { x: 380.0, ground_y: 450.0 });
        assert!(level.validate().is_ok());
    }

    #[test]
    fn test_empty_platform_list_rejected() {
        let level = Level::new(
            Rect::new(0.0, 0.0, 10.0, 10.0),
            Vec::new(),
            Rect::new(50.0, 0.0, 10.0, 10.0),
        );
        assert_eq!(level.validate(), Err(LevelError::NoPlatforms));
    }

    #[test]
    fn test_malformed_finish_rejected() {
        let level = Level::new(
            Rect::new(0.0, 0.0, 10.0, 10.0),
            vec![Rect::new(0.0, 100.0, 100.0, 10.0)],
            Rect::new(50.0, 0.0, 10.0, -1.0),
        );
        let err = level.validate().unwrap_err();
        assert!(matches!(err, LevelError::MalformedRect { what: "finish", index: None, .. }));
        assert!(err.to_string().starts_with("malformed finish rectangle:"));
    }

    #[test]
    fn test_error_message_names_platform_index() {
        let level = Level::new(
            Rect::new(0.0, 0.0, 10.0, 10.0),
            vec![Rect::new(0.0, 100.0, 100.0, 10.0), Rect::new(0.0, f32::INFINITY, 1.0, 1.0)],
            Rect::new(50.0, 0.0, 10.0, 10.0),
        );
        let err = level.validate().unwrap_err();
        assert!(err.to_string().starts_with("malformed platform rectangle #1:"));
    }
}
