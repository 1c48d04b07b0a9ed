//! Data-driven game balance
//!
//! Every gameplay constant the simulation reads lives here so a run can be
//! retuned from a settings file without touching code.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::sim::LandingRule;

/// Gameplay tuning values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub gravity: f32,

    // === Player ===
    pub player_speed: f32,
    pub jump_power: f32,

    // === Enemies ===
    pub enemy_width: f32,
    pub enemy_height: f32,
    pub enemy_speed: f32,
    pub patrol_range: f32,
    pub chase_range: f32,
    pub chase_dead_zone: f32,

    // === Bullets ===
    pub bullet_width: f32,
    pub bullet_height: f32,
    pub bullet_speed: f32,
    pub bullet_max_distance: f32,

    /// Tie-break when a body lands on several platforms in one tick
    pub landing_rule: LandingRule,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,

            player_speed: PLAYER_SPEED,
            jump_power: JUMP_POWER,

            enemy_width: ENEMY_WIDTH,
            enemy_height: ENEMY_HEIGHT,
            enemy_speed: ENEMY_SPEED,
            patrol_range: ENEMY_PATROL_RANGE,
            chase_range: CHASE_RANGE,
            chase_dead_zone: CHASE_DEAD_ZONE,

            bullet_width: BULLET_WIDTH,
            bullet_height: BULLET_HEIGHT,
            bullet_speed: BULLET_SPEED,
            bullet_max_distance: BULLET_MAX_DISTANCE,

            landing_rule: LandingRule::LastWins,
        }
    }
}

/// Rejected tuning value
#[derive(Debug, Error, PartialEq)]
pub enum TuningError {
    #[error("tuning value `{field}` is not finite")]
    NotFinite { field: &'static str },
    #[error("tuning value `{field}` must not be negative, got {value}")]
    Negative { field: &'static str, value: f32 },
}

impl Tuning {
    /// Reject values the simulation cannot run with: any non-finite number,
    /// and negative sizes, speeds or ranges
    pub fn validate(&self) -> Result<(), TuningError> {
        // Signed: direction carries meaning
        let signed = [("gravity", self.gravity), ("jump_power", self.jump_power)];
        let magnitudes = [
            ("player_speed", self.player_speed),
            ("enemy_width", self.enemy_width),
            ("enemy_height", self.enemy_height),
            ("enemy_speed", self.enemy_speed),
            ("patrol_range", self.patrol_range),
            ("chase_range", self.chase_range),
            ("chase_dead_zone", self.chase_dead_zone),
            ("bullet_width", self.bullet_width),
            ("bullet_height", self.bullet_height),
            ("bullet_speed", self.bullet_speed),
            ("bullet_max_distance", self.bullet_max_distance),
        ];

        for (field, value) in signed.into_iter().chain(magnitudes) {
            if !value.is_finite() {
                return Err(TuningError::NotFinite { field });
            }
        }
        for (field, value) in magnitudes {
            if value < 0.0 {
                return Err(TuningError::Negative { field, value });
            }
        }
        Ok(())
    }
}
