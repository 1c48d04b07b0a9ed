//! Ledge Runner - A side-scrolling platformer simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, enemy AI, projectiles, game state)
//! - `view`: Camera and draw-list snapshot for an external renderer
//! - `demo`: Seeded input source for headless runs
//! - `settings`: Viewport and tuning configuration
//! - `tuning`: Data-driven game balance

pub mod demo;
pub mod settings;
pub mod sim;
pub mod tuning;
pub mod view;

pub use settings::{Settings, SettingsError};
pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Downward acceleration (units/tick²)
    pub const GRAVITY: f32 = 0.5;

    /// Player defaults
    pub const PLAYER_WIDTH: f32 = 50.0;
    pub const PLAYER_HEIGHT: f32 = 50.0;
    pub const PLAYER_SPEED: f32 = 5.0;
    /// Initial vertical velocity of a jump (negative is up)
    pub const JUMP_POWER: f32 = -12.0;

    /// Enemy defaults
    pub const ENEMY_WIDTH: f32 = 40.0;
    pub const ENEMY_HEIGHT: f32 = 40.0;
    pub const ENEMY_SPEED: f32 = 2.0;
    pub const ENEMY_PATROL_RANGE: f32 = 100.0;
    /// Horizontal center distance under which a grounded enemy chases
    pub const CHASE_RANGE: f32 = 400.0;
    /// Chasing enemies hold still this close to the player
    pub const CHASE_DEAD_ZONE: f32 = 5.0;

    /// Bullet defaults
    pub const BULLET_WIDTH: f32 = 40.0;
    pub const BULLET_HEIGHT: f32 = 15.0;
    pub const BULLET_SPEED: f32 = 20.0;
    pub const BULLET_MAX_DISTANCE: f32 = 300.0;
    /// Offset from the shooter's vertical center to the bullet top
    pub const BULLET_Y_OFFSET: f32 = 7.0;

    /// Default viewport (the classic course is 600 units tall)
    pub const VIEWPORT_WIDTH: f32 = 800.0;
    pub const VIEWPORT_HEIGHT: f32 = 600.0;
}
