//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per rendered frame
//! - Stable iteration order (platform, enemy, and bullet list order)
//! - No rendering or platform dependencies

pub mod body;
pub mod enemy;
pub mod level;
pub mod projectile;
pub mod rect;
pub mod state;
pub mod tick;

pub use body::{GravityOrder, LandingRule, MovingBody};
pub use enemy::{AiMode, Enemy};
pub use level::{EnemySpawn, Level, LevelError};
pub use projectile::{Bullet, update_bullets};
pub use rect::Rect;
pub use state::{Direction, Outcome, Player, World};
pub use tick::{TickInput, tick};
