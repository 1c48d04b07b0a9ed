//! Camera and draw-list snapshot for an external renderer
//!
//! The simulation never draws. Each frame a renderer captures a `Frame`:
//! screen-space rectangles in painter's order plus the end-of-run message.

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

use crate::sim::{Outcome, Rect, World};

/// Colors for game elements
pub mod colors {
    pub const PLATFORM: [f32; 4] = [0.196, 1.0, 0.196, 1.0];
    pub const FINISH: [f32; 4] = [1.0, 0.196, 0.196, 1.0];
    pub const ENEMY: [f32; 4] = [1.0, 0.196, 0.196, 1.0];
    pub const BULLET: [f32; 4] = [0.314, 0.314, 1.0, 1.0];
    pub const PLAYER: [f32; 4] = [0.314, 0.314, 1.0, 1.0];
    pub const LOSE_TEXT: [f32; 4] = [1.0, 0.196, 0.196, 1.0];
    pub const WIN_TEXT: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    pub const BACKGROUND: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
}

/// One filled rectangle, ready to upload as instance data
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct RectInstance {
    pub position: [f32; 2],
    pub size: [f32; 2],
    pub color: [f32; 4],
}

impl RectInstance {
    fn world(rect: &Rect, camera_x: f32, color: [f32; 4]) -> Self {
        Self {
            position: [rect.x - camera_x, rect.y],
            size: [rect.width, rect.height],
            color,
        }
    }
}

/// Centered text shown over the scene
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub text: &'static str,
    pub color: [f32; 4],
}

/// Horizontal scroll: keep the player centered, never past the left edge
pub fn camera_offset(player: &Rect, viewport_width: f32) -> f32 {
    (player.x - viewport_width / 2.0).max(0.0)
}

/// Banner for a finished run
pub fn outcome_message(outcome: Outcome) -> Option<Message> {
    match outcome {
        Outcome::Playing => None,
        Outcome::Lost => Some(Message {
            text: "YOU LOSE!",
            color: colors::LOSE_TEXT,
        }),
        Outcome::Won => Some(Message {
            text: "YOU WIN!",
            color: colors::WIN_TEXT,
        }),
    }
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone)]
pub struct Frame {
    pub camera_x: f32,
    pub instances: Vec<RectInstance>,
    pub message: Option<Message>,
    /// Screen-space anchor for `message`
    pub message_pos: Vec2,
}

impl Frame {
    pub fn capture(world: &World, viewport_width: f32, viewport_height: f32) -> Self {
        let camera_x = camera_offset(world.player().rect(), viewport_width);

        let platforms = world
            .platforms()
            .iter()
            .map(|p| RectInstance::world(p, camera_x, colors::PLATFORM));
        let finish = std::iter::once(RectInstance::world(world.finish(), camera_x, colors::FINISH));
        let enemies = world
            .enemies()
            .iter()
            .filter(|e| e.alive)
            .map(|e| RectInstance::world(e.rect(), camera_x, colors::ENEMY));
        let bullets = world
            .bullets()
            .iter()
            .filter(|b| b.active)
            .map(|b| RectInstance::world(&b.rect, camera_x, colors::BULLET));
        let player = std::iter::once(RectInstance::world(
            world.player().rect(),
            camera_x,
            colors::PLAYER,
        ));

        Self {
            camera_x,
            instances: platforms
                .chain(finish)
                .chain(enemies)
                .chain(bullets)
                .chain(player)
                .collect(),
            message: outcome_message(world.outcome()),
            message_pos: Vec2::new(viewport_width / 2.0, viewport_height / 2.0),
        }
    }

    /// Raw instance bytes for a GPU buffer
    pub fn instance_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.instances)
    }
}
