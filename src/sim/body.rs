//! Vertical physics for anything that falls
//!
//! Bodies are only ever supported from above: there is no side or ceiling
//! collision, so walking into a platform edge passes straight through it.

use serde::{Deserialize, Serialize};

use super::rect::Rect;

/// Order of the two halves of a gravity step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GravityOrder {
    /// Move by last tick's velocity, then accelerate (player)
    MoveThenAccelerate,
    /// Accelerate, then move by the new velocity (enemies)
    AccelerateThenMove,
}

/// Which platform a body settles on when it lands on several in one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LandingRule {
    /// The last qualifying platform in list order
    #[default]
    LastWins,
    /// The qualifying platform with the highest top edge (least penetration)
    Highest,
}

/// A rectangle with vertical velocity and ground contact
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MovingBody {
    pub rect: Rect,
    /// Vertical velocity (positive is down)
    pub vel_y: f32,
    pub on_ground: bool,
}

impl MovingBody {
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            vel_y: 0.0,
            on_ground: false,
        }
    }

    /// Advance one tick of gravity and resolve landings against `platforms`
    pub fn integrate(
        &mut self,
        platforms: &[Rect],
        gravity: f32,
        order: GravityOrder,
        rule: LandingRule,
    ) {
        match order {
            GravityOrder::MoveThenAccelerate => {
                self.rect.y += self.vel_y;
                self.vel_y += gravity;
            }
            GravityOrder::AccelerateThenMove => {
                self.vel_y += gravity;
                self.rect.y += self.vel_y;
            }
        }
        self.on_ground = false;

        if let Some(top) = self.landing_surface(platforms, rule) {
            self.rect.set_bottom(top);
            self.vel_y = 0.0;
            self.on_ground = true;
        }
    }

    /// Top edge of the platform this body lands on this tick, if any.
    ///
    /// A platform qualifies when the body overlaps it while moving down (or
    /// resting) and the body's bottom was at or above the platform top before
    /// this tick's vertical move.
    fn landing_surface(&self, platforms: &[Rect], rule: LandingRule) -> Option<f32> {
        if self.vel_y < 0.0 {
            return None;
        }
        let prev_bottom = self.rect.bottom() - self.vel_y;
        let candidates = platforms
            .iter()
            .filter(|plat| self.rect.overlaps(plat) && prev_bottom <= plat.y)
            .map(|plat| plat.y);

        match rule {
            LandingRule::LastWins => candidates.last(),
            LandingRule::Highest => candidates.reduce(f32::min),
        }
    }
}
