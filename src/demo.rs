//! Demo pilot: a seeded random input source
//!
//! Plays the game without a keyboard for headless runs and determinism
//! checks. The same seed always yields the same input stream.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::sim::{TickInput, World};

/// Chance per tick of holding right
const RIGHT_CHANCE: f64 = 0.85;
/// Chance per tick of holding left instead
const LEFT_CHANCE: f64 = 0.05;
/// Chance per grounded tick of jumping
const JUMP_CHANCE: f64 = 0.08;
/// Chance per tick of pressing fire
const FIRE_CHANCE: f64 = 0.1;

/// Generates `TickInput`s from a seeded RNG
#[derive(Debug, Clone)]
pub struct DemoPilot {
    rng: Pcg32,
    fired_last_tick: bool,
}

impl DemoPilot {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            fired_last_tick: false,
        }
    }

    /// Decide the next tick's input from the current world
    pub fn next_input(&mut self, world: &World) -> TickInput {
        let roll: f64 = self.rng.random();
        let right = roll < RIGHT_CHANCE;
        let left = !right && roll < RIGHT_CHANCE + LEFT_CHANCE;

        let jump = world.player().body.on_ground && self.rng.random_bool(JUMP_CHANCE);

        // Fire is edge-triggered: a key must be released between presses
        let fire = !self.fired_last_tick && self.rng.random_bool(FIRE_CHANCE);
        self.fired_last_tick = fire;

        TickInput {
            left,
            right,
            jump,
            fire,
        }
    }
}
