//! Per-frame simulation tick
//!
//! Core game loop step: one call per rendered frame, no sub-stepping.

use super::body::GravityOrder;
use super::projectile::update_bullets;
use super::state::{Direction, Outcome, World};

/// Input snapshot for a single tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    /// One-shot: set on key-down, cleared by the driver after the tick
    pub fire: bool,
}

/// Advance the world by one frame
pub fn tick(world: &mut World, input: &TickInput) {
    // Frozen once the run is decided
    if world.outcome.is_terminal() {
        return;
    }

    world.ticks += 1;

    // A key-down fire lands before this frame's movement
    if input.fire {
        world.fire();
    }

    move_player(world, input);

    let tuning = &world.tuning;
    world.player.body.integrate(
        &world.platforms,
        tuning.gravity,
        GravityOrder::MoveThenAccelerate,
        tuning.landing_rule,
    );

    let player_rect = world.player.body.rect;
    for enemy in &mut world.enemies {
        enemy.update(&player_rect, &world.platforms, tuning);
    }

    let kills = update_bullets(&mut world.bullets, &mut world.enemies);
    if kills > 0 {
        log::info!(
            "Tick {}: {} enemy(s) down, {} remaining",
            world.ticks,
            kills,
            world.alive_enemies()
        );
    }

    check_outcome(world);
}

fn move_player(world: &mut World, input: &TickInput) {
    let speed = world.tuning.player_speed;
    let player = &mut world.player;

    if input.left {
        player.body.rect.x -= speed;
        player.facing = Direction::Left;
    }
    if input.right {
        player.body.rect.x += speed;
        player.facing = Direction::Right;
    }
    // Ground contact is from the previous tick's landing
    if input.jump && player.body.on_ground {
        player.body.vel_y = world.tuning.jump_power;
    }
}

/// Loss is checked first and takes precedence over a same-tick win
fn check_outcome(world: &mut World) {
    let player = world.player.rect();

    if world
        .enemies
        .iter()
        .any(|e| e.alive && player.overlaps(e.rect()))
    {
        world.outcome = Outcome::Lost;
        log::info!("Player caught at x={} after {} ticks", player.x, world.ticks);
        return;
    }

    if player.overlaps(&world.finish) {
        world.outcome = Outcome::Won;
        log::info!("Finish reached after {} ticks", world.ticks);
    }
}
