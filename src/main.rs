//! Ledge Runner entry point
//!
//! Runs the classic course headlessly with the demo pilot at the controls.
//! Usage: `ledge-runner [settings.json]` (or set `LEDGE_RUNNER_SETTINGS`).

use std::path::PathBuf;

use ledge_runner::Settings;
use ledge_runner::demo::DemoPilot;
use ledge_runner::sim::{Level, Outcome, World, tick};
use ledge_runner::view::Frame;

/// Log a progress line this often (one second at 60 fps)
const PROGRESS_INTERVAL: u64 = 60;

fn main() {
    env_logger::init();
    log::info!("Ledge Runner (headless) starting...");

    let path = std::env::args_os().nth(1).map(PathBuf::from);
    let settings = Settings::load_or_default(path.as_deref());

    let level = Level::classic(&settings.tuning);
    let mut world = match World::new(level, settings.tuning.clone()) {
        Ok(world) => world,
        Err(e) => {
            log::error!("Cannot build world: {}", e);
            std::process::exit(1);
        }
    };

    let mut pilot = DemoPilot::new(settings.demo_seed);
    log::info!("Demo pilot seeded with {}", settings.demo_seed);

    for _ in 0..settings.demo_ticks {
        let input = pilot.next_input(&world);
        tick(&mut world, &input);

        if world.ticks() % PROGRESS_INTERVAL == 0 {
            let frame = Frame::capture(&world, settings.viewport_width, settings.viewport_height);
            log::debug!(
                "tick {}: player x={:.1} y={:.1} camera={:.1} enemies={} bullets={}",
                world.ticks(),
                world.player().rect().x,
                world.player().rect().y,
                frame.camera_x,
                world.alive_enemies(),
                world.bullets().len()
            );
        }

        if world.outcome().is_terminal() {
            break;
        }
    }

    let frame = Frame::capture(&world, settings.viewport_width, settings.viewport_height);
    let summary = match &frame.message {
        Some(message) => message.text,
        None => "TIME UP",
    };
    if world.outcome() == Outcome::Playing {
        log::warn!("Demo stopped after {} ticks without a result", world.ticks());
    }

    println!(
        "{} after {} ticks: player at x={:.1}, {} of {} enemies left",
        summary,
        world.ticks(),
        world.player().rect().x,
        world.alive_enemies(),
        world.enemies().len()
    );
}
