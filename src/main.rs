//! Squash Jump entry point
//!
//! Native headless driver: lets the autopilot play one session and logs what
//! happens. Set `RUST_LOG=debug` to see every jump and landing.

use std::time::{SystemTime, UNIX_EPOCH};

use squash_jump::renderer::build_frame;
use squash_jump::sim::{GameEvent, GameSession, TickInput, tick};

/// One minute of play at 60 ticks per second
const MAX_TICKS: u64 = 60 * 60;

fn main() {
    env_logger::init();
    log::info!("Squash Jump (headless) starting...");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    let mut session = GameSession::with_defaults(seed);
    log::info!("Game initialized with seed: {}", session.seed());

    let input = TickInput {
        idle_mode: true,
        ..Default::default()
    };

    let mut jumps = 0u32;
    for _ in 0..MAX_TICKS {
        for event in tick(&mut session, &input) {
            match event {
                GameEvent::JumpReleased { .. } => jumps += 1,
                GameEvent::GameOver { score } => log::info!("Autopilot finished with {score} points"),
                _ => {}
            }
        }
        if session.is_game_over() {
            break;
        }
    }

    let frame = build_frame(&session.snapshot());
    log::info!(
        "Stopped after {} ticks: score {}, lives {}, {} jumps, last frame {} draw commands",
        session.time_ticks,
        session.score,
        session.lives,
        jumps,
        frame.commands.len()
    );
}
