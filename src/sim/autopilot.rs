//! Demo-mode autopilot
//!
//! Picks the next platform up, lines up under it, charges just enough to clear
//! it and steers onto it on the way down.

use super::session::GameSession;
use super::state::{Platform, Player};
use super::tick::TickInput;

/// Horizontal slack before the autopilot bothers steering
const ALIGN_SLACK: f32 = 8.0;
/// Extra height to clear above the target platform
const CLEARANCE: f32 = 25.0;

/// Closest visible platform whose top is above the player's feet
fn next_platform_up<'a>(session: &'a GameSession, player: &Player) -> Option<&'a Platform> {
    session
        .field
        .platforms()
        .filter(|p| p.is_visible(session.tuning.header_height) && p.top() < player.bottom() - 1.0)
        .reduce(|a, b| if b.top() > a.top() { b } else { a })
}

/// Closest platform at or below the player's feet
fn next_platform_down<'a>(session: &'a GameSession, player: &Player) -> Option<&'a Platform> {
    session
        .field
        .platforms()
        .filter(|p| p.top() >= player.bottom())
        .reduce(|a, b| if b.top() < a.top() { b } else { a })
}

fn steer_toward(input: &mut TickInput, player: &Player, platform: &Platform) {
    let dx = (platform.pos.x + platform.size.x / 2.0) - (player.pos.x + player.size.x / 2.0);
    input.left = dx < -ALIGN_SLACK;
    input.right = dx > ALIGN_SLACK;
}

/// Fill `input` with the autopilot's choices for this tick
pub fn steer(session: &GameSession, input: &mut TickInput) {
    let player = &session.player;
    let tuning = &session.tuning;
    input.charge_pressed = false;
    input.charge_released = false;
    input.left = false;
    input.right = false;

    if !player.on_platform {
        let target = if player.velocity < 0.0 {
            next_platform_up(session, player)
        } else {
            next_platform_down(session, player)
        };
        if let Some(platform) = target {
            steer_toward(input, player, platform);
        }
        return;
    }

    let Some(target) = next_platform_up(session, player) else {
        return;
    };

    if player.charging {
        let height = player.bottom() - target.top() + CLEARANCE;
        let needed = (2.0 * tuning.gravity * height.max(0.0)).sqrt();
        if player.jump_charge >= needed.min(tuning.charge_max) {
            input.charge_released = true;
        }
        return;
    }

    steer_toward(input, player, target);
    if !input.left && !input.right && (player.can_jump || !tuning.gate_charge_on_landing) {
        input.charge_pressed = true;
    }
}
