//! Squash, stretch, shake and spin derived from kinematic state
//!
//! Two regimes are kept apart:
//! - charge squash widens the sprite along its own curve (no area invariant)
//! - airborne stretch is area-preserving (`w * h == base²`)

use glam::Vec2;

use super::state::Player;
use crate::map_range_clamped;
use crate::tuning::Tuning;

/// Visual parameters for one tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Deformation {
    pub size: Vec2,
    pub shake_offset: f32,
    pub still_time: u32,
    pub rotation: f32,
}

/// Compute the deformation for the player's current state.
///
/// `landed` is true on the tick the player touches down. `shake_roll` is a
/// uniform sample in `[-1, 1]` used only while a heavy charge is held.
pub fn compute(player: &Player, landed: bool, tuning: &Tuning, shake_roll: f32) -> Deformation {
    let base = player.base_size;
    let mut out = Deformation {
        size: player.size,
        shake_offset: player.shake_offset,
        still_time: player.still_time,
        rotation: player.rotation,
    };

    if player.charging {
        let squash =
            map_range_clamped(player.jump_charge, 0.0, tuning.charge_max, 1.0, tuning.min_squash);
        let widen =
            map_range_clamped(squash, 1.0, tuning.min_squash, 1.0, tuning.max_squash_width);
        out.size = Vec2::new(base * widen, base * squash);

        out.shake_offset = if player.jump_charge > tuning.shake_threshold {
            let amplitude = map_range_clamped(
                player.jump_charge,
                tuning.shake_threshold,
                tuning.charge_max,
                1.0,
                tuning.max_shake,
            );
            shake_roll.clamp(-1.0, 1.0) * amplitude
        } else {
            0.0
        };
        out.still_time = 0;
    } else if !player.on_platform {
        // Rising and falling both stretch with speed
        let stretch = map_range_clamped(
            player.velocity.abs(),
            0.0,
            tuning.charge_max,
            1.0,
            tuning.max_stretch,
        );
        out.size = Vec2::new(base / stretch, base * stretch);
        out.still_time = 0;
    } else {
        out.still_time = player.still_time.saturating_add(1);
        if out.still_time > tuning.still_time_threshold {
            out.size += (Vec2::splat(base) - out.size) * tuning.recovery_rate;
        }
    }

    if landed {
        out.rotation = 0.0;
    } else if player.velocity < 0.0 {
        out.rotation += tuning.rotation_speed;
    }

    out
}

/// Write a deformation back onto the player.
///
/// A grounded player keeps their bottom edge on the platform; an airborne one
/// keeps the top-left anchor.
pub fn apply(player: &mut Player, deformation: Deformation, tuning: &Tuning) {
    if player.on_platform {
        let bottom = player.bottom();
        player.size = deformation.size;
        player.pos.y = bottom - player.size.y;
    } else {
        player.size = deformation.size;
    }
    player.shake_offset = deformation.shake_offset;
    player.still_time = deformation.still_time;
    player.rotation = deformation.rotation;
    player.clamp_x(tuning.canvas_width);
}
