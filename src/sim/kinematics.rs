//! Player kinematics: horizontal steering, gravity and the charge-release jump

use std::f32::consts::TAU;

use super::state::Player;
use crate::map_range;
use crate::tuning::Tuning;

/// Begin charging a jump. Returns false if the press was ignored.
pub fn start_charge(player: &mut Player, tuning: &Tuning) -> bool {
    if player.charging {
        return false;
    }
    if tuning.gate_charge_on_landing {
        if !player.can_jump {
            return false;
        }
        player.can_jump = false;
    }
    player.charging = true;
    // Charge never sits below its floor while held
    player.jump_charge = player.jump_charge.clamp(tuning.charge_min, tuning.charge_max);
    true
}

/// Fire the held charge as an upward impulse. Returns the released force.
pub fn release_charge(player: &mut Player, tuning: &Tuning) -> Option<f32> {
    if !player.charging {
        return None;
    }

    let force = player.jump_charge;
    player.charging = false;
    player.velocity = -force;
    player.last_jump_force = force;
    player.target_rotation = rotation_target(force, tuning);
    player.jump_charge = 0.0;
    player.shake_offset = 0.0;
    player.on_platform = false;

    log::debug!("Jump released with force {force:.2}");
    Some(force)
}

/// Full turns to spin for a jump of the given force, as radians
pub fn rotation_target(force: f32, tuning: &Tuning) -> f32 {
    let extra = map_range(force, tuning.charge_min, tuning.charge_max, 0.0, 2.0)
        .floor()
        .max(0.0) as u32;
    (tuning.min_rotations + extra) as f32 * TAU
}

/// Advance one tick of movement.
///
/// `direction` is -1 (left), 0 or +1 (right).
pub fn integrate(player: &mut Player, direction: i8, tuning: &Tuning) {
    player.pos.x += tuning.horizontal_speed * f32::from(direction.signum());
    player.clamp_x(tuning.canvas_width);

    if !player.on_platform || player.charging {
        player.velocity += tuning.gravity;
        player.pos.y += player.velocity;
    } else {
        player.velocity = 0.0;
    }

    if player.charging {
        player.jump_charge =
            (player.jump_charge + tuning.charge_rate).clamp(tuning.charge_min, tuning.charge_max);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn grounded() -> Player {
        Player::new(50.0, Vec2::new(175.0, 630.0))
    }

    #[test]
    fn test_resting_player_is_frozen_vertically() {
        let tuning = Tuning::default();
        let mut player = grounded();
        for _ in 0..10 {
            integrate(&mut player, 0, &tuning);
        }
        assert_eq!(player.pos.y, 630.0);
        assert_eq!(player.velocity, 0.0);
    }

    #[test]
    fn test_airborne_player_accelerates() {
        let tuning = Tuning::default();
        let mut player = grounded();
        player.on_platform = false;
        integrate(&mut player, 0, &tuning);
        integrate(&mut player, 0, &tuning);
        assert_eq!(player.velocity, 1.0);
        assert_eq!(player.pos.y, 631.5);
    }

    #[test]
    fn test_horizontal_clamp() {
        let tuning = Tuning::default();
        let mut player = grounded();
        for _ in 0..100 {
            integrate(&mut player, 1, &tuning);
        }
        assert_eq!(player.pos.x, tuning.canvas_width - player.size.x);
        for _ in 0..100 {
            integrate(&mut player, -1, &tuning);
        }
        assert_eq!(player.pos.x, 0.0);
    }

    #[test]
    fn test_charge_saturates_and_releases() {
        let tuning = Tuning::default();
        let mut player = grounded();
        assert!(start_charge(&mut player, &tuning));
        assert_eq!(player.jump_charge, 10.0);
        for _ in 0..40 {
            integrate(&mut player, 0, &tuning);
            assert!(player.jump_charge >= 10.0 && player.jump_charge <= 15.0);
        }
        assert_eq!(player.jump_charge, 15.0);

        assert_eq!(release_charge(&mut player, &tuning), Some(15.0));
        assert_eq!(player.velocity, -15.0);
        assert_eq!(player.jump_charge, 0.0);
        assert_eq!(player.shake_offset, 0.0);
        assert_eq!(player.last_jump_force, 15.0);
        assert!(!player.on_platform);
    }

    #[test]
    fn test_charge_gate_blocks_midair_recharge() {
        let tuning = Tuning::default();
        let mut player = grounded();
        assert!(start_charge(&mut player, &tuning));
        release_charge(&mut player, &tuning);
        assert!(!player.can_jump);
        assert!(!start_charge(&mut player, &tuning));
        assert!(!player.charging);
    }

    #[test]
    fn test_ungated_variant_allows_midair_charge() {
        let tuning = Tuning {
            gate_charge_on_landing: false,
            ..Default::default()
        };
        let mut player = grounded();
        start_charge(&mut player, &tuning);
        release_charge(&mut player, &tuning);
        assert!(start_charge(&mut player, &tuning));
    }

    #[test]
    fn test_release_without_charge_is_ignored() {
        let tuning = Tuning::default();
        let mut player = grounded();
        assert_eq!(release_charge(&mut player, &tuning), None);
        assert_eq!(player.velocity, 0.0);
        assert!(player.on_platform);
    }

    #[test]
    fn test_rotation_target() {
        let tuning = Tuning::default();
        assert_eq!(rotation_target(10.0, &tuning), 3.0 * TAU);
        assert_eq!(rotation_target(12.5, &tuning), 4.0 * TAU);
        assert_eq!(rotation_target(15.0, &tuning), 5.0 * TAU);
    }
}
