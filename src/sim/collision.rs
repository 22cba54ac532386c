//! Player/platform contact
//!
//! Platforms are one-way: the player passes up through them and only lands
//! while descending. The landing band extends `landing_tolerance` below the
//! platform bottom so fast falls cannot tunnel through a 20px platform.
//! Platforms hidden behind the header band cannot be landed on.

use super::field::PlatformField;
use super::state::{Platform, Player};
use crate::tuning::Tuning;

/// Distance at which a resting player still counts as standing on a platform
pub const SUPPORT_EPSILON: f32 = 0.01;

/// Result of a landing
#[derive(Debug, Clone, PartialEq)]
pub struct Landing {
    pub platform_id: u32,
    pub platform_y: f32,
}

/// Whether a descending player's bottom edge lies in the platform's landing band
pub fn is_landing(player: &Player, platform: &Platform, tolerance: f32) -> bool {
    let bottom = player.bottom();
    player.velocity > 0.0
        && bottom >= platform.top()
        && bottom <= platform.bottom() + tolerance
        && player.overlaps_x(platform)
}

/// Detect a landing and snap the player onto the platform.
///
/// The first matching platform wins. `can_jump` is restored unless a charge is
/// being held, so a charge cannot outlive the landing that armed it.
pub fn resolve(player: &mut Player, field: &PlatformField, tuning: &Tuning) -> Option<Landing> {
    let entry = field.entries().iter().find(|entry| {
        entry.platform.is_visible(tuning.header_height)
            && is_landing(player, &entry.platform, tuning.landing_tolerance)
    })?;

    player.place_on(&entry.platform);
    player.velocity = 0.0;
    player.on_platform = true;
    if !player.charging {
        player.can_jump = true;
    }

    Some(Landing {
        platform_id: entry.id,
        platform_y: entry.platform.top(),
    })
}

/// Whether a resting player still has a platform under their feet
pub fn is_supported(player: &Player, field: &PlatformField) -> bool {
    field.platforms().any(|platform| {
        (player.bottom() - platform.top()).abs() <= SUPPORT_EPSILON && player.overlaps_x(platform)
    })
}
