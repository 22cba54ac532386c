//! Squash Jump - a charge-and-release vertical platform jumper
//!
//! Core modules:
//! - `sim`: Deterministic simulation (kinematics, deformation, platforms, collisions, session)
//! - `renderer`: Backend-agnostic display list built from simulation snapshots
//! - `ui`: Hero selection menu model
//! - `tuning`: Data-driven game balance and variant flags

pub mod heroes;
pub mod renderer;
pub mod sim;
pub mod tuning;
pub mod ui;

pub use heroes::{Hero, HeroCatalog};
pub use tuning::{ScoringScheme, Tuning, TuningError};

/// Game configuration constants (canonical defaults for [`Tuning`])
pub mod consts {
    /// Viewport dimensions
    pub const CANVAS_WIDTH: f32 = 400.0;
    pub const CANVAS_HEIGHT: f32 = 700.0;
    /// Score/lives strip at the top of the viewport
    pub const HEADER_HEIGHT: f32 = 50.0;

    /// Downward acceleration (units/tick²)
    pub const GRAVITY: f32 = 0.5;
    /// Target platform scroll speed while the player ascends
    pub const SCROLL_SPEED: f32 = 8.0;
    /// Fraction of the remaining speed gap closed each tick
    pub const SCROLL_SMOOTHNESS: f32 = 0.1;
    /// Player height above which settle scrolling kicks in
    pub const TARGET_HEIGHT: f32 = 450.0;

    /// Platform field
    pub const INITIAL_PLATFORMS: usize = 6;
    pub const PLATFORM_WIDTH: f32 = 100.0;
    pub const PLATFORM_HEIGHT: f32 = 20.0;
    pub const MIN_PLATFORM_SPACING: f32 = 100.0;
    pub const MAX_PLATFORM_SPACING: f32 = 200.0;
    pub const SPAWN_GAP_MIN: f32 = 100.0;
    pub const SPAWN_GAP_MAX: f32 = 150.0;
    /// Minimum platforms ahead of the player before scrolling is allowed
    pub const SCROLL_GUARD: usize = 2;

    /// Player defaults
    pub const INITIAL_SIZE: f32 = 50.0;
    pub const HORIZONTAL_SPEED: f32 = 5.0;
    pub const STARTING_LIVES: u8 = 3;
    pub const POINTS_PER_PLATFORM: u64 = 1000;

    /// Jump charge (accumulates per tick while held)
    pub const CHARGE_RATE: f32 = 0.2;
    pub const CHARGE_MIN: f32 = 10.0;
    pub const CHARGE_MAX: f32 = 15.0;

    /// Squash/stretch
    pub const MIN_SQUASH: f32 = 0.5;
    pub const MAX_SQUASH_WIDTH: f32 = 1.8;
    pub const MAX_STRETCH: f32 = 1.5;
    pub const SHAKE_THRESHOLD: f32 = 12.0;
    pub const MAX_SHAKE: f32 = 5.0;
    pub const STILL_TIME_THRESHOLD: u32 = 60;
    pub const RECOVERY_RATE: f32 = 0.1;

    /// Spin
    pub const MIN_ROTATIONS: u32 = 3;
    pub const ROTATION_SPEED: f32 = 0.3;

    /// Extra depth below a platform top that still counts as a landing
    pub const LANDING_TOLERANCE: f32 = 2.0;
}

/// Linearly re-map `value` from `[in_min, in_max]` onto `[out_min, out_max]`.
///
/// Values outside the input range extrapolate.
#[inline]
pub fn map_range(value: f32, in_min: f32, in_max: f32, out_min: f32, out_max: f32) -> f32 {
    if in_max == in_min {
        return out_min;
    }
    out_min + (value - in_min) * (out_max - out_min) / (in_max - in_min)
}

/// Like [`map_range`], but the result never leaves the output interval
#[inline]
pub fn map_range_clamped(value: f32, in_min: f32, in_max: f32, out_min: f32, out_max: f32) -> f32 {
    let mapped = map_range(value, in_min, in_max, out_min, out_max);
    let (lo, hi) = if out_min <= out_max {
        (out_min, out_max)
    } else {
        (out_max, out_min)
    };
    mapped.clamp(lo, hi)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_range_endpoints() {
        assert_eq!(map_range(0.0, 0.0, 15.0, 1.0, 0.5), 1.0);
        assert_eq!(map_range(15.0, 0.0, 15.0, 1.0, 0.5), 0.5);
        assert!((map_range(12.5, 10.0, 15.0, 0.0, 2.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_map_range_clamped_inverted_output() {
        // Output interval runs downward; clamp must still hold
        assert_eq!(map_range_clamped(30.0, 0.0, 15.0, 1.0, 0.5), 0.5);
        assert_eq!(map_range_clamped(-5.0, 0.0, 15.0, 1.0, 0.5), 1.0);
    }

    #[test]
    fn test_map_range_degenerate_input() {
        assert_eq!(map_range(3.0, 2.0, 2.0, 7.0, 9.0), 7.0);
    }
}
