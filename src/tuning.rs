//! Data-driven game balance
//!
//! Every process-wide tunable lives here, fixed at session construction.
//! Behaviour that differed between earlier builds of the game is exposed as
//! variant flags rather than separate code paths.

use std::error::Error;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// How points are awarded. Exactly one scheme is active per session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ScoringScheme {
    /// Points for every platform that scrolls off the bottom of the view
    #[default]
    RecycledPlatforms,
    /// Points for landing on a platform higher than any landed on before
    NewHighestPlatform,
}

/// Tunable constants and variant flags for a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Viewport ===
    pub canvas_width: f32,
    pub canvas_height: f32,
    pub header_height: f32,

    // === Physics ===
    pub gravity: f32,
    pub horizontal_speed: f32,
    pub landing_tolerance: f32,

    // === Scrolling ===
    pub scroll_speed: f32,
    pub scroll_smoothness: f32,
    /// Platforms required ahead of the player before scrolling
    pub scroll_guard: usize,
    /// Ease platform speed toward the target instead of snapping to it
    pub smooth_scroll: bool,
    /// Scroll at half speed while resting above `target_height`
    pub settle_scroll: bool,
    pub target_height: f32,

    // === Platforms ===
    pub initial_platform_count: usize,
    pub platform_width: f32,
    pub platform_height: f32,
    /// Gap range for the initial ladder
    pub min_platform_spacing: f32,
    pub max_platform_spacing: f32,
    /// Gap range for recycled platforms
    pub spawn_gap_min: f32,
    pub spawn_gap_max: f32,
    /// New platforms start moving at the target speed rather than from rest
    pub spawn_at_target_speed: bool,

    // === Session ===
    pub starting_lives: u8,
    pub points_per_platform: u64,
    pub scoring: ScoringScheme,

    // === Jump ===
    pub player_size: f32,
    pub charge_rate: f32,
    pub charge_min: f32,
    pub charge_max: f32,
    /// Clear `can_jump` on charge and restore it only on landing
    pub gate_charge_on_landing: bool,

    // === Deformation ===
    pub min_squash: f32,
    pub max_squash_width: f32,
    pub max_stretch: f32,
    pub shake_threshold: f32,
    pub max_shake: f32,
    pub still_time_threshold: u32,
    pub recovery_rate: f32,

    // === Spin ===
    pub min_rotations: u32,
    pub rotation_speed: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,
            header_height: HEADER_HEIGHT,

            gravity: GRAVITY,
            horizontal_speed: HORIZONTAL_SPEED,
            landing_tolerance: LANDING_TOLERANCE,

            scroll_speed: SCROLL_SPEED,
            scroll_smoothness: SCROLL_SMOOTHNESS,
            scroll_guard: SCROLL_GUARD,
            smooth_scroll: true,
            settle_scroll: false,
            target_height: TARGET_HEIGHT,

            initial_platform_count: INITIAL_PLATFORMS,
            platform_width: PLATFORM_WIDTH,
            platform_height: PLATFORM_HEIGHT,
            min_platform_spacing: MIN_PLATFORM_SPACING,
            max_platform_spacing: MAX_PLATFORM_SPACING,
            spawn_gap_min: SPAWN_GAP_MIN,
            spawn_gap_max: SPAWN_GAP_MAX,
            spawn_at_target_speed: true,

            starting_lives: STARTING_LIVES,
            points_per_platform: POINTS_PER_PLATFORM,
            scoring: ScoringScheme::RecycledPlatforms,

            player_size: INITIAL_SIZE,
            charge_rate: CHARGE_RATE,
            charge_min: CHARGE_MIN,
            charge_max: CHARGE_MAX,
            gate_charge_on_landing: true,

            min_squash: MIN_SQUASH,
            max_squash_width: MAX_SQUASH_WIDTH,
            max_stretch: MAX_STRETCH,
            shake_threshold: SHAKE_THRESHOLD,
            max_shake: MAX_SHAKE,
            still_time_threshold: STILL_TIME_THRESHOLD,
            recovery_rate: RECOVERY_RATE,

            min_rotations: MIN_ROTATIONS,
            rotation_speed: ROTATION_SPEED,
        }
    }
}

/// Reasons a [`Tuning`] is rejected
#[derive(Debug)]
pub enum TuningError {
    /// A dimension that must be strictly positive was not.
    NonPositive {
        /// Name of the offending field.
        field: &'static str,
        /// Value that failed validation.
        value: f32,
    },
    /// A value was NaN or infinite, or a range spanned more than `f32` can hold.
    NonFinite {
        /// Name of the offending field or range.
        field: &'static str,
        value: f32,
    },
    /// A gap that must not be negative was.
    NegativeGap {
        /// Name of the range.
        range: &'static str,
        min: f32,
    },
    /// A `(min, max)` pair was inverted.
    InvertedRange {
        /// Name of the range.
        range: &'static str,
        min: f32,
        max: f32,
    },
    /// No platforms would ever exist.
    NoPlatforms,
    /// The session would start already lost.
    NoLives,
    /// Platforms cannot fit inside the viewport.
    PlatformTooWide { platform_width: f32, canvas_width: f32 },
    /// The header would cover the whole viewport.
    HeaderTooTall { header_height: f32, canvas_height: f32 },
    /// Smoothing factor outside `(0, 1]`.
    InvalidSmoothness(f32),
    /// The JSON payload could not be parsed.
    Parse(serde_json::Error),
}

impl fmt::Display for TuningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositive { field, value } => {
                write!(f, "{field} must be positive (received {value})")
            }
            Self::NonFinite { field, value } => {
                write!(f, "{field} must be finite (received {value})")
            }
            Self::NegativeGap { range, min } => {
                write!(f, "{range} range must not start below zero (received {min})")
            }
            Self::InvertedRange { range, min, max } => {
                write!(f, "{range} range is inverted ({min} > {max})")
            }
            Self::NoPlatforms => write!(f, "initial_platform_count must be at least 1"),
            Self::NoLives => write!(f, "starting_lives must be at least 1"),
            Self::PlatformTooWide {
                platform_width,
                canvas_width,
            } => write!(
                f,
                "platform width {platform_width} does not fit canvas width {canvas_width}"
            ),
            Self::HeaderTooTall {
                header_height,
                canvas_height,
            } => write!(
                f,
                "header height {header_height} leaves no room in canvas height {canvas_height}"
            ),
            Self::InvalidSmoothness(value) => {
                write!(f, "scroll_smoothness must be in (0, 1] (received {value})")
            }
            Self::Parse(error) => write!(f, "could not parse tuning: {error}"),
        }
    }
}

impl Error for TuningError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Parse(error) => Some(error),
            _ => None,
        }
    }
}

impl Tuning {
    /// Parse tuning overrides from JSON; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Self = serde_json::from_str(json).map_err(TuningError::Parse)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Check that the simulation can run with these values
    pub fn validate(&self) -> Result<(), TuningError> {
        let reals = [
            ("canvas_width", self.canvas_width),
            ("canvas_height", self.canvas_height),
            ("header_height", self.header_height),
            ("gravity", self.gravity),
            ("horizontal_speed", self.horizontal_speed),
            ("landing_tolerance", self.landing_tolerance),
            ("scroll_speed", self.scroll_speed),
            ("scroll_smoothness", self.scroll_smoothness),
            ("target_height", self.target_height),
            ("platform_width", self.platform_width),
            ("platform_height", self.platform_height),
            ("min_platform_spacing", self.min_platform_spacing),
            ("max_platform_spacing", self.max_platform_spacing),
            ("spawn_gap_min", self.spawn_gap_min),
            ("spawn_gap_max", self.spawn_gap_max),
            ("player_size", self.player_size),
            ("charge_rate", self.charge_rate),
            ("charge_min", self.charge_min),
            ("charge_max", self.charge_max),
            ("min_squash", self.min_squash),
            ("max_squash_width", self.max_squash_width),
            ("max_stretch", self.max_stretch),
            ("shake_threshold", self.shake_threshold),
            ("max_shake", self.max_shake),
            ("recovery_rate", self.recovery_rate),
            ("rotation_speed", self.rotation_speed),
        ];
        for (field, value) in reals {
            if !value.is_finite() {
                return Err(TuningError::NonFinite { field, value });
            }
        }

        let positives = [
            ("canvas_width", self.canvas_width),
            ("canvas_height", self.canvas_height),
            ("platform_width", self.platform_width),
            ("platform_height", self.platform_height),
            ("player_size", self.player_size),
            ("min_squash", self.min_squash),
            ("max_squash_width", self.max_squash_width),
            ("max_stretch", self.max_stretch),
            ("charge_max", self.charge_max),
        ];
        for (field, value) in positives {
            // Also rejects NaN
            if !(value > 0.0) {
                return Err(TuningError::NonPositive { field, value });
            }
        }

        let ranges = [
            ("platform spacing", self.min_platform_spacing, self.max_platform_spacing),
            ("spawn gap", self.spawn_gap_min, self.spawn_gap_max),
            ("charge", self.charge_min, self.charge_max),
        ];
        for (range, min, max) in ranges {
            if min > max {
                return Err(TuningError::InvertedRange { range, min, max });
            }
        }

        // Spans are sampled uniformly, so their widths must be representable too
        let gaps = [
            ("platform spacing", self.min_platform_spacing, self.max_platform_spacing),
            ("spawn gap", self.spawn_gap_min, self.spawn_gap_max),
        ];
        for (range, min, max) in gaps {
            if min < 0.0 {
                return Err(TuningError::NegativeGap { range, min });
            }
            if !(max - min).is_finite() {
                return Err(TuningError::NonFinite {
                    field: range,
                    value: max - min,
                });
            }
        }
        let free_width = self.canvas_width - self.platform_width;
        if !free_width.is_finite() {
            return Err(TuningError::NonFinite {
                field: "canvas_width - platform_width",
                value: free_width,
            });
        }

        if self.initial_platform_count == 0 {
            return Err(TuningError::NoPlatforms);
        }
        if self.starting_lives == 0 {
            return Err(TuningError::NoLives);
        }
        if self.platform_width > self.canvas_width {
            return Err(TuningError::PlatformTooWide {
                platform_width: self.platform_width,
                canvas_width: self.canvas_width,
            });
        }
        if self.header_height >= self.canvas_height {
            return Err(TuningError::HeaderTooTall {
                header_height: self.header_height,
                canvas_height: self.canvas_height,
            });
        }
        if !(self.scroll_smoothness > 0.0 && self.scroll_smoothness <= 1.0) {
            return Err(TuningError::InvalidSmoothness(self.scroll_smoothness));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(Tuning::default().validate().is_ok());
    }

    #[test]
    fn test_from_json_keeps_defaults_for_missing_fields() {
        let tuning = Tuning::from_json(r#"{ "gravity": 0.8, "scoring": "NewHighestPlatform" }"#)
            .expect("partial tuning should parse");
        assert_eq!(tuning.gravity, 0.8);
        assert_eq!(tuning.scoring, ScoringScheme::NewHighestPlatform);
        assert_eq!(tuning.initial_platform_count, INITIAL_PLATFORMS);
    }

    #[test]
    fn test_rejects_inverted_gap() {
        let tuning = Tuning {
            spawn_gap_min: 200.0,
            spawn_gap_max: 100.0,
            ..Default::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(TuningError::InvertedRange { range: "spawn gap", .. })
        ));
    }

    #[test]
    fn test_rejects_non_finite_range() {
        let huge = Tuning::from_json(
            r#"{ "min_platform_spacing": -3e38, "max_platform_spacing": 3e38 }"#,
        );
        assert!(matches!(
            huge,
            Err(TuningError::NegativeGap { range: "platform spacing", .. })
        ));

        let wide = Tuning {
            spawn_gap_min: 0.0,
            spawn_gap_max: f32::MAX,
            ..Default::default()
        };
        assert!(wide.validate().is_ok());

        let nan_gravity = Tuning {
            gravity: f32::NAN,
            ..Default::default()
        };
        assert!(matches!(
            nan_gravity.validate(),
            Err(TuningError::NonFinite { field: "gravity", .. })
        ));

        let infinite = Tuning {
            max_platform_spacing: f32::INFINITY,
            ..Default::default()
        };
        assert!(matches!(
            infinite.validate(),
            Err(TuningError::NonFinite { field: "max_platform_spacing", .. })
        ));
    }

    #[test]
    fn test_widest_valid_gap_builds_a_session() {
        let tuning = Tuning {
            min_platform_spacing: 1.0,
            max_platform_spacing: f32::MAX,
            ..Default::default()
        };
        assert!(tuning.validate().is_ok());
        assert!(crate::sim::GameSession::new(tuning, 1).is_ok());
    }

    #[test]
    fn test_rejects_zero_lives_and_platforms() {
        let no_lives = Tuning {
            starting_lives: 0,
            ..Default::default()
        };
        assert!(matches!(no_lives.validate(), Err(TuningError::NoLives)));

        let no_platforms = Tuning {
            initial_platform_count: 0,
            ..Default::default()
        };
        assert!(matches!(no_platforms.validate(), Err(TuningError::NoPlatforms)));
    }

    #[test]
    fn test_parse_error_exposes_source() {
        let err = Tuning::from_json("{ not json").unwrap_err();
        assert!(matches!(err, TuningError::Parse(_)));
        assert!(err.source().is_some());
        assert!(err.to_string().starts_with("could not parse tuning"));
    }

    #[test]
    fn test_rejects_bad_smoothness() {
        let tuning = Tuning {
            scroll_smoothness: 0.0,
            ..Default::default()
        };
        assert!(matches!(tuning.validate(), Err(TuningError::InvalidSmoothness(_))));
    }
}
