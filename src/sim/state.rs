//! Core simulation types
//!
//! Everything here is plain data; behaviour lives in the sibling modules.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    #[default]
    Playing,
    /// Lives exhausted; only a reset leaves this phase
    GameOver,
}

/// Something that happened during a tick, for front ends to react to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Charge released; `force` is the upward speed applied
    JumpReleased { force: f32 },
    /// Player touched down on the platform whose top is at `platform_y`
    Landed { platform_y: f32 },
    /// Platforms scrolled off the bottom of the view
    PlatformsRecycled { count: usize },
    /// Points added to the score
    ScoreAwarded { points: u64 },
    /// Player fell through the floor but has lives left
    LifeLost { remaining: u8 },
    /// Player fell through the floor on their last life
    GameOver { score: u64 },
    /// Display identity changed
    HeroChanged { index: usize },
    /// Session reinitialised
    Reset,
}

/// The player sprite and its physics state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner
    pub pos: Vec2,
    /// Nominal square side length
    pub base_size: f32,
    /// Deformed width/height
    pub size: Vec2,
    /// Vertical velocity (negative = up)
    pub velocity: f32,
    /// Accumulated spin (radians)
    pub rotation: f32,
    /// Spin computed at release (display only)
    pub target_rotation: f32,
    /// Jitter applied while a heavy charge is held
    pub shake_offset: f32,
    /// Ticks spent resting without charging
    pub still_time: u32,
    pub on_platform: bool,
    pub can_jump: bool,
    /// Charge button held
    pub charging: bool,
    pub jump_charge: f32,
    /// Magnitude of the most recent release
    pub last_jump_force: f32,
    /// Id of the highest platform ever landed on
    pub highest_platform: Option<u32>,
}

impl Player {
    pub fn new(base_size: f32, pos: Vec2) -> Self {
        Self {
            pos,
            base_size,
            size: Vec2::splat(base_size),
            velocity: 0.0,
            rotation: 0.0,
            target_rotation: 0.0,
            shake_offset: 0.0,
            still_time: 0,
            on_platform: true,
            can_jump: true,
            charging: false,
            jump_charge: 0.0,
            last_jump_force: 0.0,
            highest_platform: None,
        }
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    /// Strict horizontal overlap with a platform (touching edges do not count)
    #[inline]
    pub fn overlaps_x(&self, platform: &Platform) -> bool {
        self.right() > platform.pos.x && self.pos.x < platform.right()
    }

    /// Rest the player's bottom edge on `platform`'s top
    pub fn place_on(&mut self, platform: &Platform) {
        self.pos.y = platform.pos.y - self.size.y;
    }

    /// Keep the player inside the horizontal bounds of the view
    pub fn clamp_x(&mut self, view_width: f32) {
        let max_x = (view_width - self.size.x).max(0.0);
        self.pos.x = self.pos.x.clamp(0.0, max_x);
    }
}

/// A horizontal one-way platform
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Smoothed scroll speed
    pub current_speed: f32,
}

impl Platform {
    pub fn new(pos: Vec2, size: Vec2, current_speed: f32) -> Self {
        Self {
            pos,
            size,
            current_speed,
        }
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    /// Whether any part of the platform is below the header band
    #[inline]
    pub fn is_visible(&self, header_height: f32) -> bool {
        self.bottom() > header_height
    }
}

/// RNG state wrapper for serialization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn to_rng(&self) -> Pcg32 {
        Pcg32::seed_from_u64(self.seed)
    }
}
