//! Procedural platform field: the initial ladder, smoothed scrolling and recycling

use glam::Vec2;
use rand::Rng;

use super::collision::SUPPORT_EPSILON;
use super::state::{Platform, Player};
use crate::tuning::Tuning;

/// Source of uniform reals, so platform placement can be driven by any seeded RNG
pub trait UniformSource {
    /// Uniform sample in `[min, max)`; returns `min` for an empty range
    fn uniform(&mut self, min: f32, max: f32) -> f32;
}

impl<R: Rng + ?Sized> UniformSource for R {
    fn uniform(&mut self, min: f32, max: f32) -> f32 {
        if max > min {
            self.random_range(min..max)
        } else {
            min
        }
    }
}

/// A platform together with the id it was spawned under.
///
/// Ids increase with spawn order, and every platform spawns above all others,
/// so a larger id always means a higher platform.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldPlatform {
    pub id: u32,
    pub platform: Platform,
}

/// The active set of platforms
#[derive(Debug, Clone, Default)]
pub struct PlatformField {
    /// Ordered bottom to top
    platforms: Vec<FieldPlatform>,
    next_id: u32,
}

impl PlatformField {
    /// Build the starting ladder: one anchor platform at the bottom, the rest
    /// spaced upward by random gaps.
    pub fn generate(tuning: &Tuning, rng: &mut impl UniformSource) -> Self {
        let mut field = Self::default();
        field.push_anchor(tuning);

        for _ in 1..tuning.initial_platform_count {
            let last_y = field.topmost_y().unwrap_or(tuning.canvas_height);
            let gap = rng.uniform(tuning.min_platform_spacing, tuning.max_platform_spacing);
            let x = rng.uniform(0.0, tuning.canvas_width - tuning.platform_width);
            field.push(Vec2::new(x, last_y - gap), 0.0, tuning);
        }

        field
    }

    /// Field made of the given platforms, listed bottom to top
    pub fn from_platforms(platforms: impl IntoIterator<Item = Platform>) -> Self {
        let mut field = Self::default();
        for platform in platforms {
            let id = field.next_id;
            field.next_id += 1;
            field.platforms.push(FieldPlatform { id, platform });
        }
        field
    }

    /// The fixed starting platform, centred at the bottom of the view
    pub fn anchor_position(tuning: &Tuning) -> Vec2 {
        Vec2::new(
            (tuning.canvas_width - tuning.platform_width) / 2.0,
            tuning.canvas_height - tuning.platform_height,
        )
    }

    /// Add the starting platform and return a copy of it
    pub fn push_anchor(&mut self, tuning: &Tuning) -> Platform {
        self.push(Self::anchor_position(tuning), 0.0, tuning)
    }

    fn push(&mut self, pos: Vec2, current_speed: f32, tuning: &Tuning) -> Platform {
        let id = self.next_id;
        self.next_id += 1;
        let platform = Platform::new(
            pos,
            Vec2::new(tuning.platform_width, tuning.platform_height),
            current_speed,
        );
        self.platforms.push(FieldPlatform {
            id,
            platform: platform.clone(),
        });
        platform
    }

    pub fn len(&self) -> usize {
        self.platforms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.platforms.is_empty()
    }

    pub fn entries(&self) -> &[FieldPlatform] {
        &self.platforms
    }

    pub fn platforms(&self) -> impl Iterator<Item = &Platform> {
        self.platforms.iter().map(|p| &p.platform)
    }

    /// y of the highest platform (smallest y)
    pub fn topmost_y(&self) -> Option<f32> {
        self.platforms().map(|p| p.pos.y).reduce(f32::min)
    }

    /// Lowest platform not hidden behind the header, falling back to the
    /// lowest platform overall
    pub fn lowest_landing_spot(&self, header_height: f32) -> Option<&Platform> {
        let lowest = |visible_only: bool| {
            self.platforms()
                .filter(|p| !visible_only || p.is_visible(header_height))
                .reduce(|a, b| if b.pos.y > a.pos.y { b } else { a })
        };
        lowest(true).or_else(|| lowest(false))
    }

    /// Visible platforms at or below the player
    pub fn platforms_ahead(&self, player: &Player, header_height: f32) -> usize {
        let reference = if player.on_platform {
            player.pos.y
        } else {
            player.bottom()
        };
        self.platforms()
            .filter(|p| p.is_visible(header_height) && p.pos.y >= reference)
            .count()
    }

    /// Move every platform down, easing toward `target_speed`.
    ///
    /// A player standing on a platform rides along with it. Returns false if
    /// too few platforms remain ahead of the player to scroll.
    pub fn scroll(&mut self, target_speed: f32, player: &mut Player, tuning: &Tuning) -> bool {
        if self.platforms_ahead(player, tuning.header_height) < tuning.scroll_guard {
            return false;
        }

        let mut carried = 0.0;
        for entry in &mut self.platforms {
            let platform = &mut entry.platform;
            if tuning.smooth_scroll {
                platform.current_speed +=
                    (target_speed - platform.current_speed) * tuning.scroll_smoothness;
            } else {
                platform.current_speed = target_speed;
            }

            let carrying = player.on_platform
                && (player.bottom() - platform.top()).abs() <= SUPPORT_EPSILON
                && player.overlaps_x(platform);
            platform.pos.y += platform.current_speed;
            if carrying {
                carried = platform.current_speed;
            }
        }
        player.pos.y += carried;

        true
    }

    /// Drop platforms that left the bottom of the view and spawn replacements
    /// above the topmost one. Returns how many were dropped.
    pub fn recycle(
        &mut self,
        target_speed: f32,
        tuning: &Tuning,
        rng: &mut impl UniformSource,
    ) -> usize {
        let before = self.platforms.len();
        self.platforms
            .retain(|p| p.platform.pos.y < tuning.canvas_height);
        let removed = before - self.platforms.len();

        while self.platforms.len() < tuning.initial_platform_count {
            self.spawn(target_speed, tuning, rng);
        }

        if removed > 0 {
            log::debug!("Recycled {removed} platform(s), {} active", self.platforms.len());
        }
        removed
    }

    fn spawn(&mut self, target_speed: f32, tuning: &Tuning, rng: &mut impl UniformSource) {
        let last_y = self.topmost_y().unwrap_or(tuning.canvas_height);
        let gap = rng.uniform(tuning.spawn_gap_min, tuning.spawn_gap_max);
        let x = rng.uniform(0.0, tuning.canvas_width - tuning.platform_width);
        let speed = if tuning.spawn_at_target_speed {
            target_speed
        } else {
            0.0
        };
        self.push(Vec2::new(x, last_y - gap), speed, tuning);
    }
}
